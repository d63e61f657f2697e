use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub category: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub release_date: String, // ISO-8601, UTC midnight
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub editorial_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::editorial::Entity",
        from = "Column::EditorialId",
        to = "super::editorial::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Editorial,
}

impl Related<super::editorial::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Editorial.def()
    }
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        super::book_authors::Relation::Author.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::book_authors::Relation::Book.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
