//! SeaORM implementation of EditorialRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    Unchanged,
};

use crate::domain::{DomainError, Editorial, EditorialRepository, NewEditorial};
use crate::models::editorial::{ActiveModel, Column, Entity as EditorialEntity};

/// SeaORM-based implementation of EditorialRepository
pub struct SeaOrmEditorialRepository {
    db: DatabaseConnection,
}

impl SeaOrmEditorialRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EditorialRepository for SeaOrmEditorialRepository {
    async fn find_all(&self) -> Result<Vec<Editorial>, DomainError> {
        let editorials = EditorialEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(editorials.into_iter().map(Editorial::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Editorial>, DomainError> {
        let editorial = EditorialEntity::find_by_id(id).one(&self.db).await?;
        Ok(editorial.map(Editorial::from))
    }

    async fn find_by_tax_id(
        &self,
        tax_id: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<Editorial>, DomainError> {
        let mut query = EditorialEntity::find().filter(Column::TaxId.eq(tax_id));

        if let Some(id) = exclude_id {
            query = query.filter(Column::Id.ne(id));
        }

        Ok(query.one(&self.db).await?.map(Editorial::from))
    }

    async fn create(&self, editorial: NewEditorial) -> Result<Editorial, DomainError> {
        let model = ActiveModel {
            name: Set(editorial.name),
            address: Set(editorial.address),
            tax_id: Set(editorial.tax_id),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(Editorial::from(result))
    }

    async fn save(&self, editorial: Editorial) -> Result<Editorial, DomainError> {
        let model = ActiveModel {
            id: Unchanged(editorial.id),
            name: Set(editorial.name),
            address: Set(editorial.address),
            tax_id: Set(editorial.tax_id),
        };

        let result = model.update(&self.db).await?;
        Ok(Editorial::from(result))
    }

    async fn delete(&self, id: i32) -> Result<u64, DomainError> {
        let result = EditorialEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
