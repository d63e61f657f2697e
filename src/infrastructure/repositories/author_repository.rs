//! SeaORM implementation of AuthorRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, Unchanged,
};

use crate::domain::{Author, AuthorRepository, DomainError, NewAuthor};
use crate::models::author::{ActiveModel, Column, Entity as AuthorEntity};

/// SeaORM-based implementation of AuthorRepository
pub struct SeaOrmAuthorRepository {
    db: DatabaseConnection,
}

impl SeaOrmAuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for SeaOrmAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, DomainError> {
        let authors = AuthorEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(authors.into_iter().map(Author::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DomainError> {
        let author = AuthorEntity::find_by_id(id).one(&self.db).await?;

        Ok(author.map(Author::from))
    }

    async fn find_by_national_id_or_full_name(
        &self,
        national_id: &str,
        full_name: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<Author>, DomainError> {
        let mut query = AuthorEntity::find().filter(
            Condition::any()
                .add(Column::NationalId.eq(national_id))
                .add(Column::FullName.eq(full_name)),
        );

        if let Some(id) = exclude_id {
            query = query.filter(Column::Id.ne(id));
        }

        Ok(query.one(&self.db).await?.map(Author::from))
    }

    async fn find_by_full_names(&self, full_names: &[String]) -> Result<Vec<Author>, DomainError> {
        if full_names.is_empty() {
            return Ok(Vec::new());
        }

        let authors = AuthorEntity::find()
            .filter(Column::FullName.is_in(full_names.iter().cloned()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(authors.into_iter().map(Author::from).collect())
    }

    async fn create(&self, author: NewAuthor) -> Result<Author, DomainError> {
        let model = ActiveModel {
            first_name: Set(author.first_name),
            last_name: Set(author.last_name),
            full_name: Set(author.full_name),
            national_id: Set(author.national_id),
            nationality: Set(author.nationality),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(Author::from(result))
    }

    async fn save(&self, author: Author) -> Result<Author, DomainError> {
        let model = ActiveModel {
            id: Unchanged(author.id),
            first_name: Set(author.first_name),
            last_name: Set(author.last_name),
            full_name: Set(author.full_name),
            national_id: Set(author.national_id),
            nationality: Set(author.nationality),
        };

        let result = model.update(&self.db).await?;
        Ok(Author::from(result))
    }

    async fn delete(&self, id: i32) -> Result<u64, DomainError> {
        let result = AuthorEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
