//! SeaORM implementation of BookRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::domain::{Book, BookChanges, BookRepository, DomainError, NewBook};
use crate::models::author::Entity as AuthorEntity;
use crate::models::book::{self, ActiveModel, Entity as BookEntity};
use crate::models::book_authors::{self, Entity as BookAuthorEntity};
use crate::models::editorial::{self, Entity as EditorialEntity};

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach authors to a batch of books (already joined with their
    /// editorial) using a single query over the join table.
    async fn hydrate<C: ConnectionTrait>(
        db: &C,
        rows: Vec<(book::Model, Option<editorial::Model>)>,
    ) -> Result<Vec<Book>, DbErr> {
        let ids: Vec<i32> = rows.iter().map(|(book, _)| book.id).collect();

        let mut authors_by_book: HashMap<i32, Vec<_>> = HashMap::new();
        if !ids.is_empty() {
            let links = BookAuthorEntity::find()
                .filter(book_authors::Column::BookId.is_in(ids))
                .find_also_related(AuthorEntity)
                .order_by_asc(book_authors::Column::AuthorId)
                .all(db)
                .await?;

            for (link, author) in links {
                if let Some(author) = author {
                    authors_by_book.entry(link.book_id).or_default().push(author);
                }
            }
        }

        Ok(rows
            .into_iter()
            .map(|(book, editorial)| {
                let authors = authors_by_book.remove(&book.id).unwrap_or_default();
                Book::from_parts(book, authors, editorial)
            })
            .collect())
    }

    async fn load<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Book>, DbErr> {
        let row = BookEntity::find_by_id(id)
            .find_also_related(EditorialEntity)
            .one(db)
            .await?;

        match row {
            Some(row) => Ok(Self::hydrate(db, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn link_authors<C: ConnectionTrait>(
        db: &C,
        book_id: i32,
        author_ids: &[i32],
    ) -> Result<(), DbErr> {
        if author_ids.is_empty() {
            return Ok(());
        }

        BookAuthorEntity::insert_many(
            author_ids
                .iter()
                .map(|&author_id| book_authors::ActiveModel::link(book_id, author_id)),
        )
        .exec_without_returning(db)
        .await?;

        Ok(())
    }

    async fn reload(&self, id: i32) -> Result<Book, DomainError> {
        Self::load(&self.db, id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Book not found.".into()))
    }
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, DomainError> {
        let rows = BookEntity::find()
            .find_also_related(EditorialEntity)
            .order_by_asc(book::Column::Id)
            .all(&self.db)
            .await?;

        Ok(Self::hydrate(&self.db, rows).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError> {
        Ok(Self::load(&self.db, id).await?)
    }

    async fn create(&self, book: NewBook) -> Result<Book, DomainError> {
        let txn = self.db.begin().await?;

        let new_book = ActiveModel {
            title: Set(book.title),
            category: Set(book.category),
            price: Set(book.price),
            release_date: Set(book.release_date),
            description: Set(book.description),
            editorial_id: Set(Some(book.editorial_id)),
            ..Default::default()
        };

        let inserted = new_book.insert(&txn).await?;
        Self::link_authors(&txn, inserted.id, &book.author_ids).await?;
        txn.commit().await?;

        self.reload(inserted.id).await
    }

    async fn update(&self, id: i32, changes: BookChanges) -> Result<Book, DomainError> {
        let txn = self.db.begin().await?;

        let existing = BookEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DomainError::NotFound("Book not found.".into()))?;

        let mut active: ActiveModel = existing.into();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(category) = changes.category {
            active.category = Set(category);
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }
        if let Some(release_date) = changes.release_date {
            active.release_date = Set(release_date);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(editorial_id) = changes.editorial_id {
            active.editorial_id = Set(Some(editorial_id));
        }

        if active.is_changed() {
            active.update(&txn).await?;
        }

        if let Some(author_ids) = changes.author_ids {
            BookAuthorEntity::delete_many()
                .filter(book_authors::Column::BookId.eq(id))
                .exec(&txn)
                .await?;
            Self::link_authors(&txn, id, &author_ids).await?;
        }

        txn.commit().await?;

        self.reload(id).await
    }

    async fn delete(&self, id: i32) -> Result<u64, DomainError> {
        let result = BookEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
