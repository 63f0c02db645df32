//! Book catalog service

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::AppResult,
    models::{Book, BookRequest, CreatedId},
    repository::BookStore,
};

use super::ensure_positive_id;

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.list().await
    }

    /// Book by id, without its identity. `None` when no such row exists.
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<BookRequest>> {
        Ok(self.store.get_by_id(id).await?.map(BookRequest::from))
    }

    pub async fn create(&self, data: &BookRequest) -> AppResult<CreatedId> {
        data.validate()?;
        let id = self.store.create(data).await?;
        tracing::info!("Created book {}", id);
        Ok(CreatedId { id })
    }

    /// Full-row update. Updating an unknown id is not an error.
    pub async fn update(&self, id: i64, data: &Book) -> AppResult<()> {
        data.validate()?;
        let request = BookRequest::from(data.clone());
        let updated = self.store.update(id, &request).await?;
        tracing::debug!("Updated book {} ({} rows)", id, updated);
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        ensure_positive_id(id)?;
        let deleted = self.store.delete(id).await?;
        tracing::debug!("Deleted book {} ({} rows)", id, deleted);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, repository::MockBookStore};

    fn service(store: MockBookStore) -> BooksService {
        BooksService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_create_rejects_missing_author_before_store() {
        let mut store = MockBookStore::new();
        store.expect_create().never();

        let request = BookRequest {
            name: "Dune".into(),
            author: String::new(),
        };
        let err = service(store).create(&request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_ignores_payload_id() {
        let mut store = MockBookStore::new();
        store
            .expect_update()
            .withf(|id, data| *id == 5 && data.name == "Dune" && data.author == "Herbert")
            .times(1)
            .returning(|_, _| Ok(0));

        let payload = Book {
            id: 42,
            name: "Dune".into(),
            author: "Herbert".into(),
        };
        service(store).update(5, &payload).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_requires_positive_id() {
        let mut store = MockBookStore::new();
        store.expect_delete().never();
        let service = service(store);

        assert!(matches!(service.delete(0).await, Err(AppError::BadRequest(_))));
        assert!(matches!(service.delete(-5).await, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_get_strips_identity() {
        let mut store = MockBookStore::new();
        store.expect_get_by_id().returning(|id| {
            Ok(Some(Book {
                id,
                name: "Dune".into(),
                author: "Herbert".into(),
            }))
        });

        let book = service(store).get_by_id(1).await.unwrap().unwrap();
        assert_eq!(
            book,
            BookRequest {
                name: "Dune".into(),
                author: "Herbert".into()
            }
        );
    }
}
