//! Borrow record service

use std::sync::Arc;

use chrono::Local;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{CreatedId, LibraryJoin, LibraryRequestJoin},
    repository::LibraryStore,
};

use super::ensure_positive_id;

#[derive(Clone)]
pub struct LibrariesService {
    store: Arc<dyn LibraryStore>,
}

impl LibrariesService {
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<LibraryJoin>> {
        self.store.list().await
    }

    /// Borrow record with its book and client, without its own identity
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<LibraryRequestJoin>> {
        Ok(self.store.get_by_id(id).await?.map(LibraryRequestJoin::from))
    }

    /// Record a borrow. An empty date is replaced by today's date.
    pub async fn create(&self, data: &LibraryRequestJoin) -> AppResult<CreatedId> {
        data.validate()?;

        let mut record = data.clone();
        if record.library.date.is_empty() {
            record.library.date = Local::now().format("%Y-%m-%d").to_string();
        }

        let id = self.store.create(&record).await?;
        tracing::info!(
            "Created borrow {} (book {}, client {})",
            id,
            record.book.id,
            record.client.id
        );
        Ok(CreatedId { id })
    }

    /// Full-row update; unlike create, the date is required
    pub async fn update(&self, id: i64, data: &LibraryRequestJoin) -> AppResult<()> {
        data.validate()?;
        if data.library.date.is_empty() {
            return Err(AppError::Validation("date is required".to_string()));
        }

        let updated = self.store.update(id, data).await?;
        tracing::debug!("Updated borrow {} ({} rows)", id, updated);
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        ensure_positive_id(id)?;
        let deleted = self.store.delete(id).await?;
        tracing::debug!("Deleted borrow {} ({} rows)", id, deleted);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Book, Client, LibraryRequest},
        repository::MockLibraryStore,
    };

    fn payload(date: &str) -> LibraryRequestJoin {
        LibraryRequestJoin {
            library: LibraryRequest {
                date: date.to_string(),
                active: true,
            },
            book: Book {
                id: 1,
                ..Book::default()
            },
            client: Client {
                id: 2,
                ..Client::default()
            },
        }
    }

    #[tokio::test]
    async fn test_create_fills_missing_date() {
        let mut store = MockLibraryStore::new();
        store
            .expect_create()
            .withf(|data| data.library.date.len() == "2024-01-01".len() && data.library.active)
            .returning(|_| Ok(3));

        let service = LibrariesService::new(Arc::new(store));
        let created = service.create(&payload("")).await.unwrap();
        assert_eq!(created.id, 3);
    }

    #[tokio::test]
    async fn test_create_keeps_given_date() {
        let mut store = MockLibraryStore::new();
        store
            .expect_create()
            .withf(|data| data.library.date == "last tuesday")
            .returning(|_| Ok(4));

        let service = LibrariesService::new(Arc::new(store));
        service.create(&payload("last tuesday")).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_requires_date() {
        let mut store = MockLibraryStore::new();
        store.expect_update().never();

        let service = LibrariesService::new(Arc::new(store));
        let err = service.update(1, &payload("")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_requires_client() {
        let mut store = MockLibraryStore::new();
        store.expect_create().never();

        let mut data = payload("2024-03-01");
        data.client.id = 0;
        let service = LibrariesService::new(Arc::new(store));
        assert!(matches!(service.create(&data).await, Err(AppError::Validation(_))));
    }
}
