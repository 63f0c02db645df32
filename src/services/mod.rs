//! Business logic services

pub mod books;
pub mod clients;
pub mod libraries;

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    repository::{BookStore, ClientStore, LibraryStore, Repository, StoreStatus},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub clients: clients::ClientsService,
    pub libraries: libraries::LibrariesService,
    pub status: Arc<dyn StoreStatus>,
}

impl Services {
    /// Create all services backed by the PostgreSQL repository
    pub fn new(repository: Repository) -> Self {
        Self::from_stores(
            Arc::new(repository.books.clone()),
            Arc::new(repository.clients.clone()),
            Arc::new(repository.libraries.clone()),
            Arc::new(repository),
        )
    }

    pub fn from_stores(
        books: Arc<dyn BookStore>,
        clients: Arc<dyn ClientStore>,
        libraries: Arc<dyn LibraryStore>,
        status: Arc<dyn StoreStatus>,
    ) -> Self {
        Self {
            books: books::BooksService::new(books),
            clients: clients::ClientsService::new(clients),
            libraries: libraries::LibrariesService::new(libraries),
            status,
        }
    }
}

/// Delete takes any parsed id but only acts on positive ones
pub(crate) fn ensure_positive_id(id: i64) -> AppResult<()> {
    if id < 1 {
        return Err(AppError::BadRequest(format!("id {} < 1", id)));
    }
    Ok(())
}
