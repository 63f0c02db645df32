//! Repository layer for database operations
//!
//! Each entity has a store trait; the PostgreSQL repositories implement
//! them and services only see the traits.

pub mod books;
pub mod clients;
pub mod libraries;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Book, BookRequest, Client, ClientRequest, LibraryJoin, LibraryRequestJoin},
};

/// Persistence of books.
///
/// `update` and `delete` return the number of affected rows; zero is not
/// an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Book>>;
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Book>>;
    async fn create(&self, data: &BookRequest) -> AppResult<i64>;
    async fn update(&self, id: i64, data: &BookRequest) -> AppResult<u64>;
    async fn delete(&self, id: i64) -> AppResult<u64>;
}

/// Persistence of clients
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Client>>;
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Client>>;
    async fn create(&self, data: &ClientRequest) -> AppResult<i64>;
    async fn update(&self, id: i64, data: &ClientRequest) -> AppResult<u64>;
    async fn delete(&self, id: i64) -> AppResult<u64>;
}

/// Persistence of borrow records. Reads join the book and client rows.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LibraryStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<LibraryJoin>>;
    async fn get_by_id(&self, id: i64) -> AppResult<Option<LibraryJoin>>;
    async fn create(&self, data: &LibraryRequestJoin) -> AppResult<i64>;
    async fn update(&self, id: i64, data: &LibraryRequestJoin) -> AppResult<u64>;
    async fn delete(&self, id: i64) -> AppResult<u64>;
}

/// Database connectivity and version
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StoreStatus: Send + Sync {
    /// Server version string, e.g. `PostgreSQL 16.2 ...`
    async fn version(&self) -> AppResult<String>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: books::BooksRepository,
    pub clients: clients::ClientsRepository,
    pub libraries: libraries::LibrariesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            clients: clients::ClientsRepository::new(pool.clone()),
            libraries: libraries::LibrariesRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl StoreStatus for Repository {
    async fn version(&self) -> AppResult<String> {
        let version: String = sqlx::query_scalar("SELECT VERSION()")
            .fetch_one(&self.pool)
            .await?;
        Ok(version)
    }
}
