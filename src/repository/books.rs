//! Books repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookStore;
use crate::{
    error::AppResult,
    models::{Book, BookRequest},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT id, name, author FROM book ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT id, name, author FROM book WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, data: &BookRequest) -> AppResult<i64> {
        let id: i64 = sqlx::query_scalar("INSERT INTO book (name, author) VALUES ($1, $2) RETURNING id")
            .bind(&data.name)
            .bind(&data.author)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update(&self, id: i64, data: &BookRequest) -> AppResult<u64> {
        let result = sqlx::query("UPDATE book SET name = $1, author = $2 WHERE id = $3")
            .bind(&data.name)
            .bind(&data.author)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM book WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
