//! Library (borrow records) repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::LibraryStore;
use crate::{
    error::AppResult,
    models::{LibraryJoin, LibraryRequestJoin, LibraryRow},
};

const SELECT_JOIN: &str = r#"
    SELECT l.id,
           l.id_book AS book_id, b.name AS book_name, b.author AS book_author,
           l.id_client AS client_id, c.name AS client_name,
           l.date, l.active
    FROM library l
    INNER JOIN book b ON l.id_book = b.id
    INNER JOIN client c ON l.id_client = c.id
"#;

#[derive(Clone)]
pub struct LibrariesRepository {
    pool: Pool<Postgres>,
}

impl LibrariesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LibraryStore for LibrariesRepository {
    async fn list(&self) -> AppResult<Vec<LibraryJoin>> {
        let query = format!("{} ORDER BY l.id", SELECT_JOIN);
        let rows = sqlx::query_as::<_, LibraryRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(LibraryJoin::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<LibraryJoin>> {
        let query = format!("{} WHERE l.id = $1", SELECT_JOIN);
        let row = sqlx::query_as::<_, LibraryRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(LibraryJoin::from))
    }

    async fn create(&self, data: &LibraryRequestJoin) -> AppResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO library (id_book, id_client, date, active)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(data.book.id)
        .bind(data.client.id)
        .bind(&data.library.date)
        .bind(data.library.active)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, id: i64, data: &LibraryRequestJoin) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE library SET id_book = $1, id_client = $2, date = $3, active = $4 WHERE id = $5",
        )
        .bind(data.book.id)
        .bind(data.client.id)
        .bind(&data.library.date)
        .bind(data.library.active)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM library WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
