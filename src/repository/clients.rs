//! Clients repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::ClientStore;
use crate::{
    error::AppResult,
    models::{Client, ClientRequest},
};

#[derive(Clone)]
pub struct ClientsRepository {
    pool: Pool<Postgres>,
}

impl ClientsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientStore for ClientsRepository {
    async fn list(&self) -> AppResult<Vec<Client>> {
        let rows = sqlx::query_as::<_, Client>("SELECT id, name FROM client ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Client>> {
        let row = sqlx::query_as::<_, Client>("SELECT id, name FROM client WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, data: &ClientRequest) -> AppResult<i64> {
        let id: i64 = sqlx::query_scalar("INSERT INTO client (name) VALUES ($1) RETURNING id")
            .bind(&data.name)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update(&self, id: i64, data: &ClientRequest) -> AppResult<u64> {
        let result = sqlx::query("UPDATE client SET name = $1 WHERE id = $2")
            .bind(&data.name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM client WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
