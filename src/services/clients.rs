//! Client service

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::AppResult,
    models::{Client, ClientRequest, CreatedId},
    repository::ClientStore,
};

use super::ensure_positive_id;

#[derive(Clone)]
pub struct ClientsService {
    store: Arc<dyn ClientStore>,
}

impl ClientsService {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Client>> {
        self.store.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<ClientRequest>> {
        Ok(self.store.get_by_id(id).await?.map(ClientRequest::from))
    }

    pub async fn create(&self, data: &ClientRequest) -> AppResult<CreatedId> {
        data.validate()?;
        let id = self.store.create(data).await?;
        tracing::info!("Created client {}", id);
        Ok(CreatedId { id })
    }

    pub async fn update(&self, id: i64, data: &Client) -> AppResult<()> {
        data.validate()?;
        let request = ClientRequest::from(data.clone());
        let updated = self.store.update(id, &request).await?;
        tracing::debug!("Updated client {} ({} rows)", id, updated);
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        ensure_positive_id(id)?;
        let deleted = self.store.delete(id).await?;
        tracing::debug!("Deleted client {} ({} rows)", id, deleted);
        Ok(())
    }
}
