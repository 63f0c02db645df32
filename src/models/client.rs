//! Client (borrower) model

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Client as stored, also the update payload
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct Client {
    #[serde(alias = "id")]
    #[serde_as(as = "DefaultOnNull")]
    pub id: i64,
    #[serde(alias = "name")]
    #[serde_as(as = "DefaultOnNull")]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

/// Client without its identity
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClientRequest {
    #[serde(alias = "name")]
    #[serde_as(as = "DefaultOnNull")]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

impl From<Client> for ClientRequest {
    fn from(client: Client) -> Self {
        Self { name: client.name }
    }
}
