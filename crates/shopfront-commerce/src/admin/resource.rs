use serde_json::Value;
use shopfront_core::{ApiError, Client};

use crate::item_path;

/// Create, read, update and delete operations on one back-office collection.
#[derive(Clone)]
pub struct AdminResource {
    client: Client,
    path: String,
}

impl AdminResource {
    pub(crate) fn new(client: Client, path: String) -> Self {
        Self { client, path }
    }

    /// Path of the collection, e.g. `/api/admin/users`.
    pub fn path(&self) -> &str {
        &self.path
    }

    #[allow(missing_docs)]
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.get(&self.path).await
    }

    #[allow(missing_docs)]
    pub async fn get(&self, id: impl std::fmt::Display) -> Result<Value, ApiError> {
        self.client.get(&item_path(&self.path, id)).await
    }

    #[allow(missing_docs)]
    pub async fn create(&self, item: &Value) -> Result<Value, ApiError> {
        self.client.post(&self.path, item).await
    }

    #[allow(missing_docs)]
    pub async fn update(&self, id: impl std::fmt::Display, item: &Value) -> Result<Value, ApiError> {
        self.client.put(&item_path(&self.path, id), item).await
    }

    #[allow(missing_docs)]
    pub async fn delete(&self, id: impl std::fmt::Display) -> Result<Value, ApiError> {
        self.client.delete(&item_path(&self.path, id)).await
    }
}
