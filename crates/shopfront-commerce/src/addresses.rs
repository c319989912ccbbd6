use serde_json::Value;
use shopfront_core::{ApiError, Client};

use crate::item_path;

const ADDRESSES: &str = "/api/addresses";

/// Shipping addresses of the logged in user.
#[derive(Clone)]
pub struct AddressesClient {
    pub(crate) client: Client,
}

impl AddressesClient {
    #[allow(missing_docs)]
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.get(ADDRESSES).await
    }

    #[allow(missing_docs)]
    pub async fn create(&self, address: &Value) -> Result<Value, ApiError> {
        self.client.post(ADDRESSES, address).await
    }

    #[allow(missing_docs)]
    pub async fn update(
        &self,
        id: impl std::fmt::Display,
        address: &Value,
    ) -> Result<Value, ApiError> {
        self.client.put(&item_path(ADDRESSES, id), address).await
    }

    #[allow(missing_docs)]
    pub async fn delete(&self, id: impl std::fmt::Display) -> Result<Value, ApiError> {
        self.client.delete(&item_path(ADDRESSES, id)).await
    }
}
