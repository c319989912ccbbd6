use serde_json::Value;
use shopfront_core::{ApiError, Client};

use crate::item_path;

const WISHLIST: &str = "/api/wishlist";

/// Product variants the user saved for later.
#[derive(Clone)]
pub struct WishlistClient {
    pub(crate) client: Client,
}

impl WishlistClient {
    #[allow(missing_docs)]
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.get(WISHLIST).await
    }

    #[allow(missing_docs)]
    pub async fn add(&self, variant_id: impl std::fmt::Display) -> Result<Value, ApiError> {
        self.client.post_empty(&item_path(WISHLIST, variant_id)).await
    }

    #[allow(missing_docs)]
    pub async fn remove(&self, variant_id: impl std::fmt::Display) -> Result<Value, ApiError> {
        self.client.delete(&item_path(WISHLIST, variant_id)).await
    }
}
