use serde::{Deserialize, Serialize};
use serde_json::Value;
use shopfront_core::{ApiError, Client, RequestOptions};

use crate::item_path;

const CART: &str = "/api/cart";
const CART_ITEMS: &str = "/api/cart/items";

/// A product variant to put in the cart.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub product_variant_id: i64,
    pub quantity: u32,
}

/// Operations on the cart of the logged in user.
#[derive(Clone)]
pub struct CartClient {
    pub(crate) client: Client,
}

impl CartClient {
    /// The current cart.
    pub async fn get(&self) -> Result<Value, ApiError> {
        self.client.get(CART).await
    }

    /// The cart of `user_id`. The server creates it when the user has none yet.
    pub async fn for_user(&self, user_id: impl std::fmt::Display) -> Result<Value, ApiError> {
        self.client.get(&item_path("/api/cart/user", user_id)).await
    }

    #[allow(missing_docs)]
    pub async fn add_item(&self, request: &AddCartItemRequest) -> Result<Value, ApiError> {
        self.client.post(CART_ITEMS, request).await
    }

    #[allow(missing_docs)]
    pub async fn remove_item(&self, item_id: impl std::fmt::Display) -> Result<Value, ApiError> {
        self.client.delete(&item_path(CART_ITEMS, item_id)).await
    }

    /// Set the quantity of a cart line.
    pub async fn update_quantity(
        &self,
        item_id: impl std::fmt::Display,
        quantity: u32,
    ) -> Result<Value, ApiError> {
        self.client
            .patch_with(
                &item_path(CART_ITEMS, item_id),
                RequestOptions::default().query("quantity", quantity),
            )
            .await
    }

    /// Remove every item.
    pub async fn clear(&self) -> Result<Value, ApiError> {
        self.client.delete("/api/cart/clear").await
    }
}
