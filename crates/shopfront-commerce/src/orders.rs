use serde::{Deserialize, Serialize};
use serde_json::Value;
use shopfront_core::{ApiError, Client};

use crate::item_path;

const ORDERS: &str = "/api/orders";

/// Checkout of the current cart.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// One of the user's saved addresses.
    pub shipping_address_id: i64,
    /// Payment method name, e.g. `COD`.
    pub payment_method: String,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Orders of the logged in user.
#[derive(Clone)]
pub struct OrdersClient {
    pub(crate) client: Client,
}

impl OrdersClient {
    /// Place an order for the content of the cart.
    pub async fn create(&self, request: &CreateOrderRequest) -> Result<Value, ApiError> {
        self.client.post(ORDERS, request).await
    }

    /// Every order the user placed.
    pub async fn history(&self) -> Result<Value, ApiError> {
        self.client.get(ORDERS).await
    }

    #[allow(missing_docs)]
    pub async fn get(&self, id: impl std::fmt::Display) -> Result<Value, ApiError> {
        self.client.get(&item_path(ORDERS, id)).await
    }
}
