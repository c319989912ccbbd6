use serde::Serialize;
use serde_json::Value;
use shopfront_core::{ApiError, Client};

use crate::item_path;

const ORDERS: &str = "/api/admin/orders";

/// Orders of every user.
#[derive(Clone)]
pub struct AdminOrdersClient {
    client: Client,
}

#[derive(Serialize)]
struct UpdateStatusRequest<'a> {
    status: &'a str,
}

impl AdminOrdersClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    #[allow(missing_docs)]
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.get(ORDERS).await
    }

    #[allow(missing_docs)]
    pub async fn get(&self, id: impl std::fmt::Display) -> Result<Value, ApiError> {
        self.client.get(&item_path(ORDERS, id)).await
    }

    /// Move an order to `status`, e.g. `SHIPPED`.
    pub async fn update_status(
        &self,
        id: impl std::fmt::Display,
        status: &str,
    ) -> Result<Value, ApiError> {
        tracing::info!(%status, "Updating order status");
        self.client
            .patch(
                &format!("{}/status", item_path(ORDERS, id)),
                &UpdateStatusRequest { status },
            )
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use shopfront_test::{authorized, start_api_mock};
    use wiremock::{ResponseTemplate, matchers::body_json};

    use crate::{
        CommerceClientExt,
        test_support::{TOKEN, client_for},
    };

    #[tokio::test]
    async fn updates_status_with_patch() {
        let server = start_api_mock(vec![
            authorized("PATCH", "/api/admin/orders/10/status", TOKEN)
                .and(body_json(json!({ "status": "SHIPPED" })))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(json!({ "id": 10, "status": "SHIPPED" })),
                )
                .expect(1),
            authorized("GET", "/api/admin/orders", TOKEN)
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
                .expect(1),
        ])
        .await;
        let orders = client_for(&server).admin().orders();

        let order = orders.update_status(10, "SHIPPED").await.unwrap();
        assert_eq!(order["status"], "SHIPPED");
        assert_eq!(orders.list().await.unwrap(), json!([]));
    }
}
