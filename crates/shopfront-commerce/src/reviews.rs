use serde_json::Value;
use shopfront_core::{ApiError, Client};

use crate::item_path;

const REVIEWS: &str = "/api/reviews";

/// Product reviews. Reading is public, writing requires a session.
#[derive(Clone)]
pub struct ReviewsClient {
    pub(crate) client: Client,
}

impl ReviewsClient {
    #[allow(missing_docs)]
    pub async fn for_product(&self, product_id: impl std::fmt::Display) -> Result<Value, ApiError> {
        self.client.get(&product_reviews(product_id)).await
    }

    #[allow(missing_docs)]
    pub async fn create(
        &self,
        product_id: impl std::fmt::Display,
        review: &Value,
    ) -> Result<Value, ApiError> {
        self.client.post(&product_reviews(product_id), review).await
    }

    #[allow(missing_docs)]
    pub async fn update(
        &self,
        review_id: impl std::fmt::Display,
        review: &Value,
    ) -> Result<Value, ApiError> {
        self.client.put(&item_path(REVIEWS, review_id), review).await
    }

    #[allow(missing_docs)]
    pub async fn delete(&self, review_id: impl std::fmt::Display) -> Result<Value, ApiError> {
        self.client.delete(&item_path(REVIEWS, review_id)).await
    }
}

fn product_reviews(product_id: impl std::fmt::Display) -> String {
    format!("{}/reviews", item_path("/api/products", product_id))
}
