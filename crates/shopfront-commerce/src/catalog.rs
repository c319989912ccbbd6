use serde_json::Value;
use shopfront_core::{ApiError, Client, RequestOptions};

use crate::item_path;

const PRODUCTS: &str = "/api/products";
const CATEGORIES: &str = "/api/categories";

/// Filters for [`ProductsClient::list`]. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    /// Part of the product name.
    pub name: Option<String>,
    #[allow(missing_docs)]
    pub category_id: Option<i64>,
    #[allow(missing_docs)]
    pub min_price: Option<u64>,
    #[allow(missing_docs)]
    pub max_price: Option<u64>,
    /// Zero based page index.
    pub page: Option<u32>,
    /// Page size.
    pub size: Option<u32>,
}

impl ProductQuery {
    fn to_options(&self) -> RequestOptions {
        let mut options = RequestOptions::default();

        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            options = options.query("name", name);
        }
        if let Some(category_id) = self.category_id {
            options = options.query("categoryId", category_id);
        }
        if let Some(min_price) = self.min_price.filter(|p| *p > 0) {
            options = options.query("minPrice", min_price);
        }
        if let Some(max_price) = self.max_price.filter(|p| *p > 0) {
            options = options.query("maxPrice", max_price);
        }
        if let Some(page) = self.page {
            options = options.query("page", page);
        }
        if let Some(size) = self.size {
            options = options.query("size", size);
        }

        options
    }
}

#[allow(missing_docs)]
#[derive(Clone)]
pub struct ProductsClient {
    pub(crate) client: Client,
}

impl ProductsClient {
    /// Products matching `query`, as returned by the server (a list or a paged document).
    pub async fn list(&self, query: &ProductQuery) -> Result<Value, ApiError> {
        self.client.get_with(PRODUCTS, query.to_options()).await
    }

    #[allow(missing_docs)]
    pub async fn get(&self, id: impl std::fmt::Display) -> Result<Value, ApiError> {
        self.client.get(&item_path(PRODUCTS, id)).await
    }
}

#[allow(missing_docs)]
#[derive(Clone)]
pub struct CategoriesClient {
    pub(crate) client: Client,
}

impl CategoriesClient {
    #[allow(missing_docs)]
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client.get(CATEGORIES).await
    }

    #[allow(missing_docs)]
    pub async fn get(&self, id: impl std::fmt::Display) -> Result<Value, ApiError> {
        self.client.get(&item_path(CATEGORIES, id)).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use shopfront_test::start_api_mock;
    use wiremock::{
        Mock, ResponseTemplate,
        matchers::{method, path, query_param, query_param_is_missing},
    };

    use super::*;
    use crate::{CommerceClientExt, test_support::client_for};

    #[test]
    fn empty_filters_are_left_out() {
        let options = ProductQuery {
            name: Some("  ".to_string()),
            min_price: Some(0),
            max_price: Some(500_000),
            ..Default::default()
        }
        .to_options();

        assert_eq!(
            options.query,
            vec![("maxPrice".to_string(), "500000".to_string())]
        );
    }

    #[tokio::test]
    async fn lists_products_by_category() {
        let server = start_api_mock(vec![
            Mock::given(method("GET"))
                .and(path("/api/products"))
                .and(query_param("categoryId", "3"))
                .and(query_param_is_missing("name"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
                .expect(1),
        ])
        .await;

        let products = client_for(&server)
            .products()
            .list(&ProductQuery {
                category_id: Some(3),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(products, json!([{ "id": 1 }]));
    }

    #[tokio::test]
    async fn gets_single_items() {
        let server = start_api_mock(vec![
            Mock::given(path("/api/products/5"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 5 }))),
            Mock::given(path("/api/categories"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([]))),
            Mock::given(path("/api/categories/2"))
                .respond_with(ResponseTemplate::new(404)),
        ])
        .await;
        let client = client_for(&server);

        assert_eq!(client.products().get(5).await.unwrap()["id"], 5);
        assert_eq!(client.categories().list().await.unwrap(), json!([]));
        assert!(matches!(
            client.categories().get(2).await,
            Err(ApiError::NotFound)
        ));
    }
}
