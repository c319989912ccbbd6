use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockBuilder, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

/// Path of the token refresh endpoint.
pub const REFRESH_PATH: &str = "/api/auth/refresh-token";

/// Helper for testing the storefront API using wiremock.
///
/// Warning: when using `Mock::expect` ensure `server` is not dropped before the test completes,
pub async fn start_api_mock(mocks: Vec<Mock>) -> MockServer {
    let server = MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    server
}

/// A server answering every request with `200 {}`.
pub async fn start_app_server() -> MockServer {
    start_api_mock(vec![
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({}))),
    ])
    .await
}

/// Requests to `path` carrying `Authorization: Bearer {token}`.
pub fn authorized(http_method: &str, request_path: &str, token: &str) -> MockBuilder {
    Mock::given(method(http_method))
        .and(path(request_path))
        .and(header("Authorization", format!("Bearer {token}").as_str()))
}

/// A refresh endpoint exchanging `refresh_token` for `access_token`.
pub fn mock_refresh(refresh_token: &str, access_token: &str) -> Mock {
    mock_refresh_delayed(refresh_token, access_token, Duration::ZERO)
}

/// Like [`mock_refresh`], answering after `delay`.
pub fn mock_refresh_delayed(refresh_token: &str, access_token: &str, delay: Duration) -> Mock {
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .and(body_json(json!({ "refreshToken": refresh_token })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "accessToken": access_token }))
                .set_delay(delay),
        )
}

/// A refresh endpoint rejecting every refresh with `status`.
pub fn mock_refresh_failure(status: u16) -> Mock {
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_json(json!({ "message": "Invalid refresh token" })),
        )
}
