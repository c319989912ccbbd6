#![allow(clippy::unwrap_used)]

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use serde_json::{Value, json};
use shopfront_core::{
    ApiError, Client, ClientSettings, FilePart, SessionExpiredHandler, SessionStore, StoreKey,
};
use shopfront_state::InMemorySessionStore;
use shopfront_test::{
    REFRESH_PATH, authorized, logged_in_store, mock_refresh, mock_refresh_delayed,
    mock_refresh_failure, start_api_mock,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn settings(server: &MockServer) -> ClientSettings {
    ClientSettings {
        base_url: server.uri(),
        ..Default::default()
    }
}

fn unauthorized() -> ResponseTemplate {
    ResponseTemplate::new(401).set_body_json(json!({ "message": "Token expired" }))
}

fn counting_handler() -> (Arc<AtomicUsize>, Arc<dyn SessionExpiredHandler>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let handler: Arc<dyn SessionExpiredHandler> = Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (calls, handler)
}

async fn refresh_calls(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == REFRESH_PATH)
        .count()
}

#[tokio::test]
async fn valid_token_resolves_without_refresh() {
    let server = start_api_mock(vec![
        authorized("GET", "/api/orders", "abc")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
            .expect(1),
        mock_refresh("r1", "new").expect(0),
    ])
    .await;
    let client = Client::new(Some(settings(&server)), logged_in_store("abc", "r1"));

    let order: Value = client.get("/api/orders").await.unwrap();

    assert_eq!(order, json!({ "id": 1 }));
    assert_eq!(client.internal.refresh_count(), 0);
}

#[tokio::test]
async fn expired_token_is_refreshed_and_request_retried() {
    let server = start_api_mock(vec![
        authorized("GET", "/api/cart", "expired")
            .respond_with(unauthorized())
            .expect(1),
        authorized("GET", "/api/cart", "new")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .expect(1),
        mock_refresh("r1", "new").expect(1),
    ])
    .await;
    let store = logged_in_store("expired", "r1");
    let client = Client::new(Some(settings(&server)), store.clone());

    let cart: Value = client.get("/api/cart").await.unwrap();

    assert_eq!(cart, json!({ "items": [] }));
    assert_eq!(
        store.get(StoreKey::AccessToken).await.unwrap().as_deref(),
        Some("new")
    );
    assert_eq!(
        store.get(StoreKey::RefreshToken).await.unwrap().as_deref(),
        Some("r1")
    );

    // The refresh call itself never carries the expired token.
    let requests = server.received_requests().await.unwrap();
    let refresh = requests
        .iter()
        .find(|r| r.url.path() == REFRESH_PATH)
        .unwrap();
    assert!(refresh.headers.get("Authorization").is_none());
}

#[tokio::test]
async fn upload_is_sent_again_after_refresh() {
    let images = "/api/admin/products/5/images";
    let server = start_api_mock(vec![
        authorized("POST", images, "expired")
            .respond_with(unauthorized())
            .expect(1),
        authorized("POST", images, "new")
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 9 })))
            .expect(1),
        mock_refresh("r1", "new").expect(1),
    ])
    .await;
    let client = Client::new(Some(settings(&server)), logged_in_store("expired", "r1"));

    let image = FilePart::file("shirt.png", &b"PNGDATA"[..]).with_content_type("image/png");
    let created: Value = client.upload(images, vec![image]).await.unwrap();

    assert_eq!(created, json!({ "id": 9 }));
    let uploads: Vec<_> = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.url.path() == images)
        .collect();
    assert_eq!(uploads.len(), 2);
    for upload in uploads {
        assert!(String::from_utf8_lossy(&upload.body).contains("PNGDATA"));
    }
}

#[tokio::test]
async fn failed_refresh_tears_down_the_session() {
    let server = start_api_mock(vec![
        authorized("GET", "/api/cart", "expired")
            .respond_with(unauthorized())
            .expect(1),
        mock_refresh_failure(401).expect(1),
    ])
    .await;
    let store = logged_in_store("expired", "r1");
    let (calls, handler) = counting_handler();
    let client = Client::new_with_handler(Some(settings(&server)), store.clone(), handler);

    let result = client.get::<Value>("/api/cart").await;

    assert!(matches!(result, Err(ApiError::SessionExpired)));
    for key in StoreKey::ALL {
        assert_eq!(store.get(key).await.unwrap(), None, "{key} was not cleared");
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unauthorized_twice_is_retried_only_once() {
    let server = start_api_mock(vec![
        Mock::given(method("GET"))
            .and(path("/api/cart"))
            .respond_with(unauthorized())
            .expect(2),
        mock_refresh("r1", "new").expect(1),
    ])
    .await;
    let store = logged_in_store("expired", "r1");
    let (calls, handler) = counting_handler();
    let client = Client::new_with_handler(Some(settings(&server)), store.clone(), handler);

    let result = client.get::<Value>("/api/cart").await;

    assert!(matches!(result, Err(ApiError::SessionExpired)));
    assert_eq!(refresh_calls(&server).await, 1);
    assert_eq!(client.internal.refresh_count(), 1);
    // Only a failed refresh ends the session.
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        store.get(StoreKey::AccessToken).await.unwrap().as_deref(),
        Some("new")
    );
}

#[tokio::test]
async fn concurrent_unauthorized_requests_share_one_refresh() {
    let server = start_api_mock(vec![
        authorized("GET", "/api/a", "expired").respond_with(unauthorized()),
        authorized("GET", "/api/b", "expired").respond_with(unauthorized()),
        authorized("GET", "/api/a", "new")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!("a")))
            .expect(1),
        authorized("GET", "/api/b", "new")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!("b")))
            .expect(1),
        mock_refresh_delayed("r1", "new", Duration::from_millis(200)).expect(1),
    ])
    .await;
    let client = Client::new(Some(settings(&server)), logged_in_store("expired", "r1"));

    let (a, b) = tokio::join!(client.get::<String>("/api/a"), client.get::<String>("/api/b"));

    assert_eq!(a.unwrap(), "a");
    assert_eq!(b.unwrap(), "b");
    assert_eq!(refresh_calls(&server).await, 1);
}

#[tokio::test]
async fn many_concurrent_requests_share_one_refresh() {
    let server = start_api_mock(vec![
        authorized("GET", "/api/orders", "expired").respond_with(unauthorized()),
        authorized("GET", "/api/orders", "new")
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(8),
        mock_refresh_delayed("r1", "new", Duration::from_millis(100)).expect(1),
    ])
    .await;
    let client = Client::new(Some(settings(&server)), logged_in_store("expired", "r1"));

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get::<Vec<Value>>("/api/orders").await })
        })
        .collect();

    for task in tasks {
        assert!(task.await.unwrap().unwrap().is_empty());
    }
    assert_eq!(client.internal.refresh_count(), 1);
}

#[tokio::test]
async fn concurrent_requests_fail_together_when_refresh_fails() {
    let server = start_api_mock(vec![
        authorized("GET", "/api/a", "expired").respond_with(unauthorized()),
        authorized("GET", "/api/b", "expired").respond_with(unauthorized()),
        Mock::given(method("POST"))
            .and(path(REFRESH_PATH))
            .respond_with(unauthorized().set_delay(Duration::from_millis(200)))
            .expect(1),
    ])
    .await;
    let store = logged_in_store("expired", "r1");
    let (calls, handler) = counting_handler();
    let client = Client::new_with_handler(Some(settings(&server)), store.clone(), handler);

    let (a, b) = tokio::join!(client.get::<Value>("/api/a"), client.get::<Value>("/api/b"));

    assert!(matches!(a, Err(ApiError::SessionExpired)));
    assert!(matches!(b, Err(ApiError::SessionExpired)));
    assert!(store.is_empty().await);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn refresh_after_a_settled_refresh_starts_a_new_one() {
    let server = MockServer::start().await;
    authorized("GET", "/api/profile", "expired")
        .respond_with(unauthorized())
        .mount(&server)
        .await;
    authorized("GET", "/api/profile", "new")
        .respond_with(unauthorized())
        .mount(&server)
        .await;
    authorized("GET", "/api/profile", "newer")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    mock_refresh("r1", "new")
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mock_refresh("r1", "newer").mount(&server).await;

    let client = Client::new(Some(settings(&server)), logged_in_store("expired", "r1"));

    // First call: refreshed to "new", which the server rejects again.
    let first = client.get::<Value>("/api/profile").await;
    assert!(matches!(first, Err(ApiError::SessionExpired)));

    // Second call starts from "new" and gets its own refresh.
    let second: Value = client.get("/api/profile").await.unwrap();
    assert_eq!(second, json!({}));
    assert_eq!(client.internal.refresh_count(), 2);
}

#[tokio::test]
async fn forbidden_does_not_refresh() {
    let server = start_api_mock(vec![
        authorized("GET", "/api/admin/users", "abc")
            .respond_with(ResponseTemplate::new(403))
            .expect(1),
        mock_refresh("r1", "new").expect(0),
    ])
    .await;
    let store = logged_in_store("abc", "r1");
    let client = Client::new(Some(settings(&server)), store.clone());

    let result = client.get::<Value>("/api/admin/users").await;

    assert!(matches!(result, Err(ApiError::AccessDenied)));
    assert_eq!(store.len().await, 4);
}

#[tokio::test]
async fn guest_without_session_gets_session_expired() {
    let server = start_api_mock(vec![
        Mock::given(method("GET"))
            .and(path("/api/orders"))
            .respond_with(unauthorized())
            .expect(1),
    ])
    .await;
    let (calls, handler) = counting_handler();
    let client = Client::new_with_handler(
        Some(settings(&server)),
        Arc::new(InMemorySessionStore::new()),
        handler,
    );

    let result = client.get::<Value>("/api/orders").await;

    assert!(matches!(result, Err(ApiError::SessionExpired)));
    assert_eq!(refresh_calls(&server).await, 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
