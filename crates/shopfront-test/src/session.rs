use std::sync::Arc;

use serde_json::json;
use shopfront_state::{InMemorySessionStore, StoreKey};

/// Cart id of the session created by [`logged_in_store`].
pub const TEST_CART_ID: &str = "7";

/// The user record of the test session.
pub fn test_user() -> serde_json::Value {
    json!({
        "id": 1,
        "username": "alice",
        "email": "alice@example.com",
        "roles": ["ROLE_USER"],
    })
}

/// A store holding a complete session with the given tokens.
pub fn logged_in_store(access_token: &str, refresh_token: &str) -> Arc<InMemorySessionStore> {
    Arc::new(InMemorySessionStore::with_values([
        (StoreKey::AccessToken, access_token.to_string()),
        (StoreKey::RefreshToken, refresh_token.to_string()),
        (StoreKey::User, test_user().to_string()),
        (StoreKey::CartId, TEST_CART_ID.to_string()),
    ]))
}
