use std::sync::Arc;

use reqwest::header::{self, HeaderValue};
use shopfront_api_base::Configuration;
use shopfront_state::SessionStore;

use super::internal::InternalClient;
use crate::{
    auth::{SessionExpiredHandler, TokenRefresher},
    client::client_settings::ClientSettings,
    pipeline::{BearerAuthMiddleware, LoggingMiddleware},
};

/// The main struct to interact with the Shopfront SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance, so that every clone shares the session and the refresh
    // state. Any mutable state needs to be behind the Arc.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new client storing its session in `store`.
    pub fn new(settings: Option<ClientSettings>, store: Arc<dyn SessionStore>) -> Self {
        Self::new_internal(settings, store, None)
    }

    /// Create a new client that notifies `handler` when the session expires and can't be
    /// refreshed, e.g. to send the user back to the login screen.
    pub fn new_with_handler(
        settings: Option<ClientSettings>,
        store: Arc<dyn SessionStore>,
        handler: Arc<dyn SessionExpiredHandler>,
    ) -> Self {
        Self::new_internal(settings, store, Some(handler))
    }

    fn new_internal(
        settings_input: Option<ClientSettings>,
        store: Arc<dyn SessionStore>,
        handler: Option<Arc<dyn SessionExpiredHandler>>,
    ) -> Self {
        let settings = settings_input.unwrap_or_default();

        let http_client = reqwest::Client::builder()
            .default_headers(build_default_headers(&settings))
            .timeout(settings.timeout())
            .build()
            .expect("HTTP client build should not fail");

        // Middlewares run in the order they are added: logging observes the request exactly as
        // it leaves, after the token has been attached.
        let api_client = reqwest_middleware::ClientBuilder::new(http_client.clone())
            .with(LoggingMiddleware)
            .with(BearerAuthMiddleware::new(store.clone()))
            .build();

        // The refresh call must never carry the (expired) access token nor be retried.
        let bare_client = reqwest_middleware::ClientBuilder::new(http_client)
            .with(LoggingMiddleware)
            .build();

        let api_config = Configuration {
            base_path: settings.base_url.trim_end_matches('/').to_string(),
            client: api_client,
            api_prefix: settings.api_prefix.clone(),
            user_agent: Some(settings.user_agent.clone()),
        };
        let refresh_config = Configuration {
            client: bare_client,
            ..api_config.clone()
        };

        let refresher = TokenRefresher::new(
            store.clone(),
            refresh_config,
            settings.refresh_path.clone(),
            handler,
        );

        Self {
            internal: Arc::new(InternalClient {
                settings,
                api_config,
                store,
                refresher,
            }),
        }
    }
}

/// Build default headers for the storefront HttpClient
fn build_default_headers(settings: &ClientSettings) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();

    headers.append(
        header::ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );

    match HeaderValue::from_str(&settings.user_agent) {
        Ok(user_agent) => {
            headers.append(header::USER_AGENT, user_agent);
        }
        Err(e) => tracing::warn!("Ignoring invalid user agent: {e}"),
    }

    headers
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopfront_state::InMemorySessionStore;

    use super::*;

    #[test]
    fn clones_share_state() {
        let client = Client::new(None, Arc::new(InMemorySessionStore::new()));
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.internal, &clone.internal));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = Client::new(
            Some(ClientSettings {
                base_url: "http://shop.test/".to_string(),
                ..Default::default()
            }),
            Arc::new(InMemorySessionStore::new()),
        );
        assert_eq!(
            client.internal.api_config.url("/api/products"),
            "http://shop.test/api/products"
        );
    }

    #[test]
    fn default_headers() {
        let headers = build_default_headers(&ClientSettings::default());
        assert_eq!(
            headers.get(header::USER_AGENT).unwrap(),
            "Shopfront Rust-SDK"
        );
    }
}
