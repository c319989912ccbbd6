use std::sync::Arc;

use reqwest_middleware::Middleware;
use shopfront_api_base::AuthRequired;
use shopfront_state::{SessionStore, StoreKey};

/// The access token the [`BearerAuthMiddleware`] attached to a request. Stored in the request's
/// extensions so the caller can tell which token a `401` was answered to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttachedToken(pub(crate) String);

/// Middleware that attaches the stored access token to requests.
///
/// The token is read from the [`SessionStore`] every time a request passes through, so a retry
/// after a refresh always carries the new token. Only requests marked with
/// [`AuthRequired::Bearer`] are touched; the client only marks requests whose path is under the
/// API prefix, which keeps the token away from static assets and third party hosts.
pub struct BearerAuthMiddleware {
    store: Arc<dyn SessionStore>,
}

impl BearerAuthMiddleware {
    /// Creates a new auth middleware reading tokens from `store`.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl Middleware for BearerAuthMiddleware {
    async fn handle(
        &self,
        mut req: reqwest::Request,
        ext: &mut http::Extensions,
        next: reqwest_middleware::Next<'_>,
    ) -> Result<reqwest::Response, reqwest_middleware::Error> {
        if let Some(AuthRequired::Bearer) = ext.get::<AuthRequired>() {
            match self.store.get(StoreKey::AccessToken).await {
                Ok(Some(token)) => match format!("Bearer {token}").parse() {
                    Ok(header_value) => {
                        req.headers_mut()
                            .insert(http::header::AUTHORIZATION, header_value);
                        ext.insert(AttachedToken(token));
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse auth token for header: {e}");
                    }
                },
                Ok(None) => {
                    tracing::debug!("No token available, sending request unauthenticated");
                }
                Err(e) => {
                    tracing::warn!("Failed to read auth token: {e}");
                }
            };
        }

        next.run(req, ext).await
    }
}
