//! Coordination of access token refreshes.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use futures::future::{BoxFuture, FutureExt, Shared};
use reqwest::StatusCode;
use shopfront_api_base::Configuration;
use shopfront_state::{SessionStore, StoreError, StoreKey};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use super::renew::RefreshTokenRequest;

/// Notified when the session could not be refreshed and has been cleared.
///
/// The UI layer decides what to do with it, usually sending the user back to the login screen.
/// Closures implement this trait.
pub trait SessionExpiredHandler: Send + Sync {
    /// Called once per failed refresh, after the session has been removed from the store.
    fn on_session_expired(&self);
}

impl<F> SessionExpiredHandler for F
where
    F: Fn() + Send + Sync,
{
    fn on_session_expired(&self) {
        self()
    }
}

/// Why a refresh failed. Cloned to every request waiting on the refresh.
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RefreshError {
    #[error("No refresh token available")]
    MissingRefreshToken,
    #[error("The refresh token was rejected with status {0}")]
    Rejected(StatusCode),
    #[error("Refresh request failed: {0}")]
    Transport(String),
    #[error("Invalid refresh response: {0}")]
    InvalidResponse(String),
    #[error("Session store error: {0}")]
    Store(String),
}

impl From<StoreError> for RefreshError {
    fn from(e: StoreError) -> Self {
        RefreshError::Store(e.to_string())
    }
}

type RefreshFuture = Shared<BoxFuture<'static, Result<String, RefreshError>>>;

/// Refreshes the access token on behalf of every request that was answered `401`, making at
/// most one refresh call at a time.
///
/// The first caller starts the refresh; callers arriving while it runs wait for the same
/// outcome. The slot is emptied once the refresh settles so the next expiry starts a new one.
/// The lock guarding the slot is never held while the refresh call is in flight.
pub struct TokenRefresher {
    inner: Arc<RefresherInner>,
    in_flight: Mutex<Option<RefreshFuture>>,
}

struct RefresherInner {
    store: Arc<dyn SessionStore>,
    config: Configuration,
    path: String,
    handler: Option<Arc<dyn SessionExpiredHandler>>,
    count: AtomicU64,
}

impl TokenRefresher {
    /// Create a refresher posting to `path` through `config`, which must not attach tokens.
    pub fn new(
        store: Arc<dyn SessionStore>,
        config: Configuration,
        path: String,
        handler: Option<Arc<dyn SessionExpiredHandler>>,
    ) -> Self {
        Self {
            inner: Arc::new(RefresherInner {
                store,
                config,
                path,
                handler,
                count: AtomicU64::new(0),
            }),
            in_flight: Mutex::new(None),
        }
    }

    /// Obtain a fresh access token after a request sent with `stale` was rejected.
    ///
    /// When another request already replaced `stale` in the store, the stored token is returned
    /// without a new refresh call, and when the session is gone altogether the call fails
    /// without one. On failure the session has been cleared and the
    /// [`SessionExpiredHandler`] notified by the time this returns.
    pub async fn refresh(&self, stale: Option<&str>) -> Result<String, RefreshError> {
        let future = {
            let mut slot = self.in_flight.lock().await;

            match slot.as_ref() {
                Some(running) if running.peek().is_none() => {
                    debug!("Joining the token refresh in flight");
                    running.clone()
                }
                _ => {
                    match (self.inner.store.get(StoreKey::AccessToken).await?, stale) {
                        (Some(current), stale) if stale != Some(current.as_str()) => {
                            debug!("Access token already refreshed");
                            return Ok(current);
                        }
                        // The session was torn down after this request was sent.
                        (None, Some(_)) => return Err(RefreshError::MissingRefreshToken),
                        _ => {}
                    }

                    let inner = self.inner.clone();
                    let future = async move { inner.run().await }.boxed().shared();
                    *slot = Some(future.clone());
                    future
                }
            }
        };

        let result = future.clone().await;

        let mut slot = self.in_flight.lock().await;
        if slot.as_ref().is_some_and(|f| f.ptr_eq(&future)) {
            *slot = None;
        }

        result
    }

    /// Number of refresh calls started so far.
    pub fn refresh_count(&self) -> u64 {
        self.inner.count.load(Ordering::SeqCst)
    }
}

impl RefresherInner {
    async fn run(&self) -> Result<String, RefreshError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        info!("Refreshing the access token");

        match self.renew().await {
            Ok(token) => {
                info!("Access token refreshed");
                Ok(token)
            }
            Err(e) => {
                error!("Token refresh failed, ending the session: {e}");

                if let Err(e) = self.store.clear().await {
                    error!("Failed to clear the session: {e}");
                }
                if let Some(handler) = &self.handler {
                    handler.on_session_expired();
                }

                Err(e)
            }
        }
    }

    async fn renew(&self) -> Result<String, RefreshError> {
        let refresh_token = self
            .store
            .get(StoreKey::RefreshToken)
            .await?
            .filter(|t| !t.is_empty())
            .ok_or(RefreshError::MissingRefreshToken)?;

        let response = RefreshTokenRequest::new(refresh_token)
            .send(&self.config, &self.path)
            .await?;

        self.store
            .set(StoreKey::AccessToken, response.access_token.clone())
            .await?;

        Ok(response.access_token)
    }
}
