use std::sync::Arc;

use shopfront_api_base::Configuration;
use shopfront_state::{Session, SessionStore, StoreKey};

use crate::{ClientSettings, auth::TokenRefresher};

#[allow(missing_docs)]
pub struct InternalClient {
    pub(crate) settings: ClientSettings,

    /// Transport for business requests: logging and bearer injection.
    pub(crate) api_config: Configuration,

    pub(crate) store: Arc<dyn SessionStore>,
    pub(crate) refresher: TokenRefresher,
}

impl std::fmt::Debug for InternalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InternalClient")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl InternalClient {
    /// The settings the client was created with.
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// The transport configuration used for API requests.
    pub fn api_configuration(&self) -> &Configuration {
        &self.api_config
    }

    /// The store holding the session.
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// The access token requests are currently sent with.
    pub async fn get_access_token(&self) -> Result<Option<String>, crate::ApiError> {
        Ok(self.store.get(StoreKey::AccessToken).await?)
    }

    /// The persisted session, if one can be restored.
    pub async fn get_session(&self) -> Result<Option<Session>, crate::ApiError> {
        Ok(Session::load(self.store.as_ref()).await?)
    }

    /// Number of refresh calls issued by this client so far.
    pub fn refresh_count(&self) -> u64 {
        self.refresher.refresh_count()
    }
}
