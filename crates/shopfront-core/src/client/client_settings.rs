use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ClientSettings::base_url`].
pub const API_URL_ENV: &str = "SHOPFRONT_API_URL";
/// Environment variable overriding [`ClientSettings::timeout_secs`].
pub const TIMEOUT_ENV: &str = "SHOPFRONT_TIMEOUT_SECS";

/// Basic client behavior settings. These settings specify the target server and the behavior of
/// the client. They are optional and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use shopfront_core::ClientSettings;
/// let settings = ClientSettings {
///     base_url: "http://localhost:8080".to_string(),
///     api_prefix: "/api/".to_string(),
///     refresh_path: "/api/auth/refresh-token".to_string(),
///     timeout_secs: 10,
///     user_agent: "Shopfront Rust-SDK".to_string(),
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The url of the storefront server. Defaults to `http://localhost:8080`
    pub base_url: String,
    /// Path prefix of the API routes. Only requests under this prefix carry the bearer token.
    /// Defaults to `/api/`
    pub api_prefix: String,
    /// Path of the token refresh endpoint. Defaults to `/api/auth/refresh-token`
    pub refresh_path: String,
    /// Timeout applied to every request, in seconds. Defaults to 10
    pub timeout_secs: u64,
    /// The user_agent to send to the server. Defaults to `Shopfront Rust-SDK`
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".into(),
            api_prefix: "/api/".into(),
            refresh_path: "/api/auth/refresh-token".into(),
            timeout_secs: 10,
            user_agent: "Shopfront Rust-SDK".into(),
        }
    }
}

impl ClientSettings {
    /// Default settings with the overrides found in the environment applied.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply [`API_URL_ENV`] and [`TIMEOUT_ENV`] on top of these settings. Invalid values are
    /// ignored with a warning.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.base_url = url.trim().trim_end_matches('/').to_string();
            }
        }

        if let Ok(timeout) = std::env::var(TIMEOUT_ENV) {
            self.override_timeout(&timeout);
        }

        self
    }

    fn override_timeout(&mut self, timeout: &str) {
        match timeout.trim().parse::<u64>() {
            Ok(0) => tracing::warn!("Ignoring {TIMEOUT_ENV}=0, requests need a timeout"),
            Ok(secs) => self.timeout_secs = secs,
            Err(e) => tracing::warn!(%timeout, "Ignoring invalid {TIMEOUT_ENV}: {e}"),
        }
    }

    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
