use serde::{Deserialize, Serialize};
use shopfront_state::{StoreError, UserRecord};
use thiserror::Error;

use crate::ApiError;

/// Credentials for [`AuthClient::login`](super::AuthClient::login).
#[derive(Serialize, Deserialize, Clone)]
pub struct LoginRequest {
    #[allow(missing_docs)]
    pub username: String,
    #[allow(missing_docs)]
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// A new account for [`AuthClient::register`](super::AuthClient::register).
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[allow(missing_docs)]
    pub username: String,
    #[allow(missing_docs)]
    pub email: String,
    #[allow(missing_docs)]
    pub password: String,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    pub(crate) access_token: String,
    pub(crate) refresh_token: String,
    pub(crate) user: UserRecord,
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Api(ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ApiError> for LoginError {
    fn from(e: ApiError) -> Self {
        match e {
            // Credential endpoints skip the refresh, so a 401 here means the credentials.
            ApiError::SessionExpired => LoginError::InvalidCredentials,
            ApiError::Store(e) => LoginError::Store(e),
            e => LoginError::Api(e),
        }
    }
}
