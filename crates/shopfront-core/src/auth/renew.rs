use serde::{Deserialize, Serialize};
use shopfront_api_base::Configuration;

use super::RefreshError;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RefreshTokenRequest {
    refresh_token: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RefreshTokenResponse {
    pub(crate) access_token: String,
}

impl RefreshTokenRequest {
    pub(crate) fn new(refresh_token: String) -> Self {
        Self { refresh_token }
    }

    /// Exchange the refresh token for a new access token.
    pub(crate) async fn send(
        &self,
        config: &Configuration,
        path: &str,
    ) -> Result<RefreshTokenResponse, RefreshError> {
        let response = config
            .client
            .post(config.url(path))
            .json(self)
            .send()
            .await
            .map_err(|e| RefreshError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RefreshError::Rejected(status));
        }

        let response: RefreshTokenResponse = response
            .json()
            .await
            .map_err(|e| RefreshError::InvalidResponse(e.to_string()))?;

        if response.access_token.is_empty() {
            return Err(RefreshError::InvalidResponse(
                "empty access token".to_string(),
            ));
        }

        Ok(response)
    }
}
