use serde::Serialize;
use shopfront_state::{Session, StoreKey, UserRecord};
use tracing::{info, warn};

use super::{LoginError, LoginRequest, RegisterRequest, login::LoginResponse};
use crate::{ApiError, Client, RequestOptions};

const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/register";
const LOGOUT_PATH: &str = "/api/auth/logout";
const PROFILE_PATH: &str = "/api/auth/profile";

/// Subclient containing auth functionality.
#[derive(Clone)]
pub struct AuthClient {
    pub(crate) client: Client,
}

impl AuthClient {
    /// Log in and store the new session.
    ///
    /// Once logged in, the user's cart is fetched (the server creates one if needed) and its id
    /// stored alongside the session. A failure there doesn't fail the login.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, LoginError> {
        info!(username = %request.username, "Logging in");

        let response: LoginResponse = self
            .client
            .request(
                http::Method::POST,
                LOGIN_PATH,
                Some(request),
                RequestOptions::without_refresh(),
            )
            .await?;

        let mut session = Session {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            user: response.user,
            cart_id: None,
        };
        session.save(self.client.internal.store().as_ref()).await?;

        match self.fetch_cart_id(&session.user).await {
            Ok(Some(cart_id)) => {
                self.client
                    .internal
                    .store()
                    .set(StoreKey::CartId, cart_id.clone())
                    .await?;
                session.cart_id = Some(cart_id);
            }
            Ok(None) => warn!("No cart found for the user"),
            Err(e) => warn!("Failed to fetch the user's cart: {e}"),
        }

        info!(admin = session.user.is_admin(), "Logged in");
        Ok(session)
    }

    async fn fetch_cart_id(&self, user: &UserRecord) -> Result<Option<String>, ApiError> {
        let cart: serde_json::Value = self
            .client
            .get(&format!("/api/cart/user/{}", user.id))
            .await?;

        Ok(match cart.get("id") {
            Some(serde_json::Value::String(id)) => Some(id.clone()),
            Some(serde_json::Value::Number(id)) => Some(id.to_string()),
            _ => None,
        })
    }

    /// Create a new account. Doesn't log in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value, LoginError> {
        Ok(self
            .client
            .request(
                http::Method::POST,
                REGISTER_PATH,
                Some(request),
                RequestOptions::without_refresh(),
            )
            .await?)
    }

    /// Log out. The server is told to revoke the refresh token when there is one; the local
    /// session is cleared whether or not that succeeds.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let store = self.client.internal.store();

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct LogoutRequest {
            refresh_token: String,
        }

        match store.get(StoreKey::RefreshToken).await {
            Ok(Some(refresh_token)) => {
                let result = self
                    .client
                    .request_raw(
                        http::Method::POST,
                        LOGOUT_PATH,
                        Some(&LogoutRequest { refresh_token }),
                        RequestOptions::without_refresh(),
                    )
                    .await;
                if let Err(e) = result {
                    warn!("Logout request failed: {e}");
                }
            }
            Ok(None) => {}
            Err(e) => warn!("Failed to read the refresh token: {e}"),
        }

        store.clear().await?;
        info!("Logged out");
        Ok(())
    }

    /// Fetch the profile of the logged in user and store it as the session's user.
    pub async fn profile(&self) -> Result<UserRecord, ApiError> {
        let user: UserRecord = self.client.get(PROFILE_PATH).await?;

        self.client
            .internal
            .store()
            .set(StoreKey::User, serde_json::to_string(&user)?)
            .await?;

        Ok(user)
    }

    /// The stored session, if there is one.
    pub async fn session(&self) -> Result<Option<Session>, ApiError> {
        self.client.internal.get_session().await
    }

    /// Whether a session is stored.
    pub async fn is_authenticated(&self) -> Result<bool, ApiError> {
        Ok(self.session().await?.is_some())
    }
}

impl Client {
    /// Login, registration and session related operations.
    pub fn auth(&self) -> AuthClient {
        AuthClient {
            client: self.clone(),
        }
    }
}
