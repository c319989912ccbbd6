//! Authentication module
//!
//! Contains the login flow and the coordination of access token refreshes.

mod auth_client;
pub mod login;
mod renew;
mod token_handler;

pub use auth_client::AuthClient;
pub use login::{LoginError, LoginRequest, RegisterRequest};
pub use token_handler::{RefreshError, SessionExpiredHandler, TokenRefresher};
