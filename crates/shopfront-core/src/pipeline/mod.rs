//! The request pipeline: middlewares applied to every outgoing request, and the classification
//! of the responses they produce.

mod auth_middleware;
mod logging_middleware;
mod request;
mod response;

pub(crate) use auth_middleware::AttachedToken;
pub use auth_middleware::BearerAuthMiddleware;
pub use logging_middleware::LoggingMiddleware;
pub use request::{FilePart, RequestOptions};
pub use response::RawResponse;
