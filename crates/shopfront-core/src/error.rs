//! Errors that can occur when using this SDK

use reqwest::StatusCode;
use shopfront_api_base::Error as BaseApiError;
use shopfront_state::StoreError;
use thiserror::Error;

/// Errors from performing requests against the storefront API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not complete within its timeout.
    #[error("The request timed out")]
    Timeout,

    /// No response was received (connection refused, DNS failure, TLS error, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// Authentication could not be recovered; the user has to log in again.
    #[error("The session has expired, please log in again")]
    SessionExpired,

    /// The session is valid but lacks the privileges for this request.
    #[error("Access denied")]
    AccessDenied,

    /// The requested resource does not exist.
    #[error("Not found")]
    NotFound,

    /// Any other non-success response.
    #[error("Request failed: [{status}] {message}")]
    RequestFailed {
        /// Status code returned by the server.
        status: StatusCode,
        /// Message returned by the server, or the raw body when it had none.
        message: String,
    },

    /// The response body could not be decoded, or the request body encoded.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    /// Reading or writing the session store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request could not be built (malformed URL, header, ...).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Discriminant of an [`ApiError`], for callers that only need to branch on the kind of
/// failure.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Timeout,
    Network,
    SessionExpired,
    AccessDenied,
    NotFound,
    RequestFailed,
    Decode,
    Store,
    InvalidRequest,
}

impl ApiError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Timeout => ErrorKind::Timeout,
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::SessionExpired => ErrorKind::SessionExpired,
            ApiError::AccessDenied => ErrorKind::AccessDenied,
            ApiError::NotFound => ErrorKind::NotFound,
            ApiError::RequestFailed { .. } => ErrorKind::RequestFailed,
            ApiError::Serde(_) => ErrorKind::Decode,
            ApiError::Store(_) => ErrorKind::Store,
            ApiError::InvalidRequest(_) => ErrorKind::InvalidRequest,
        }
    }

    /// Map a non-success status and its body onto the error taxonomy.
    pub(crate) fn from_status(status: StatusCode, content: &str) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::SessionExpired,
            StatusCode::FORBIDDEN => ApiError::AccessDenied,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            _ => ApiError::RequestFailed {
                status,
                message: server_message(status, content),
            },
        }
    }
}

/// Extract the message of an error body. The API answers with `{ "message": ... }` or
/// `{ "error": ... }`; anything else is passed through as text.
pub(crate) fn server_message(status: StatusCode, content: &str) -> String {
    if let Ok(serde_json::Value::Object(body)) = serde_json::from_str(content) {
        for field in ["message", "error"] {
            if let Some(serde_json::Value::String(message)) = body.get(field) {
                return message.clone();
            }
        }
    }

    let content = content.trim();
    if content.is_empty() {
        status.canonical_reason().unwrap_or_default().to_string()
    } else {
        content.to_string()
    }
}

impl From<BaseApiError> for ApiError {
    fn from(e: BaseApiError) -> Self {
        match e {
            BaseApiError::Response { status, content } => ApiError::from_status(status, &content),
            BaseApiError::Timeout(_) => ApiError::Timeout,
            BaseApiError::NotConnected(message) | BaseApiError::Other(message) => {
                ApiError::Network(message)
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        BaseApiError::from(e).into()
    }
}

impl From<reqwest_middleware::Error> for ApiError {
    fn from(e: reqwest_middleware::Error) -> Self {
        BaseApiError::from(e).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, ""),
            ApiError::SessionExpired
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::FORBIDDEN, ""),
            ApiError::AccessDenied
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, ""),
            ApiError::NotFound
        ));

        let err = ApiError::from_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message":"quantity must be positive"}"#,
        );
        match err {
            ApiError::RequestFailed { status, message } => {
                assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
                assert_eq!(message, "quantity must be positive");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn server_message_fallbacks() {
        assert_eq!(
            server_message(StatusCode::BAD_REQUEST, r#"{"error":"bad sku"}"#),
            "bad sku"
        );
        assert_eq!(
            server_message(StatusCode::BAD_REQUEST, "  plain failure \n"),
            "plain failure"
        );
        assert_eq!(
            server_message(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "Internal Server Error"
        );
        assert_eq!(
            server_message(StatusCode::BAD_REQUEST, r#"{"code":12}"#),
            r#"{"code":12}"#
        );
    }

    #[test]
    fn transport_errors() {
        assert_eq!(
            ApiError::from(BaseApiError::Timeout("slow".to_string())).kind(),
            ErrorKind::Timeout
        );
        assert_eq!(
            ApiError::from(BaseApiError::NotConnected("refused".to_string())).kind(),
            ErrorKind::Network
        );
    }
}
