//! Error types for API operations.

/// An error returned by the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Server returned an HTTP error response.
    #[error("API error {status}: {content}")]
    Response {
        /// HTTP status code of the response.
        status: reqwest::StatusCode,
        /// Raw response body content.
        content: String,
    },

    /// The request did not complete within its time budget.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Could not reach the server (DNS failure, TLS error, connection refused, etc.)
    #[error("not connected: {0}")]
    NotConnected(String),

    /// Catch-all for other errors (serialization, IO, etc.)
    #[error("other error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return Error::Response {
                status,
                // Can't get the response body from a reqwest::Error, so just leave it empty.
                content: String::new(),
            };
        }

        // Checked before is_connect, a connect timeout reports both.
        if e.is_timeout() {
            return Error::Timeout(e.to_string());
        }

        // Consider connection errors and errors sending requests as "not connected",
        // since they all indicate a failure to communicate with the server.
        if e.is_connect() || e.is_request() {
            return Error::NotConnected(e.to_string());
        }

        Error::Other(e.to_string())
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => Error::Other(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Other(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Other(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn connection_refused_is_not_connected() {
        // Port 9 (discard) is not expected to be listening on loopback.
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:9/")
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .unwrap_err();

        assert!(matches!(Error::from(err), Error::NotConnected(_)));
    }
}
