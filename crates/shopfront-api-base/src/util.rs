//! Utility functions for API operations.

/// URL-encodes a string for use in paths and query parameters.
pub fn urlencode<T: AsRef<str>>(s: T) -> String {
    url::form_urlencoded::byte_serialize(s.as_ref().as_bytes()).collect()
}

/// Marker struct used for requests that require authentication.
/// It will be included in the request's extensions to signal to the middleware
/// that authentication is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequired {
    /// Bearer token authentication.
    Bearer,
}

/// Content types supported by the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentType {
    /// JSON content (application/json).
    Json,
    /// Plain text content.
    Text,
    /// Unsupported content type.
    Unsupported(String),
}

impl From<&str> for ContentType {
    fn from(content_type: &str) -> Self {
        if content_type.starts_with("application") && content_type.contains("json") {
            Self::Json
        } else if content_type.starts_with("text/plain") {
            Self::Text
        } else {
            Self::Unsupported(content_type.to_string())
        }
    }
}

impl ContentType {
    /// Read the content type of a response, defaulting to JSON when the header is missing.
    pub fn of(headers: &http::HeaderMap) -> Self {
        headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ContentType::from)
            .unwrap_or(ContentType::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_path_segments() {
        assert_eq!(urlencode("a b/c"), "a+b%2Fc");
    }

    #[test]
    fn content_type_detection() {
        assert_eq!(ContentType::from("application/json"), ContentType::Json);
        assert_eq!(
            ContentType::from("application/problem+json; charset=utf-8"),
            ContentType::Json
        );
        assert_eq!(ContentType::from("text/plain"), ContentType::Text);
        assert_eq!(
            ContentType::from("text/html"),
            ContentType::Unsupported("text/html".to_string())
        );
    }

    #[test]
    fn missing_content_type_defaults_to_json() {
        assert_eq!(ContentType::of(&http::HeaderMap::new()), ContentType::Json);
    }
}
