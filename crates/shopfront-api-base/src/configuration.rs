//! Configuration types for API clients.

/// Configuration for an API client.
///
/// Holds everything needed to turn a request path into a URL and dispatch it through the
/// middleware chain.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL of the storefront server (e.g., "<http://localhost:8080>"), without a trailing
    /// slash.
    pub base_path: String,
    /// HTTP client with middleware support.
    pub client: reqwest_middleware::ClientWithMiddleware,
    /// Path prefix that identifies API routes (e.g., "/api/"). Only requests whose path starts
    /// with this prefix may carry credentials.
    pub api_prefix: String,
    /// User-Agent header value to be sent with requests.
    pub user_agent: Option<String>,
}

impl Configuration {
    /// Resolve a request path against the base path.
    ///
    /// Absolute URLs are returned unchanged, everything else is appended to
    /// [`Configuration::base_path`].
    pub fn url(&self, path: &str) -> String {
        if is_absolute(path) {
            return path.to_string();
        }

        let base = self.base_path.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    /// Whether the given request path targets the API, and is therefore allowed to carry the
    /// bearer token. Absolute URLs never qualify, they may point at a third party host.
    ///
    /// Paths are compared the way [`Configuration::url`] resolves them, with or without the
    /// leading slash.
    pub fn is_api_path(&self, path: &str) -> bool {
        if is_absolute(path) || self.api_prefix.is_empty() {
            return false;
        }
        path.trim_start_matches('/')
            .starts_with(self.api_prefix.trim_start_matches('/'))
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_path: &str) -> Configuration {
        Configuration {
            base_path: base_path.to_string(),
            client: reqwest::Client::new().into(),
            api_prefix: "/api/".to_string(),
            user_agent: None,
        }
    }

    #[test]
    fn joins_paths_with_a_single_slash() {
        let config = config("http://localhost:8080/");
        assert_eq!(config.url("/api/orders"), "http://localhost:8080/api/orders");
        assert_eq!(config.url("api/orders"), "http://localhost:8080/api/orders");
    }

    #[test]
    fn keeps_absolute_urls() {
        let config = config("http://localhost:8080");
        assert_eq!(
            config.url("https://cdn.example.com/logo.png"),
            "https://cdn.example.com/logo.png"
        );
    }

    #[test]
    fn api_path_detection() {
        let config = config("http://localhost:8080");
        assert!(config.is_api_path("/api/orders"));
        assert!(!config.is_api_path("/static/logo.png"));
        assert!(!config.is_api_path("/apix/orders"));
        assert!(!config.is_api_path("http://localhost:8080/api/orders"));
    }

    #[test]
    fn relative_api_path_without_leading_slash() {
        let config = config("http://localhost:8080");
        assert_eq!(config.url("api/orders"), "http://localhost:8080/api/orders");
        assert!(config.is_api_path("api/orders"));
        assert!(!config.is_api_path("static/api/logo.png"));
    }
}
