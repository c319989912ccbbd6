use std::time::Instant;

use reqwest_middleware::Middleware;
use tracing::debug;

/// Middleware that records every dispatched request and its outcome as tracing events.
///
/// It only observes: the request and the response pass through unchanged, and nothing is
/// awaited besides the rest of the chain. Header values are never recorded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware;

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        req: reqwest::Request,
        extensions: &mut http::Extensions,
        next: reqwest_middleware::Next<'_>,
    ) -> Result<reqwest::Response, reqwest_middleware::Error> {
        let method = req.method().clone();
        let path = req.url().path().to_string();
        let authenticated = req.headers().contains_key(http::header::AUTHORIZATION);
        let started = Instant::now();

        debug!(%method, %path, authenticated, "Dispatching request");

        let result = next.run(req, extensions).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(response) => {
                debug!(
                    %method,
                    %path,
                    status = response.status().as_u16(),
                    elapsed_ms,
                    "Received response"
                );
            }
            Err(e) => {
                debug!(%method, %path, elapsed_ms, "No response: {e}");
            }
        }

        result
    }
}
