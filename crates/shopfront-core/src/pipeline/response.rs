use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use shopfront_api_base::ContentType;

use crate::ApiError;

/// A successful response, before it is decoded.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Status code of the response, always a success.
    pub status: StatusCode,
    /// Content type announced by the server.
    pub content_type: ContentType,
    /// The response body.
    pub body: Bytes,
}

impl RawResponse {
    /// Read the body of `response`, turning non-success statuses into the matching
    /// [`ApiError`].
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, ApiError> {
        let status = response.status();
        let content_type = ContentType::of(response.headers());
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ApiError::from_status(status, &String::from_utf8_lossy(&body)));
        }

        Ok(Self {
            status,
            content_type,
            body,
        })
    }

    /// Decode the body as JSON. An empty body decodes as `null`, and a plain text body as a JSON
    /// string, so endpoints answering with nothing or with a message can still be decoded into
    /// `()`, `Option<T>` or `String`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }

        match self.content_type {
            ContentType::Text => Ok(serde_json::from_value(serde_json::Value::String(
                self.text(),
            ))?),
            _ => Ok(serde_json::from_slice(&self.body)?),
        }
    }

    /// The body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
