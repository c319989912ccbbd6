use std::time::Duration;

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use reqwest::multipart::{Form, Part};
use serde::{Serialize, de::DeserializeOwned};
use shopfront_api_base::AuthRequired;
use tracing::{debug, error, warn};

use super::{AttachedToken, RawResponse};
use crate::{ApiError, Client, client::InternalClient};

/// Per-request options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Overrides the client wide timeout for this request.
    pub timeout: Option<Duration>,
    /// Query parameters appended to the URL.
    pub query: Vec<(String, String)>,
    /// Extra headers sent with the request.
    pub headers: HeaderMap,
    /// Report a `401 Unauthorized` as is instead of refreshing the token and retrying. Used by
    /// the credential endpoints, where a `401` means the credentials were wrong.
    pub skip_refresh: bool,
}

impl RequestOptions {
    /// Options with the given timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Default::default()
        }
    }

    /// Append a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Options for a request that must not trigger a token refresh.
    pub fn without_refresh() -> Self {
        Self {
            skip_refresh: true,
            ..Default::default()
        }
    }

    /// Add a header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// One file of a `multipart/form-data` upload.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Name of the form field.
    pub field: String,
    /// File name announced to the server.
    pub file_name: String,
    /// MIME type of the content, e.g. `image/png`.
    pub content_type: Option<String>,
    #[allow(missing_docs)]
    pub data: Bytes,
}

impl FilePart {
    /// A part named `file`, the field the upload endpoints read.
    pub fn file(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            field: "file".to_string(),
            file_name: file_name.into(),
            content_type: None,
            data: data.into(),
        }
    }

    /// Set the MIME type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Body of a [`PendingRequest`]. Multipart forms can't be cloned, so the parts are kept and the
/// form is built again on every dispatch.
#[derive(Debug, Clone)]
pub(crate) enum RequestBody {
    Json(Bytes),
    Multipart(Vec<FilePart>),
}

impl RequestBody {
    fn form(parts: &[FilePart]) -> Result<Form, ApiError> {
        parts.iter().try_fold(Form::new(), |form, part| {
            let mut file = Part::bytes(part.data.to_vec()).file_name(part.file_name.clone());
            if let Some(content_type) = &part.content_type {
                file = file
                    .mime_str(content_type)
                    .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
            }
            Ok(form.part(part.field.clone(), file))
        })
    }
}

/// A request on its way through the pipeline. The body is encoded once, up front, so the
/// request can be sent again after a token refresh.
#[derive(Debug, Clone)]
pub(crate) struct PendingRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) body: Option<RequestBody>,
    pub(crate) options: RequestOptions,
    /// Set once the request has been retried after a refresh. Never reset.
    pub(crate) retried: bool,
}

impl PendingRequest {
    pub(crate) fn new(
        method: Method,
        path: impl Into<String>,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            options,
            retried: false,
        }
    }
}

impl InternalClient {
    /// Send `request`, refreshing the access token and retrying once if the server answers
    /// `401 Unauthorized`.
    pub(crate) async fn send(&self, mut request: PendingRequest) -> Result<RawResponse, ApiError> {
        loop {
            let (response, attached) = self.dispatch(&request).await?;

            if response.status() == StatusCode::UNAUTHORIZED
                && !request.retried
                && !request.options.skip_refresh
            {
                drop(response);
                request.retried = true;

                warn!(
                    method = %request.method,
                    path = %request.path,
                    "Unauthorized, refreshing the access token"
                );

                if let Err(e) = self.refresher.refresh(attached.as_deref()).await {
                    warn!(path = %request.path, "Could not refresh the session: {e}");
                    return Err(ApiError::SessionExpired);
                }

                debug!(path = %request.path, "Retrying request with the refreshed token");
                continue;
            }

            let result = RawResponse::read(response).await;
            match &result {
                Ok(_) => {}
                Err(ApiError::SessionExpired) if request.retried => {
                    warn!(path = %request.path, "Still unauthorized after refreshing the token");
                }
                Err(ApiError::AccessDenied) => {
                    warn!(path = %request.path, "Access denied, insufficient permissions");
                }
                Err(ApiError::NotFound) => warn!(path = %request.path, "API not found"),
                Err(e) => warn!(path = %request.path, "Request failed: {e}"),
            }
            return result;
        }
    }

    /// Send `request` once through the middleware chain. Returns the response and the token
    /// that was attached to it, if any.
    async fn dispatch(
        &self,
        request: &PendingRequest,
    ) -> Result<(reqwest::Response, Option<String>), ApiError> {
        let config = &self.api_config;

        let mut builder = config
            .client
            .request(request.method.clone(), config.url(&request.path))
            .headers(request.options.headers.clone());

        if !request.options.query.is_empty() {
            builder = builder.query(&request.options.query);
        }
        if let Some(timeout) = request.options.timeout {
            builder = builder.timeout(timeout);
        }
        match &request.body {
            Some(RequestBody::Json(body)) => {
                builder = builder
                    .header(http::header::CONTENT_TYPE, "application/json")
                    .body(body.clone());
            }
            Some(RequestBody::Multipart(parts)) => {
                builder = builder.multipart(RequestBody::form(parts)?);
            }
            None => {}
        }

        let http_request = builder
            .build()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let mut extensions = http::Extensions::new();
        if config.is_api_path(&request.path) {
            extensions.insert(AuthRequired::Bearer);
        }

        let response = config
            .client
            .execute_with_extensions(http_request, &mut extensions)
            .await
            .map_err(|e| {
                let e = ApiError::from(e);
                error!(path = %request.path, "Network error or server offline: {e}");
                e
            })?;

        let attached = extensions.get::<AttachedToken>().map(|t| t.0.clone());
        Ok((response, attached))
    }
}

impl Client {
    /// Send a request to `path` and decode the JSON response.
    ///
    /// `path` is resolved against the configured base URL. Requests under the API prefix carry
    /// the stored access token; when the server rejects it, the token is refreshed and the
    /// request sent one more time.
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request_raw(method, path, body, options).await?.json()
    }

    /// Like [`Client::request`], without decoding the response body.
    pub async fn request_raw<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<RawResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_vec)
            .transpose()?
            .map(|body| RequestBody::Json(Bytes::from(body)));

        self.internal
            .send(PendingRequest::new(method, path, body, options))
            .await
    }

    /// `GET path`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_with(path, RequestOptions::default()).await
    }

    /// `GET path` with options, e.g. query parameters.
    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, None::<&()>, options).await
    }

    /// `POST path` with a JSON body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body), RequestOptions::default())
            .await
    }

    /// `POST path` without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::POST, path, None::<&()>, RequestOptions::default())
            .await
    }

    /// `PUT path` with a JSON body.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(body), RequestOptions::default())
            .await
    }

    /// `PATCH path` with a JSON body.
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PATCH, path, Some(body), RequestOptions::default())
            .await
    }

    /// `PATCH path` with options and without a body.
    pub async fn patch_with<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(Method::PATCH, path, None::<&()>, options).await
    }

    /// `POST path` as `multipart/form-data`. The parts are kept so the form can be sent again
    /// after a token refresh.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        parts: Vec<FilePart>,
    ) -> Result<T, ApiError> {
        self.internal
            .send(PendingRequest::new(
                Method::POST,
                path,
                Some(RequestBody::Multipart(parts)),
                RequestOptions::default(),
            ))
            .await?
            .json()
    }

    /// `DELETE path`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, None::<&()>, RequestOptions::default())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_builder() {
        let options = RequestOptions::with_timeout(Duration::from_secs(2))
            .query("page", 1)
            .query("q", "shoes")
            .header(http::header::ACCEPT_LANGUAGE, HeaderValue::from_static("vi"));

        assert_eq!(options.timeout, Some(Duration::from_secs(2)));
        assert_eq!(
            options.query,
            vec![
                ("page".to_string(), "1".to_string()),
                ("q".to_string(), "shoes".to_string())
            ]
        );
        assert_eq!(options.headers.len(), 1);
    }

    #[test]
    fn pending_requests_start_unretried() {
        let request = PendingRequest::new(
            Method::GET,
            "/api/cart",
            None,
            RequestOptions::default(),
        );
        assert!(!request.retried);
    }

    #[test]
    fn invalid_part_content_type_is_rejected() {
        let parts = vec![FilePart::file("a.png", &b"png"[..]).with_content_type("not a mime")];
        assert!(matches!(
            RequestBody::form(&parts),
            Err(ApiError::InvalidRequest(_))
        ));
    }
}
