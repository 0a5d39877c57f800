//! 远程 API 客户端
//!
//! [`ApiClient`] turns an [`ApiRequest`] into one HTTP call against the
//! configured base URL. Each domain module (`station`, `line`, `login`)
//! exposes one function per endpoint on top of it.

mod client;
pub mod line;
pub mod login;
pub mod station;

pub use client::{FetchHttpClient, HttpClient};
use client::HttpRequest;

#[cfg(test)]
pub(crate) use client::MockHttpClient;

use subway_shared::protocol::ApiRequest;
use subway_shared::{ErrorMessageResponse, HEADER_AUTHORIZATION};

use crate::web::HttpError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("{} (status {status})", .payload.error_message)]
    Status {
        status: u16,
        payload: ErrorMessageResponse,
    },
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("session storage unavailable, token not persisted")]
    SessionUnavailable,
}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl From<ApiError> for ErrorMessageResponse {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Status { payload, .. } => payload,
            other => ErrorMessageResponse::new(other.to_string()),
        }
    }
}

/// Builds the error payload for a non-2xx response.
///
/// Falls back to a status-based message when the body is not an
/// `{ errorMessage }` object or carries an empty message.
fn error_payload(status: u16, body: &str) -> ErrorMessageResponse {
    match serde_json::from_str::<ErrorMessageResponse>(body) {
        Ok(payload) if !payload.error_message.is_empty() => payload,
        _ => ErrorMessageResponse::new(format!("request failed with status {status}")),
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient<C> {
    base_url: String,
    access_token: Option<String>,
    http: C,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(base_url: impl Into<String>, http: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            access_token: None,
            http,
        }
    }

    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub async fn send<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let mut http_req = HttpRequest::new(&self.url(&req.path()), R::METHOD)
            .with_header("Accept", "application/json");

        if let Some(token) = &self.access_token {
            http_req = http_req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
        }

        if R::METHOD.has_body() {
            let body = serde_json::to_string(req).map_err(ApiError::Encode)?;
            http_req = http_req
                .with_header("Content-Type", "application/json")
                .with_body(body);
        }

        let resp = self.http.send(http_req).await?;

        if !resp.is_success() {
            return Err(ApiError::Status {
                status: resp.status,
                payload: error_payload(resp.status, &resp.body),
            });
        }

        // 204 and friends come back without a body; `()` decodes from `null`.
        let body = if R::DISCARD_BODY || resp.body.trim().is_empty() {
            "null"
        } else {
            resp.body.as_str()
        };
        serde_json::from_str(body).map_err(ApiError::Decode)
    }
}
