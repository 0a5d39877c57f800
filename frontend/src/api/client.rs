use std::collections::HashMap;
use std::rc::Rc;

use subway_shared::protocol::HttpMethod;

use super::ApiError;
use crate::web;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response. No retry, no timeout.
///
/// `?Send` because browser futures are tied to the single JS thread.
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[async_trait::async_trait(?Send)]
impl<T: HttpClient + ?Sized> HttpClient for Rc<T> {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).send(req).await
    }
}

// =========================================================
// 实现层: fetch 客户端 (Production)
// =========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let (status, body) =
            web::fetch(req.method, &req.url, &req.headers, req.body.as_deref()).await?;
        Ok(HttpResponse { status, body })
    }
}

// =========================================================
// 测试层: Mock 客户端
// =========================================================

#[cfg(test)]
pub(crate) use mock::MockHttpClient;
