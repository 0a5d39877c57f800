//! fetch 封装模块
//!
//! One call to [`fetch`] performs one request and reads the whole body as
//! text. Status handling is left to the caller.

use std::collections::HashMap;

use subway_shared::protocol::HttpMethod;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("invalid request: {0}")]
    Build(String),
    #[error("fetch rejected: {0}")]
    Network(String),
    #[error("unreadable response: {0}")]
    Body(String),
}

fn describe(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn method_name(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "GET",
        HttpMethod::Post => "POST",
        HttpMethod::Put => "PUT",
        HttpMethod::Delete => "DELETE",
    }
}

fn build_request(
    method: HttpMethod,
    url: &str,
    headers: &HashMap<String, String>,
    body: Option<&str>,
) -> Result<Request, HttpError> {
    let js_headers = Headers::new().map_err(|e| HttpError::Build(describe(e)))?;
    for (name, value) in headers {
        js_headers
            .set(name, value)
            .map_err(|e| HttpError::Build(format!("{name}: {}", describe(e))))?;
    }

    let init = RequestInit::new();
    init.set_method(method_name(method));
    init.set_headers(&js_headers.into());
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(body));
    }

    Request::new_with_str_and_init(url, &init).map_err(|e| HttpError::Build(describe(e)))
}

async fn read_text(response: &Response) -> Result<String, HttpError> {
    let promise = response.text().map_err(|e| HttpError::Body(describe(e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| HttpError::Body(describe(e)))?
        .as_string()
        .ok_or_else(|| HttpError::Body("body is not text".to_string()))
}

/// Sends the request and returns the status code with the body text.
pub async fn fetch(
    method: HttpMethod,
    url: &str,
    headers: &HashMap<String, String>,
    body: Option<&str>,
) -> Result<(u16, String), HttpError> {
    let request = build_request(method, url, headers, body)?;
    let window = web_sys::window().ok_or_else(|| HttpError::Network("no window".to_string()))?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| HttpError::Network(describe(e)))?
        .dyn_into()
        .map_err(|e| HttpError::Body(describe(e)))?;

    let status = response.status();
    let text = read_text(&response).await?;
    Ok((status, text))
}
