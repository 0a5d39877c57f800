//! 原生 Web API 封装模块
//!
//! Lightweight wrappers over the browser APIs the app touches: fetch,
//! storage, history and `window.alert`.

mod http;
pub mod route;
pub mod router;
mod storage;

pub use http::{HttpError, fetch};
pub use storage::{BrowserStorage, KeyValueStorage};

#[cfg(test)]
pub(crate) use storage::MemoryStorage;

/// Shows a blocking browser alert. Does nothing without a window.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
