//! 会话存储
//!
//! Keeps the access token under [`ACCESS_TOKEN_KEY`]. The mere presence of
//! the key means "logged in"; there is no expiry or refresh.

use subway_shared::ACCESS_TOKEN_KEY;

use crate::web::{BrowserStorage, KeyValueStorage};

#[derive(Debug, Clone, Copy)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn set(&self, key: &str, value: &str) -> bool {
        self.storage.set(key, value)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.storage.get(key)
    }

    pub fn remove(&self, key: &str) -> bool {
        self.storage.remove(key)
    }

    pub fn access_token(&self) -> Option<String> {
        self.get(ACCESS_TOKEN_KEY)
    }

    pub fn save_access_token(&self, token: &str) -> bool {
        self.set(ACCESS_TOKEN_KEY, token)
    }

    pub fn clear_access_token(&self) -> bool {
        self.remove(ACCESS_TOKEN_KEY)
    }

    pub fn is_logged_in(&self) -> bool {
        self.access_token().is_some()
    }
}

/// The session store backed by `window.sessionStorage`.
pub fn browser_session() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage::Session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::MemoryStorage;

    #[test]
    fn token_round_trip() {
        let session = SessionStore::new(MemoryStorage::default());
        assert!(!session.is_logged_in());

        assert!(session.set(ACCESS_TOKEN_KEY, "abc.def"));
        assert_eq!(session.get(ACCESS_TOKEN_KEY).as_deref(), Some("abc.def"));
        assert!(session.is_logged_in());

        assert!(session.remove(ACCESS_TOKEN_KEY));
        assert_eq!(session.get(ACCESS_TOKEN_KEY), None);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn overwriting_keeps_latest_token() {
        let session = SessionStore::new(MemoryStorage::default());
        session.save_access_token("first");
        session.save_access_token("second");
        assert_eq!(session.access_token().as_deref(), Some("second"));
    }

    #[test]
    fn unavailable_storage_reads_as_logged_out() {
        let session = SessionStore::new(MemoryStorage::unavailable());
        assert!(!session.save_access_token("token"));
        assert_eq!(session.access_token(), None);
        assert!(!session.clear_access_token());
    }
}
