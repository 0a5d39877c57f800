//! 浏览器存储封装模块
//!
//! [`BrowserStorage`] talks to `window.sessionStorage` or
//! `window.localStorage`. Both are reached through [`KeyValueStorage`] so the
//! session store can run against an in-memory map in tests.

/// String key/value storage.
///
/// Failures never panic: reads fall back to `None`, writes report `false`.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserStorage {
    /// Survives reloads, cleared when the tab closes.
    Session,
    /// Survives browser restarts.
    Local,
}

impl BrowserStorage {
    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self {
            BrowserStorage::Session => window.session_storage().ok()?,
            BrowserStorage::Local => window.local_storage().ok()?,
        }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn remove(&self, key: &str) -> bool {
        self.storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use super::KeyValueStorage;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory storage shared between clones.
    #[derive(Clone, Default)]
    pub(crate) struct MemoryStorage {
        items: Rc<RefCell<HashMap<String, String>>>,
        unavailable: bool,
    }

    impl MemoryStorage {
        /// A storage whose every operation fails, like a browser with storage disabled.
        pub(crate) fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::default()
            }
        }
    }

    impl KeyValueStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            if self.unavailable {
                return None;
            }
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> bool {
            if self.unavailable {
                return false;
            }
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            true
        }

        fn remove(&self, key: &str) -> bool {
            if self.unavailable {
                return false;
            }
            self.items.borrow_mut().remove(key);
            true
        }
    }
}
