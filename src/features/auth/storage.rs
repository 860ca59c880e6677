//! Durable key/value backing for the session token store. The browser build
//! writes to `localStorage` so a session survives reloads; everything else uses
//! an in-process map. Values written here are token material and must never be
//! logged.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_ID_KEY: &str = "userId";

/// Key/value persistence used by [`Session`](super::session::Session).
pub trait TokenStorage: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: TokenStorage + ?Sized> TokenStorage for Arc<T> {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn store(&self, key: &str, value: &str) {
        (**self).store(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// Storage that lives only as long as the process (or page).
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn store(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// `window.localStorage`, looked up on every call so the handle stays `Send`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn store(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!(key, "localStorage unavailable; session will not survive reload");
            return;
        };
        let _ = storage.set_item(key, value);
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStorage, TokenStorage};

    #[test]
    fn memory_storage_round_trips_and_removes() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load("accessToken"), None);

        storage.store("accessToken", "t1");
        storage.store("accessToken", "t3");
        assert_eq!(storage.load("accessToken"), Some("t3".to_string()));

        storage.remove("accessToken");
        assert_eq!(storage.load("accessToken"), None);
    }
}
