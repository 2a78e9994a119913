//! Durable storage for the bearer token.
//!
//! The browser store reads and writes `localStorage` under a fixed key.
//! Storage failures (private mode, quota) are logged and swallowed; the
//! backend remains the only judge of whether a stored token is valid.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, Mutex};

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Persistent home of the single session token.
pub trait TokenStore {
    /// The stored token, or `None` when absent or empty.
    fn read(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

fn non_empty(token: String) -> Option<String> {
    if token.is_empty() { None } else { Some(token) }
}

/// Token store backed by the browser's `localStorage`.
///
/// Inert outside the browser: reads return `None` and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
            non_empty(raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session will not survive reload");
                return;
            };
            if let Err(e) = storage.set_item(TOKEN_STORAGE_KEY, token) {
                log::warn!("failed to persist token: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.remove_item(TOKEN_STORAGE_KEY) {
                    log::warn!("failed to clear token: {e:?}");
                }
            }
        }
    }
}

/// Process-local token store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, as after a previous run.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<String> {
        let slot = self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        slot.clone().and_then(non_empty)
    }

    fn save(&self, token: &str) {
        let mut slot = self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = Some(token.to_owned());
    }

    fn clear(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = None;
    }
}
