//! Key-value persistence for the client session.
//!
//! The session lives in three independent `localStorage` entries. Writes are
//! not atomic: a token can be stored before the profile that completes it, so
//! reads only yield a [`ClientSession`] when all three entries are present.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::state::auth::{AuthState, ClientSession};

pub const TOKEN_KEY: &str = "accessToken";
pub const USERNAME_KEY: &str = "username";
pub const ROLE_KEY: &str = "userRole";

/// String key-value store with `localStorage` semantics.
///
/// Methods take `&self`; implementations own their interior mutability the
/// way the browser store does.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`. Every operation is best-effort: an unavailable
/// store (privacy mode, quota) reads as empty and drops writes.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            leptos::logging::warn!("localStorage unavailable; dropped write of {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            leptos::logging::warn!("localStorage rejected write of {key}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Typed view of the three session entries in a [`KeyValueStore`].
pub struct SessionCache<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> SessionCache<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// The complete cached session, if every field is present.
    pub fn load(&self) -> Option<ClientSession> {
        ClientSession::from_parts(
            self.store.get(TOKEN_KEY),
            self.store.get(USERNAME_KEY),
            self.store.get(ROLE_KEY),
        )
    }

    pub fn auth_state(&self) -> AuthState {
        AuthState::from(self.load().as_ref())
    }

    /// The cached bearer token on its own; present between login and the
    /// profile fetch that completes the session.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn store_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub fn store_profile(&self, username: &str, role: &str) {
        self.store.set(USERNAME_KEY, username);
        self.store.set(ROLE_KEY, role);
    }

    pub fn clear(&self) {
        for key in [TOKEN_KEY, USERNAME_KEY, ROLE_KEY] {
            self.store.remove(key);
        }
    }
}
