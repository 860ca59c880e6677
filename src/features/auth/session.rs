//! Session token store: the access/refresh token pair, the owning user id and
//! the user's profile once loaded. It is an explicit handle passed to flows
//! rather than a global; clones share the same state. Every token mutation is
//! mirrored to the configured [`TokenStorage`].

use super::storage::{
    ACCESS_TOKEN_KEY, MemoryStorage, REFRESH_TOKEN_KEY, TokenStorage, USER_ID_KEY,
};
use super::types::{SessionTokens, UserInfo};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct SessionState {
    access_token: Option<SecretString>,
    refresh_token: Option<SecretString>,
    user_id: Option<String>,
    user_info: Option<UserInfo>,
}

/// Shared handle to the current session.
#[derive(Clone)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
    storage: Arc<dyn TokenStorage>,
}

impl fmt::Debug for Session {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        formatter
            .debug_struct("Session")
            .field("is_logged", &state.access_token.is_some())
            .field("user_id", &state.user_id)
            .finish_non_exhaustive()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl Session {
    /// A session that forgets everything when the process ends.
    pub fn in_memory() -> Self {
        Self::with_storage(MemoryStorage::new())
    }

    /// Builds a session on `storage`, picking up whatever it already holds.
    pub fn with_storage(storage: impl TokenStorage + 'static) -> Self {
        let state = SessionState {
            access_token: storage.load(ACCESS_TOKEN_KEY).map(SecretString::from),
            refresh_token: storage.load(REFRESH_TOKEN_KEY).map(SecretString::from),
            user_id: storage.load(USER_ID_KEY),
            user_info: None,
        };

        Self {
            state: Arc::new(RwLock::new(state)),
            storage: Arc::new(storage),
        }
    }

    /// Browser session persisted in `localStorage`.
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        Self::with_storage(super::storage::BrowserStorage)
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces both tokens in one step.
    pub fn set_tokens(&self, access_token: SecretString, refresh_token: SecretString) {
        let mut state = self.write();
        self.storage
            .store(ACCESS_TOKEN_KEY, access_token.expose_secret());
        self.storage
            .store(REFRESH_TOKEN_KEY, refresh_token.expose_secret());
        state.access_token = Some(access_token);
        state.refresh_token = Some(refresh_token);
    }

    pub fn set_user_id(&self, user_id: Option<String>) {
        let mut state = self.write();
        match &user_id {
            Some(value) => self.storage.store(USER_ID_KEY, value),
            None => self.storage.remove(USER_ID_KEY),
        }
        state.user_id = user_id;
    }

    /// Stores a freshly issued token pair and its owner under a single write.
    pub fn sign_in(&self, tokens: SessionTokens) {
        let SessionTokens {
            access_token,
            refresh_token,
            user_id,
        } = tokens;

        let mut state = self.write();
        self.storage
            .store(ACCESS_TOKEN_KEY, access_token.expose_secret());
        self.storage
            .store(REFRESH_TOKEN_KEY, refresh_token.expose_secret());
        self.storage.store(USER_ID_KEY, &user_id);

        // Cached profile belongs to whoever held the previous tokens.
        if state.user_id.as_deref() != Some(user_id.as_str()) {
            state.user_info = None;
        }
        state.access_token = Some(access_token);
        state.refresh_token = Some(refresh_token);
        state.user_id = Some(user_id);
    }

    /// Drops both tokens and the user id.
    pub fn remove_tokens(&self) {
        let mut state = self.write();
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.storage.remove(USER_ID_KEY);
        state.access_token = None;
        state.refresh_token = None;
        state.user_id = None;
    }

    /// Forgets everything, including the cached profile.
    pub fn clear(&self) {
        self.remove_tokens();
        self.write().user_info = None;
    }

    pub fn is_logged(&self) -> bool {
        self.read().access_token.is_some()
    }

    pub fn access_token(&self) -> Option<SecretString> {
        self.read()
            .access_token
            .as_ref()
            .map(|token| SecretString::from(token.expose_secret().to_owned()))
    }

    pub fn refresh_token(&self) -> Option<SecretString> {
        self.read()
            .refresh_token
            .as_ref()
            .map(|token| SecretString::from(token.expose_secret().to_owned()))
    }

    pub fn user_id(&self) -> Option<String> {
        self.read().user_id.clone()
    }

    pub fn user_info(&self) -> Option<UserInfo> {
        self.read().user_info.clone()
    }

    pub fn set_user_info(&self, user_info: Option<UserInfo>) {
        self.write().user_info = user_info;
    }
}
