use web_sys::Storage;

use crate::shared::constants::TOKEN_STORAGE_KEY;
use crate::shared::errors::SessionError;
use crate::shared::services::session::SessionStore;

/// Token persisted in the browser's `localStorage`
#[derive(Debug, Clone)]
pub struct LocalStorageSession {
    storage: Storage,
}

impl LocalStorageSession {
    /// `None` when the window has no usable localStorage (private mode, sandboxed iframe)
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl SessionStore for LocalStorageSession {
    fn token(&self) -> Option<String> {
        self.storage
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn store(&self, token: &str) -> Result<(), SessionError> {
        self.storage
            .set_item(TOKEN_STORAGE_KEY, token)
            .map_err(|e| SessionError::Unavailable(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.storage
            .remove_item(TOKEN_STORAGE_KEY)
            .map_err(|e| SessionError::Unavailable(format!("{e:?}")))
    }
}
