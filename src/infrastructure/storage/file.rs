use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::shared::constants::TOKEN_STORAGE_KEY;
use crate::shared::errors::SessionError;
use crate::shared::services::session::SessionStore;

const APP_DIR: &str = "arc-privus";

/// Token persisted as a single file, for the desktop build
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store the token inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(TOKEN_STORAGE_KEY),
        }
    }

    /// `<config dir>/arc-privus/access_token`, if the platform has a config dir
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::in_dir(&dir.join(APP_DIR)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|content| content.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    fn store(&self, token: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
