// Durable session storage per platform
use std::rc::Rc;

use crate::shared::services::session::{MemorySessionStore, SessionStore};

#[cfg(target_arch = "wasm32")]
pub mod local;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageSession;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileSessionStore;

/// localStorage-backed session, in-memory when the browser refuses storage
#[cfg(target_arch = "wasm32")]
pub fn browser_session() -> Rc<dyn SessionStore> {
    match LocalStorageSession::open() {
        Some(store) => Rc::new(store),
        None => {
            tracing::warn!("localStorage unavailable, session will not survive a reload");
            Rc::new(MemorySessionStore::new())
        }
    }
}

/// File-backed session in `dir` (or the user config dir), in-memory when neither exists
#[cfg(not(target_arch = "wasm32"))]
pub fn file_session(dir: Option<&std::path::Path>) -> Rc<dyn SessionStore> {
    let store = dir
        .map(FileSessionStore::in_dir)
        .or_else(FileSessionStore::default_location);

    match store {
        Some(store) => {
            tracing::debug!(path = %store.path().display(), "Using file session store");
            Rc::new(store)
        }
        None => {
            tracing::warn!("No config directory found, session will not survive a restart");
            Rc::new(MemorySessionStore::new())
        }
    }
}
