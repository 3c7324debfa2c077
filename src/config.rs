//! Client configuration
//!
//! `ARC_API_URL` selects the backend. Native builds read it at runtime; WASM
//! builds have no process environment, so the value is baked in at compile time.

use once_cell::sync::Lazy;

use crate::shared::constants::DEFAULT_API_URL;

/// Resolved once per process
pub static CONFIG: Lazy<ClientConfig> = Lazy::new(ClientConfig::from_env);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    pub api_url: String,
    /// Directory holding the token file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub session_dir: Option<std::path::PathBuf>,
}

impl ClientConfig {
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: normalize_base_url(api_url),
            #[cfg(not(target_arch = "wasm32"))]
            session_dir: None,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::new(option_env!("ARC_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let api_url = std::env::var("ARC_API_URL")
            .ok()
            .or_else(|| option_env!("ARC_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut config = Self::new(&api_url);
        config.session_dir = std::env::var_os("ARC_SESSION_DIR").map(Into::into);
        config
    }

    /// Join an endpoint path onto the base URL with exactly one slash
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
