// Shared constants

/// Name displayed in headers and the footer
pub const PRODUCT_NAME: &str = "ARC Privus AI Madre";

/// Storage key of the persisted access token
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// Base URL used when `ARC_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Delay before leaving the register page after a successful registration
pub const REGISTER_REDIRECT_DELAY_MS: u32 = 2000;

// Backend endpoints
pub const HEALTH_PATH: &str = "/health";
pub const HEALTH_STATUS_PATH: &str = "/api/v1/health/status";
pub const REGISTER_PATH: &str = "/api/v1/auth/register";
pub const LOGIN_PATH: &str = "/api/v1/auth/login";
pub const VERIFY_PATH: &str = "/api/v1/auth/verify";
pub const AI_INFER_PATH: &str = "/api/v1/ai/infer";
pub const AI_MODELS_PATH: &str = "/api/v1/ai/models";
pub const AI_CAPABILITIES_PATH: &str = "/api/v1/ai/capabilities";
