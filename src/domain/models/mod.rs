// Domain models (request/response contracts with the backend)
// Pure Rust, no framework dependencies

pub mod ai;
pub mod auth;
pub mod health;

pub use ai::{
    AiCapability, AiModel, AiRequest, AiResponse, CapabilitiesResponse, ModelsResponse,
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
pub use auth::{AuthTokens, LoginCredentials, RegisterData, RegisterResponse, TokenVerification};
pub use health::{format_percent, HealthStatus, SystemResources};
