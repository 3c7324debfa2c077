pub mod constants;
pub mod errors;
pub mod logging;
pub mod services;
pub mod utils;

// Dioxus hooks (need a component scope)
pub mod hooks;
