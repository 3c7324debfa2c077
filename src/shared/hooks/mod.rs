// Custom Dioxus hooks
pub mod use_api_client;
pub mod use_form_state;

pub use use_api_client::use_api_client;
pub use use_form_state::{use_form_state, FormState};
