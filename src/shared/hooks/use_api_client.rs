use dioxus::prelude::*;

use crate::shared::services::ApiClient;

/// The client provided by the layout
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>()
}
