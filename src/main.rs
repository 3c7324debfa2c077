//! ARC Privus AI Madre - web client entry point
//!
//! `dx serve` builds the WASM target; `--features desktop` runs the same app natively.

use arc_privus_web::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::log_1(&"[WASM] ARC Privus AI Madre - WASM initialized".into());
    dioxus::launch(App);
}

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Initialize tracing BEFORE dioxus::launch
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!(
        api_url = %arc_privus_web::config::CONFIG.api_url,
        "Starting ARC Privus AI Madre client..."
    );

    dioxus::launch(App);
}
