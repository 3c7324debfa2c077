// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Platform storage (localStorage on WASM, token file on desktop)
pub mod infrastructure;

// Dioxus application: router, layout, pages
pub mod app;
