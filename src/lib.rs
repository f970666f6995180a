//! # chat-composer
//!
//! Leptos + WASM chat message composer for an embeddable chatbot widget.
//! Renders a text field with send, image-upload, and microphone controls,
//! enforces a configurable character limit, and forwards finished messages
//! to host-provided callbacks.
//!
//! The crate is purely presentational: transport, persistence, and bot logic
//! belong to the embedding application, which supplies them through the
//! callback props on [`Composer`].

pub mod components;
pub mod config;
pub mod state;
pub mod util;

pub use components::composer::Composer;
pub use config::{CharLimit, UploadsConfig};

/// Browser entry point: installs the panic hook and console logger when the
/// WASM module is instantiated by the embedding page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
