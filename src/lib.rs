//! # chat-ui-state
//!
//! Leptos UI-state primitives for the chat frontend: the persisted sidebar
//! preference and its provider, a generic storage-backed value, window
//! scroll tracking, and clipboard copying.
//!
//! Browser access is gated behind the `hydrate` feature; native builds (tests
//! and server rendering) see empty storage and no-op browser calls.

pub mod components;
pub mod state;
pub mod util;

/// Install the panic hook and console logger for the browser build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_client() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already installed");
    }
}
