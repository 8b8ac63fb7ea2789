//! DysonV2 assistant chat client.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single-page chat UI over one HTTP exchange: the user's message plus the
//! prior conversation goes to `POST {API_URL}/chat`, and the generated reply
//! (markdown, optionally with source citations) is appended to the thread.
//! No persistence, no streaming, one request in flight at a time.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
