//! FitLog web client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled twice: natively with `ssr` for server-side rendering inside the
//! host binary, and to WASM with `hydrate` for the browser. Network, storage
//! and clock access only exist under `hydrate`; SSR renders the pending
//! state and lets the browser resolve the session.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
