//! # client
//!
//! Leptos + WASM frontend for the colour-element editor.
//!
//! This crate contains the root component, the panel and element views,
//! parameter widgets, and the browser plumbing (keyboard, clipboard, file
//! drop, download, pointer lock). Every editing rule lives in the `canvas`
//! crate; components here gather DOM input, call into it, and carry out the
//! actions it returns.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
