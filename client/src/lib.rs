//! # catalog-client
//!
//! Leptos + WASM frontend for the product catalog.
//!
//! The crate renders the product list, submits new products through a form,
//! and shows transient status messages. It is compiled twice: with `hydrate`
//! for the browser bundle and with `ssr` for the server that renders the shell.

pub mod app;
pub mod catalog;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point called by the generated WASM bootstrap.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
