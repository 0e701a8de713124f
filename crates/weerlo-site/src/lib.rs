//! Weerlo Services Marketing Site
//!
//! A Leptos site rendered on the server with axum and hydrated in the
//! browser.

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod reveal;
pub mod scroll;
pub mod toast;

#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
