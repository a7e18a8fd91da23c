//! # tenant-dashboard
//!
//! Leptos + WASM admin dashboard for the multi-tenant content platform
//! (news, merchandise, rallies, stories, applications, tenants).
//!
//! This crate contains the session store, the auth bootstrap that resolves
//! the session from the server-held cookie on every load, the GraphQL
//! gateway, and the pages built on top of them. Browser-only code is gated
//! behind the `csr` feature; everything else is tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_helpers;

/// WASM entry point: installs logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
