//! # marketplace-client
//!
//! Leptos + WASM front end for the marketplace application: browse and
//! search advertisements, view listing and user-profile details, and
//! manage your own listings. A presentation and client-state layer over
//! a remote REST API; persistence and business rules live server-side.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
