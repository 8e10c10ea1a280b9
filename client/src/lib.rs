//! # client
//!
//! Leptos + WASM frontend for the token research dashboard.
//!
//! This crate contains pages, components, per-view state containers, and the
//! REST helpers that talk to the server's same-origin `/api/*` surface. Data
//! shaping (detail rows, summary previews, number and date formatting) lives
//! in the `research` crate so it renders identically under SSR and hydration.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
