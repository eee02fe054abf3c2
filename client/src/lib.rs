//! # client
//!
//! Leptos + WASM front-end for the Anvaya scratch-card marketplace.
//!
//! This crate contains pages, components, client-side state, the REST client
//! for the listings and brand-search services, and the browser storage and
//! timer abstractions the views depend on. The root `anvaya` binary renders
//! it on the server; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
