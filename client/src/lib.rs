//! # client
//!
//! Leptos + WASM frontend for the Savora restaurant browser. Mobile-first
//! flow: phone number in, OTP verification, restaurant list, and a detail
//! page where the brand logo is dragged over the restaurant photo and the
//! composite is exported as a PNG.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the Savora backend. It integrates with the `compositor` crate
//! for drag geometry and canvas compositing.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
