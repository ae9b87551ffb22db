//! # storefront-cart
//!
//! Leptos + WASM shopping cart for the storefront page.
//!
//! The cart mapping and its persistence live in [`state`]; [`components`]
//! render it through an injected [`i18n::Localizer`]. Checkout hands a
//! plain-text order summary to a WhatsApp link instead of a server.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod i18n;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and mount the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
