//! # blogboard-navbar
//!
//! Leptos + WASM navbar authentication widget for the blog/board frontend.
//! Replaces the hand-rolled `assets/js/auth.js` with a Rust-native component
//! that probes the user service for the current session and swaps the
//! navbar's auth links accordingly.
//!
//! The static pages carry an empty `<div id="auth-links">` mount element;
//! [`mount_navbar`] takes ownership of that element and renders the
//! [`components::navbar::Navbar`] component into it. Pages without the
//! element are left untouched.

pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Entry-point called from the WASM bundle on each page load.
///
/// Locates the `#auth-links` mount element and mounts the navbar into it.
/// A page without the element gets no navbar and no network traffic.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_navbar() {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::components::navbar::{MOUNT_ID, Navbar};
    use crate::config::ApiConfig;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
    else {
        return;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };

    leptos::mount::mount_to(element, || {
        provide_context(ApiConfig::default());
        view! { <Navbar/> }
    })
    .forget();
}
