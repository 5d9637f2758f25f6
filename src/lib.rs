//! # liveboard
//!
//! Leptos + WASM client for a collaborative whiteboard: a canvas editor
//! surface layered with realtime multi-user presence (cursors, chat,
//! reactions) synchronized through a hosted presence/storage service.
//!
//! This crate contains pages, components, application state, network types,
//! and the websocket room client. Shape geometry, hit-testing, and undo
//! history belong to the rendering library reached through `scene`.

pub mod app;
pub mod components;
pub mod consts;
pub mod net;
pub mod pages;
pub mod scene;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
