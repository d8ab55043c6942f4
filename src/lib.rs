//! # retro-export-hint
//!
//! Leptos + WASM board export options for a collaborative retrospective
//! board. Warns before exporting when columns are hidden or when notes of
//! other participants are not shown.
//!
//! State lives in small context slices (`state`), the hint itself is a pure
//! selector (`state::export_hint`) rendered by
//! `components::export_hint_hidden_content`, and strings come from `i18n`.

pub mod app;
pub mod components;
pub mod i18n;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
