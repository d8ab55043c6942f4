//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dialog content while reading shared state from Leptos
//! context providers.

pub mod export_hint_hidden_content;
pub mod warning_icon;
