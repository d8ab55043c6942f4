//! Inline warning glyph.

use leptos::prelude::*;

/// Triangle-with-exclamation icon drawn with `currentColor`.
#[component]
pub fn WarningIcon(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" aria-hidden="true" fill="none" stroke="currentColor" stroke-width="2">
            <path d="M12 3 L22 20 H2 Z" stroke-linejoin="round"></path>
            <path d="M12 9 V14" stroke-linecap="round"></path>
            <circle cx="12" cy="17" r="1" fill="currentColor" stroke="none"></circle>
        </svg>
    }
}
