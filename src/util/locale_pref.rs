//! UI language preference.
//!
//! Reads the user's stored language from `localStorage`, falling back to
//! `navigator.language`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! return the default locale to keep server rendering deterministic.

#[cfg(test)]
#[path = "locale_pref_test.rs"]
mod locale_pref_test;

use crate::i18n::Locale;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "retro_export_locale";

/// Pick the first parseable tag of `stored` then `navigator`, else the default.
pub fn resolve_preference(stored: Option<&str>, navigator: Option<&str>) -> Locale {
    for tag in [stored, navigator].into_iter().flatten() {
        match tag.parse::<Locale>() {
            Ok(locale) => return locale,
            Err(e) => log::debug!("ignoring locale tag {tag:?}: {e}"),
        }
    }
    Locale::default()
}

/// Read the language preference from the browser.
pub fn read_preference() -> Locale {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Locale::default();
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        let navigator = window.navigator().language();

        resolve_preference(stored.as_deref(), navigator.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        resolve_preference(None, None)
    }
}

/// Store the chosen language in localStorage.
pub fn persist(locale: Locale) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(STORAGE_KEY, locale.tag()).is_err() {
                    log::debug!("failed to persist locale {locale}");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locale;
    }
}
