//! Message lookup for UI strings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components look strings up by fixed dotted keys through the `I18n`
//! context. Lookup never fails: a missing entry falls back to English and
//! then to the key itself.


mod catalog;

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

/// Shown above the hidden-column list in the export dialog.
pub const HINT_HIDDEN_COLUMNS: &str = "ExportBoardOption.hintHiddenColumns";
/// Shown when notes of other participants are excluded from the export.
pub const HINT_HIDDEN_NOTES: &str = "ExportBoardOption.hintHiddenNotes";

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    /// Canonical language tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("empty locale tag")]
    Empty,
    #[error("unsupported locale: {0}")]
    Unsupported(String),
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Accepts `en`, `en-US`, `de_AT` and similar; only the primary subtag matters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LocaleError::Empty);
        }
        let primary = trimmed.split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Self::En),
            "de" => Ok(Self::De),
            _ => Err(LocaleError::Unsupported(trimmed.to_owned())),
        }
    }
}

/// Resolve `key` for `locale`, falling back to English, then to the key.
pub fn translate(locale: Locale, key: &str) -> &str {
    if let Some(text) = catalog::lookup(locale, key) {
        return text;
    }
    if locale != Locale::En {
        if let Some(text) = catalog::lookup(Locale::En, key) {
            log::warn!("missing {locale} translation for {key}, using en");
            return text;
        }
    }
    log::warn!("missing translation for {key}");
    key
}

/// Context handle for translated strings.
#[derive(Clone, Copy, Debug)]
pub struct I18n {
    locale: RwSignal<Locale>,
}

impl I18n {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale: RwSignal::new(locale),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
    }

    /// Translate `key` in the current locale; tracks the locale signal.
    pub fn t(&self, key: &str) -> String {
        translate(self.locale.get(), key).to_owned()
    }
}
