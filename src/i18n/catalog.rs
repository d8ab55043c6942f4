//! Static message tables.

use super::{HINT_HIDDEN_COLUMNS, HINT_HIDDEN_NOTES, Locale};

const EN: &[(&str, &str)] = &[
    (HINT_HIDDEN_COLUMNS, "The following columns are hidden and will not be exported:"),
    (HINT_HIDDEN_NOTES, "Notes of other participants are hidden and will not be exported."),
];

const DE: &[(&str, &str)] = &[
    (HINT_HIDDEN_COLUMNS, "Die folgenden Spalten sind ausgeblendet und werden nicht exportiert:"),
    (HINT_HIDDEN_NOTES, "Notizen anderer Teilnehmender sind ausgeblendet und werden nicht exportiert."),
];

fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::De => DE,
    }
}

pub(super) fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    table(locale).iter().find(|(k, _)| *k == key).map(|(_, text)| *text)
}
