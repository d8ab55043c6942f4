use super::*;

#[test]
fn stored_tag_wins_over_navigator() {
    assert_eq!(resolve_preference(Some("de"), Some("en-US")), Locale::De);
}

#[test]
fn navigator_used_when_nothing_stored() {
    assert_eq!(resolve_preference(None, Some("de-DE")), Locale::De);
}

#[test]
fn unparseable_stored_tag_falls_through_to_navigator() {
    assert_eq!(resolve_preference(Some("klingon"), Some("de")), Locale::De);
    assert_eq!(resolve_preference(Some(""), Some("de")), Locale::De);
}

#[test]
fn nothing_usable_yields_default() {
    assert_eq!(resolve_preference(None, None), Locale::En);
    assert_eq!(resolve_preference(Some("fr"), Some("it-IT")), Locale::En);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_default_in_non_hydrate_tests() {
    assert_eq!(read_preference(), Locale::default());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn persist_is_noop_but_callable() {
    persist(Locale::De);
    persist(Locale::En);
}
