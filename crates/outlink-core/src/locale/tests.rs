use super::*;

fn prefs(tags: &[&str]) -> StaticPreferences {
    StaticPreferences(tags.iter().map(|t| t.to_string()).collect())
}

#[test]
fn override_outranks_preferences() {
    let resolved = resolve(Some("zh"), &prefs(&["en-US"]), "en");
    assert_eq!(resolved.code, "zh");
}

#[test]
fn override_with_region_uses_primary_subtag() {
    let resolved = resolve(Some("zh-TW"), &prefs(&[]), "en");
    assert_eq!(resolved.code, "zh");
}

#[test]
fn unmatched_override_falls_through_to_preferences() {
    let resolved = resolve(Some("ko"), &prefs(&["de-AT"]), "en");
    assert_eq!(resolved.code, "de");
}

#[test]
fn first_matching_preference_wins() {
    let resolved = resolve(None, &prefs(&["fr-FR", "zh-TW", "en-US"]), "en");
    assert_eq!(resolved.code, "zh");
}

#[test]
fn posix_locale_names_match() {
    let resolved = resolve(None, &prefs(&["zh_TW.UTF-8"]), "en");
    assert_eq!(resolved.code, "zh");

    let resolved = resolve(None, &prefs(&["de_DE@euro"]), "en");
    assert_eq!(resolved.code, "de");
}

#[test]
fn case_is_normalized() {
    let resolved = resolve(Some("ZH-TW"), &prefs(&[]), "en");
    assert_eq!(resolved.code, "zh");
}

#[test]
fn no_match_yields_fallback() {
    let resolved = resolve(None, &prefs(&["fr-FR", "ko-KR"]), "en");
    assert_eq!(resolved.code, "en");
    assert_eq!(resolved.entry.action, "Continue");
}

#[test]
fn empty_everything_yields_fallback() {
    let resolved = resolve(None, &prefs(&[]), "en");
    assert_eq!(resolved.code, "en");
}

#[test]
fn configured_fallback_is_honored() {
    let resolved = resolve(None, &prefs(&["fr-FR"]), "zh");
    assert_eq!(resolved.code, "zh");
}

#[test]
fn unknown_fallback_degrades_to_default() {
    let resolved = resolve(None, &prefs(&[]), "tlh");
    assert_eq!(resolved.code, DEFAULT_LANG);
}

#[test]
fn garbage_candidates_are_skipped() {
    let resolved = resolve(Some(""), &prefs(&["", "  ", "123", "C.UTF-8", "zh"]), "en");
    assert_eq!(resolved.code, "zh");
}

#[test]
fn catalog_lists_all_languages() {
    let codes: Vec<&str> = supported().map(|(c, _)| c).collect();
    assert_eq!(codes, ["en", "zh", "de"]);
}
