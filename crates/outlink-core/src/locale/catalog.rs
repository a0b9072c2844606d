//! Fixed catalog of interstitial strings.
//!
//! Built at compile time and never mutated; keyed by primary language
//! subtag.

/// Localized strings for one display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleEntry {
    /// Page heading.
    pub title: &'static str,
    /// Warning body shown above the destination.
    pub warning: &'static str,
    /// Label on the confirmation link.
    pub action: &'static str,
}

/// Language used when no candidate matches and the configured fallback is
/// itself unknown.
pub const DEFAULT_LANG: &str = "en";

pub(super) const ENGLISH: LocaleEntry = LocaleEntry {
    title: "Leaving This Site",
    warning: "You are about to visit an external website. The destination is not \
              controlled by us. Please make sure the link is safe before continuing.",
    action: "Continue",
};

const CATALOG: &[(&str, LocaleEntry)] = &[
    ("en", ENGLISH),
    (
        "zh",
        LocaleEntry {
            title: "即将离开本站",
            warning: "你即将访问一个外部网站，该站点不受本站控制。请确认链接安全后再继续访问。",
            action: "继续访问",
        },
    ),
    (
        "de",
        LocaleEntry {
            title: "Sie verlassen diese Seite",
            warning: "Sie sind dabei, eine externe Website zu besuchen. Das Ziel wird \
                      nicht von uns betrieben. Bitte prüfen Sie den Link, bevor Sie \
                      fortfahren.",
            action: "Weiter",
        },
    ),
];

/// Looks up a catalog entry by exact (lowercase) code.
pub(super) fn get(code: &str) -> Option<(&'static str, &'static LocaleEntry)> {
    CATALOG.iter().find(|(c, _)| *c == code).map(|(c, e)| (*c, e))
}

/// All supported languages, in catalog order.
pub fn supported() -> impl Iterator<Item = (&'static str, &'static LocaleEntry)> {
    CATALOG.iter().map(|(c, e)| (*c, e))
}
