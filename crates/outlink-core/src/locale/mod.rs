//! Display-locale resolution for the interstitial.
//!
//! Candidates are tried in order: the explicit override (the `lang`
//! query parameter) first, then the preference source's ranked tags. The
//! first candidate whose primary subtag is in the catalog wins; when
//! nothing matches, the fallback entry is returned. Resolution never
//! fails outward.

mod catalog;
mod source;

pub use catalog::{supported, LocaleEntry, DEFAULT_LANG};
pub use source::{EnvPreferences, PreferenceSource, StaticPreferences};

/// The locale chosen for one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLocale {
    pub code: &'static str,
    pub entry: &'static LocaleEntry,
}

/// Picks the display locale.
///
/// `override_tag` is the explicit request parameter and outranks the
/// ambient preferences; an unmatched override simply falls through to
/// them. `fallback` should name a catalog entry; an unknown fallback
/// degrades to [`DEFAULT_LANG`].
pub fn resolve(
    override_tag: Option<&str>,
    source: &dyn PreferenceSource,
    fallback: &str,
) -> ResolvedLocale {
    let explicit = override_tag
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    for tag in explicit.into_iter().chain(source.preferred()) {
        if let Some(primary) = primary_subtag(&tag) {
            if let Some((code, entry)) = catalog::get(&primary) {
                return ResolvedLocale { code, entry };
            }
        }
    }

    fallback_locale(fallback)
}

/// Extracts the lowercased primary subtag: `zh` from `zh-TW`, `de` from
/// `de_DE.UTF-8`. Returns None for tags with no usable leading language
/// identifier (empty, `C.UTF-8`-style values still yield `c`, which the
/// catalog simply never contains).
fn primary_subtag(tag: &str) -> Option<String> {
    let tag = tag.trim();
    // POSIX locale names carry an encoding or modifier suffix.
    let tag = tag.split(['.', '@']).next().unwrap_or(tag);
    let primary = tag.split(['-', '_']).next().unwrap_or("");
    if primary.is_empty() || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(primary.to_ascii_lowercase())
}

fn fallback_locale(code: &str) -> ResolvedLocale {
    match catalog::get(code) {
        Some((code, entry)) => ResolvedLocale { code, entry },
        None => ResolvedLocale {
            code: DEFAULT_LANG,
            entry: &catalog::ENGLISH,
        },
    }
}

#[cfg(test)]
mod tests;
