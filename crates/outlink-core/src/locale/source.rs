//! Ambient language-preference sources.
//!
//! The resolver only depends on [`PreferenceSource`], so it can be driven
//! by the real environment or by synthetic lists in tests.

/// Ordered language preferences, most preferred first.
pub trait PreferenceSource {
    /// Ranked raw language tags. Tags may be BCP 47 (`zh-TW`) or POSIX
    /// locale names (`zh_TW.UTF-8`); unusable entries are skipped by the
    /// resolver, so implementations do not need to validate.
    fn preferred(&self) -> Vec<String>;
}

/// Preferences read from the process environment: the colon-separated
/// `LANGUAGE` priority list, then `LC_ALL`, `LC_MESSAGES`, and `LANG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvPreferences;

impl PreferenceSource for EnvPreferences {
    fn preferred(&self) -> Vec<String> {
        let mut tags = Vec::new();
        if let Ok(list) = std::env::var("LANGUAGE") {
            tags.extend(
                list.split(':')
                    .filter(|t| !t.is_empty())
                    .map(str::to_string),
            );
        }
        for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
            if let Ok(tag) = std::env::var(var) {
                if !tag.is_empty() {
                    tags.push(tag);
                }
            }
        }
        tags
    }
}

/// A fixed preference list, for tests and for callers that already hold
/// the ranked tags (e.g. a `--prefer` flag).
#[derive(Debug, Clone, Default)]
pub struct StaticPreferences(pub Vec<String>);

impl StaticPreferences {
    /// Builds from a comma-separated list such as `"fr-FR,zh-TW"`.
    pub fn from_list(tags: &str) -> Self {
        Self(
            tags.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

impl PreferenceSource for StaticPreferences {
    fn preferred(&self) -> Vec<String> {
        self.0.clone()
    }
}
