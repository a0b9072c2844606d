//! Interstitial composition and render sinks.
//!
//! [`Interstitial::build`] runs validation and locale resolution
//! independently and combines them at the end. A rejection still carries
//! enough to render a generic failure page; the raw untrusted input never
//! reaches any sink.

mod html;

use serde::Serialize;

use crate::locale::{self, PreferenceSource, ResolvedLocale};
use crate::query::PageRequest;
use crate::validate::{self, RejectReason, SafeUrl};

/// Relation attributes on the confirmation link: the opened destination
/// must not obtain an opener handle or referrer details.
pub const LINK_REL: &str = "noopener noreferrer";

/// Render model for a confirmed exit page.
#[derive(Debug, Clone, Serialize)]
pub struct Interstitial {
    /// Canonical validated destination.
    pub href: String,
    /// Resolved display language code.
    pub lang: &'static str,
    pub title: &'static str,
    pub warning: &'static str,
    pub action: &'static str,
}

/// A refused page request, ready to render as a generic failure.
///
/// The reason is diagnostic (logged, serialized for scripting); the
/// human-facing sinks deliberately collapse everything except a missing
/// parameter into one generic message.
#[derive(Debug, Clone, Serialize)]
pub struct Rejection {
    reason: RejectReason,
}

impl Interstitial {
    /// Runs the full pipeline for one page request.
    pub fn build(
        request: &PageRequest,
        source: &dyn PreferenceSource,
        fallback_lang: &str,
    ) -> Result<Self, Rejection> {
        let resolved = locale::resolve(request.lang.as_deref(), source, fallback_lang);

        let verdict = match request.url.as_deref() {
            None => Err(RejectReason::MissingInput),
            Some(raw) => validate::validate(raw),
        };

        match verdict {
            Ok(safe) => Ok(Self::from_parts(safe, resolved)),
            Err(reason) => Err(Rejection { reason }),
        }
    }

    fn from_parts(safe: SafeUrl, resolved: ResolvedLocale) -> Self {
        Self {
            href: safe.into_string(),
            lang: resolved.code,
            title: resolved.entry.title,
            warning: resolved.entry.warning,
            action: resolved.entry.action,
        }
    }

    /// Terminal-friendly rendering.
    pub fn to_text(&self) -> String {
        format!(
            "{}\n\n{}\n\n  {}  [{}]\n",
            self.title, self.warning, self.href, self.action
        )
    }

    /// Complete standalone HTML page with an isolated confirmation link.
    pub fn to_html(&self) -> String {
        html::confirm_page(self)
    }

    /// JSON for scripting the CLI.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Rejection {
    pub fn reason(&self) -> RejectReason {
        self.reason
    }

    fn message(&self) -> &'static str {
        match self.reason {
            RejectReason::MissingInput => "Missing url parameter.",
            _ => "Invalid destination link.",
        }
    }

    pub fn to_text(&self) -> String {
        format!("{}\n", self.message())
    }

    pub fn to_html(&self) -> String {
        html::failure_page(self.message())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
