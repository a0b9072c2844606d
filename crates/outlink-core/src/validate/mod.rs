//! Destination URL validation.
//!
//! Turns an untrusted string into a [`SafeUrl`] or a [`RejectReason`].
//! The checks run in a fixed order and fail closed: presence, parse,
//! scheme allow-list, hostname presence, network classification. The
//! accepted value is the parser's canonical serialization, never the raw
//! input, so the rendered link is always the normalized form.

mod error;

use url::Url;

use crate::netclass;

pub use error::RejectReason;

/// Schemes an exit link may use. Compared exactly against the parsed
/// scheme, which the URL parser has already lowercased.
const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// A destination URL that has passed validation.
///
/// Only [`validate`] constructs one, so holding a `SafeUrl` is proof the
/// policy ran. The inner string is the canonical serialization of the
/// parsed URL (percent-encoding normalized, default port dropped,
/// internationalized hosts in punycode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeUrl(String);

impl SafeUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SafeUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates an untrusted destination string.
///
/// Each step short-circuits to its rejection reason; parse failures from
/// the URL parser are converted to [`RejectReason::MalformedUrl`] here
/// rather than propagated. No network access of any kind.
pub fn validate(raw: &str) -> Result<SafeUrl, RejectReason> {
    if raw.is_empty() {
        return Err(RejectReason::MissingInput);
    }

    let parsed = Url::parse(raw).map_err(|e| {
        tracing::debug!("destination failed to parse: {e}");
        RejectReason::MalformedUrl
    })?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(RejectReason::ForbiddenProtocol);
    }

    // For http/https the parser already refuses empty authorities, so
    // this is a defensive invariant rather than a reachable branch.
    let host = match parsed.host_str() {
        Some(h) if !h.is_empty() => h,
        _ => return Err(RejectReason::MissingHostname),
    };

    if netclass::is_private_or_internal(host) {
        return Err(RejectReason::ForbiddenDestination);
    }

    Ok(SafeUrl(parsed.to_string()))
}
