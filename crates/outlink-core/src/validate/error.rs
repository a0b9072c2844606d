//! Rejection reasons for destination validation.

use serde::Serialize;
use thiserror::Error;

/// Why a destination URL was refused.
///
/// All variants are terminal: there is no retry and no auto-correction,
/// and the caller must never fall back to the raw input. The variant is
/// diagnostic; downstream presentation may collapse all of them into a
/// single generic failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// No destination was supplied, or it was empty.
    #[error("missing url parameter")]
    MissingInput,
    /// The string did not parse as an absolute URL.
    #[error("malformed url")]
    MalformedUrl,
    /// Scheme outside the http/https allow-list (javascript:, data:, file:, ...).
    #[error("forbidden protocol")]
    ForbiddenProtocol,
    /// The parsed URL carries no hostname.
    #[error("missing hostname")]
    MissingHostname,
    /// The hostname names a private, loopback, or internal network.
    #[error("forbidden destination")]
    ForbiddenDestination,
}
