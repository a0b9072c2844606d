//! Private/internal network classification for hostnames.
//!
//! Purely syntactic: the decision is made from the hostname string alone,
//! with no DNS resolution anywhere in this crate. The check is a
//! blocklist — recognized private patterns are refused, everything else
//! passes.

use std::net::Ipv4Addr;

/// Reserved/special-use DNS suffixes treated as internal: `.localhost`
/// plus the IANA TLDs commonly used for internal or documentation hosts.
const RESERVED_SUFFIXES: &[&str] = &[".localhost", ".local", ".test", ".example", ".invalid"];

/// Returns true when `host` names a private, loopback, or internal
/// destination.
///
/// Matches:
/// - IPv4 literals in 127.0.0.0/8, 10.0.0.0/8, 172.16.0.0/12, or
///   192.168.0.0/16
/// - the IPv6 loopback `::1` and literals starting `fc00:`, with or
///   without URL bracket notation
/// - `localhost`, `*.localhost`, and the reserved suffixes above
///   (case-insensitive)
///
/// The unique-local match is textual and covers only the `fc00:` spelling
/// — `fd00::/8`, the other half of fc00::/7, passes through.
pub fn is_private_or_internal(host: &str) -> bool {
    let bare = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);

    if let Ok(v4) = bare.parse::<Ipv4Addr>() {
        return is_private_ipv4(v4);
    }

    if bare == "::1" || bare.starts_with("fc00:") {
        return true;
    }

    is_reserved_name(bare)
}

/// Loopback plus the RFC1918 private ranges. Other reserved IPv4 space
/// (link-local, CGNAT, ...) is not matched and passes through.
fn is_private_ipv4(addr: Ipv4Addr) -> bool {
    addr.is_loopback() || addr.is_private()
}

fn is_reserved_name(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    host == "localhost" || RESERVED_SUFFIXES.iter().any(|s| host.ends_with(s))
}

#[cfg(test)]
mod tests;
