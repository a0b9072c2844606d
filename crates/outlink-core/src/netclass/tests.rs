use super::*;

#[test]
fn loopback_ipv4_range() {
    assert!(is_private_or_internal("127.0.0.1"));
    assert!(is_private_or_internal("127.255.255.255"));
}

#[test]
fn rfc1918_ranges() {
    assert!(is_private_or_internal("10.0.0.5"));
    assert!(is_private_or_internal("10.255.255.255"));
    assert!(is_private_or_internal("192.168.0.1"));
    assert!(is_private_or_internal("192.168.255.254"));
    assert!(is_private_or_internal("172.16.0.1"));
    assert!(is_private_or_internal("172.31.255.255"));
}

#[test]
fn rfc1918_boundaries_pass() {
    assert!(!is_private_or_internal("172.15.255.255"));
    assert!(!is_private_or_internal("172.32.0.1"));
    assert!(!is_private_or_internal("11.0.0.1"));
    assert!(!is_private_or_internal("192.169.0.1"));
}

#[test]
fn ipv6_loopback_with_and_without_brackets() {
    assert!(is_private_or_internal("::1"));
    assert!(is_private_or_internal("[::1]"));
}

#[test]
fn ipv6_unique_local_fc00_prefix() {
    assert!(is_private_or_internal("fc00::1"));
    assert!(is_private_or_internal("[fc00:1234::1]"));
}

#[test]
fn fd00_half_of_unique_local_passes() {
    // Only the fc00: spelling is matched; fd00::/8 is a known gap.
    assert!(!is_private_or_internal("fd00::1"));
    assert!(!is_private_or_internal("[fd12:3456::1]"));
}

#[test]
fn localhost_names() {
    assert!(is_private_or_internal("localhost"));
    assert!(is_private_or_internal("a.localhost"));
    assert!(is_private_or_internal("LOCALHOST"));
}

#[test]
fn reserved_suffixes() {
    assert!(is_private_or_internal("a.local"));
    assert!(is_private_or_internal("a.test"));
    assert!(is_private_or_internal("a.example"));
    assert!(is_private_or_internal("a.invalid"));
    assert!(is_private_or_internal("printer.Home.LOCAL"));
}

#[test]
fn public_hosts_pass() {
    assert!(!is_private_or_internal("8.8.8.8"));
    assert!(!is_private_or_internal("example.com"));
    assert!(!is_private_or_internal("sub.example.com"));
    assert!(!is_private_or_internal("mytest.org"));
    assert!(!is_private_or_internal("localhost.example.com"));
}

#[test]
fn suffixes_must_be_label_boundaries() {
    // "notlocal.com" ends in neither ".local" nor any other suffix.
    assert!(!is_private_or_internal("notlocal.com"));
    assert!(!is_private_or_internal("xlocal"));
}

#[test]
fn malformed_ipv4_lookalikes_fall_through() {
    // Not canonical dotted-decimal, so not an IPv4 literal match; the
    // suffix checks do not match either.
    assert!(!is_private_or_internal("10.0.0"));
    assert!(!is_private_or_internal("10.0.0.0.1"));
}
