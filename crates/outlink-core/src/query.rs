//! Query-string decoding for the page request.

/// Decoded page parameters. Both values are raw and untrusted; presence
/// and validity are judged downstream by the validator and the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Destination URL (the `url` parameter).
    pub url: Option<String>,
    /// Explicit locale override (the `lang` parameter).
    pub lang: Option<String>,
}

impl PageRequest {
    /// Decodes `url` and `lang` from a raw query string.
    ///
    /// The first occurrence of each key wins, matching
    /// `URLSearchParams.get`. A leading `?` is tolerated; unknown keys
    /// are ignored.
    pub fn from_query(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut request = PageRequest::default();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "url" if request.url.is_none() => request.url = Some(value.into_owned()),
                "lang" if request.lang.is_none() => request.lang = Some(value.into_owned()),
                _ => {}
            }
        }
        request
    }
}
