use url::Url;

/// Normalizes a seed URL for use as both the crawl entry point and the
/// session's same-site prefix
///
/// The only rewrite applied is trimming a trailing `/`, so that relative
/// hrefs can be appended directly to the prefix.
///
/// # Examples
///
/// ```
/// use topwords::url::normalize_seed;
///
/// assert_eq!(normalize_seed("http://example.com/"), "http://example.com");
/// assert_eq!(normalize_seed("http://example.com"), "http://example.com");
/// ```
pub fn normalize_seed(seed: &str) -> String {
    seed.strip_suffix('/').unwrap_or(seed).to_string()
}

/// Decides whether a discovered href belongs to the crawled site and rewrites
/// it into an absolute, comparable form
///
/// # Rules, in order
///
/// 1. Empty href: reject.
/// 2. Pure fragment (`#...`): reject.
/// 3. Absolute URL: accept unchanged only if it starts with `base_prefix`;
///    anything else is cross-site and rejected.
/// 4. Protocol-relative (`//...`): accept unchanged only if the part after
///    `//` starts with the host portion of `base_prefix`.
/// 5. Anything else is treated as path-relative and becomes
///    `base_prefix + href`.
///
/// Malformed hrefs are rejected rather than raised; a dropped link is a
/// filtering decision, not an error.
///
/// # Arguments
///
/// * `href` - The raw href attribute as found in the page
/// * `base_prefix` - The session's same-site prefix (no trailing slash)
///
/// # Returns
///
/// * `Some(String)` - The absolute link to schedule
/// * `None` - The link was rejected
pub fn resolve_href(href: &str, base_prefix: &str) -> Option<String> {
    if href.is_empty() {
        return None;
    }

    if href.starts_with('#') {
        return None;
    }

    match Url::parse(href) {
        // Absolute URL: same-site check against the full prefix
        Ok(_) => {
            if href.starts_with(base_prefix) {
                Some(href.to_string())
            } else {
                None
            }
        }

        // No scheme: protocol-relative or path-relative
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            if let Some(rest) = href.strip_prefix("//") {
                if rest.starts_with(host_prefix(base_prefix)) {
                    Some(href.to_string())
                } else {
                    None
                }
            } else {
                Some(format!("{}{}", base_prefix, href))
            }
        }

        // Malformed: drop the link
        Err(_) => None,
    }
}

/// Strips the scheme from a base prefix, leaving the host-and-path portion
/// used for protocol-relative matching
fn host_prefix(base_prefix: &str) -> &str {
    base_prefix
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(base_prefix)
}
