// src/utils/url.rs

//! URL-based posting id recovery.

/// Numeric prefix LinkedIn uses on entity URNs.
pub const URN_PREFIX: &str = "urn:li:jobPosting:";

/// Extract a stable posting identifier from a listing URL.
///
/// Listing links end their path with the numeric posting id
/// (`.../jobs/view/senior-engineer-at-acme-4012345678`), so the digits of
/// the last path segment are taken as the id.
pub fn extract_posting_id(link: &str) -> Option<String> {
    let parsed = url::Url::parse(link).ok()?;
    let last = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;

    let digits: String = last
        .rsplit('-')
        .next()
        .unwrap_or(last)
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() { None } else { Some(digits) }
}
