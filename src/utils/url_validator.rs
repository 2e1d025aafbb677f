//! Submitted URL validation.
//!
//! A candidate string is admitted when it starts with an `http` or
//! `https` URL: scheme, optional `www.`, a host of allowed URL
//! characters, a dot-separated domain suffix of 1-6 alphanumerics, and
//! an optional path/query/fragment tail from a restricted character set.
//!
//! Matching is anchored at the start only. Trailing characters outside
//! the allowed set after a valid prefix do not cause rejection; the
//! stored URL is the submitted string verbatim either way.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled pattern for URL validation.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*",
    )
    .expect("URL validation pattern must compile")
});

/// Returns whether `candidate` is an acceptable long URL.
///
/// Pure predicate, no side effects. Empty strings are rejected by the
/// mandatory scheme and host portions of the pattern.
///
/// # Examples
///
/// ```
/// use shortkey::utils::url_validator::is_valid_url;
///
/// assert!(is_valid_url("https://example.com"));
/// assert!(is_valid_url("http://www.example.com/path?q=1"));
/// assert!(!is_valid_url(""));
/// assert!(!is_valid_url("not a url"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    URL_REGEX.is_match(candidate)
}
