//! Regex-based validators for URLs, proxy addresses, and size patterns.
//!
//! Patterns are compiled once on first use and cached for the lifetime of
//! the process.

use regex::Regex;
use std::sync::OnceLock;

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(http|https)://[a-zA-Z0-9\-\.]+\.[a-zA-Z]{2,3}(/\S*)?$").unwrap()
    })
}

fn proxy_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(http|https|socks5|socks4)://([\w.-]+)(:\d+)$").unwrap())
}

fn sizes_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d+)x(\d+)\b").unwrap())
}

/// Checks whether the whole string is an http(s) URL.
///
/// # Examples
///
/// ```
/// use exec_util::validate::is_url;
///
/// assert!(is_url("https://example.com/path"));
/// assert!(!is_url("ftp://example.com"));
/// ```
pub fn is_url(s: &str) -> bool {
    url_regex().is_match(s)
}

/// Checks whether the whole string is a proxy address of the form
/// `scheme://host:port` with an http, https, socks4, or socks5 scheme.
///
/// # Examples
///
/// ```
/// use exec_util::validate::is_proxy_address;
///
/// assert!(is_proxy_address("socks5://127.0.0.1:1080"));
/// assert!(!is_proxy_address("socks5://127.0.0.1"));
/// ```
pub fn is_proxy_address(s: &str) -> bool {
    proxy_regex().is_match(s)
}

/// Finds the first `<width>x<height>` occurrence in a string and returns
/// the width and height capture groups.
///
/// # Examples
///
/// ```
/// use exec_util::validate::match_sizes;
///
/// let (w, h) = match_sizes("display 1920x1080 default").unwrap();
/// assert_eq!((w.as_str(), h.as_str()), ("1920", "1080"));
/// assert!(match_sizes("no sizes here").is_none());
/// ```
pub fn match_sizes(s: &str) -> Option<(String, String)> {
    let caps = sizes_regex().captures(s)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

/// Like [`match_sizes`], but returns the full match followed by both
/// capture groups as a vector, or an empty vector when nothing matches.
///
/// # Examples
///
/// ```
/// use exec_util::validate::match_sizes_v;
///
/// assert_eq!(match_sizes_v("1920x1080"), vec!["1920x1080", "1920", "1080"]);
/// assert!(match_sizes_v("nothing").is_empty());
/// ```
pub fn match_sizes_v(s: &str) -> Vec<String> {
    match sizes_regex().captures(s) {
        Some(caps) => caps
            .iter()
            .flatten()
            .map(|m| m.as_str().to_string())
            .collect(),
        None => Vec::new(),
    }
}
