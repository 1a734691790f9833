//! Request context
//!
//! The paginator never reads ambient request state. Whatever hosts it (a web
//! handler, a CGI script, a static site generator) hands over a `RequestContext`
//! describing the current request, and the paginator reads it once at construction
//! to default the current page, the hostname and the base path.

use crate::types::UrlStyle;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Matches the page number in a path-segment style URI: `/page/12`
static PAGE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/page/(\d+)").unwrap());

/// Matches the page part of a path and everything after it
static PAGE_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/page/\d+.*").unwrap());

/// The parts of the current request the paginator cares about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Request URI: path plus optional query string (`/news/page/2?sort=asc`)
    pub uri: String,
    /// Value of the host header
    pub host: Option<String>,
    /// Decoded query parameters
    pub query: HashMap<String, String>,
    /// Whether the request came in over TLS
    pub https: bool,
}

impl RequestContext {
    /// Create a context for a request URI, decoding its query string
    pub fn new(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let query = uri
            .split_once('?')
            .map(|(_, rest)| {
                let rest = rest.split_once('#').map_or(rest, |(q, _)| q);
                url::form_urlencoded::parse(rest.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();

        Self {
            uri,
            host: None,
            query,
            https: false,
        }
    }

    /// Set the host
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Mark the request as secure
    #[must_use]
    pub fn with_https(mut self, https: bool) -> Self {
        self.https = https;
        self
    }

    /// Build a context from CGI-style process environment variables
    ///
    /// Reads `REQUEST_URI`, `HTTP_HOST`, `HTTPS` and `SERVER_PORT`.
    pub fn from_cgi_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build a context from CGI-style variables supplied by a lookup function
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let uri = lookup("REQUEST_URI").unwrap_or_else(|| "/".to_string());
        let https = match lookup("HTTPS") {
            Some(value) => value.eq_ignore_ascii_case("on") || value == "1",
            None => lookup("SERVER_PORT").is_some_and(|port| port == "443"),
        };

        let mut ctx = Self::new(uri).with_https(https);
        ctx.host = lookup("HTTP_HOST").filter(|h| !h.is_empty());
        ctx
    }

    /// `https://` or `http://`
    pub fn scheme(&self) -> &'static str {
        if self.https {
            "https://"
        } else {
            "http://"
        }
    }

    /// Path component of the URI
    pub fn path(&self) -> &str {
        let end = self.uri.find(|c| c == '?' || c == '#').unwrap_or(self.uri.len());
        &self.uri[..end]
    }

    /// Path with any `/page/<n>` tail and trailing slashes removed
    pub fn base_path(&self) -> String {
        PAGE_SUFFIX_REGEX
            .replace(self.path(), "")
            .trim_end_matches('/')
            .to_string()
    }

    /// Page number requested by this request
    ///
    /// Path-segment style reads the number after `/page/`, query style reads the
    /// `query_key` parameter. Missing values give 1; negative values are made
    /// positive. A non-numeric query value gives 0, which the paginator then
    /// clamps to the first page.
    pub fn resolve_current_page(&self, style: UrlStyle, query_key: &str) -> i64 {
        let page = match style {
            UrlStyle::PathSegment => PAGE_NUMBER_REGEX
                .captures(&self.uri)
                .and_then(|caps| caps.get(1))
                .map_or(1, |m| m.as_str().parse::<i64>().unwrap_or(i64::MAX)),
            UrlStyle::QueryParam => self
                .query
                .get(query_key)
                .map_or(1, |value| leading_int(value)),
        };

        page.saturating_abs()
    }
}

/// Parse the leading integer of a string the way loosely-typed query input is
/// usually read: `"12abc"` is 12, `"abc"` is 0. Saturates on overflow.
fn leading_int(value: &str) -> i64 {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut result: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(digit - b'0');
        result = result.saturating_mul(10).saturating_add(d);
    }

    if negative {
        -result
    } else {
        result
    }
}
