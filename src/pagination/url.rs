//! Page URL building
//!
//! Two link conventions are supported:
//! - path segment: `https://example.com/news/page/3`
//! - query param: `https://example.com/news?page=3`
//!
//! Page 1 never carries a page indicator so it always maps to the canonical root URL.

use crate::types::{PageNumber, PageUrls, UrlStyle};
use serde::Serialize;

/// Default query parameter holding the page number
pub const DEFAULT_QUERY_KEY: &str = "page";

/// How page URLs are built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkStyleConfig {
    /// Scheme, host and path every page URL starts with
    pub base_url: String,
    /// Link style
    pub style: UrlStyle,
    /// Appended to the very end of every URL (fragment or extra query string)
    pub suffix: String,
    /// Query parameter name used by the query-param style
    pub query_key_name: String,
}

impl Default for LinkStyleConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            style: UrlStyle::default(),
            suffix: String::new(),
            query_key_name: DEFAULT_QUERY_KEY.to_string(),
        }
    }
}

impl LinkStyleConfig {
    /// Create a path-segment config for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set link style
    #[must_use]
    pub fn with_style(mut self, style: UrlStyle) -> Self {
        self.style = style;
        self
    }

    /// Set URL suffix
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the query parameter name
    #[must_use]
    pub fn with_query_key_name(mut self, key: impl Into<String>) -> Self {
        self.query_key_name = key.into();
        self
    }

    /// URL of a single page
    pub fn url_for(&self, page: PageNumber) -> String {
        url_for(page, self)
    }

    /// URLs of the pages `from..=to`
    pub fn url_range(&self, from: PageNumber, to: PageNumber) -> PageUrls {
        url_range(from, to, self)
    }
}

/// Build the URL of a single page
pub fn url_for(page: PageNumber, config: &LinkStyleConfig) -> String {
    let LinkStyleConfig {
        base_url,
        style,
        suffix,
        query_key_name,
    } = config;

    if page == 1 {
        return format!("{base_url}{suffix}");
    }

    match style {
        UrlStyle::PathSegment => format!("{base_url}/page/{page}{suffix}"),
        UrlStyle::QueryParam => format!("{base_url}?{query_key_name}={page}{suffix}"),
    }
}

/// Build the ordered URL mapping for the pages `from..=to`
///
/// `from > to` yields an empty mapping.
pub fn url_range(from: PageNumber, to: PageNumber, config: &LinkStyleConfig) -> PageUrls {
    (from..=to).map(|page| (page, url_for(page, config))).collect()
}
