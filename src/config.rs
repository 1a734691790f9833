//! Paginator options
//!
//! A typed options bag with documented defaults. Options can be built in code
//! with the `with_*` methods or loaded from a YAML/JSON document:
//!
//! ```yaml
//! type: default
//! onEachSide: 2
//! urlStyle: queryParam
//! queryKeyName: paged
//! suffix: "#results"
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::pagination::DEFAULT_QUERY_KEY;
use crate::types::{LayoutType, UrlStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of links on each side of the current page
pub const DEFAULT_ON_EACH_SIDE: i64 = 3;

/// Default next page link text
pub const DEFAULT_NEXT_PAGE_TEXT: &str = "»";

/// Default previous page link text
pub const DEFAULT_PREV_PAGE_TEXT: &str = "«";

/// Options accepted by [`crate::Paginator::new`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PaginatorOptions {
    /// Links on each side of the current page. Negative values are made positive.
    pub on_each_side: i64,

    /// Layout to render
    #[serde(rename = "type")]
    pub layout: LayoutType,

    /// How page numbers appear in URLs
    pub url_style: UrlStyle,

    /// Next page link text
    pub next_page_text: String,

    /// Previous page link text
    pub prev_page_text: String,

    /// Base path override. Derived from the request when absent.
    pub path: Option<String>,

    /// Appended to every generated URL
    pub suffix: String,

    /// Hostname override. Taken from the request when absent.
    pub hostname: Option<String>,

    /// Query parameter holding the page number (query-param style)
    pub query_key_name: String,
}

impl Default for PaginatorOptions {
    fn default() -> Self {
        Self {
            on_each_side: DEFAULT_ON_EACH_SIDE,
            layout: LayoutType::default(),
            url_style: UrlStyle::default(),
            next_page_text: DEFAULT_NEXT_PAGE_TEXT.to_string(),
            prev_page_text: DEFAULT_PREV_PAGE_TEXT.to_string(),
            path: None,
            suffix: String::new(),
            hostname: None,
            query_key_name: DEFAULT_QUERY_KEY.to_string(),
        }
    }
}

impl PaginatorOptions {
    /// Create options with every default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set links on each side
    #[must_use]
    pub fn with_on_each_side(mut self, on_each_side: i64) -> Self {
        self.on_each_side = on_each_side;
        self
    }

    /// Set layout
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutType) -> Self {
        self.layout = layout;
        self
    }

    /// Set URL style
    #[must_use]
    pub fn with_url_style(mut self, url_style: UrlStyle) -> Self {
        self.url_style = url_style;
        self
    }

    /// Set next/previous link texts
    #[must_use]
    pub fn with_texts(mut self, prev: impl Into<String>, next: impl Into<String>) -> Self {
        self.prev_page_text = prev.into();
        self.next_page_text = next.into();
        self
    }

    /// Set base path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set URL suffix
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set hostname
    #[must_use]
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Set query parameter name
    #[must_use]
    pub fn with_query_key_name(mut self, key: impl Into<String>) -> Self {
        self.query_key_name = key.into();
        self
    }

    /// Links on each side, made non-negative
    pub fn normalized_on_each_side(&self) -> u64 {
        self.on_each_side.unsigned_abs()
    }

    /// Explicit base path, normalised to a single leading slash and no trailing one
    pub fn normalized_path(&self) -> Option<String> {
        let raw = self.path.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        let path = raw.trim_matches('/');
        if path.is_empty() {
            Some(String::new())
        } else {
            Some(format!("/{path}"))
        }
    }

    /// Explicit hostname, trimmed; blank means none
    pub fn normalized_hostname(&self) -> Option<String> {
        self.hostname
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(str::to_string)
    }

    /// Check values serde cannot
    ///
    /// The query key only ends up in URLs with the query-param style, so it is
    /// only checked then.
    pub fn validate(&self) -> Result<()> {
        if self.url_style != UrlStyle::QueryParam {
            return Ok(());
        }
        if self.query_key_name.trim().is_empty() {
            return Err(Error::invalid_value(
                "queryKeyName",
                "query parameter name cannot be empty",
            ));
        }
        if self
            .query_key_name
            .contains(|c: char| matches!(c, '&' | '=' | '?' | '#') || c.is_whitespace())
        {
            return Err(Error::invalid_value(
                "queryKeyName",
                format!("`{}` is not a valid query parameter name", self.query_key_name),
            ));
        }
        Ok(())
    }
}

/// Load options from a YAML or JSON file
pub fn load_options(path: impl AsRef<Path>) -> Result<PaginatorOptions> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file '{}'", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let options = if is_json {
        options_from_json_str(&content)?
    } else {
        options_from_str(&content)?
    };
    tracing::debug!("Loaded paginator options from {}", path.display());
    Ok(options)
}

/// Parse options from a YAML string
pub fn options_from_str(yaml: &str) -> Result<PaginatorOptions> {
    if yaml.trim().is_empty() {
        return Ok(PaginatorOptions::default());
    }
    let options: PaginatorOptions = serde_yaml::from_str(yaml)?;
    options.validate()?;
    Ok(options)
}

/// Parse options from a JSON string
pub fn options_from_json_str(json: &str) -> Result<PaginatorOptions> {
    let options: PaginatorOptions = serde_json::from_str(json)?;
    options.validate()?;
    Ok(options)
}
