//! Common types used throughout pagelinks
//!
//! This module contains the closed enumerations for layouts and link styles
//! plus the type aliases shared between the window algorithm and renderers.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// Page number type. Page numbers are 1-based.
pub type PageNumber = u64;

/// Ordered mapping from page number to URL
pub type PageUrls = BTreeMap<PageNumber, String>;

// ============================================================================
// Layout Type
// ============================================================================

/// Presentational layout of the pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    /// Truncated list with ellipsis markers
    #[default]
    Default,
    /// Every page, no truncation
    Full,
    /// Dropdown menu of every page
    Menu,
    /// Previous/next controls only
    Simple,
}

impl LayoutType {
    /// All layouts, in declaration order
    pub const ALL: [LayoutType; 4] = [Self::Default, Self::Full, Self::Menu, Self::Simple];

    /// Canonical name of the layout
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Full => "full",
            Self::Menu => "menu",
            Self::Simple => "simple",
        }
    }

    /// Whether this layout always lists every page
    pub fn lists_every_page(&self) -> bool {
        matches!(self, Self::Full | Self::Menu)
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "default" => Ok(Self::Default),
            "full" => Ok(Self::Full),
            "menu" => Ok(Self::Menu),
            "simple" => Ok(Self::Simple),
            other => Err(Error::invalid_value(
                "type",
                format!(
                    "should be one of 'default', 'full', 'menu', 'simple', got `{other}`"
                ),
            )),
        }
    }
}

// ============================================================================
// URL Style
// ============================================================================

/// How the page number is encoded in generated URLs
///
/// - path segment: `example.com/news/page/10`
/// - query param: `example.com/news?page=10`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UrlStyle {
    #[default]
    #[serde(alias = "pretty")]
    PathSegment,
    #[serde(alias = "queryString")]
    QueryParam,
}

impl UrlStyle {
    /// Canonical name of the style
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PathSegment => "pathSegment",
            Self::QueryParam => "queryParam",
        }
    }
}

impl fmt::Display for UrlStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrlStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pathSegment" | "pretty" => Ok(Self::PathSegment),
            "queryParam" | "queryString" => Ok(Self::QueryParam),
            other => Err(Error::invalid_value(
                "urlStyle",
                format!("should be one of 'pathSegment', 'queryParam', got `{other}`"),
            )),
        }
    }
}
