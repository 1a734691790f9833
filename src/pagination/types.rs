//! Pagination types
//!
//! Defines the immutable pagination state and the window structure handed to
//! renderers.

use crate::error::{Error, Result};
use crate::types::{LayoutType, PageNumber, PageUrls};
use serde::Serialize;
use tracing::warn;

/// Literal marker rendered in place of skipped pages
pub const ELLIPSIS: &str = "...";

// ============================================================================
// Pagination State
// ============================================================================

/// Numeric pagination state, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    total: u64,
    per_page: u64,
    current_page: PageNumber,
    last_page: PageNumber,
    on_each_side: u64,
    layout: LayoutType,
}

impl PaginationState {
    /// Create a new pagination state
    ///
    /// `current_page` values `<= 0` become `1`. The current page is not clamped to
    /// the last page; a page past the end yields a degenerate window.
    pub fn new(
        total: u64,
        per_page: u64,
        current_page: i64,
        on_each_side: u64,
        layout: LayoutType,
    ) -> Result<Self> {
        if per_page == 0 {
            return Err(Error::invalid_value("perPage", "must be a positive integer"));
        }

        let last_page = total.div_ceil(per_page);
        let current_page = if current_page <= 0 {
            1
        } else {
            current_page as PageNumber
        };

        if last_page > 0 && current_page > last_page {
            warn!(current_page, last_page, "current page is past the last page");
        }

        Ok(Self {
            total,
            per_page,
            current_page,
            last_page,
            on_each_side,
            layout,
        })
    }

    /// Total number of items before slicing
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of items shown per page
    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// The page being viewed
    pub fn current_page(&self) -> PageNumber {
        self.current_page
    }

    /// The last available page (0 when there are no items)
    pub fn last_page(&self) -> PageNumber {
        self.last_page
    }

    /// Number of links on each side of the current page
    pub fn on_each_side(&self) -> u64 {
        self.on_each_side
    }

    /// Layout the state will be rendered with
    pub fn layout(&self) -> LayoutType {
        self.layout
    }

    /// Determine if there are more pages after the current one
    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.last_page
    }

    /// Determine if the current page is the first one
    pub fn on_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// Determine if there are enough items to split into multiple pages
    pub fn has_pages(&self) -> bool {
        !(self.current_page == 1 && !self.has_more_pages())
    }

    /// Page after the current one, if any
    pub fn next_page(&self) -> Option<PageNumber> {
        self.has_more_pages().then(|| self.current_page + 1)
    }

    /// Page before the current one, if any
    pub fn previous_page(&self) -> Option<PageNumber> {
        (!self.on_first_page()).then(|| self.current_page - 1)
    }
}

// ============================================================================
// Page Window
// ============================================================================

/// One piece of a page window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "pages", rename_all = "snake_case")]
pub enum Segment {
    /// Contiguous run of visible pages
    Links(PageUrls),
    /// Skipped pages
    Ellipsis,
}

impl Segment {
    /// Check if this is an ellipsis marker
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }

    /// Page links of this segment, if it is a link run
    pub fn links(&self) -> Option<&PageUrls> {
        match self {
            Self::Links(urls) => Some(urls),
            Self::Ellipsis => None,
        }
    }

    /// First and last page of a link run
    pub fn bounds(&self) -> Option<(PageNumber, PageNumber)> {
        let urls = self.links()?;
        let first = *urls.keys().next()?;
        let last = *urls.keys().next_back()?;
        Some((first, last))
    }
}

/// Which of the window shapes was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// Every page in one segment
    Full,
    /// No page links at all
    Empty,
    /// `[1..n] ... [last]`
    CloseToBeginning,
    /// `[1] ... [n..last]`
    CloseToEnding,
    /// `[1] ... [cur-k..cur+k] ... [last]`
    Middle,
}

/// Ordered sequence of segments describing the visible pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    kind: WindowKind,
    segments: Vec<Segment>,
}

impl PageWindow {
    pub(crate) fn new(kind: WindowKind, segments: Vec<Segment>) -> Self {
        Self { kind, segments }
    }

    /// Shape of the window
    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    /// Segments in display order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consume the window, returning its segments
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the window has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Every visible page number, in order
    pub fn pages(&self) -> impl Iterator<Item = PageNumber> + '_ {
        self.segments
            .iter()
            .filter_map(Segment::links)
            .flat_map(|urls| urls.keys().copied())
    }
}
