//! Pagination module
//!
//! Page-window computation and page URL building.
//!
//! # Overview
//!
//! A [`PaginationState`] holds the numbers (total, page size, current page).
//! [`compute_window`] turns it into a [`PageWindow`]: runs of visible page links
//! separated by ellipsis markers. [`LinkStyleConfig`] decides what each page's URL
//! looks like. [`Paginator`] wraps all of it together with the request-derived
//! defaults and the link texts used by renderers.

mod paginator;
mod types;
mod url;
mod window;

pub use paginator::{PaginationSummary, Paginator};
pub use types::{PageWindow, PaginationState, Segment, WindowKind, ELLIPSIS};
pub use url::{url_for, url_range, LinkStyleConfig, DEFAULT_QUERY_KEY};
pub use window::{
    compute_window, max_links, CENTER_LINK, MAX_DOTS, MIN_BEGINNING_LINKS, MIN_ENDING_LINKS,
    PRELOAD_LINKS,
};
