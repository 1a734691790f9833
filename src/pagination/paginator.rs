//! Paginator facade
//!
//! Ties the numeric state, the link configuration and the link texts together,
//! and hands renderers everything they need.

use super::types::{PageWindow, PaginationState};
use super::url::LinkStyleConfig;
use super::window::compute_window;
use crate::config::{PaginatorOptions, DEFAULT_NEXT_PAGE_TEXT, DEFAULT_PREV_PAGE_TEXT};
use crate::error::Result;
use crate::render::{renderer_for, PageLinks, RenderData, Renderer};
use crate::request::RequestContext;
use crate::types::{LayoutType, PageNumber, PageUrls, UrlStyle};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Pagination over a collection of `total` items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    state: PaginationState,
    link: LinkStyleConfig,
    next_page_text: String,
    prev_page_text: String,
}

impl Paginator {
    /// Create a paginator
    ///
    /// When `current_page` is `None` it is read from the request. Missing hostname
    /// and path options are also taken from the request; without any hostname the
    /// generated URLs are relative to the site root.
    pub fn new(
        total: u64,
        per_page: u64,
        current_page: Option<i64>,
        options: &PaginatorOptions,
        request: &RequestContext,
    ) -> Result<Self> {
        options.validate()?;

        let hostname = options.normalized_hostname().or_else(|| {
            request
                .host
                .as_deref()
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string)
        });
        let path = options
            .normalized_path()
            .unwrap_or_else(|| request.base_path());
        let base_url = match hostname {
            Some(host) => format!("{}{host}{path}", request.scheme()),
            None => path,
        };

        let link = LinkStyleConfig::new(base_url)
            .with_style(options.url_style)
            .with_suffix(options.suffix.clone())
            .with_query_key_name(options.query_key_name.clone());

        let current_page = match current_page {
            Some(page) => page,
            None => {
                let page = request.resolve_current_page(options.url_style, &options.query_key_name);
                debug!(page, uri = %request.uri, "resolved current page from request");
                page
            }
        };

        let state = PaginationState::new(
            total,
            per_page,
            current_page,
            options.normalized_on_each_side(),
            options.layout,
        )?;

        Ok(Self {
            state,
            link,
            next_page_text: options.next_page_text.clone(),
            prev_page_text: options.prev_page_text.clone(),
        })
    }

    /// Create a paginator from an already built state and link config
    pub fn from_parts(state: PaginationState, link: LinkStyleConfig) -> Self {
        Self {
            state,
            link,
            next_page_text: DEFAULT_NEXT_PAGE_TEXT.to_string(),
            prev_page_text: DEFAULT_PREV_PAGE_TEXT.to_string(),
        }
    }

    /// Set the previous/next link texts
    #[must_use]
    pub fn with_texts(mut self, prev: impl Into<String>, next: impl Into<String>) -> Self {
        self.prev_page_text = prev.into();
        self.next_page_text = next.into();
        self
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Numeric state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Link configuration
    pub fn link_config(&self) -> &LinkStyleConfig {
        &self.link
    }

    /// Total number of items being paginated
    pub fn total(&self) -> u64 {
        self.state.total()
    }

    /// Number of items shown per page
    pub fn per_page(&self) -> u64 {
        self.state.per_page()
    }

    /// Current page
    pub fn current_page(&self) -> PageNumber {
        self.state.current_page()
    }

    /// Last page
    pub fn last_page(&self) -> PageNumber {
        self.state.last_page()
    }

    /// Links on each side of the current page
    pub fn on_each_side(&self) -> u64 {
        self.state.on_each_side()
    }

    /// Layout
    pub fn layout(&self) -> LayoutType {
        self.state.layout()
    }

    /// Base URL every page URL starts with
    pub fn base_url(&self) -> &str {
        &self.link.base_url
    }

    /// Next page link text
    pub fn next_page_text(&self) -> &str {
        &self.next_page_text
    }

    /// Previous page link text
    pub fn prev_page_text(&self) -> &str {
        &self.prev_page_text
    }

    // ------------------------------------------------------------------------
    // Derived queries
    // ------------------------------------------------------------------------

    /// Determine if there are more pages after the current one
    pub fn has_more_pages(&self) -> bool {
        self.state.has_more_pages()
    }

    /// Determine if the paginator is on the first page
    pub fn on_first_page(&self) -> bool {
        self.state.on_first_page()
    }

    /// Determine if there are enough items to split into multiple pages
    pub fn has_pages(&self) -> bool {
        self.state.has_pages()
    }

    /// URL of the next page
    pub fn next_page_url(&self) -> Option<String> {
        self.state.next_page().map(|page| self.url(page))
    }

    /// URL of the previous page
    pub fn previous_page_url(&self) -> Option<String> {
        self.state.previous_page().map(|page| self.url(page))
    }

    /// URL of a page
    pub fn url(&self, page: PageNumber) -> String {
        self.link.url_for(page)
    }

    /// URLs of the pages `from..=to`
    pub fn url_range(&self, from: PageNumber, to: PageNumber) -> PageUrls {
        self.link.url_range(from, to)
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    /// Compute the visible page window
    pub fn window(&self) -> PageWindow {
        compute_window(&self.state, &self.link)
    }

    /// Data handed to renderers
    ///
    /// Menu and full layouts get their single segment flattened into a plain
    /// page list.
    pub fn render_data(&self) -> RenderData<'_> {
        let mut segments = self.window().into_segments();

        let links = if segments.is_empty() {
            PageLinks::None
        } else if segments.len() == 1 && self.layout().lists_every_page() {
            match segments.pop().and_then(|s| s.links().cloned()) {
                Some(urls) => PageLinks::Flat(urls),
                None => PageLinks::None,
            }
        } else {
            PageLinks::Segments(segments)
        };

        RenderData {
            links,
            paginator: self,
        }
    }

    /// Render with the layout's built-in renderer
    ///
    /// Returns an empty string when there is at most one page.
    pub fn to_html(&self) -> Result<String> {
        self.render_with(renderer_for(self.layout()))
    }

    /// Render with a caller-supplied renderer
    pub fn render_with<R: Renderer + ?Sized>(&self, renderer: &R) -> Result<String> {
        if self.last_page() <= 1 {
            return Ok(String::new());
        }
        renderer.render(&self.render_data())
    }

    /// Serializable snapshot of every derived value
    pub fn summary(&self) -> PaginationSummary {
        PaginationSummary {
            total: self.total(),
            per_page: self.per_page(),
            current_page: self.current_page(),
            last_page: self.last_page(),
            on_each_side: self.on_each_side(),
            layout: self.layout(),
            url_style: self.link.style,
            base_url: self.link.base_url.clone(),
            has_pages: self.has_pages(),
            has_more_pages: self.has_more_pages(),
            on_first_page: self.on_first_page(),
            next_page_url: self.next_page_url(),
            previous_page_url: self.previous_page_url(),
            next_page_text: self.next_page_text.clone(),
            prev_page_text: self.prev_page_text.clone(),
            window: self.window(),
        }
    }
}

impl fmt::Display for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let html = self.to_html().map_err(|_| fmt::Error)?;
        f.write_str(&html)
    }
}

/// Everything a paginator knows, in serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationSummary {
    pub total: u64,
    pub per_page: u64,
    pub current_page: PageNumber,
    pub last_page: PageNumber,
    pub on_each_side: u64,
    #[serde(rename = "type")]
    pub layout: LayoutType,
    pub url_style: UrlStyle,
    pub base_url: String,
    pub has_pages: bool,
    pub has_more_pages: bool,
    pub on_first_page: bool,
    pub next_page_url: Option<String>,
    pub previous_page_url: Option<String>,
    pub next_page_text: String,
    pub prev_page_text: String,
    pub window: PageWindow,
}
