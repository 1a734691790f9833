//! Reference renderers, one per layout
//!
//! The markup lives in `templates/*.html`. askama escapes every interpolated
//! value, so page URLs and link texts are HTML-safe on the way out.

use super::{PageLinks, RenderData, Renderer};
use crate::error::Result;
use crate::pagination::{Paginator, Segment, ELLIPSIS};
use crate::types::PageNumber;
use askama::Template;

// ============================================================================
// Default Layout
// ============================================================================

/// Truncated page list with ellipsis markers
///
/// ```text
/// « [1] ... [47][48][49][50][51][52][53] ... [100] »
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderer;

#[derive(Template)]
#[template(path = "default.html")]
struct DefaultTemplate<'a> {
    paginator: &'a Paginator,
    items: Vec<PageItem<'a>>,
    prev_url: String,
    next_url: String,
}

impl Renderer for DefaultRenderer {
    fn render(&self, data: &RenderData<'_>) -> Result<String> {
        let paginator = data.paginator;
        finish(&DefaultTemplate {
            paginator,
            items: page_items(&data.links, paginator.current_page()),
            prev_url: paginator.previous_page_url().unwrap_or_default(),
            next_url: paginator.next_page_url().unwrap_or_default(),
        })
    }
}

// ============================================================================
// Full Layout
// ============================================================================

/// Every page, no truncation
#[derive(Debug, Clone, Copy, Default)]
pub struct FullRenderer;

#[derive(Template)]
#[template(path = "full.html")]
struct FullTemplate<'a> {
    paginator: &'a Paginator,
    items: Vec<PageItem<'a>>,
    prev_url: String,
    next_url: String,
}

impl Renderer for FullRenderer {
    fn render(&self, data: &RenderData<'_>) -> Result<String> {
        let paginator = data.paginator;
        finish(&FullTemplate {
            paginator,
            items: page_items(&data.links, paginator.current_page()),
            prev_url: paginator.previous_page_url().unwrap_or_default(),
            next_url: paginator.next_page_url().unwrap_or_default(),
        })
    }
}

// ============================================================================
// Menu Layout
// ============================================================================

/// Dropdown of every page, labelled `n/last`
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuRenderer;

#[derive(Template)]
#[template(path = "menu.html")]
struct MenuTemplate<'a> {
    paginator: &'a Paginator,
    items: Vec<PageItem<'a>>,
    prev_url: String,
    next_url: String,
}

impl Renderer for MenuRenderer {
    fn render(&self, data: &RenderData<'_>) -> Result<String> {
        let paginator = data.paginator;
        finish(&MenuTemplate {
            paginator,
            items: page_items(&data.links, paginator.current_page()),
            prev_url: paginator.previous_page_url().unwrap_or_default(),
            next_url: paginator.next_page_url().unwrap_or_default(),
        })
    }
}

// ============================================================================
// Simple Layout
// ============================================================================

/// Previous/next controls only
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

#[derive(Template)]
#[template(path = "simple.html")]
struct SimpleTemplate<'a> {
    paginator: &'a Paginator,
    prev_url: String,
    next_url: String,
}

impl Renderer for SimpleRenderer {
    fn render(&self, data: &RenderData<'_>) -> Result<String> {
        let paginator = data.paginator;
        finish(&SimpleTemplate {
            paginator,
            prev_url: paginator.previous_page_url().unwrap_or_default(),
            next_url: paginator.next_page_url().unwrap_or_default(),
        })
    }
}

// ============================================================================
// Shared pieces
// ============================================================================

/// One entry of a page list: a page link, the current page or an ellipsis
struct PageItem<'a> {
    label: String,
    url: &'a str,
    active: bool,
    disabled: bool,
}

impl<'a> PageItem<'a> {
    fn page(page: PageNumber, url: &'a str, current: PageNumber) -> Self {
        Self {
            label: page.to_string(),
            url,
            active: page == current,
            disabled: false,
        }
    }

    fn ellipsis() -> Self {
        Self {
            label: ELLIPSIS.to_string(),
            url: "",
            active: false,
            disabled: true,
        }
    }
}

fn page_items(links: &PageLinks, current: PageNumber) -> Vec<PageItem<'_>> {
    match links {
        PageLinks::Segments(segments) => segments
            .iter()
            .flat_map(|segment| match segment {
                Segment::Ellipsis => vec![PageItem::ellipsis()],
                Segment::Links(urls) => urls
                    .iter()
                    .map(|(page, url)| PageItem::page(*page, url, current))
                    .collect(),
            })
            .collect(),
        links => links
            .pages()
            .into_iter()
            .map(|(page, url)| PageItem::page(page, url, current))
            .collect(),
    }
}

/// Render a template, ending the markup with exactly one newline
fn finish(template: &impl Template) -> Result<String> {
    let mut html = template.render()?;
    html.truncate(html.trim_end().len());
    html.push('\n');
    Ok(html)
}
