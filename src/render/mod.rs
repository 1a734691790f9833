//! Rendering
//!
//! A [`Renderer`] turns [`RenderData`] into markup. One reference renderer ships
//! per layout; callers can plug in their own through
//! [`crate::Paginator::render_with`].

mod layouts;

pub use layouts::{DefaultRenderer, FullRenderer, MenuRenderer, SimpleRenderer};

use crate::error::Result;
use crate::pagination::{Paginator, Segment};
use crate::types::{LayoutType, PageNumber, PageUrls};

/// Page links handed to a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLinks {
    /// No page list (simple layout)
    None,
    /// Every page, flattened (menu and full layouts)
    Flat(PageUrls),
    /// Link runs separated by ellipsis markers
    Segments(Vec<Segment>),
}

impl PageLinks {
    /// Every page link in order, ellipsis markers dropped
    pub fn pages(&self) -> Vec<(PageNumber, &str)> {
        match self {
            Self::None => Vec::new(),
            Self::Flat(urls) => urls.iter().map(|(page, url)| (*page, url.as_str())).collect(),
            Self::Segments(segments) => segments
                .iter()
                .filter_map(Segment::links)
                .flat_map(|urls| urls.iter().map(|(page, url)| (*page, url.as_str())))
                .collect(),
        }
    }

    /// Check if there are no page links
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Flat(urls) => urls.is_empty(),
            Self::Segments(segments) => segments.is_empty(),
        }
    }
}

/// Input of a render call
#[derive(Debug, Clone)]
pub struct RenderData<'a> {
    /// Visible page links
    pub links: PageLinks,
    /// The paginator, for current page, prev/next URLs and texts
    pub paginator: &'a Paginator,
}

/// Turns pagination data into markup
pub trait Renderer: Send + Sync {
    /// Render the data
    fn render(&self, data: &RenderData<'_>) -> Result<String>;
}

/// Built-in renderer for a layout
pub fn renderer_for(layout: LayoutType) -> &'static dyn Renderer {
    match layout {
        LayoutType::Default => &DefaultRenderer,
        LayoutType::Full => &FullRenderer,
        LayoutType::Menu => &MenuRenderer,
        LayoutType::Simple => &SimpleRenderer,
    }
}

#[cfg(test)]
mod tests;
