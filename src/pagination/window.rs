//! Page window computation
//!
//! Decides which page links are visible and where the ellipsis markers go.
//!
//! ```text
//! full               [1][2][3][4][5]
//! close to beginning [1][2][3][4][5][6][7][8][9]...[100]
//! middle             [1]...[47][48][49][50][51][52][53]...[100]
//! close to ending    [1]...[92][93][94][95][96][97][98][99][100]
//! ```

use super::types::{PageWindow, PaginationState, Segment, WindowKind};
use super::url::LinkStyleConfig;
use crate::types::{LayoutType, PageNumber};
use tracing::debug;

/// Links always shown at the start
pub const MIN_BEGINNING_LINKS: u64 = 1;
/// Links always shown at the end
pub const MIN_ENDING_LINKS: u64 = 1;
/// Maximum number of ellipsis markers
pub const MAX_DOTS: u64 = 2;
/// The current page link
pub const CENTER_LINK: u64 = 1;
/// Slack before switching from the edge windows to the middle window
pub const PRELOAD_LINKS: u64 = 2;

const DOTS: u64 = 1;

/// Largest number of links plus markers a truncated window can hold
pub fn max_links(on_each_side: u64) -> u64 {
    (MIN_BEGINNING_LINKS + MIN_ENDING_LINKS + MAX_DOTS + CENTER_LINK)
        .saturating_add(on_each_side.saturating_mul(2))
}

/// Compute the page window for a state
///
/// Meant to be called only when `last_page > 1`; smaller states still produce a
/// well-formed (possibly empty) window. The simple layout always gets an empty
/// window.
pub fn compute_window(state: &PaginationState, link: &LinkStyleConfig) -> PageWindow {
    let last_page = state.last_page();
    let max_links = max_links(state.on_each_side());

    // the simple layout only shows prev/next, whatever the page count
    if state.layout() == LayoutType::Simple {
        return PageWindow::new(WindowKind::Empty, Vec::new());
    }

    if max_links >= last_page || state.layout().lists_every_page() {
        debug!(last_page, max_links, layout = %state.layout(), "full page window");
        return PageWindow::new(
            WindowKind::Full,
            vec![links(link, last_page, 1, last_page)],
        );
    }

    let current = state.current_page();

    let edge_span = max_links - (MIN_ENDING_LINKS + DOTS);
    if current <= edge_span - PRELOAD_LINKS {
        debug!(current, edge_span, "page window close to beginning");
        return PageWindow::new(
            WindowKind::CloseToBeginning,
            vec![
                links(link, last_page, 1, edge_span),
                Segment::Ellipsis,
                links(link, last_page, last_page, last_page),
            ],
        );
    }

    let tail_start = last_page - (max_links - MIN_BEGINNING_LINKS - DOTS) + 1;
    if current >= tail_start + PRELOAD_LINKS {
        debug!(current, tail_start, "page window close to ending");
        return PageWindow::new(
            WindowKind::CloseToEnding,
            vec![
                links(link, last_page, 1, 1),
                Segment::Ellipsis,
                links(link, last_page, tail_start, last_page),
            ],
        );
    }

    let side = state.on_each_side();
    debug!(current, side, "page window around current page");
    PageWindow::new(
        WindowKind::Middle,
        vec![
            links(link, last_page, 1, 1),
            Segment::Ellipsis,
            links(
                link,
                last_page,
                current.saturating_sub(side),
                current.saturating_add(side),
            ),
            Segment::Ellipsis,
            links(link, last_page, last_page, last_page),
        ],
    )
}

/// Link run for `from..=to`, clamped to `[1, last_page]`
fn links(link: &LinkStyleConfig, last_page: PageNumber, from: PageNumber, to: PageNumber) -> Segment {
    Segment::Links(link.url_range(from.max(1), to.min(last_page)))
}
