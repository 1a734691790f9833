// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Pagelinks
//!
//! Pagination links for paginated listings: which page numbers to show, what
//! each page's URL looks like, and the HTML for them.
//!
//! ## Features
//!
//! - **Page Windows**: Bounded link lists with ellipsis markers around the current page
//! - **Two URL Styles**: `/news/page/3` or `/news?page=3`
//! - **Request Aware**: Current page, host and base path read from the request
//! - **Four Layouts**: Default, full, menu and simple, or bring your own renderer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagelinks::{Paginator, PaginatorOptions, RequestContext, Result};
//!
//! fn main() -> Result<()> {
//!     let request = RequestContext::new("/news/page/50").with_host("example.com");
//!     let options = PaginatorOptions::default();
//!
//!     let paginator = Paginator::new(1000, 10, None, &options, &request)?;
//!     assert_eq!(paginator.current_page(), 50);
//!
//!     println!("{}", paginator.to_html()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Paginator                           │
//! │  new(total, per_page, page, options, request) → to_html()    │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┼───────────────┬───────────────┐
//! │   Request    │    Window     │      URL      │    Render     │
//! ├──────────────┼───────────────┼───────────────┼───────────────┤
//! │ Current page │ Full          │ Path segment  │ Default       │
//! │ Host/scheme  │ Beginning     │ Query param   │ Full          │
//! │ Base path    │ Middle        │ Suffix        │ Menu          │
//! │              │ Ending        │               │ Simple        │
//! └──────────────┴───────────────┴───────────────┴───────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Paginator options and loading
pub mod config;

/// Incoming request context
pub mod request;

/// Page windows, URLs and the paginator
pub mod pagination;

/// Renderers
pub mod render;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_options, PaginatorOptions};
pub use pagination::{PageWindow, PaginationState, Paginator, Segment, WindowKind};
pub use render::{renderer_for, PageLinks, RenderData, Renderer};
pub use request::RequestContext;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
