//! CLI module
//!
//! Command-line interface for computing and rendering pagination.
//!
//! # Commands
//!
//! - `render` - Print the HTML for the configured layout
//! - `window` - Print the page window as JSON
//! - `info` - Print every derived value as JSON

mod commands;
mod runner;

pub use commands::{Cli, Commands, PageArgs};
pub use runner::Runner;
