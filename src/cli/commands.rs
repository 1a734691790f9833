//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Compute and render pagination links
#[derive(Parser, Debug)]
#[command(name = "pagelinks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Paginator options file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub options: Option<PathBuf>,

    /// Layout: default, full, menu or simple
    #[arg(short = 't', long = "type", global = true)]
    pub layout: Option<String>,

    /// URL style: pathSegment or queryParam
    #[arg(long, global = true)]
    pub url_style: Option<String>,

    /// Links on each side of the current page
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub on_each_side: Option<i64>,

    /// Suffix appended to every URL
    #[arg(long, global = true)]
    pub suffix: Option<String>,

    /// Base path override
    #[arg(long, global = true)]
    pub path: Option<String>,

    /// Hostname override
    #[arg(long, global = true)]
    pub hostname: Option<String>,

    /// Query parameter holding the page number
    #[arg(long, global = true)]
    pub query_key: Option<String>,

    /// Request URI the current page and base path are read from
    #[arg(short, long, global = true)]
    pub uri: Option<String>,

    /// Treat the request as HTTPS
    #[arg(long, global = true)]
    pub https: bool,

    /// Read the request from CGI environment variables (REQUEST_URI, HTTP_HOST, HTTPS)
    #[arg(long, global = true, conflicts_with = "uri")]
    pub from_env: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Item counts and the page being viewed
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Total number of items
    #[arg(long)]
    pub total: u64,

    /// Items per page
    #[arg(long)]
    pub per_page: u64,

    /// Current page (read from the request when omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the pagination HTML
    Render {
        #[command(flatten)]
        pages: PageArgs,
    },

    /// Print the visible page window as JSON
    Window {
        #[command(flatten)]
        pages: PageArgs,
    },

    /// Print every derived value as JSON
    Info {
        #[command(flatten)]
        pages: PageArgs,
    },
}

impl Commands {
    /// Page arguments of the command
    pub fn pages(&self) -> PageArgs {
        match self {
            Self::Render { pages } | Self::Window { pages } | Self::Info { pages } => *pages,
        }
    }
}
