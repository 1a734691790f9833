//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, PageArgs};
use crate::config::{load_options, PaginatorOptions};
use crate::error::Result;
use crate::pagination::Paginator;
use crate::request::RequestContext;
use crate::types::{LayoutType, UrlStyle};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, printing its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        if !output.is_empty() {
            println!("{}", output.trim_end());
        }
        Ok(())
    }

    /// Run the CLI command, returning its output
    pub fn execute(&self) -> Result<String> {
        let paginator = self.paginator(self.cli.command.pages())?;

        match &self.cli.command {
            Commands::Render { .. } => {
                tracing::debug!(
                    "Rendering {} layout, page {} of {}",
                    paginator.layout(),
                    paginator.current_page(),
                    paginator.last_page()
                );
                paginator.to_html()
            }
            Commands::Window { .. } => Ok(serde_json::to_string_pretty(&paginator.window())?),
            Commands::Info { .. } => Ok(serde_json::to_string_pretty(&paginator.summary())?),
        }
    }

    /// Options file merged with command-line overrides
    fn options(&self) -> Result<PaginatorOptions> {
        let mut options = match &self.cli.options {
            Some(path) => load_options(path)?,
            None => PaginatorOptions::default(),
        };

        if let Some(layout) = &self.cli.layout {
            options.layout = layout.parse::<LayoutType>()?;
        }
        if let Some(style) = &self.cli.url_style {
            options.url_style = style.parse::<UrlStyle>()?;
        }
        if let Some(on_each_side) = self.cli.on_each_side {
            options.on_each_side = on_each_side;
        }
        if let Some(suffix) = &self.cli.suffix {
            options.suffix.clone_from(suffix);
        }
        if let Some(path) = &self.cli.path {
            options.path = Some(path.clone());
        }
        if let Some(hostname) = &self.cli.hostname {
            options.hostname = Some(hostname.clone());
        }
        if let Some(key) = &self.cli.query_key {
            options.query_key_name.clone_from(key);
        }

        options.validate()?;
        Ok(options)
    }

    /// Request the paginator reads its defaults from
    fn request(&self) -> RequestContext {
        if self.cli.from_env {
            return RequestContext::from_cgi_env();
        }
        let uri = self.cli.uri.as_deref().unwrap_or("/");
        RequestContext::new(uri).with_https(self.cli.https)
    }

    fn paginator(&self, pages: PageArgs) -> Result<Paginator> {
        let options = self.options()?;
        Paginator::new(
            pages.total,
            pages.per_page,
            pages.page,
            &options,
            &self.request(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::Value;
    use std::io::Write;

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("pagelinks").chain(args.iter().copied()))
            .unwrap();
        Runner::new(cli).execute()
    }

    #[test]
    fn test_render_default() {
        let html = run(&[
            "--hostname",
            "example.com",
            "--path",
            "news",
            "render",
            "--total",
            "1000",
            "--per-page",
            "10",
            "--page",
            "50",
        ])
        .unwrap();

        assert!(html.starts_with(r#"<div class="pagination">"#));
        assert!(html.contains(r#"<li class="active"><span>50</span></li>"#));
    }

    #[test]
    fn test_render_single_page_is_empty() {
        let html = run(&["render", "--total", "5", "--per-page", "10"]).unwrap();
        assert_eq!(html, "");
    }

    #[test]
    fn test_window_json_reads_page_from_uri() {
        let json = run(&[
            "--uri",
            "/news/page/100",
            "window",
            "--total",
            "1000",
            "--per-page",
            "10",
        ])
        .unwrap();

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "close_to_ending");
        assert_eq!(value["segments"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_info_with_overrides() {
        let json = run(&[
            "--type",
            "menu",
            "--url-style",
            "queryParam",
            "--query-key",
            "paged",
            "--uri",
            "/shop?paged=3",
            "--hostname",
            "example.com",
            "--https",
            "info",
            "--total",
            "95",
            "--per-page",
            "10",
        ])
        .unwrap();

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "menu");
        assert_eq!(value["current_page"], 3);
        assert_eq!(value["last_page"], 10);
        assert_eq!(value["next_page_url"], "https://example.com/shop?paged=4");
    }

    #[test]
    fn test_invalid_type_fails() {
        let err = run(&["--type", "grid", "render", "--total", "10", "--per-page", "2"])
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_invalid_url_style_fails() {
        let err = run(&["--url-style", "hash", "info", "--total", "10", "--per-page", "2"])
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_zero_per_page_fails() {
        assert!(run(&["info", "--total", "10", "--per-page", "0"]).is_err());
    }

    #[test]
    fn test_options_file_with_cli_override() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "type: full\nonEachSide: 1\nsuffix: \"#top\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let json = run(&[
            "--options",
            &path,
            "--on-each-side",
            "-2",
            "info",
            "--total",
            "30",
            "--per-page",
            "10",
            "--page",
            "2",
        ])
        .unwrap();

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "full");
        assert_eq!(value["on_each_side"], 2);
        assert_eq!(value["next_page_url"], "/page/3#top");
    }
}
