//! Tests for the reference renderers

use super::*;
use crate::config::PaginatorOptions;
use crate::error::Error;
use crate::request::RequestContext;
use askama_escape::{Html, MarkupDisplay};
use pretty_assertions::assert_eq;

fn paginator(total: u64, current: i64, layout: LayoutType) -> Paginator {
    let options = PaginatorOptions::new()
        .with_hostname("example.com")
        .with_path("news")
        .with_layout(layout);
    Paginator::new(total, 10, Some(current), &options, &RequestContext::default()).unwrap()
}

fn esc(s: &str) -> String {
    MarkupDisplay::new_unsafe(s, Html).to_string()
}

// ============================================================================
// Default Layout
// ============================================================================

#[test]
fn test_default_small_full_markup() {
    let p = paginator(30, 2, LayoutType::Default);
    let page1 = esc("http://example.com/news");
    let page3 = esc("http://example.com/news/page/3");

    let expected = format!(
        r#"<div class="pagination">
    <div class="pagination__prev-button">
        <a href="{page1}"><span>«</span></a>
    </div>
    <ul class="pagination__page-links">
        <li><a href="{page1}">1</a></li>
        <li class="active"><span>2</span></li>
        <li><a href="{page3}">3</a></li>
    </ul>
    <div class="pagination__next-button">
        <a href="{page3}"><span>»</span></a>
    </div>
</div>
"#
    );

    assert_eq!(p.to_html().unwrap(), expected);
}

#[test]
fn test_default_renders_ellipsis() {
    let html = paginator(1000, 50, LayoutType::Default).to_html().unwrap();

    assert_eq!(html.matches(r#"<li class="disabled"><span>...</span></li>"#).count(), 2);
    assert!(html.contains(r#"<li class="active"><span>50</span></li>"#));
    assert!(html.contains(&format!(
        r#"<li><a href="{}">47</a></li>"#,
        esc("http://example.com/news/page/47")
    )));
    assert!(!html.contains(">46</a>"));
    assert!(html.contains(">100</a>"));
}

#[test]
fn test_default_first_page_disables_prev() {
    let html = paginator(1000, 1, LayoutType::Default).to_html().unwrap();
    assert!(html.contains(r#"<div class="pagination__prev-button disabled">"#));
    assert!(html.contains(r#"<div class="pagination__next-button">"#));
}

#[test]
fn test_default_last_page_disables_next() {
    let html = paginator(1000, 100, LayoutType::Default).to_html().unwrap();
    assert!(html.contains(r#"<div class="pagination__next-button disabled">"#));
    assert!(html.contains(r#"<li class="active"><span>100</span></li>"#));
}

// ============================================================================
// Full Layout
// ============================================================================

#[test]
fn test_full_lists_every_page() {
    let html = paginator(1000, 50, LayoutType::Full).to_html().unwrap();
    assert_eq!(html.matches("<li").count(), 100);
    assert!(!html.contains("..."));
}

// ============================================================================
// Menu Layout
// ============================================================================

#[test]
fn test_menu_markup() {
    let p = paginator(20, 1, LayoutType::Menu);
    let page1 = esc("http://example.com/news");
    let page2 = esc("http://example.com/news/page/2");

    let expected = format!(
        r#"<div class="pagination-menu">
    <div class="pagination-menu__prev-button disabled">
        <span>«</span>
    </div>
    <div class="pagination-menu__links">
        <select id="js-pagination-menu">
            <option value="{page1}" selected="selected">1/2</option>
            <option value="{page2}">2/2</option>
        </select>
    </div>
    <div class="pagination-menu__next-button">
        <a href="{page2}"><span>»</span></a>
    </div>
</div>

<script>
    document.getElementById('js-pagination-menu').addEventListener('change', function () {{
        location.href = this.value;
    }});
</script>
"#
    );

    assert_eq!(p.to_html().unwrap(), expected);
}

#[test]
fn test_menu_options() {
    let html = paginator(50, 3, LayoutType::Menu).to_html().unwrap();

    assert!(html.starts_with(r#"<div class="pagination-menu">"#));
    assert_eq!(html.matches("<option ").count(), 5);
    assert!(html.contains(&format!(
        r#"<option value="{}" selected="selected">3/5</option>"#,
        esc("http://example.com/news/page/3")
    )));
    assert!(html.contains(&format!(
        r#"<option value="{}">1/5</option>"#,
        esc("http://example.com/news")
    )));
    assert!(html.contains("js-pagination-menu"));
    assert!(html.trim_end().ends_with("</script>"));
}

// ============================================================================
// Simple Layout
// ============================================================================

#[test]
fn test_simple_prev_next_only() {
    let html = paginator(1000, 5, LayoutType::Simple).to_html().unwrap();

    assert_eq!(html.matches("<li").count(), 2);
    assert!(html.contains(&format!(
        r#"<li><a href="{}" rel="prev">«</a></li>"#,
        esc("http://example.com/news/page/4")
    )));
    assert!(html.contains(&format!(
        r#"<li><a href="{}" rel="next">»</a></li>"#,
        esc("http://example.com/news/page/6")
    )));
}

#[test]
fn test_simple_last_page_markup() {
    let p = paginator(30, 3, LayoutType::Simple);

    let expected = format!(
        r#"<ul class="pagination">
    <li><a href="{}" rel="prev">«</a></li>
    <li class="disabled"><span>»</span></li>
</ul>
"#,
        esc("http://example.com/news/page/2")
    );

    assert_eq!(p.to_html().unwrap(), expected);
}

#[test]
fn test_simple_on_first_page() {
    let html = paginator(1000, 1, LayoutType::Simple).to_html().unwrap();
    assert!(html.contains(r#"<li class="disabled"><span>«</span></li>"#));
}

// ============================================================================
// Shared behaviour
// ============================================================================

#[test]
fn test_single_page_renders_nothing() {
    for layout in LayoutType::ALL {
        assert_eq!(paginator(10, 1, layout).to_html().unwrap(), "");
        assert_eq!(paginator(0, 1, layout).to_html().unwrap(), "");
    }
}

#[test]
fn test_texts_are_escaped() {
    let p = paginator(100, 2, LayoutType::Default).with_texts("<prev>", "next & more");
    let html = p.to_html().unwrap();
    assert!(html.contains("&lt;prev&gt;"));
    assert!(html.contains("next &amp; more"));
    assert!(!html.contains("<prev>"));
}

#[test]
fn test_display_matches_to_html() {
    let p = paginator(1000, 7, LayoutType::Default);
    assert_eq!(p.to_string(), p.to_html().unwrap());
}

#[test]
fn test_renderer_for_each_layout() {
    for layout in LayoutType::ALL {
        let p = paginator(100, 2, layout);
        let direct = renderer_for(layout).render(&p.render_data()).unwrap();
        assert_eq!(direct, p.to_html().unwrap());
    }
}

struct CountingRenderer;

impl Renderer for CountingRenderer {
    fn render(&self, data: &RenderData<'_>) -> crate::Result<String> {
        Ok(format!(
            "{} links on page {}",
            data.links.pages().len(),
            data.paginator.current_page()
        ))
    }
}

#[test]
fn test_custom_renderer() {
    let p = paginator(1000, 50, LayoutType::Default);
    assert_eq!(p.render_with(&CountingRenderer).unwrap(), "9 links on page 50");
}

struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&self, _data: &RenderData<'_>) -> crate::Result<String> {
        Err(Error::render("template missing"))
    }
}

#[test]
fn test_renderer_error_propagates() {
    let p = paginator(1000, 50, LayoutType::Default);
    let err = p.render_with(&FailingRenderer).unwrap_err();
    assert!(matches!(err, Error::Render { .. }));
}

#[test]
fn test_page_links_pages() {
    let p = paginator(1000, 50, LayoutType::Default);
    let data = p.render_data();
    let pages: Vec<PageNumber> = data.links.pages().into_iter().map(|(n, _)| n).collect();
    assert_eq!(pages, vec![1, 47, 48, 49, 50, 51, 52, 53, 100]);
    assert!(!data.links.is_empty());
    assert!(PageLinks::None.is_empty());
}
