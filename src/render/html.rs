//! HTML output: the comrak renderer and the composed front page.

use chrono::NaiveDate;
use comrak::{Options, markdown_to_html};

use crate::document::SegmentedDocument;
use crate::document::masthead::{
    BODY_PLACEHOLDER, DESK, FOOTER, HERO_TAG, SIGNAL, STANDFIRST_PLACEHOLDER, SUBTITLE, TITLE,
    date_label, issue_label,
};
use crate::theme::ThemeRecord;

/// Render a markdown fragment to HTML. Raw HTML in the input is omitted.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::default();
    super::configure_options(&mut options);
    markdown_to_html(markdown, &options)
}

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Compose the full newspaper page.
///
/// The palette is carried on the root element as `data-theme` and its
/// swatches as CSS custom properties; nothing else reads theme state.
pub fn render_page(doc: &SegmentedDocument, theme: &ThemeRecord, date: NaiveDate) -> String {
    let issue = issue_label(date);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!(
        "<html lang=\"en\" data-theme=\"{}\">\n",
        escape_html(theme.id)
    ));
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>{} | {}</title>\n",
        escape_html(&doc.headline),
        SUBTITLE
    ));
    html.push_str(&theme_style(theme));
    html.push_str("</head>\n<body>\n<article class=\"news-page\">\n");

    html.push_str("<header class=\"news-masthead\">\n");
    html.push_str(&format!(
        "<div class=\"masthead-title\"><span class=\"masthead-title-cn\">{TITLE}</span>\
         <span class=\"masthead-title-en\">{SUBTITLE}</span></div>\n"
    ));
    html.push_str(&format!(
        "<div class=\"masthead-meta\"><span class=\"meta-pill\">Issue {issue}</span>\
         <span class=\"meta-date\">{}</span></div>\n",
        date_label(date)
    ));
    html.push_str(&palette_chip(theme));
    html.push_str("</header>\n");

    html.push_str("<section class=\"news-hero\">\n");
    html.push_str(&format!("<div class=\"hero-tag\">{HERO_TAG}</div>\n"));
    html.push_str(&format!(
        "<h1 class=\"hero-headline\">{}</h1>\n",
        escape_html(&doc.headline)
    ));
    if doc.standfirst.is_empty() {
        html.push_str(&format!(
            "<p class=\"hero-lede hero-empty\">{STANDFIRST_PLACEHOLDER}</p>\n"
        ));
    } else {
        html.push_str(&format!(
            "<div class=\"hero-deck\">\n{}</div>\n",
            render_html(&doc.standfirst)
        ));
    }
    html.push_str("<div class=\"hero-meta\">\n");
    for (label, value) in [("Edition", issue.as_str()), ("Desk", DESK), ("Signal", SIGNAL)] {
        html.push_str(&format!(
            "<div class=\"hero-meta-item\"><span class=\"hero-meta-label\">{label}</span>\
             <span class=\"hero-meta-value\">{value}</span></div>\n"
        ));
    }
    html.push_str("</div>\n</section>\n");

    html.push_str("<section class=\"news-body\">\n");
    if doc.body.is_empty() {
        html.push_str(&format!("<p class=\"news-empty\">{BODY_PLACEHOLDER}</p>\n"));
    } else {
        html.push_str(&render_html(&doc.body));
    }
    html.push_str("</section>\n");

    html.push_str(&format!(
        "<footer class=\"news-footer\"><span class=\"footer-rule\" aria-hidden=\"true\"></span>{FOOTER}</footer>\n"
    ));
    html.push_str("</article>\n</body>\n</html>\n");
    html
}

fn theme_style(theme: &ThemeRecord) -> String {
    format!(
        "<style>\n:root[data-theme=\"{id}\"] {{\n  --accent: {a};\n  --highlight: {h};\n  --background: {b};\n}}\n</style>\n",
        id = escape_html(theme.id),
        a = theme.accent(),
        h = theme.highlight(),
        b = theme.background(),
    )
}

fn palette_chip(theme: &ThemeRecord) -> String {
    let swatches: String = theme
        .swatches
        .iter()
        .map(|swatch| {
            format!("<span class=\"palette-swatch\" style=\"background-color: {swatch}\"></span>")
        })
        .collect();
    format!(
        "<div class=\"palette-chip\" aria-label=\"Daily palette {name}\">\
         <span class=\"palette-label\">Daily palette</span>\
         <span class=\"palette-name\">{name}</span>\
         <span class=\"palette-swatches\">{swatches}</span></div>\n",
        name = escape_html(theme.name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::segment;
    use crate::theme::find_theme;

    fn oct_18() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_render_html_renders_common_markdown() {
        let html = render_html("## Head\n\n> quote\n\n- *a*\n- [b](https://example.com)");
        assert!(html.contains("<h2>Head</h2>"));
        assert!(html.contains("<blockquote>"));
        assert!(html.contains("<em>a</em>"));
        assert!(html.contains("<a href=\"https://example.com\">b</a>"));
    }

    #[test]
    fn test_render_html_omits_raw_html() {
        let html = render_html("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_page_carries_theme_on_root() {
        let theme = find_theme("circuit-mint").unwrap();
        let page = render_page(&segment("# Hi"), theme, oct_18());
        assert!(page.contains("<html lang=\"en\" data-theme=\"circuit-mint\">"));
        assert!(page.contains("--accent: #3fe0d0;"));
        assert!(page.contains("--background: #07141c;"));
        assert!(page.contains("<span class=\"palette-name\">Circuit Mint</span>"));
    }

    #[test]
    fn test_page_shows_masthead_issue_and_date() {
        let theme = find_theme("ion-sky").unwrap();
        let page = render_page(&segment("# Hi"), theme, oct_18());
        assert!(page.contains("Issue 291"));
        assert!(page.contains("Sun, 18 Oct 2026"));
        assert!(page.contains(TITLE));
    }

    #[test]
    fn test_page_uses_placeholders_for_empty_regions() {
        let theme = find_theme("ion-sky").unwrap();
        let page = render_page(&segment(""), theme, oct_18());
        assert!(page.contains("<h1 class=\"hero-headline\">Daily Briefing</h1>"));
        assert!(page.contains(STANDFIRST_PLACEHOLDER));
        assert!(page.contains(BODY_PLACEHOLDER));
    }

    #[test]
    fn test_page_renders_regions_in_reading_order() {
        let theme = find_theme("ion-sky").unwrap();
        let doc = segment("# Big <News>\n\nThe **lede**.\n\n## Section\n\nBody text");
        let page = render_page(&doc, theme, oct_18());
        assert!(page.contains("<h1 class=\"hero-headline\">Big &lt;News&gt;</h1>"));
        let lede = page.find("<strong>lede</strong>").unwrap();
        let section = page.find("<h2>Section</h2>").unwrap();
        let footer = page.find("End of Page").unwrap();
        assert!(lede < section && section < footer);
        assert!(!page.contains(STANDFIRST_PLACEHOLDER));
    }
}
