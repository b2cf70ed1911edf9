//! The front page as terminal lines.

use chrono::NaiveDate;
use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::document::SegmentedDocument;
use crate::document::masthead::{
    BODY_PLACEHOLDER, DESK, FOOTER, HERO_TAG, SIGNAL, STANDFIRST_PLACEHOLDER, SUBTITLE, TITLE,
    date_label, issue_label,
};
use crate::render::{InlineSpan, LineType, RenderedLine, render_lines, wrap_plain};

use super::style::{Palette, style_for_inline, style_for_line_type};

/// Compose masthead, hero, body and footer at `width` columns.
pub fn front_page_lines(
    doc: &SegmentedDocument,
    today: NaiveDate,
    palette: &Palette,
    width: u16,
) -> Vec<Line<'static>> {
    let cols = usize::from(width.max(1));
    let issue = issue_label(today);
    let mut lines = Vec::new();

    // Masthead
    lines.push(centered(
        TITLE,
        cols,
        palette.base().fg(palette.accent).add_modifier(Modifier::BOLD),
    ));
    lines.push(centered(SUBTITLE, cols, palette.base().fg(palette.muted)));
    lines.push(spread(
        Span::styled(format!(" Issue {issue} "), palette.inverted()),
        Span::styled(date_label(today), palette.base().fg(palette.highlight)),
        cols,
    ));
    lines.push(rule('\u{2550}', cols, palette.base().fg(palette.accent)));
    lines.push(Line::raw(""));

    // Hero
    lines.push(Line::from(Span::styled(
        format!(" {} ", HERO_TAG.to_uppercase()),
        palette.inverted().add_modifier(Modifier::BOLD),
    )));
    // The headline is literal text; markdown syntax in it is not interpreted.
    let headline_style = style_for_line_type(palette, LineType::Heading(1));
    lines.extend(
        wrap_plain(&doc.headline, width)
            .iter()
            .map(|spans| styled_spans(palette, headline_style, spans)),
    );
    lines.push(Line::raw(""));
    if doc.standfirst.is_empty() {
        lines.push(placeholder(STANDFIRST_PLACEHOLDER, palette));
    } else {
        let deck_style = palette.base().fg(palette.highlight);
        lines.extend(render_lines(&doc.standfirst, width).iter().map(|line| {
            if line.line_type() == LineType::Paragraph {
                line_with_base(palette, deck_style, line)
            } else {
                rendered_line(palette, line)
            }
        }));
    }
    lines.push(Line::raw(""));
    lines.push(meta_row(&issue, palette));
    lines.push(rule('\u{2500}', cols, palette.base().fg(palette.muted)));
    lines.push(Line::raw(""));

    // Body
    if doc.body.is_empty() {
        lines.push(placeholder(BODY_PLACEHOLDER, palette));
    } else {
        lines.extend(
            render_lines(&doc.body, width)
                .iter()
                .map(|line| rendered_line(palette, line)),
        );
    }

    // Footer
    lines.push(Line::raw(""));
    lines.push(rule('\u{2500}', cols, palette.base().fg(palette.muted)));
    lines.push(centered(FOOTER, cols, palette.base().fg(palette.muted)));
    lines
}

fn rendered_line(palette: &Palette, line: &RenderedLine) -> Line<'static> {
    line_with_base(palette, style_for_line_type(palette, line.line_type()), line)
}

fn line_with_base(palette: &Palette, base: Style, line: &RenderedLine) -> Line<'static> {
    match line.spans() {
        Some(spans) => styled_spans(palette, base, spans),
        None => Line::styled(line.content().to_string(), base),
    }
}

fn styled_spans(palette: &Palette, base: Style, spans: &[InlineSpan]) -> Line<'static> {
    Line::from(
        spans
            .iter()
            .map(|span| {
                Span::styled(
                    span.text().to_string(),
                    style_for_inline(palette, base, span.style()),
                )
            })
            .collect::<Vec<_>>(),
    )
}

fn meta_row(issue: &str, palette: &Palette) -> Line<'static> {
    let label = palette.base().fg(palette.muted);
    let value = palette.base().fg(palette.accent).add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    for (idx, (name, text)) in [("Edition", issue), ("Desk", DESK), ("Signal", SIGNAL)]
        .into_iter()
        .enumerate()
    {
        if idx > 0 {
            spans.push(Span::styled("  \u{00b7}  ", label));
        }
        spans.push(Span::styled(format!("{} ", name.to_uppercase()), label));
        spans.push(Span::styled(text.to_string(), value));
    }
    Line::from(spans)
}

fn placeholder(text: &'static str, palette: &Palette) -> Line<'static> {
    Line::styled(
        text,
        palette
            .base()
            .fg(palette.muted)
            .add_modifier(Modifier::ITALIC),
    )
}

fn rule(ch: char, cols: usize, style: Style) -> Line<'static> {
    Line::styled(ch.to_string().repeat(cols), style)
}

fn centered(text: &str, cols: usize, style: Style) -> Line<'static> {
    let pad = cols.saturating_sub(text.width()) / 2;
    Line::styled(format!("{}{text}", " ".repeat(pad)), style)
}

/// Place `left` and `right` at opposite edges of the line.
fn spread(left: Span<'static>, right: Span<'static>, cols: usize) -> Line<'static> {
    let used = left.content.width() + right.content.width();
    let gap = cols.saturating_sub(used).max(1);
    Line::from(vec![left, Span::raw(" ".repeat(gap)), right])
}
