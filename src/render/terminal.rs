//! Markdown to styled terminal lines, via the comrak AST.

use comrak::nodes::{AstNode, ListDelimType, ListType, NodeValue};
use comrak::{Arena, Options, parse_document};
use unicode_width::UnicodeWidthStr;

use super::types::{InlineSpan, InlineStyle, LineType, RenderedLine};

/// Render markdown into lines wrapped to `width` columns.
///
/// # Example
///
/// ```
/// use broadsheet::render::{LineType, render_lines};
///
/// let lines = render_lines("## Section\n\nSome text", 40);
/// assert_eq!(lines[0].line_type(), LineType::Heading(2));
/// ```
pub fn render_lines(markdown: &str, width: u16) -> Vec<RenderedLine> {
    let arena = Arena::new();
    let mut options = Options::default();
    super::configure_options(&mut options);
    let root = parse_document(&arena, markdown, &options);

    let mut renderer = LineRenderer {
        lines: Vec::new(),
        width: usize::from(width.max(1)),
    };
    renderer.process_node(root, 0, None);
    while renderer
        .lines
        .last()
        .is_some_and(|line| line.line_type() == LineType::Empty)
    {
        renderer.lines.pop();
    }
    renderer.lines
}

/// Wrap literal text (no markdown) to `width` columns.
///
/// Runs of whitespace, line breaks included, collapse to one space.
pub fn wrap_plain(text: &str, width: u16) -> Vec<Vec<InlineSpan>> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return Vec::new();
    }
    wrap_spans(&[InlineSpan::plain(collapsed)], usize::from(width.max(1)), "", "")
}

struct LineRenderer {
    lines: Vec<RenderedLine>,
    width: usize,
}

impl LineRenderer {
    fn push_wrapped(&mut self, spans: &[InlineSpan], line_type: LineType, first: &str, next: &str) {
        for line_spans in wrap_spans(spans, self.width, first, next) {
            self.lines.push(RenderedLine::from_spans(line_type, line_spans));
        }
    }

    fn ensure_blank(&mut self) {
        if self
            .lines
            .last()
            .is_some_and(|line| line.line_type() != LineType::Empty)
        {
            self.lines.push(RenderedLine::empty());
        }
    }

    fn process_node<'a>(&mut self, node: &'a AstNode<'a>, depth: usize, marker: Option<&str>) {
        match &node.data.borrow().value {
            NodeValue::Heading(heading) => {
                self.ensure_blank();
                let spans = collect_inline_spans(node);
                let prefix = format!("{} ", "#".repeat(usize::from(heading.level)));
                self.push_wrapped(&spans, LineType::Heading(heading.level), &prefix, "");
                self.lines.push(RenderedLine::empty());
            }

            NodeValue::Paragraph => {
                let spans = collect_inline_spans(node);
                self.push_wrapped(&spans, LineType::Paragraph, "", "");
                self.lines.push(RenderedLine::empty());
            }

            NodeValue::CodeBlock(code_block) => {
                let label = code_block
                    .info
                    .split_whitespace()
                    .next()
                    .filter(|s| !s.is_empty())
                    .unwrap_or("code");
                let inner = self.width.saturating_sub(2).max(1);
                let title = format!(" {label} ");
                let rule = "─".repeat(inner.saturating_sub(title.width()));
                self.lines
                    .push(RenderedLine::new(format!("┌{title}{rule}"), LineType::CodeBlock));
                for raw in code_block.literal.lines() {
                    let text = truncate_to_width(raw, inner);
                    let style = InlineStyle {
                        code: true,
                        ..InlineStyle::default()
                    };
                    self.lines.push(RenderedLine::from_spans(
                        LineType::CodeBlock,
                        vec![InlineSpan::plain("│ "), InlineSpan::new(text, style)],
                    ));
                }
                self.lines
                    .push(RenderedLine::new(format!("└{}", "─".repeat(inner)), LineType::CodeBlock));
                self.lines.push(RenderedLine::empty());
            }

            NodeValue::List(list) => {
                let list_depth = depth + 1;
                let delimiter = match list.delimiter {
                    ListDelimType::Paren => ')',
                    ListDelimType::Period => '.',
                };
                for (index, child) in node.children().enumerate() {
                    let item_marker = match list.list_type {
                        ListType::Bullet => "• ".to_string(),
                        ListType::Ordered => format!("{}{} ", list.start + index, delimiter),
                    };
                    self.process_node(child, list_depth, Some(&item_marker));
                }
                if depth == 0 {
                    self.lines.push(RenderedLine::empty());
                }
            }

            NodeValue::Item(_) => {
                let indent = "  ".repeat(depth.saturating_sub(1));
                let marker = marker.unwrap_or("- ");
                let first = format!("{indent}{marker}");
                let next = format!("{indent}{}", " ".repeat(marker.width()));
                let mut rendered_any = false;

                for child in node.children() {
                    if matches!(child.data.borrow().value, NodeValue::Paragraph) {
                        let spans = collect_inline_spans(child);
                        let prefix = if rendered_any { &next } else { &first };
                        self.push_wrapped(&spans, LineType::ListItem(depth), prefix, &next);
                        rendered_any = true;
                    } else {
                        self.process_node(child, depth, None);
                    }
                }

                if !rendered_any {
                    self.lines
                        .push(RenderedLine::new(first.trim_end().to_string(), LineType::ListItem(depth)));
                }
            }

            NodeValue::BlockQuote => {
                self.render_blockquote(node, 1);
                self.lines.push(RenderedLine::empty());
            }

            NodeValue::ThematicBreak => {
                self.lines
                    .push(RenderedLine::new("─".repeat(self.width), LineType::HorizontalRule));
                self.lines.push(RenderedLine::empty());
            }

            NodeValue::Table(_) => {
                for row in node.children() {
                    let cells: Vec<String> = row.children().map(extract_text).collect();
                    let text = truncate_to_width(&cells.join(" │ "), self.width);
                    self.lines.push(RenderedLine::new(text, LineType::Table));
                }
                self.lines.push(RenderedLine::empty());
            }

            NodeValue::HtmlBlock(html) => {
                for raw in html.literal.lines() {
                    self.lines.push(RenderedLine::new(
                        truncate_to_width(raw, self.width),
                        LineType::Paragraph,
                    ));
                }
                self.lines.push(RenderedLine::empty());
            }

            _ => {
                for child in node.children() {
                    self.process_node(child, depth, marker);
                }
            }
        }
    }

    fn render_blockquote<'a>(&mut self, node: &'a AstNode<'a>, quote_depth: usize) {
        let prefix = format!("{} ", "│".repeat(quote_depth));
        for child in node.children() {
            match &child.data.borrow().value {
                NodeValue::BlockQuote => self.render_blockquote(child, quote_depth + 1),
                NodeValue::Paragraph => {
                    let spans = collect_inline_spans(child);
                    self.push_wrapped(&spans, LineType::BlockQuote, &prefix, &prefix);
                }
                _ => {
                    for raw in extract_text(child).lines() {
                        self.push_wrapped(
                            &[InlineSpan::plain(raw)],
                            LineType::BlockQuote,
                            &prefix,
                            &prefix,
                        );
                    }
                }
            }
        }
    }
}

fn collect_inline_spans<'a>(node: &'a AstNode<'a>) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    for child in node.children() {
        collect_inline_spans_recursive(child, InlineStyle::default(), &mut spans);
    }
    spans
}

fn collect_inline_spans_recursive<'a>(
    node: &'a AstNode<'a>,
    style: InlineStyle,
    spans: &mut Vec<InlineSpan>,
) {
    match &node.data.borrow().value {
        NodeValue::List(_) | NodeValue::Item(_) => {}
        NodeValue::Text(text) => spans.push(InlineSpan::new(text.to_string(), style)),
        NodeValue::Code(code) => {
            let code_style = InlineStyle {
                code: true,
                ..InlineStyle::default()
            };
            spans.push(InlineSpan::new(code.literal.clone(), code_style));
        }
        NodeValue::HtmlInline(html) => spans.push(InlineSpan::new(html.clone(), style)),
        NodeValue::Emph => {
            let next = InlineStyle {
                emphasis: true,
                ..style
            };
            for child in node.children() {
                collect_inline_spans_recursive(child, next, spans);
            }
        }
        NodeValue::Strong => {
            let next = InlineStyle {
                strong: true,
                ..style
            };
            for child in node.children() {
                collect_inline_spans_recursive(child, next, spans);
            }
        }
        NodeValue::Strikethrough => {
            let next = InlineStyle {
                strikethrough: true,
                ..style
            };
            for child in node.children() {
                collect_inline_spans_recursive(child, next, spans);
            }
        }
        NodeValue::Link(_) | NodeValue::Image(_) => {
            let next = InlineStyle { link: true, ..style };
            for child in node.children() {
                collect_inline_spans_recursive(child, next, spans);
            }
        }
        NodeValue::SoftBreak | NodeValue::LineBreak => {
            spans.push(InlineSpan::new(" ".to_string(), style));
        }
        _ => {
            for child in node.children() {
                collect_inline_spans_recursive(child, style, spans);
            }
        }
    }
}

fn extract_text<'a>(node: &'a AstNode<'a>) -> String {
    collect_inline_spans(node)
        .iter()
        .map(InlineSpan::text)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Greedy word wrap over styled spans.
fn wrap_spans(
    spans: &[InlineSpan],
    width: usize,
    prefix_first: &str,
    prefix_next: &str,
) -> Vec<Vec<InlineSpan>> {
    let tokens: Vec<InlineSpan> = spans.iter().flat_map(split_inline_tokens).collect();

    let mut lines: Vec<Vec<InlineSpan>> = Vec::new();
    let mut current: Vec<InlineSpan> = Vec::new();
    let mut current_width = 0usize;
    let mut has_word = false;

    let start_line = |prefix: &str, current: &mut Vec<InlineSpan>, current_width: &mut usize| {
        current.clear();
        *current_width = prefix.width();
        if !prefix.is_empty() {
            current.push(InlineSpan::plain(prefix));
        }
    };

    start_line(prefix_first, &mut current, &mut current_width);

    for token in tokens {
        let token_width = token.text().width();
        let token_is_ws = token.text().chars().all(char::is_whitespace);

        if current_width + token_width > width && has_word {
            lines.push(trim_trailing_whitespace(std::mem::take(&mut current)));
            start_line(prefix_next, &mut current, &mut current_width);
            has_word = false;
        }

        if token_is_ws && !has_word {
            continue;
        }

        current_width += token_width;
        current.push(token);
        if !token_is_ws {
            has_word = true;
        }
    }

    lines.push(trim_trailing_whitespace(current));
    lines
}

// Drops trailing whitespace tokens but never a lone prefix.
fn trim_trailing_whitespace(mut line: Vec<InlineSpan>) -> Vec<InlineSpan> {
    while line.len() > 1
        && line
            .last()
            .is_some_and(|span| span.text().chars().all(char::is_whitespace))
    {
        line.pop();
    }
    line
}

fn split_inline_tokens(span: &InlineSpan) -> Vec<InlineSpan> {
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut ws_state: Option<bool> = None;

    for ch in span.text().chars() {
        let is_ws = ch.is_whitespace();
        if ws_state.is_some_and(|state| state != is_ws) {
            out.push(InlineSpan::new(std::mem::take(&mut buf), span.style()));
        }
        buf.push(ch);
        ws_state = Some(is_ws);
    }

    if !buf.is_empty() {
        out.push(InlineSpan::new(buf, span.style()));
    }
    out
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
