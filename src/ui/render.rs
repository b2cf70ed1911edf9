use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::Model;
use crate::config::ViewMode;
use crate::document::masthead::EDITOR_PLACEHOLDER;

use super::style::Palette;
use super::{EDITOR_WIDTH_PERCENT, PREVIEW_LEFT_PADDING, PREVIEW_WIDTH_PERCENT, overlays, preview, status};

/// Split the screen into the editor and preview panes for a view mode.
///
/// `area` is the whole terminal; the bottom row is kept for the status bar.
pub fn pane_areas(area: Rect, view_mode: ViewMode) -> (Option<Rect>, Option<Rect>) {
    let main = main_area(area);
    match view_mode {
        ViewMode::Split => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(EDITOR_WIDTH_PERCENT),
                    Constraint::Percentage(PREVIEW_WIDTH_PERCENT),
                ])
                .split(main);
            (Some(chunks[0]), Some(chunks[1]))
        }
        ViewMode::Edit => (Some(main), None),
        ViewMode::Preview => (None, Some(main)),
    }
}

fn main_area(area: Rect) -> Rect {
    Rect {
        height: area.height.saturating_sub(1),
        ..area
    }
}

/// Number of text rows inside the editor pane for a terminal size.
pub fn editor_viewport_height(terminal_size: (u16, u16)) -> usize {
    // status bar + top and bottom border
    usize::from(terminal_size.1.saturating_sub(3))
}

/// Text width inside a preview pane, capped by the configured wrap width.
pub fn preview_content_width(pane_width: u16, wrap_width: Option<u16>) -> u16 {
    let inner = pane_width
        .saturating_sub(2)
        .saturating_sub(PREVIEW_LEFT_PADDING * 2)
        .max(1);
    match wrap_width {
        Some(w) if w > 0 => inner.min(w),
        _ => inner,
    }
}

/// Render the complete UI.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    let palette = Palette::from_theme(model.active_theme());

    frame.render_widget(Block::default().style(palette.base()), area);

    let (editor, preview) = pane_areas(area, model.view_mode);
    if let Some(editor_area) = editor {
        render_editor(model, &palette, frame, editor_area);
    }
    if let Some(preview_area) = preview {
        render_preview(model, &palette, frame, preview_area);
    }

    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1.min(area.height),
        ..area
    };
    status::render_status_bar(model, &palette, frame, status_area);

    if model.active_toast().is_some() && area.height > 2 {
        let toast_area = Rect {
            y: status_area.y.saturating_sub(1),
            height: 1,
            ..area
        };
        status::render_toast_bar(model, &palette, frame, toast_area);
    }

    if model.help_visible {
        overlays::render_help_overlay(model, &palette, frame, area);
    } else if let Some(selected) = model.theme_picker {
        overlays::render_theme_picker(model, &palette, selected, frame, area);
    }
}

fn pane_block<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base())
}

fn render_editor(model: &mut Model, palette: &Palette, frame: &mut Frame, area: Rect) {
    let block = pane_block(" Editor ", palette);
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let visible_height = usize::from(inner.height);
    model.ensure_cursor_visible(visible_height);
    let buf = &model.buffer;

    if buf.is_empty() {
        let placeholder = Line::styled(
            EDITOR_PLACEHOLDER,
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        );
        frame.render_widget(Paragraph::new(placeholder), inner);
        frame.set_cursor_position(Position::new(inner.x, inner.y));
        return;
    }

    let total_lines = buf.line_count();
    let gutter_width = usize::from(line_number_width(total_lines));
    let start = model.editor_scroll_offset;
    let end = (start + visible_height).min(total_lines);
    let cursor = buf.cursor();
    let gutter_style = Style::default().fg(palette.muted);

    let content: Vec<Line> = (start..end)
        .map(|line_idx| {
            let line_text = buf.line_at(line_idx).unwrap_or_default();
            let gutter_style = if line_idx == cursor.line {
                gutter_style.fg(palette.accent)
            } else {
                gutter_style
            };
            Line::from(vec![
                Span::styled(
                    format!("{:>gutter_width$} ", line_idx + 1),
                    gutter_style,
                ),
                Span::raw(line_text),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(content), inner);

    if cursor.line >= start && cursor.line < end {
        let row = u16::try_from(cursor.line - start).unwrap_or(u16::MAX);
        let col = u16::try_from(gutter_width + 1 + buf.cursor_display_col()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(col).min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y.saturating_add(row)));
    }
}

fn render_preview(model: &mut Model, palette: &Palette, frame: &mut Frame, area: Rect) {
    let block = pane_block(" Front Page ", palette);
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let width = preview_content_width(area.width, model.wrap_width);
    let lines = preview::front_page_lines(model.document(), model.today(), palette, width);

    model.preview_total_lines = lines.len();
    model.preview_viewport_height = usize::from(inner.height);
    model.preview_scroll = model.preview_scroll.min(model.max_preview_scroll());

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(model.preview_scroll)
        .take(usize::from(inner.height))
        .collect();
    let content_area = Rect {
        x: inner.x + PREVIEW_LEFT_PADDING,
        width: inner.width.saturating_sub(PREVIEW_LEFT_PADDING),
        ..inner
    };
    frame.render_widget(Paragraph::new(visible), content_area);
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}
