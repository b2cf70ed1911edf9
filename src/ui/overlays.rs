use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;
use crate::theme::list_themes;

use super::style::Palette;

pub fn theme_picker_rect(area: Rect, items_len: usize) -> Rect {
    let popup_width = area.width.saturating_sub(16).clamp(36, 56);
    // The registry has a handful of entries
    #[allow(clippy::cast_possible_truncation)]
    let needed_rows = items_len as u16 + 6;
    let popup_height = needed_rows.min(area.height.saturating_sub(2).max(8));
    centered_popup_rect(popup_width, popup_height, area)
}

pub fn render_theme_picker(
    model: &Model,
    palette: &Palette,
    selected: usize,
    frame: &mut Frame,
    area: Rect,
) {
    let themes = list_themes();
    let popup = theme_picker_rect(area, themes.len());
    let daily_id = model.daily_theme().id;
    let locked_id = model.theme_selection.override_id();

    let mut lines: Vec<Line> = Vec::new();
    for (idx, theme) in themes.iter().enumerate() {
        let marker = if idx == selected { ">" } else { " " };
        let mut name_style = Style::default().fg(palette.text);
        if idx == selected {
            name_style = name_style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        let mut spans = vec![Span::raw(format!("{marker} "))];
        for swatch in theme.swatches {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().fg(palette.swatch(swatch)),
            ));
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(theme.name, name_style));
        if theme.id == daily_id {
            spans.push(Span::styled("  today", Style::default().fg(palette.muted)));
        }
        if locked_id == Some(theme.id) {
            spans.push(Span::styled(
                "  locked",
                Style::default().fg(palette.highlight),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Up/Down move \u{00b7} Enter lock \u{00b7} d daily \u{00b7} Esc close",
        Style::default().fg(palette.muted),
    ));

    let block = Block::default()
        .title(" Palette ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .padding(Padding::horizontal(1))
        .style(palette.base());
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

pub fn render_help_overlay(model: &Model, palette: &Palette, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::styled("Editing", section_style),
        Line::raw("  Type                Edit the story"),
        Line::raw("  Arrows, Home/End    Move the cursor"),
        Line::raw("  Ctrl+Home/End       Start / end of text"),
        Line::raw(""),
        Line::styled("View", section_style),
        Line::raw("  F2                  Split / editor / preview"),
        Line::raw("  PageUp/PageDown     Scroll preview"),
        Line::raw("  j/k, Space, g/G     Scroll (preview only)"),
        Line::raw(""),
        Line::styled("Palette", section_style),
        Line::raw("  F4                  Pick a palette"),
        Line::raw("  Ctrl-t / Ctrl-T     Next / previous palette"),
        Line::raw("  Ctrl-r              Back to today's palette"),
        Line::raw(""),
        Line::styled("Other", section_style),
        Line::raw("  F1                  Toggle help"),
        Line::raw("  Ctrl-q / Ctrl-c     Quit"),
        Line::raw(""),
        Line::styled("Config", section_style),
        Line::raw(format!("  Global: {global_cfg}")),
        Line::raw(format!("  Local override: {local_cfg}")),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .padding(Padding::uniform(1))
        .style(palette.base());

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
