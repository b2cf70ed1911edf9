use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

use super::style::Palette;

const CHIP: &str = "\u{2588}\u{2588}";

pub fn render_status_bar(model: &Model, palette: &Palette, frame: &mut Frame, area: Rect) {
    let theme = model.active_theme();
    let bar = palette.inverted();
    let mode_label = if model.theme_selection.is_locked() {
        "Locked palette"
    } else {
        "Daily palette"
    };
    let cursor = model.buffer.cursor();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", model.view_mode.as_str().to_uppercase()),
            bar.add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}  ", model.source_label), bar),
    ];
    if model.view_mode.shows_editor() {
        spans.push(Span::styled(
            format!("Ln {}, Col {}  ", cursor.line + 1, cursor.col + 1),
            bar,
        ));
    }
    spans.push(Span::styled(format!("{mode_label}: {}  ", theme.name), bar));
    let tray = Style::default().bg(palette.text);
    spans.push(Span::styled(" ", tray));
    for color in [palette.accent, palette.highlight, palette.background] {
        spans.push(Span::styled(CHIP, tray.fg(color)));
        spans.push(Span::styled(" ", tray));
    }
    spans.push(Span::styled(" F1:help  F2:view  F4:palette", bar));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bar), area);
}

pub fn render_toast_bar(model: &Model, palette: &Palette, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(palette.highlight).fg(palette.background),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
