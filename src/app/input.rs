use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};

use crate::app::{App, Message, Model};
use crate::editor::Direction;

use super::event_loop::ResizeDebouncer;

const WHEEL_LINES: usize = 3;
const TAB_TEXT: &str = "    ";

impl App {
    pub(super) fn handle_event(
        event: Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(key, model),
            Event::Mouse(mouse) => Self::handle_mouse(mouse, model),
            Event::Paste(text) if model.view_mode.shows_editor() && !overlay_open(model) => {
                Some(Message::InsertText(text))
            }
            Event::Resize(w, h) => {
                tracing::trace!(width = w, height = h, "queued resize");
                resize_debouncer.queue(w, h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if overlay_open(model) {
            return None;
        }
        let (width, height) = model.terminal_size;
        let (_, preview) = crate::ui::pane_areas(Rect::new(0, 0, width, height), model.view_mode);
        let over_preview =
            preview.is_some_and(|area| area.contains(Position::new(mouse.column, mouse.row)));
        if !over_preview {
            return None;
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => Some(Message::ScrollDown(WHEEL_LINES)),
            MouseEventKind::ScrollUp => Some(Message::ScrollUp(WHEEL_LINES)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        if model.theme_picker.is_some() {
            return match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(Message::ThemePickerUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Message::ThemePickerDown),
                KeyCode::Enter => Some(Message::ThemePickerConfirm),
                KeyCode::Char('d') => Some(Message::ResetTheme),
                KeyCode::Esc | KeyCode::F(4) => Some(Message::CloseThemePicker),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Message::Quit)
                }
                _ => None,
            };
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        // Global keys
        match key.code {
            KeyCode::F(1) => return Some(Message::ToggleHelp),
            KeyCode::F(2) => return Some(Message::CycleView),
            KeyCode::F(4) => return Some(Message::OpenThemePicker),
            KeyCode::PageUp => return Some(Message::PageUp),
            KeyCode::PageDown => return Some(Message::PageDown),
            KeyCode::Char('t' | 'T') if ctrl && shift => return Some(Message::PreviousTheme),
            KeyCode::Char('t') if ctrl => return Some(Message::NextTheme),
            KeyCode::Char('r') if ctrl => return Some(Message::ResetTheme),
            KeyCode::Char('q' | 'c') if ctrl => return Some(Message::Quit),
            _ => {}
        }

        if model.view_mode.shows_editor() {
            return Self::handle_editor_key(key);
        }

        // Preview only
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Message::ScrollUp(1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::ScrollDown(1)),
            KeyCode::Char(' ') => Some(Message::PageDown),
            KeyCode::Char('b') => Some(Message::PageUp),
            KeyCode::Home | KeyCode::Char('g') => Some(Message::ScrollUp(usize::MAX)),
            KeyCode::End | KeyCode::Char('G') => Some(Message::ScrollDown(usize::MAX)),
            KeyCode::Char('q') => Some(Message::Quit),
            _ => None,
        }
    }

    fn handle_editor_key(key: KeyEvent) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char(c)
                if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(Message::InsertChar(c))
            }
            KeyCode::Enter => Some(Message::SplitLine),
            KeyCode::Tab => Some(Message::InsertText(TAB_TEXT.to_string())),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Delete => Some(Message::DeleteForward),
            KeyCode::Home if ctrl => Some(Message::MoveToStart),
            KeyCode::End if ctrl => Some(Message::MoveToEnd),
            KeyCode::Home => Some(Message::MoveHome),
            KeyCode::End => Some(Message::MoveEnd),
            KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
            _ => None,
        }
    }

    pub(super) fn view(model: &mut Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

const fn overlay_open(model: &Model) -> bool {
    model.help_visible || model.theme_picker.is_some()
}
