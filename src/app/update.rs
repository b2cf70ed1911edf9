use crate::app::{Dates, Model, ToastLevel};
use crate::config::ViewMode;
use crate::editor::Direction;
use crate::theme::registry::theme_index;
use crate::theme::{Cycle, find_theme, list_themes};

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert a character at the cursor
    InsertChar(char),
    /// Insert pasted text at the cursor
    InsertText(String),
    /// Split line at cursor (Enter)
    SplitLine,
    /// Delete character before cursor (Backspace)
    DeleteBack,
    /// Delete character at cursor (Delete)
    DeleteForward,
    /// Replace the whole text
    ReplaceText(String),
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to beginning of line (Home)
    MoveHome,
    /// Move cursor to end of line (End)
    MoveEnd,
    /// Move cursor to start of buffer (Ctrl+Home)
    MoveToStart,
    /// Move cursor to end of buffer (Ctrl+End)
    MoveToEnd,

    // Preview
    /// Scroll preview up by n lines
    ScrollUp(usize),
    /// Scroll preview down by n lines
    ScrollDown(usize),
    /// Scroll preview up one page
    PageUp,
    /// Scroll preview down one page
    PageDown,

    // View
    /// Switch to the next view mode
    CycleView,
    /// Switch to a specific view mode
    SetView(ViewMode),
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Palette
    /// Lock the palette to the theme after the active one
    NextTheme,
    /// Lock the palette to the theme before the active one
    PreviousTheme,
    /// Lock the palette to a theme id
    PickTheme(String),
    /// Go back to the daily palette
    ResetTheme,
    /// Open the palette picker
    OpenThemePicker,
    /// Close the palette picker without choosing
    CloseThemePicker,
    /// Move the picker highlight up
    ThemePickerUp,
    /// Move the picker highlight down
    ThemePickerDown,
    /// Lock the highlighted picker row
    ThemePickerConfirm,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// The local or UTC calendar day changed
    DateChanged(Dates),

    // Application
    /// Quit the application
    Quit,
}

impl Message {
    /// Whether this message changes the document text.
    pub const fn edits_text(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::InsertText(_)
                | Self::SplitLine
                | Self::DeleteBack
                | Self::DeleteForward
                | Self::ReplaceText(_)
        )
    }
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    let revision = model.buffer.revision();
    let edits_text = msg.edits_text();

    match msg {
        // Editing
        Message::InsertChar(ch) => model.buffer.insert_char(ch),
        Message::InsertText(text) => model.buffer.insert_str(&text),
        Message::SplitLine => model.buffer.split_line(),
        Message::DeleteBack => {
            model.buffer.delete_back();
        }
        Message::DeleteForward => {
            model.buffer.delete_forward();
        }
        Message::ReplaceText(text) => model.buffer.replace_all(&text),
        Message::MoveCursor(direction) => model.buffer.move_cursor(direction),
        Message::MoveHome => model.buffer.move_home(),
        Message::MoveEnd => model.buffer.move_end(),
        Message::MoveToStart => model.buffer.move_to_start(),
        Message::MoveToEnd => model.buffer.move_to_end(),

        // Preview
        Message::ScrollUp(n) => model.scroll_preview_by(-to_delta(n)),
        Message::ScrollDown(n) => model.scroll_preview_by(to_delta(n)),
        Message::PageUp => {
            let page = preview_page(&model);
            model.scroll_preview_by(-page);
        }
        Message::PageDown => {
            let page = preview_page(&model);
            model.scroll_preview_by(page);
        }

        // View
        Message::CycleView => model.view_mode = model.view_mode.next(),
        Message::SetView(mode) => model.view_mode = mode,
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
            if model.help_visible {
                model.theme_picker = None;
            }
        }
        Message::HideHelp => model.help_visible = false,

        // Palette
        Message::NextTheme => cycle_theme(&mut model, Cycle::Next),
        Message::PreviousTheme => cycle_theme(&mut model, Cycle::Previous),
        Message::PickTheme(id) => {
            if find_theme(&id).is_some() {
                model.theme_selection.pick(id);
                announce_theme(&mut model);
            } else {
                tracing::warn!(id = %id, "unknown palette id");
                model.show_toast(ToastLevel::Warning, format!("Unknown palette: {id}"));
            }
        }
        Message::ResetTheme => {
            model.theme_selection.reset();
            model.theme_picker = None;
            announce_theme(&mut model);
        }
        Message::OpenThemePicker => {
            model.help_visible = false;
            model.open_theme_picker();
        }
        Message::CloseThemePicker => model.theme_picker = None,
        Message::ThemePickerUp => model.move_theme_picker(false),
        Message::ThemePickerDown => model.move_theme_picker(true),
        Message::ThemePickerConfirm => {
            if let Some(theme) = model
                .theme_picker
                .take()
                .and_then(|index| list_themes().get(index))
            {
                model.theme_selection.pick(theme.id);
                announce_theme(&mut model);
            }
        }

        // Window
        Message::Resize(width, height) => {
            model.terminal_size = (width, height);
            model.preview_scroll = model.preview_scroll.min(model.max_preview_scroll());
        }
        Message::DateChanged(dates) => model.set_dates(dates),

        // Application
        Message::Quit => model.should_quit = true,
    }

    if edits_text && model.buffer.revision() != revision {
        model.resegment();
    }
    let height = crate::ui::editor_viewport_height(model.terminal_size);
    model.ensure_cursor_visible(height);

    model
}

fn cycle_theme(model: &mut Model, direction: Cycle) {
    let daily = model.daily_theme();
    model.theme_selection.cycle(direction, daily);
    if let Some(index) = model.theme_picker.as_mut()
        && let Some(active) = theme_index(model.theme_selection.resolve(daily).id)
    {
        *index = active;
    }
    announce_theme(model);
}

fn announce_theme(model: &mut Model) {
    let theme = model.active_theme();
    tracing::debug!(
        theme = theme.id,
        locked = model.theme_selection.is_locked(),
        "active palette changed"
    );
    let message = if model.theme_selection.is_locked() {
        format!("Palette locked: {}", theme.name)
    } else {
        format!("Daily palette: {}", theme.name)
    };
    model.show_toast(ToastLevel::Info, message);
}

fn preview_page(model: &Model) -> isize {
    to_delta(model.preview_viewport_height.saturating_sub(1).max(1))
}

fn to_delta(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}
