use std::time::{Duration, Instant};

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::config::ViewMode;
use crate::document::DEFAULT_HEADLINE;
use crate::editor::{Direction, EditorBuffer};
use crate::theme::{daily_theme_at, list_themes};

use super::event_loop::ResizeDebouncer;
use super::{App, Dates, Message, Model, ToastLevel, update};

fn new_year() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

fn create_test_model() -> Model {
    let buffer = EditorBuffer::from_text("# Test\n\nLede\n\nBody");
    Model::new(buffer, new_year(), (80, 24))
}

fn create_empty_model() -> Model {
    Model::new(EditorBuffer::empty(), new_year(), (80, 24))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(mut model: Model, text: &str) -> Model {
    for ch in text.chars() {
        let msg = if ch == '\n' {
            Message::SplitLine
        } else {
            Message::InsertChar(ch)
        };
        model = update(model, msg);
    }
    model
}

#[test]
fn test_model_segments_initial_text() {
    let model = create_test_model();
    let doc = model.document();
    assert_eq!(doc.headline, "Test");
    assert_eq!(doc.standfirst, "Lede");
    assert_eq!(doc.body, "Body");
}

#[test]
fn test_typing_resegments_synchronously() {
    let model = create_empty_model();
    assert_eq!(model.document().headline, DEFAULT_HEADLINE);

    let model = type_text(model, "# Morning");
    assert_eq!(model.document().headline, "Morning");
    assert!(model.document().standfirst.is_empty());

    let model = type_text(model, "\n\nFirst words");
    assert_eq!(model.document().standfirst, "First words");
}

#[test]
fn test_delete_back_resegments() {
    let model = type_text(create_empty_model(), "# A\n\nB");
    assert_eq!(model.document().standfirst, "B");
    let model = update(model, Message::DeleteBack);
    assert!(model.document().standfirst.is_empty());
    assert_eq!(model.document().headline, "A");
}

#[test]
fn test_replace_text_with_blank_restores_default_document() {
    let model = update(create_test_model(), Message::ReplaceText("   \n\n  ".to_string()));
    assert!(model.document().has_default_headline());
    assert!(model.document().standfirst.is_empty());
    assert!(model.document().body.is_empty());
}

#[test]
fn test_cursor_movement_does_not_bump_revision() {
    let model = create_test_model();
    let revision = model.buffer.revision();
    let model = update(model, Message::MoveCursor(Direction::Down));
    let model = update(model, Message::MoveEnd);
    assert_eq!(model.buffer.revision(), revision);
    assert_eq!(model.buffer.cursor().line, 1);
}

#[test]
fn test_daily_palette_on_new_year_is_first_theme() {
    let model = create_test_model();
    assert_eq!(model.active_theme().id, list_themes()[0].id);
    assert!(!model.theme_selection.is_locked());
}

#[test]
fn test_next_theme_locks_and_reset_returns_to_daily() {
    let model = update(create_test_model(), Message::NextTheme);
    assert!(model.theme_selection.is_locked());
    assert_eq!(model.active_theme().id, list_themes()[1].id);

    let model = update(model, Message::ResetTheme);
    assert!(!model.theme_selection.is_locked());
    assert_eq!(model.active_theme().id, list_themes()[0].id);
}

#[test]
fn test_previous_theme_wraps_to_last() {
    let model = update(create_test_model(), Message::PreviousTheme);
    let last = list_themes().last().unwrap();
    assert_eq!(model.active_theme().id, last.id);
}

#[test]
fn test_pick_unknown_theme_keeps_selection_and_warns() {
    let model = update(create_test_model(), Message::PickTheme("sepia".to_string()));
    assert!(!model.theme_selection.is_locked());
    let (message, level) = model.active_toast().expect("toast should be set");
    assert!(message.contains("sepia"));
    assert_eq!(level, ToastLevel::Warning);
}

#[test]
fn test_theme_picker_starts_on_active_theme_and_locks_on_confirm() {
    let model = update(create_test_model(), Message::PickTheme(list_themes()[2].id.to_string()));
    let model = update(model, Message::OpenThemePicker);
    assert_eq!(model.theme_picker, Some(2));

    let model = update(model, Message::ThemePickerDown);
    let model = update(model, Message::ThemePickerConfirm);
    assert_eq!(model.theme_picker, None);
    assert_eq!(model.active_theme().id, list_themes()[3].id);
}

#[test]
fn test_theme_picker_wraps_upward() {
    let model = update(create_test_model(), Message::OpenThemePicker);
    let model = update(model, Message::ThemePickerUp);
    assert_eq!(model.theme_picker, Some(list_themes().len() - 1));
}

#[test]
fn test_close_theme_picker_changes_nothing() {
    let model = update(create_test_model(), Message::OpenThemePicker);
    let model = update(model, Message::ThemePickerDown);
    let model = update(model, Message::CloseThemePicker);
    assert_eq!(model.theme_picker, None);
    assert!(!model.theme_selection.is_locked());
}

#[test]
fn test_date_change_rolls_daily_palette_but_keeps_lock() {
    let model = create_test_model();
    let next_day = new_year().succ_opt().unwrap();
    let model = update(model, Message::DateChanged(Dates::pinned(next_day)));
    assert_eq!(model.today(), next_day);
    assert_eq!(model.active_theme().id, list_themes()[1].id);

    let model = update(model, Message::PickTheme(list_themes()[4].id.to_string()));
    let model = update(model, Message::DateChanged(Dates::pinned(new_year())));
    assert_eq!(model.active_theme().id, list_themes()[4].id);
    assert_eq!(model.daily_theme().id, list_themes()[0].id);
}

#[test]
fn test_local_day_change_keeps_palette() {
    let model = create_test_model();
    let next_day = new_year().succ_opt().unwrap();
    let dates = Dates {
        local: next_day,
        utc: new_year(),
    };
    let model = update(model, Message::DateChanged(dates));
    assert_eq!(model.today(), next_day);
    assert_eq!(model.daily_theme().id, list_themes()[0].id);
}

#[test]
fn test_palette_follows_utc_day_while_masthead_follows_local_day() {
    // 08:04 UTC on 1 January is still 31 December at UTC-10
    let instant = Utc.with_ymd_and_hms(2026, 1, 1, 8, 4, 0).unwrap();
    let hawaii = FixedOffset::west_opt(10 * 3600).unwrap();
    let model = App::starting_at("x", &instant.with_timezone(&hawaii)).build_model((80, 24));

    assert_eq!(model.today(), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    assert_eq!(model.dates().utc, new_year());
    assert_eq!(model.daily_theme().id, daily_theme_at(instant).id);
    assert_eq!(model.daily_theme().id, list_themes()[0].id);
}

#[test]
fn test_dates_at_splits_local_and_utc_days() {
    let instant = Utc.with_ymd_and_hms(2026, 6, 30, 23, 30, 0).unwrap();
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    let dates = Dates::at(&instant.with_timezone(&tokyo));
    assert_eq!(dates.local, NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());
    assert_eq!(dates.utc, NaiveDate::from_ymd_opt(2026, 6, 30).unwrap());
}

#[test]
fn test_cycle_view_visits_every_mode() {
    let mut model = create_test_model();
    assert_eq!(model.view_mode, ViewMode::Split);
    for expected in [ViewMode::Edit, ViewMode::Preview, ViewMode::Split] {
        model = update(model, Message::CycleView);
        assert_eq!(model.view_mode, expected);
    }
}

#[test]
fn test_preview_scroll_is_clamped() {
    let mut model = create_test_model();
    model.preview_total_lines = 100;
    model.preview_viewport_height = 20;

    let model = update(model, Message::PageDown);
    assert_eq!(model.preview_scroll, 19);

    let model = update(model, Message::ScrollDown(usize::MAX));
    assert_eq!(model.preview_scroll, 80);

    let model = update(model, Message::ScrollUp(5));
    assert_eq!(model.preview_scroll, 75);

    let model = update(model, Message::ScrollUp(usize::MAX));
    assert_eq!(model.preview_scroll, 0);
}

#[test]
fn test_editor_scroll_follows_cursor() {
    let model = Model::new(EditorBuffer::empty(), new_year(), (80, 10));
    let model = type_text(model, &"line\n".repeat(20));
    assert_eq!(model.buffer.cursor().line, 20);
    let height = crate::ui::editor_viewport_height((80, 10));
    assert_eq!(model.editor_scroll_offset, 21 - height);

    let model = update(model, Message::MoveToStart);
    assert_eq!(model.editor_scroll_offset, 0);
}

#[test]
fn test_toggle_help_changes_visibility() {
    let model = update(create_test_model(), Message::ToggleHelp);
    assert!(model.help_visible);
    let model = update(model, Message::HideHelp);
    assert!(!model.help_visible);
}

#[test]
fn test_toast_lifecycle() {
    let mut model = update(create_test_model(), Message::NextTheme);
    let (message, level) = model.active_toast().expect("toast should be set");
    assert!(message.starts_with("Palette locked"));
    assert_eq!(level, ToastLevel::Info);

    assert!(!model.expire_toast(Instant::now()));
    assert!(model.expire_toast(Instant::now() + Duration::from_secs(10)));
    assert!(model.active_toast().is_none());
}

#[test]
fn test_quit_sets_flag() {
    let model = update(create_test_model(), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_function_keys_map_to_global_actions() {
    let model = create_test_model();
    assert_eq!(App::handle_key(key(KeyCode::F(1)), &model), Some(Message::ToggleHelp));
    assert_eq!(App::handle_key(key(KeyCode::F(2)), &model), Some(Message::CycleView));
    assert_eq!(
        App::handle_key(key(KeyCode::F(4)), &model),
        Some(Message::OpenThemePicker)
    );
    assert_eq!(App::handle_key(ctrl('t'), &model), Some(Message::NextTheme));
    assert_eq!(App::handle_key(ctrl('r'), &model), Some(Message::ResetTheme));
    assert_eq!(App::handle_key(ctrl('q'), &model), Some(Message::Quit));
    assert_eq!(App::handle_key(ctrl('c'), &model), Some(Message::Quit));
}

#[test]
fn test_ctrl_shift_t_moves_to_previous_theme() {
    let model = create_test_model();
    let key = KeyEvent::new(
        KeyCode::Char('T'),
        KeyModifiers::CONTROL | KeyModifiers::SHIFT,
    );
    assert_eq!(App::handle_key(key, &model), Some(Message::PreviousTheme));
}

#[test]
fn test_text_keys_edit_when_editor_visible() {
    let model = create_test_model();
    assert_eq!(
        App::handle_key(key(KeyCode::Char('q')), &model),
        Some(Message::InsertChar('q'))
    );
    assert_eq!(App::handle_key(key(KeyCode::Enter), &model), Some(Message::SplitLine));
    assert_eq!(
        App::handle_key(key(KeyCode::Left), &model),
        Some(Message::MoveCursor(Direction::Left))
    );
    assert_eq!(
        App::handle_key(KeyEvent::new(KeyCode::Home, KeyModifiers::CONTROL), &model),
        Some(Message::MoveToStart)
    );
}

#[test]
fn test_arrows_scroll_in_preview_only_mode() {
    let model = update(create_test_model(), Message::SetView(ViewMode::Preview));
    assert_eq!(App::handle_key(key(KeyCode::Down), &model), Some(Message::ScrollDown(1)));
    assert_eq!(App::handle_key(key(KeyCode::Up), &model), Some(Message::ScrollUp(1)));
    assert_eq!(App::handle_key(key(KeyCode::Char('x')), &model), None);
    assert_eq!(App::handle_key(key(KeyCode::Char('q')), &model), Some(Message::Quit));
}

#[test]
fn test_theme_picker_keys() {
    let model = update(create_test_model(), Message::OpenThemePicker);
    assert_eq!(App::handle_key(key(KeyCode::Down), &model), Some(Message::ThemePickerDown));
    assert_eq!(App::handle_key(key(KeyCode::Up), &model), Some(Message::ThemePickerUp));
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::ThemePickerConfirm)
    );
    assert_eq!(App::handle_key(key(KeyCode::Char('d')), &model), Some(Message::ResetTheme));
    assert_eq!(App::handle_key(key(KeyCode::Esc), &model), Some(Message::CloseThemePicker));
    assert_eq!(App::handle_key(key(KeyCode::Char('x')), &model), None);
}

#[test]
fn test_any_key_closes_help() {
    let model = update(create_test_model(), Message::ToggleHelp);
    assert_eq!(App::handle_key(key(KeyCode::Char('a')), &model), Some(Message::HideHelp));
}

#[test]
fn test_paste_inserts_text_in_editor() {
    let model = create_test_model();
    let mut debouncer = ResizeDebouncer::new(100);
    let msg = App::handle_event(
        Event::Paste("pasted".to_string()),
        &model,
        0,
        &mut debouncer,
    );
    assert_eq!(msg, Some(Message::InsertText("pasted".to_string())));

    let model = update(model, Message::SetView(ViewMode::Preview));
    let msg = App::handle_event(Event::Paste("x".to_string()), &model, 0, &mut debouncer);
    assert_eq!(msg, None);
}

#[test]
fn test_resize_event_is_debounced() {
    let model = create_test_model();
    let mut debouncer = ResizeDebouncer::new(100);
    let msg = App::handle_event(Event::Resize(100, 30), &model, 0, &mut debouncer);
    assert_eq!(msg, None);
    assert!(debouncer.is_pending());
}

#[test]
fn test_mouse_wheel_scrolls_preview_only_over_preview() {
    let model = update(create_test_model(), Message::SetView(ViewMode::Preview));
    let wheel = |column| MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column,
        row: 2,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(App::handle_mouse(wheel(10), &model), Some(Message::ScrollDown(3)));

    let model = update(model, Message::SetView(ViewMode::Edit));
    assert_eq!(App::handle_mouse(wheel(10), &model), None);
}

#[test]
fn test_build_model_applies_builder_settings() {
    let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let app = App::new("# Hello\n\nWorld")
        .with_view_mode(ViewMode::Preview)
        .with_theme_override(Some(list_themes()[3].id.to_string()))
        .with_date(Some(date))
        .with_wrap_width(Some(60))
        .with_source_label("story.md");
    let model = app.build_model((100, 30));

    assert_eq!(model.view_mode, ViewMode::Preview);
    assert_eq!(model.today(), date);
    assert!(!model.follow_clock);
    assert_eq!(model.wrap_width, Some(60));
    assert_eq!(model.source_label, "story.md");
    assert_eq!(model.active_theme().id, list_themes()[3].id);
    assert_eq!(model.document().headline, "Hello");
}

#[test]
fn test_build_model_with_unknown_override_uses_daily() {
    let app = App::new("")
        .with_theme_override(Some("nope".to_string()))
        .with_date(Some(new_year()));
    let model = app.build_model((80, 24));
    assert_eq!(model.active_theme().id, list_themes()[0].id);
}

#[test]
fn test_resize_debouncer_waits_for_quiet_period() {
    let mut debouncer = ResizeDebouncer::new(100);
    debouncer.queue(120, 40, 0);

    assert!(debouncer.take_ready(50).is_none());
    assert_eq!(debouncer.take_ready(100), Some((120, 40)));
}

#[test]
fn test_resize_debouncer_keeps_latest_size() {
    let mut debouncer = ResizeDebouncer::new(100);
    debouncer.queue(120, 40, 0);
    debouncer.queue(140, 50, 20);

    assert!(debouncer.take_ready(80).is_none());
    assert_eq!(debouncer.take_ready(120), Some((140, 50)));
}
