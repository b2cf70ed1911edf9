use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::config::ViewMode;
use crate::document::{SegmentedDocument, segment};
use crate::editor::EditorBuffer;
use crate::theme::{ThemeRecord, ThemeSelection, daily_theme, list_themes, registry::theme_index};

const TOAST_DURATION: Duration = Duration::from_secs(3);

/// The two calendar days the app tracks.
///
/// A UTC instant belongs to one palette day everywhere; the masthead
/// prints the reader's wall-clock day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dates {
    /// Local calendar day, printed in the masthead
    pub local: NaiveDate,
    /// UTC calendar day, which picks the daily palette
    pub utc: NaiveDate,
}

impl Dates {
    /// Both days as seen at `now`.
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self {
            local: now.date_naive(),
            utc: now.with_timezone(&Utc).date_naive(),
        }
    }

    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    /// One fixed day for both clocks (`--date`).
    pub const fn pinned(date: NaiveDate) -> Self {
        Self {
            local: date,
            utc: date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state. The document text
/// and the palette selection are the only things the user mutates; the
/// segmented document and the daily palette are derived from them.
pub struct Model {
    /// The document text
    pub buffer: EditorBuffer,
    /// Segmentation of `buffer`, refreshed on every edit
    document: SegmentedDocument,
    /// Which panes are visible
    pub view_mode: ViewMode,
    /// Session palette override
    pub theme_selection: ThemeSelection,
    /// Masthead day and palette day
    dates: Dates,
    /// Palette scheduled for `dates.utc`
    daily: &'static ThemeRecord,
    /// Whether `dates` follows the clock (false when pinned by `--date`)
    pub follow_clock: bool,
    /// Where the text came from, for the status bar
    pub source_label: String,
    /// Terminal size in cells
    pub terminal_size: (u16, u16),
    /// Optional maximum preview column width
    pub wrap_width: Option<u16>,
    /// First visible editor line
    pub editor_scroll_offset: usize,
    /// First visible preview line
    pub preview_scroll: usize,
    /// Preview height in lines as of the last render
    pub preview_total_lines: usize,
    /// Preview viewport height as of the last render
    pub preview_viewport_height: usize,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Highlighted row when the palette picker is open
    pub theme_picker: Option<usize>,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("view_mode", &self.view_mode)
            .field("theme_selection", &self.theme_selection)
            .field("dates", &self.dates)
            .field("revision", &self.buffer.revision())
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a model over `buffer`, with both clocks on `today`.
    pub fn new(buffer: EditorBuffer, today: NaiveDate, terminal_size: (u16, u16)) -> Self {
        let document = segment(&buffer.text());
        Self {
            buffer,
            document,
            view_mode: ViewMode::default(),
            theme_selection: ThemeSelection::default(),
            dates: Dates::pinned(today),
            daily: daily_theme(today),
            follow_clock: true,
            source_label: "sample".to_string(),
            terminal_size,
            wrap_width: None,
            editor_scroll_offset: 0,
            preview_scroll: 0,
            preview_total_lines: 0,
            preview_viewport_height: 0,
            help_visible: false,
            theme_picker: None,
            config_global_path: None,
            config_local_path: None,
            toast: None,
            should_quit: false,
        }
    }

    /// The current segmentation of the text.
    pub const fn document(&self) -> &SegmentedDocument {
        &self.document
    }

    /// The local day shown in the masthead.
    pub const fn today(&self) -> NaiveDate {
        self.dates.local
    }

    pub const fn dates(&self) -> Dates {
        self.dates
    }

    /// The palette scheduled for today, ignoring any override.
    pub const fn daily_theme(&self) -> &'static ThemeRecord {
        self.daily
    }

    /// The palette to draw with.
    ///
    /// This is the only source of display colours; the view receives it as
    /// a value.
    pub fn active_theme(&self) -> &'static ThemeRecord {
        self.theme_selection.resolve(self.daily)
    }

    /// Recompute the segmentation after the text changed.
    pub(super) fn resegment(&mut self) {
        self.document = segment(&self.buffer.text());
        tracing::debug!(
            revision = self.buffer.revision(),
            headline = %self.document.headline,
            "resegmented document"
        );
    }

    /// Move to new calendar days, refreshing the daily palette when the
    /// UTC day changed.
    pub(super) fn set_dates(&mut self, dates: Dates) {
        if dates.utc != self.dates.utc {
            self.daily = daily_theme(dates.utc);
            tracing::info!(day = %dates.utc, theme = self.daily.id, "daily palette rolled over");
        }
        self.dates = dates;
    }

    pub(super) fn open_theme_picker(&mut self) {
        let index = theme_index(self.active_theme().id).unwrap_or(0);
        self.theme_picker = Some(index);
    }

    pub(super) fn move_theme_picker(&mut self, forward: bool) {
        let count = list_themes().len();
        if let Some(index) = self.theme_picker.as_mut() {
            *index = if forward {
                (*index + 1) % count
            } else {
                (*index + count - 1) % count
            };
        }
    }

    pub fn max_preview_scroll(&self) -> usize {
        self.preview_total_lines
            .saturating_sub(self.preview_viewport_height)
    }

    pub(super) fn scroll_preview_by(&mut self, delta: isize) {
        self.preview_scroll = self
            .preview_scroll
            .saturating_add_signed(delta)
            .min(self.max_preview_scroll());
    }

    /// Keep the editor cursor inside a viewport of `height` lines.
    pub fn ensure_cursor_visible(&mut self, height: usize) {
        let line = self.buffer.cursor().line;
        if height == 0 {
            self.editor_scroll_offset = line;
            return;
        }
        if line < self.editor_scroll_offset {
            self.editor_scroll_offset = line;
        } else if line >= self.editor_scroll_offset + height {
            self.editor_scroll_offset = line + 1 - height;
        }
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    /// Drop an expired toast. Returns `true` if one was removed.
    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(EditorBuffer::empty(), NaiveDate::default(), (80, 24))
    }
}
