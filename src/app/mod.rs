//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Dates, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::config::ViewMode;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    text: String,
    source_label: String,
    dates: Dates,
    follow_clock: bool,
    view_mode: ViewMode,
    theme_override: Option<String>,
    wrap_width: Option<u16>,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a new application editing `text`.
    ///
    /// The dates follow the system clock until pinned with [`App::with_date`].
    pub fn new(text: impl Into<String>) -> Self {
        Self::starting_at(text, &Local::now())
    }

    /// Create an application whose clock starts at `now`.
    ///
    /// The masthead shows the day in `now`'s time zone; the daily palette
    /// follows the UTC day of the same instant.
    pub fn starting_at<Tz: TimeZone>(text: impl Into<String>, now: &DateTime<Tz>) -> Self {
        Self {
            text: text.into(),
            source_label: "sample".to_string(),
            dates: Dates::at(now),
            follow_clock: true,
            view_mode: ViewMode::default(),
            theme_override: None,
            wrap_width: None,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Label the text's origin in the status bar.
    pub fn with_source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = label.into();
        self
    }

    /// Set the initial view mode.
    pub const fn with_view_mode(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    /// Start with the palette locked to `id`.
    ///
    /// An id missing from the registry behaves like no override.
    pub fn with_theme_override(mut self, id: Option<String>) -> Self {
        self.theme_override = id;
        self
    }

    /// Pin both calendar days instead of following the clock.
    pub const fn with_date(mut self, date: Option<NaiveDate>) -> Self {
        if let Some(date) = date {
            self.dates = Dates::pinned(date);
            self.follow_clock = false;
        }
        self
    }

    /// Cap the preview text width.
    pub const fn with_wrap_width(mut self, width: Option<u16>) -> Self {
        self.wrap_width = width;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}

#[cfg(test)]
mod tests;
