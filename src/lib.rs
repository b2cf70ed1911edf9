// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. theme::ThemeRecord)
    clippy::module_name_repetitions
)]

//! # Broadsheet
//!
//! A terminal markdown editor with a live newspaper-style front page.
//!
//! Broadsheet splits the screen into an editor and a preview:
//! - The first `#` heading becomes the headline
//! - The first paragraph becomes the standfirst
//! - Everything else flows into the body
//! - The colour palette rotates daily, with a per-session override
//!
//! ## Architecture
//!
//! Broadsheet uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`config`]: View modes and saved defaults
//! - [`document`]: Block classification, segmentation and source loading
//! - [`editor`]: The in-memory text buffer
//! - [`render`]: Markdown to HTML and to terminal lines
//! - [`theme`]: Palette registry and daily selection
//! - [`ui`]: Terminal UI components

pub mod app;
pub mod config;
pub mod document;
pub mod editor;
pub mod render;
pub mod theme;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::document::{SegmentedDocument, segment};
    pub use crate::theme::{ThemeRecord, ThemeSelection, active_theme, daily_theme};
}
