//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`style`]: Palette-driven colors
//! - the editor and front-page panes, status bar and overlays
//!
//! Every render function receives the active palette as an argument.

pub mod style;

mod overlays;
mod preview;
mod render;
mod status;

pub use overlays::theme_picker_rect;
pub use preview::front_page_lines;
pub use render::{
    editor_viewport_height, line_number_width, pane_areas, preview_content_width, render,
};

pub const PREVIEW_LEFT_PADDING: u16 = 1;
pub const EDITOR_WIDTH_PERCENT: u16 = 50;
pub const PREVIEW_WIDTH_PERCENT: u16 = 50;
