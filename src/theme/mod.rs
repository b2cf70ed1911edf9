//! Palettes and the theme-of-the-day rotation.
//!
//! - [`registry`]: the fixed, ordered palette list
//! - [`selection`]: date-driven rotation plus the session override

pub mod registry;
pub mod selection;

pub use registry::{Swatch, ThemeRecord, find_theme, list_themes};
pub use selection::{Cycle, ThemeSelection, active_theme, daily_theme, daily_theme_at, day_of_year};
