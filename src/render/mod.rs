//! Markdown rendering backends.
//!
//! Both backends sit on comrak and treat it as a black box:
//! - [`html`]: markdown to HTML, plus the composed front page
//! - [`terminal`]: markdown to styled, wrapped terminal lines

pub mod html;
mod terminal;
mod types;

use comrak::Options;

pub use html::{render_html, render_page};
pub use terminal::{render_lines, wrap_plain};
pub use types::{InlineSpan, InlineStyle, LineType, RenderedLine};

// Common markdown plus the GFM pieces authors reach for in articles.
fn configure_options(options: &mut Options) {
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
}
