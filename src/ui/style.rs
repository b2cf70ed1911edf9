//! Palette-driven colors.
//!
//! Every color on screen derives from the active theme's three swatches.
//! The palette is built once per frame from the theme the model resolves and
//! handed to each widget explicitly.

use ratatui::style::{Color, Modifier, Style};

use crate::render::{InlineStyle, LineType};
use crate::theme::{Swatch, ThemeRecord};

const LIGHT_TEXT: Swatch = Swatch::rgb(0xe6, 0xed, 0xf3);
const DARK_TEXT: Swatch = Swatch::rgb(0x14, 0x18, 0x1f);
const MID_LUMA: f32 = 128.0;

/// Terminal colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub highlight: Color,
    pub background: Color,
    /// Body text, chosen to contrast with `background`
    pub text: Color,
    /// Secondary text (rules, code, meta)
    pub muted: Color,
    truecolor: bool,
}

impl Palette {
    /// Build a palette, detecting truecolor support from the environment.
    pub fn from_theme(theme: &ThemeRecord) -> Self {
        Self::new(theme, supports_truecolor())
    }

    /// Build a palette, mapping to the xterm 256-color cube when
    /// `truecolor` is false.
    pub fn new(theme: &ThemeRecord, truecolor: bool) -> Self {
        let convert = |swatch: Swatch| swatch_color(swatch, truecolor);
        let (text, muted) = if theme.background().luma() < MID_LUMA {
            (LIGHT_TEXT, Swatch::rgb(0x8b, 0x95, 0xa1))
        } else {
            (DARK_TEXT, Swatch::rgb(0x5c, 0x64, 0x70))
        };
        Self {
            accent: convert(theme.accent()),
            highlight: convert(theme.highlight()),
            background: convert(theme.background()),
            text: convert(text),
            muted: convert(muted),
            truecolor,
        }
    }

    /// Convert any swatch with this palette's color depth.
    pub fn swatch(&self, swatch: Swatch) -> Color {
        swatch_color(swatch, self.truecolor)
    }

    /// Base style for a pane: text on background.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Inverted accent style for bars and chips.
    pub fn inverted(&self) -> Style {
        Style::default().fg(self.background).bg(self.accent)
    }
}

/// Get the style for a given line type.
pub fn style_for_line_type(palette: &Palette, line_type: LineType) -> Style {
    let base = palette.base();
    match line_type {
        LineType::Heading(1) => base
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        LineType::Heading(2) => base.fg(palette.highlight).add_modifier(Modifier::BOLD),
        LineType::Heading(_) => base.fg(palette.accent).add_modifier(Modifier::BOLD),
        LineType::CodeBlock | LineType::HorizontalRule => base.fg(palette.muted),
        LineType::BlockQuote => base.fg(palette.highlight).add_modifier(Modifier::ITALIC),
        LineType::ListItem(_) | LineType::Table | LineType::Paragraph | LineType::Empty => base,
    }
}

/// Get the style for an inline span, merged with a base line style.
pub fn style_for_inline(palette: &Palette, base: Style, inline: InlineStyle) -> Style {
    let mut style = base;
    if inline.emphasis {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if inline.strong {
        style = style.add_modifier(Modifier::BOLD);
    }
    if inline.strikethrough {
        style = style.add_modifier(Modifier::CROSSED_OUT);
    }
    if inline.link {
        style = style
            .fg(palette.highlight)
            .add_modifier(Modifier::UNDERLINED);
    }
    if inline.code {
        style = style.fg(palette.accent).add_modifier(Modifier::BOLD);
    }
    style
}

/// Convert a swatch to a terminal color.
pub fn swatch_color(swatch: Swatch, truecolor: bool) -> Color {
    if truecolor {
        Color::Rgb(swatch.r, swatch.g, swatch.b)
    } else {
        Color::Indexed(rgb_to_xterm_256(swatch.r, swatch.g, swatch.b))
    }
}

fn supports_truecolor() -> bool {
    if let Ok(force) = std::env::var("BROADSHEET_TRUECOLOR") {
        let value = force.to_ascii_lowercase();
        return matches!(value.as_str(), "1" | "true" | "yes" | "on");
    }
    supports_truecolor_from_env(
        std::env::var("COLORTERM").ok().as_deref(),
        std::env::var("TERM").ok().as_deref(),
    )
}

fn supports_truecolor_from_env(colorterm: Option<&str>, term: Option<&str>) -> bool {
    if let Some(ct) = colorterm {
        let lower = ct.to_ascii_lowercase();
        if lower.contains("truecolor") || lower.contains("24bit") {
            return true;
        }
    }
    if let Some(t) = term {
        let lower = t.to_ascii_lowercase();
        if lower.contains("direct") || lower.contains("truecolor") {
            return true;
        }
    }
    false
}

fn rgb_to_xterm_256(r: u8, g: u8, b: u8) -> u8 {
    // Result is always 0-5, fits in u8
    #[allow(clippy::cast_possible_truncation)]
    let to_cube = |v: u8| ((u16::from(v) * 5) / 255) as u8;
    16 + (36 * to_cube(r)) + (6 * to_cube(g)) + to_cube(b)
}
