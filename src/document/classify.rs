//! Block classification.
//!
//! The single place that decides whether a block of markdown is an ATX
//! heading. Everything downstream matches on [`Block`] instead of
//! re-sniffing the text.

/// A classified markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// One or more `#` markers followed by whitespace.
    Heading { level: usize, text: &'a str },
    /// Anything else.
    Paragraph(&'a str),
}

impl<'a> Block<'a> {
    /// True for a single-marker heading, the only kind that can headline.
    pub const fn is_headline(&self) -> bool {
        matches!(self, Self::Heading { level: 1, .. })
    }

    pub const fn is_heading(&self) -> bool {
        matches!(self, Self::Heading { .. })
    }

    /// The block text without any heading marker.
    pub const fn text(&self) -> &'a str {
        match *self {
            Self::Heading { text, .. } | Self::Paragraph(text) => text,
        }
    }
}

/// Classify a block.
///
/// The marker run must be followed by at least one whitespace character,
/// which may be a line break. `#hashtag` and a bare `#` stay paragraphs.
pub fn classify_block(block: &str) -> Block<'_> {
    let level = block.chars().take_while(|&ch| ch == '#').count();
    if level == 0 {
        return Block::Paragraph(block);
    }
    // '#' is one byte, so the marker run ends at byte `level`.
    let rest = &block[level..];
    match rest.chars().next() {
        Some(ch) if ch.is_whitespace() => Block::Heading {
            level,
            text: rest.trim(),
        },
        _ => Block::Paragraph(block),
    }
}
