//! Headline / standfirst / body segmentation.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::classify::{Block, classify_block};

/// Headline used when the text does not open with a level-1 heading.
pub const DEFAULT_HEADLINE: &str = "Daily Briefing";

/// Separator used to rejoin body blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

// Two or more consecutive line breaks, LF or CRLF.
static BLOCK_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n){2,}").expect("block break pattern is valid"));

/// A document split into newspaper regions.
///
/// Derived from the editor text on every change; never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentedDocument {
    /// Never empty.
    pub headline: String,
    /// Lede paragraph, may be empty.
    pub standfirst: String,
    /// Remaining blocks as markdown, may be empty.
    pub body: String,
}

impl Default for SegmentedDocument {
    fn default() -> Self {
        Self {
            headline: DEFAULT_HEADLINE.to_string(),
            standfirst: String::new(),
            body: String::new(),
        }
    }
}

impl SegmentedDocument {
    /// Body split back into its blocks.
    pub fn body_blocks(&self) -> Vec<&str> {
        split_blocks(&self.body)
    }

    /// True when the headline is the fallback.
    pub fn has_default_headline(&self) -> bool {
        self.headline == DEFAULT_HEADLINE
    }
}

/// Split text into trimmed, non-empty, blank-line-delimited blocks.
pub fn split_blocks(text: &str) -> Vec<&str> {
    BLOCK_BREAK
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Segment markdown into headline, standfirst and body.
///
/// Total over its input: malformed markdown falls through to paragraph
/// handling and empty input yields the default document.
pub fn segment(text: &str) -> SegmentedDocument {
    let blocks = split_blocks(text);
    let Some((first, rest)) = blocks.split_first() else {
        return SegmentedDocument::default();
    };

    let (headline, standfirst, body_start) = match classify_block(first) {
        Block::Heading { level: 1, text } => (text, rest.first().copied(), 2),
        _ => (DEFAULT_HEADLINE, Some(*first), 1),
    };

    let mut body: Vec<&str> = blocks.iter().skip(body_start).copied().collect();
    let standfirst = match standfirst {
        Some(block) if classify_block(block).is_heading() => {
            body.insert(0, block);
            ""
        }
        Some(block) => block,
        None => "",
    };

    let headline = if headline.is_empty() {
        DEFAULT_HEADLINE
    } else {
        headline
    };

    tracing::trace!(
        blocks = blocks.len(),
        body_blocks = body.len(),
        "segmented document"
    );

    SegmentedDocument {
        headline: headline.to_string(),
        standfirst: standfirst.to_string(),
        body: body.join(BLOCK_SEPARATOR),
    }
}
