//! The fixed palette registry.

use std::fmt;

use serde::{Serialize, Serializer};

/// An sRGB colour used by a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swatch {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Swatch {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance approximation (0-255), used to pick readable text.
    pub fn luma(self) -> f32 {
        (0.2126 * f32::from(self.r)) + (0.7152 * f32::from(self.g)) + (0.0722 * f32::from(self.b))
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Swatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A named palette.
///
/// Swatches are ordered `[accent, highlight, background]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub swatches: [Swatch; 3],
}

impl ThemeRecord {
    pub const fn accent(&self) -> Swatch {
        self.swatches[0]
    }

    pub const fn highlight(&self) -> Swatch {
        self.swatches[1]
    }

    pub const fn background(&self) -> Swatch {
        self.swatches[2]
    }
}

// Ids are the stable contract; names are display labels and do not always
// match their id.
static THEMES: [ThemeRecord; 5] = [
    ThemeRecord {
        id: "signal-amber",
        name: "Signal Cyan",
        swatches: [
            Swatch::rgb(0x4f, 0xd2, 0xff),
            Swatch::rgb(0x7a, 0xe3, 0xff),
            Swatch::rgb(0x0a, 0x10, 0x18),
        ],
    },
    ThemeRecord {
        id: "circuit-mint",
        name: "Circuit Mint",
        swatches: [
            Swatch::rgb(0x3f, 0xe0, 0xd0),
            Swatch::rgb(0x7e, 0xf3, 0xff),
            Swatch::rgb(0x07, 0x14, 0x1c),
        ],
    },
    ThemeRecord {
        id: "ion-sky",
        name: "Ion Sky",
        swatches: [
            Swatch::rgb(0x5a, 0xa8, 0xff),
            Swatch::rgb(0x88, 0xd7, 0xff),
            Swatch::rgb(0x0a, 0x12, 0x1f),
        ],
    },
    ThemeRecord {
        id: "oxide-coral",
        name: "Oxide Blue",
        swatches: [
            Swatch::rgb(0x54, 0xc7, 0xff),
            Swatch::rgb(0x63, 0xff, 0xd1),
            Swatch::rgb(0x0c, 0x11, 0x1b),
        ],
    },
    ThemeRecord {
        id: "solar-graphite",
        name: "Solar Ice",
        swatches: [
            Swatch::rgb(0x6f, 0xe1, 0xff),
            Swatch::rgb(0x9b, 0xff, 0xdd),
            Swatch::rgb(0x0f, 0x13, 0x1a),
        ],
    },
];

/// All palettes, in rotation order.
pub fn list_themes() -> &'static [ThemeRecord] {
    &THEMES
}

/// Look up a palette by id.
pub fn find_theme(id: &str) -> Option<&'static ThemeRecord> {
    THEMES.iter().find(|theme| theme.id == id)
}

/// Position of a palette in the registry.
pub fn theme_index(id: &str) -> Option<usize> {
    THEMES.iter().position(|theme| theme.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_registry_is_non_empty_with_unique_ids() {
        let themes = list_themes();
        assert!(!themes.is_empty());
        let ids: HashSet<_> = themes.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), themes.len(), "theme ids must be unique");
    }

    #[test]
    fn test_find_theme_returns_matching_record() {
        let theme = find_theme("ion-sky").expect("ion-sky is registered");
        assert_eq!(theme.name, "Ion Sky");
        assert_eq!(theme.accent().to_string(), "#5aa8ff");
    }

    #[test]
    fn test_find_theme_unknown_id_is_none() {
        assert!(find_theme("neon-city").is_none());
        assert!(find_theme("").is_none());
    }

    #[test]
    fn test_backgrounds_are_darker_than_accents() {
        for theme in list_themes() {
            assert!(theme.background().luma() < theme.accent().luma(), "{}", theme.id);
        }
    }
}
