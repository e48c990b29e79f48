//! Terminal styling data types.
//!
//! Contains the value types shared by the parser, the block model and the
//! renderer:
//! - NamedColor: the 16 standard/bright ANSI color names
//! - Color: named, 256-color palette index, or RGB
//! - Style: optional colors plus boolean attributes
//! - StyledSegment: a run of text in a single style
//! - ScreenRowUpdate: full replacement of one active-screen row

use serde::{Deserialize, Serialize};

/// The 16 standard and bright ANSI color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    /// All names in palette order (index 0..16).
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::BrightBlack,
        NamedColor::BrightRed,
        NamedColor::BrightGreen,
        NamedColor::BrightYellow,
        NamedColor::BrightBlue,
        NamedColor::BrightMagenta,
        NamedColor::BrightCyan,
        NamedColor::BrightWhite,
    ];

    /// Position of this name in the 16-color palette.
    pub fn palette_index(self) -> u8 {
        self as u8
    }

    /// Name for a palette index below 16.
    pub fn from_palette_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Canonical wire name (snake_case).
    pub fn as_str(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
            NamedColor::BrightBlack => "bright_black",
            NamedColor::BrightRed => "bright_red",
            NamedColor::BrightGreen => "bright_green",
            NamedColor::BrightYellow => "bright_yellow",
            NamedColor::BrightBlue => "bright_blue",
            NamedColor::BrightMagenta => "bright_magenta",
            NamedColor::BrightCyan => "bright_cyan",
            NamedColor::BrightWhite => "bright_white",
        }
    }

    /// Parse a color name. Accepts snake_case and camelCase spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .iter()
            .copied()
            .find(|named| named.as_str().replace('_', "") == normalized)
    }

    /// Standard (30-37) foreground name for an SGR offset 0..8.
    pub(crate) fn standard(offset: u16) -> Option<Self> {
        u8::try_from(offset)
            .ok()
            .filter(|o| *o < 8)
            .and_then(Self::from_palette_index)
    }

    /// Bright (90-97) name for an SGR offset 0..8.
    pub(crate) fn bright(offset: u16) -> Option<Self> {
        u8::try_from(offset)
            .ok()
            .filter(|o| *o < 8)
            .and_then(|o| Self::from_palette_index(o + 8))
    }
}

/// A text color as carried by the protocol.
///
/// Resolution to a renderable RGB value lives in [`super::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the 16 standard/bright names
    Named(NamedColor),
    /// 256-color palette index
    Indexed(u8),
    /// RGB color
    Rgb(u8, u8, u8),
    /// RGB color sent together with a palette index; the RGB value wins
    /// for rendering and both are re-emitted on the wire
    IndexedRgb { index: u8, rgb: (u8, u8, u8) },
}

/// Style attributes for a run of text.
///
/// `None` colors mean "renderer default". The default style has no colors
/// and every attribute off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
    pub strikethrough: bool,
}

impl Style {
    /// True when this is the default style.
    pub fn is_default(&self) -> bool {
        *self == Style::default()
    }
}

/// A run of text rendered in a single style.
///
/// Segments produced by the parser never have empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledSegment {
    pub text: String,
    #[serde(default)]
    pub style: Style,
}

impl StyledSegment {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// A segment in the default style.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Concatenate the text of a run of segments.
pub fn segments_text(segments: &[StyledSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

/// Full replacement of one row of the active-screen buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenRowUpdate {
    /// Target row. Out-of-range values are clamped when applied.
    pub row: i64,
    #[serde(default)]
    pub segments: Vec<StyledSegment>,
}

/// Cursor position accompanying a batch of row updates. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScreenCursor {
    pub row: i64,
    pub column: i64,
}
