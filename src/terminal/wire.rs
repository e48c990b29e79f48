//! Wire encoding for colors.
//!
//! A color travels either as a bare string (a named color) or as an object
//! carrying `index` and/or `rgb` (a `"#RRGGBB"` hex string):
//!
//! ```text
//! "bright_red"
//! {"index": 208}
//! {"rgb": "#ff8800"}
//! ```
//!
//! Decoding a bare string yields `Color::Named`. An object yields
//! `Color::Indexed` or `Color::Rgb` when it carries one field, and
//! `Color::IndexedRgb` when it carries both. Encoding re-emits the fields
//! the color was decoded from.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::types::{Color, NamedColor};

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Name(String),
    Object {
        #[serde(default)]
        index: Option<u8>,
        #[serde(default)]
        rgb: Option<String>,
    },
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Color::Named(named) => serializer.serialize_str(named.as_str()),
            Color::Indexed(index) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("index", index)?;
                map.end()
            }
            Color::Rgb(r, g, b) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("rgb", &format_hex_rgb(*r, *g, *b))?;
                map.end()
            }
            Color::IndexedRgb {
                index,
                rgb: (r, g, b),
            } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("index", index)?;
                map.serialize_entry("rgb", &format_hex_rgb(*r, *g, *b))?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match ColorRepr::deserialize(deserializer)? {
            ColorRepr::Name(name) => NamedColor::from_name(&name)
                .map(Color::Named)
                .ok_or_else(|| de::Error::custom(format!("unknown color name: {name:?}"))),
            ColorRepr::Object {
                index,
                rgb: Some(hex),
            } => {
                let rgb = parse_hex_rgb(&hex)
                    .ok_or_else(|| de::Error::custom(format!("invalid rgb color: {hex:?}")))?;
                Ok(match index {
                    Some(index) => Color::IndexedRgb { index, rgb },
                    None => Color::Rgb(rgb.0, rgb.1, rgb.2),
                })
            }
            ColorRepr::Object {
                index: Some(index),
                rgb: None,
            } => Ok(Color::Indexed(index)),
            ColorRepr::Object {
                index: None,
                rgb: None,
            } => Err(de::Error::custom("color object needs `index` or `rgb`")),
        }
    }
}

/// Parse `"#RRGGBB"` (the leading `#` is optional).
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format an RGB triple as lowercase `"#rrggbb"`.
pub fn format_hex_rgb(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}
