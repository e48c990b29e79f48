//! SGR (Select Graphic Rendition) handler.
//!
//! Applies CSI m parameters to a running style:
//! - Colors (foreground and background, named, 256-color and RGB)
//! - Attributes (bold, dim, italic, underline, reverse, strikethrough)
//!
//! Unknown codes are ignored.

use super::super::types::{Color, NamedColor, Style};

/// Split a CSI parameter string into SGR codes.
///
/// Empty parameters count as `0`, so an empty string yields `[0]`.
/// Parameters that are not plain decimal numbers are dropped.
pub fn parse_sgr_params(raw: &str) -> Vec<u16> {
    raw.split(';')
        .filter_map(|part| {
            if part.is_empty() {
                Some(0)
            } else if part.bytes().all(|b| b.is_ascii_digit()) {
                // Overlong numbers saturate rather than being dropped
                Some(part.parse::<u16>().unwrap_or(u16::MAX))
            } else {
                None
            }
        })
        .collect()
}

/// Apply SGR codes, in order, to the running style.
///
/// An empty slice is a no-op; the "no parameters means reset" rule is
/// handled by [`parse_sgr_params`].
pub fn apply_sgr(style: &mut Style, params: &[u16]) {
    let mut iter = params.iter().peekable();

    while let Some(&param) = iter.next() {
        match param {
            0 => *style = Style::default(), // Reset
            1 => style.bold = true,
            2 => style.dim = true,
            3 => style.italic = true,
            4 => style.underline = true,
            7 => style.reverse = true,
            9 => style.strikethrough = true,
            22 => {
                style.bold = false;
                style.dim = false;
            }
            23 => style.italic = false,
            24 => style.underline = false,
            27 => style.reverse = false,
            29 => style.strikethrough = false,
            30..=37 => style.foreground = NamedColor::standard(param - 30).map(Color::Named),
            38 => {
                if let Some(color) = parse_extended_color(&mut iter) {
                    style.foreground = Some(color);
                }
            }
            39 => style.foreground = None,
            40..=47 => style.background = NamedColor::standard(param - 40).map(Color::Named),
            48 => {
                if let Some(color) = parse_extended_color(&mut iter) {
                    style.background = Some(color);
                }
            }
            49 => style.background = None,
            90..=97 => style.foreground = NamedColor::bright(param - 90).map(Color::Named),
            100..=107 => style.background = NamedColor::bright(param - 100).map(Color::Named),
            _ => {}
        }
    }
}

/// Parse extended color (256-color or RGB) following a 38/48 code.
///
/// Consumes the mode and its arguments; returns `None` when they are
/// missing or out of range.
fn parse_extended_color(
    iter: &mut std::iter::Peekable<std::slice::Iter<'_, u16>>,
) -> Option<Color> {
    match iter.next().copied()? {
        5 => {
            // 256-color mode
            let idx = iter.next().copied()?;
            u8::try_from(idx).ok().map(Color::Indexed)
        }
        2 => {
            // RGB mode
            let r = u8::try_from(iter.next().copied()?).ok();
            let g = u8::try_from(iter.next().copied()?).ok();
            let b = u8::try_from(iter.next().copied()?).ok();
            Some(Color::Rgb(r?, g?, b?))
        }
        _ => None,
    }
}
