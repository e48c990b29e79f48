//! Style resolution.
//!
//! Maps protocol colors to concrete RGB values and a [`Style`] to what a
//! renderer needs: effective foreground/background after reverse video and
//! independent font traits.

use ratatui::style::{Color as TuiColor, Modifier, Style as TuiStyle};

use super::types::{Color, Style};
use super::wire::parse_hex_rgb;
use crate::config::RenderConfig;

/// A concrete 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `"#RRGGBB"`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        parse_hex_rgb(hex).map(|(r, g, b)| Self::new(r, g, b))
    }
}

/// The standard 16-color palette (xterm defaults).
pub const ANSI_PALETTE: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(205, 0, 0),
    Rgb::new(0, 205, 0),
    Rgb::new(205, 205, 0),
    Rgb::new(0, 0, 238),
    Rgb::new(205, 0, 205),
    Rgb::new(0, 205, 205),
    Rgb::new(229, 229, 229),
    Rgb::new(127, 127, 127),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(92, 92, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 255),
];

/// Colors substituted where a style leaves a color unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTheme {
    /// Used when a style has no foreground
    pub default_foreground: Rgb,
    /// `None` keeps an absent background transparent
    pub default_background: Option<Rgb>,
    /// Foreground used when reverse video swaps in an absent background
    pub reverse_fallback: Rgb,
}

impl Default for RenderTheme {
    fn default() -> Self {
        Self {
            default_foreground: Rgb::new(0xd4, 0xd4, 0xd4),
            default_background: None,
            reverse_fallback: Rgb::new(0xd4, 0xd4, 0xd4),
        }
    }
}

impl RenderTheme {
    /// Build a theme from the `[render]` config section.
    ///
    /// Unparseable values fall back to the built-in defaults.
    pub fn from_config(config: &RenderConfig) -> Self {
        let defaults = Self::default();
        let color = |field: &str, value: &str, fallback: Rgb| {
            Rgb::from_hex(value).unwrap_or_else(|| {
                tracing::warn!(field = field, value = value, "Invalid color in config");
                fallback
            })
        };

        let default_background = if config.default_background.trim().is_empty() {
            None
        } else {
            Rgb::from_hex(&config.default_background).or_else(|| {
                tracing::warn!(
                    field = "default_background",
                    value = %config.default_background,
                    "Invalid color in config"
                );
                None
            })
        };

        Self {
            default_foreground: color(
                "default_foreground",
                &config.default_foreground,
                defaults.default_foreground,
            ),
            default_background,
            reverse_fallback: color(
                "reverse_fallback",
                &config.reverse_fallback,
                defaults.reverse_fallback,
            ),
        }
    }
}

/// Font and decoration traits, independent of color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontTraits {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

/// What a renderer needs to draw one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub foreground: Rgb,
    /// `None` is transparent
    pub background: Option<Rgb>,
    pub traits: FontTraits,
    /// Renderer may lower opacity; no exact value is implied
    pub dim: bool,
}

/// Resolve a protocol color to RGB.
///
/// Indexed 0-15 use the 16-color palette, 16-231 the 6x6x6 cube and
/// 232-255 a 24-step grayscale ramp.
pub fn resolve_color(color: Color) -> Rgb {
    match color {
        Color::Named(named) => ANSI_PALETTE[usize::from(named.palette_index())],
        Color::Indexed(index) => resolve_indexed(index),
        Color::Rgb(r, g, b)
        | Color::IndexedRgb {
            rgb: (r, g, b), ..
        } => Rgb::new(r, g, b),
    }
}

fn resolve_indexed(index: u8) -> Rgb {
    match index {
        0..=15 => ANSI_PALETTE[usize::from(index)],
        16..=231 => {
            let i = index - 16;
            let level = |c: u8| c * 51; // c / 5 * 255
            Rgb::new(level((i / 36) % 6), level((i / 6) % 6), level(i % 6))
        }
        _ => {
            let step = f64::from(index - 232) / 23.0;
            let level = (step * 255.0).round() as u8;
            Rgb::new(level, level, level)
        }
    }
}

/// Resolve a style against a theme, applying reverse video.
pub fn resolve(style: &Style, theme: &RenderTheme) -> ResolvedStyle {
    let foreground = style
        .foreground
        .map(resolve_color)
        .unwrap_or(theme.default_foreground);
    let background = style
        .background
        .map(resolve_color)
        .or(theme.default_background);

    let (foreground, background) = if style.reverse {
        (
            background.unwrap_or(theme.reverse_fallback),
            Some(foreground),
        )
    } else {
        (foreground, background)
    };

    ResolvedStyle {
        foreground,
        background,
        traits: FontTraits {
            bold: style.bold,
            italic: style.italic,
            underline: style.underline,
            strikethrough: style.strikethrough,
        },
        dim: style.dim,
    }
}

/// Convert a style to a ratatui style using resolved colors.
pub fn to_ratatui_style(style: &Style, theme: &RenderTheme) -> TuiStyle {
    let resolved = resolve(style, theme);
    let to_tui = |c: Rgb| TuiColor::Rgb(c.r, c.g, c.b);

    let mut tui_style = TuiStyle::default().fg(to_tui(resolved.foreground));
    if let Some(bg) = resolved.background {
        tui_style = tui_style.bg(to_tui(bg));
    }
    if resolved.traits.bold {
        tui_style = tui_style.add_modifier(Modifier::BOLD);
    }
    if resolved.dim {
        tui_style = tui_style.add_modifier(Modifier::DIM);
    }
    if resolved.traits.italic {
        tui_style = tui_style.add_modifier(Modifier::ITALIC);
    }
    if resolved.traits.underline {
        tui_style = tui_style.add_modifier(Modifier::UNDERLINED);
    }
    if resolved.traits.strikethrough {
        tui_style = tui_style.add_modifier(Modifier::CROSSED_OUT);
    }
    tui_style
}
