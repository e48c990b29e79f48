//! Terminal output styling.
//!
//! Parses raw output containing ANSI escape sequences into styled text
//! segments and resolves styles to concrete colors for rendering.
//!
//! Only SGR styling affects the result. Cursor movement, erase, scroll and
//! mode sequences are recognized and consumed; OSC strings and charset
//! designations are skipped. This is not a screen emulator.

mod handlers;
mod parser;
pub mod resolve;
mod types;
pub mod wire;

pub use handlers::style::{apply_sgr, parse_sgr_params};
pub use parser::{AnsiParser, MAX_HELD_SEQUENCE};
pub use resolve::{resolve, resolve_color, FontTraits, RenderTheme, ResolvedStyle, Rgb};
pub use types::{
    segments_text, Color, NamedColor, ScreenCursor, ScreenRowUpdate, Style, StyledSegment,
};
