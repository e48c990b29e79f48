//! blockterm library
//!
//! Styling and selection engine for a block-based terminal front end.
//! Raw command output with ANSI escape sequences is parsed into styled
//! segments, grouped into command blocks, and indexed as one global
//! document so a mouse-drag selection can span blocks.

pub mod blocks;
pub mod clipboard;
pub mod config;
pub mod document;
pub mod session;
pub mod terminal;

pub use blocks::{BlockRender, BlockStatus, CommandBlock};
pub use config::Config;
pub use document::{GlobalDocument, SegmentKind, Selection, TextRange};
pub use session::{EventError, ServerEvent, Session};
pub use terminal::{AnsiParser, Color, NamedColor, Style, StyledSegment};
