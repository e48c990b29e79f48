//! Render payload for one block.

use ratatui::text::{Line, Span};

use super::{BlockStatus, CommandBlock};
use crate::terminal::resolve::to_ratatui_style;
use crate::terminal::{RenderTheme, ScreenCursor, StyledSegment};

/// Everything the UI needs to draw a block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRender {
    pub id: u64,
    /// `"$ command\n"`, if the block has a command
    pub header: Option<String>,
    /// Committed segments followed by the visible active-screen rows
    pub segments: Vec<StyledSegment>,
    pub status: BlockStatus,
    pub cursor: Option<ScreenCursor>,
}

impl CommandBlock {
    /// Build the render payload.
    ///
    /// Visible active rows follow the committed text, one per line. A line
    /// break is inserted first when the committed text does not already end
    /// with one.
    pub fn render(&self) -> BlockRender {
        let mut segments = self.segments.clone();
        let active = self.visible_active_lines();

        if !active.is_empty() {
            let needs_break = segments
                .last()
                .is_some_and(|last| !last.text.ends_with('\n'));
            if needs_break {
                segments.push(StyledSegment::plain("\n"));
            }
            for (i, row) in active.iter().enumerate() {
                if i > 0 {
                    segments.push(StyledSegment::plain("\n"));
                }
                segments.extend(row.iter().cloned());
            }
        }

        BlockRender {
            id: self.id,
            header: self.header_text(),
            segments,
            status: self.status(),
            cursor: self.active_cursor,
        }
    }
}

impl BlockRender {
    /// Plain text of the body (header excluded).
    pub fn body_text(&self) -> String {
        crate::terminal::segments_text(&self.segments)
    }

    /// Split the body into ratatui lines, one per `\n`.
    pub fn to_lines(&self, theme: &RenderTheme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let mut spans: Vec<Span<'static>> = Vec::new();

        for segment in &self.segments {
            let style = to_ratatui_style(&segment.style, theme);
            let mut parts = segment.text.split('\n').peekable();
            while let Some(part) = parts.next() {
                if !part.is_empty() {
                    spans.push(Span::styled(part.to_string(), style));
                }
                if parts.peek().is_some() {
                    lines.push(Line::from(std::mem::take(&mut spans)));
                }
            }
        }

        if !spans.is_empty() {
            lines.push(Line::from(spans));
        }
        lines
    }
}
