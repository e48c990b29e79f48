//! Active-screen row updates.
//!
//! Full-screen and interactive programs repaint by sending whole rows.
//! Each update replaces one row of the block's active screen; rows beyond
//! the current length grow the buffer with empty rows in between.

use super::CommandBlock;
use crate::terminal::{ScreenCursor, ScreenRowUpdate, StyledSegment};

/// Highest number of rows an active screen may hold.
pub const MAX_SCREEN_ROWS: usize = 4096;

/// Clamp a wire row index into `0..MAX_SCREEN_ROWS`.
pub(crate) fn clamp_row(row: i64) -> usize {
    usize::try_from(row.max(0))
        .unwrap_or(usize::MAX)
        .min(MAX_SCREEN_ROWS - 1)
}

fn is_blank_row(row: &[StyledSegment]) -> bool {
    row.iter().all(|s| s.text.trim().is_empty())
}

impl CommandBlock {
    /// Apply a batch of row replacements.
    ///
    /// Returns `false` (and changes nothing) once the block is finished.
    pub fn apply_screen_updates(
        &mut self,
        updates: &[ScreenRowUpdate],
        cursor: Option<ScreenCursor>,
    ) -> bool {
        if self.is_finished {
            return false;
        }

        for update in updates {
            let row = clamp_row(update.row);
            if row >= self.active_screen_lines.len() {
                self.active_screen_lines.resize_with(row + 1, Vec::new);
            }
            self.active_screen_lines[row] = update
                .segments
                .iter()
                .filter(|s| !s.text.is_empty())
                .cloned()
                .collect();
        }

        if cursor.is_some() {
            self.active_cursor = cursor;
        }
        true
    }

    /// Active rows with blank leading and trailing rows removed.
    pub fn visible_active_lines(&self) -> &[Vec<StyledSegment>] {
        let lines = self.active_screen_lines.as_slice();
        let Some(first) = lines.iter().position(|row| !is_blank_row(row)) else {
            return &[];
        };
        let last = lines
            .iter()
            .rposition(|row| !is_blank_row(row))
            .unwrap_or(first);
        &lines[first..=last]
    }
}
