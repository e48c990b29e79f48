//! Mapping between UI (line, column) points and character offsets.
//!
//! Columns are display columns: wide characters take two, zero-width
//! characters none.

use unicode_width::UnicodeWidthChar;

/// Character offset of the character under `(line, column)` in `text`.
///
/// Columns past the end of a line clamp to the line end (before its `\n`);
/// lines past the end of the text clamp to the text end.
pub fn offset_for_point(text: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    let mut current_line = 0;
    let mut current_column = 0;

    for c in text.chars() {
        if c == '\n' {
            if current_line == line {
                return offset;
            }
            current_line += 1;
            current_column = 0;
            offset += 1;
            continue;
        }
        if current_line == line {
            let width = c.width().unwrap_or(0);
            if current_column + width > column {
                return offset;
            }
            current_column += width;
        }
        offset += 1;
    }
    offset
}

/// Display `(line, column)` of a character offset in `text`.
pub fn point_for_offset(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 0;
    let mut column = 0;
    for c in text.chars().take(offset) {
        if c == '\n' {
            line += 1;
            column = 0;
        } else {
            column += c.width().unwrap_or(0);
        }
    }
    (line, column)
}
