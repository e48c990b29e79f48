//! Global document index.
//!
//! Lays every block's header line and committed output end to end in one
//! character-offset space so selection and copy can span blocks as if the
//! session were a single text buffer. The index is derived: rebuild it from
//! the block list whenever any block changes, never patch it.
//!
//! Active-screen rows are not part of the document.

pub mod columns;
pub mod selection;

pub use selection::{DragEdge, Selection, SelectionState};

use crate::blocks::{CommandBlock, HEADER_PREFIX};

/// A half-open character range `[offset, offset + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct TextRange {
    pub offset: usize,
    pub length: usize,
}

impl TextRange {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Range between two offsets in either order.
    pub fn between(a: usize, b: usize) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self::new(start, end - start)
    }

    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Overlap with `other`, or `None` when it is empty.
    pub fn intersect(&self, other: &TextRange) -> Option<TextRange> {
        let start = self.offset.max(other.offset);
        let end = self.end().min(other.end());
        (start < end).then(|| TextRange::between(start, end))
    }
}

/// Which part of a block a global segment covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentKind {
    /// The synthetic `"$ command\n"` line
    Header,
    /// Committed output text
    Output,
}

/// Placement of one block part in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalSegment {
    pub block_index: usize,
    pub kind: SegmentKind,
    pub range: TextRange,
}

/// Offset map over the concatenation of all block headers and outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalDocument {
    total_length: usize,
    segments: Vec<GlobalSegment>,
}

impl GlobalDocument {
    /// Build the index from the block list.
    ///
    /// Blocks contribute a header segment when they have a command and an
    /// output segment when their committed text is non-empty.
    pub fn build(blocks: &[CommandBlock]) -> Self {
        let mut segments = Vec::with_capacity(blocks.len() * 2);
        let mut offset = 0;

        for (block_index, block) in blocks.iter().enumerate() {
            if let Some(header) = block.header_text() {
                let length = header.chars().count();
                segments.push(GlobalSegment {
                    block_index,
                    kind: SegmentKind::Header,
                    range: TextRange::new(offset, length),
                });
                offset += length;
            }

            let length: usize = block.segments().iter().map(|s| s.char_len()).sum();
            if length > 0 {
                segments.push(GlobalSegment {
                    block_index,
                    kind: SegmentKind::Output,
                    range: TextRange::new(offset, length),
                });
                offset += length;
            }
        }

        Self {
            total_length: offset,
            segments,
        }
    }

    pub fn total_length(&self) -> usize {
        self.total_length
    }

    pub fn segments(&self) -> &[GlobalSegment] {
        &self.segments
    }

    /// The segment for a block part, if that part is present.
    pub fn segment(&self, block_index: usize, kind: SegmentKind) -> Option<&GlobalSegment> {
        // Segments are sorted by (block_index, kind)
        let idx = self
            .segments
            .partition_point(|s| (s.block_index, s.kind) < (block_index, kind));
        self.segments
            .get(idx)
            .filter(|s| s.block_index == block_index && s.kind == kind)
    }

    /// Translate a block-local offset to a global offset.
    ///
    /// The local offset is clamped into the segment, so the result always
    /// lies in `[segment.offset, segment.offset + segment.length]`.
    pub fn hit_test(&self, block_index: usize, kind: SegmentKind, local_offset: i64) -> Option<usize> {
        let segment = self.segment(block_index, kind)?;
        let local = usize::try_from(local_offset.max(0))
            .unwrap_or(usize::MAX)
            .min(segment.range.length);
        Some(segment.range.offset + local)
    }

    /// Intersect a global range with one block part, in local coordinates.
    pub fn local_range(
        &self,
        global: TextRange,
        block_index: usize,
        kind: SegmentKind,
    ) -> Option<TextRange> {
        let segment = self.segment(block_index, kind)?;
        let overlap = segment.range.intersect(&global)?;
        Some(TextRange::new(
            overlap.offset - segment.range.offset,
            overlap.length,
        ))
    }

    /// Find the block part containing a global offset.
    ///
    /// Returns `(block_index, kind, local_offset)`. The document end maps to
    /// the end of the last segment.
    pub fn locate(&self, global_offset: usize) -> Option<(usize, SegmentKind, usize)> {
        let idx = self
            .segments
            .partition_point(|s| s.range.end() <= global_offset);
        let segment = self.segments.get(idx).or_else(|| {
            (global_offset == self.total_length)
                .then(|| self.segments.last())
                .flatten()
        })?;
        let local = global_offset.saturating_sub(segment.range.offset);
        Some((segment.block_index, segment.kind, local.min(segment.range.length)))
    }

    /// Copy text for a global range.
    ///
    /// Each intersected part contributes its slice in document order; the
    /// `"$ "` prefix of header lines is left out.
    pub fn extract_text(&self, blocks: &[CommandBlock], range: TextRange) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            let Some(overlap) = segment.range.intersect(&range) else {
                continue;
            };
            let Some(block) = blocks.get(segment.block_index) else {
                continue;
            };
            let start = overlap.offset - segment.range.offset;
            let end = start + overlap.length;

            match segment.kind {
                SegmentKind::Header => {
                    let Some(header) = block.header_text() else {
                        continue;
                    };
                    let prefix_len = HEADER_PREFIX.chars().count();
                    out.push_str(char_slice(&header, start.max(prefix_len), end));
                }
                SegmentKind::Output => {
                    out.push_str(char_slice(&block.output_text(), start, end));
                }
            }
        }
        out
    }

    /// The full document text, header prefixes included.
    pub fn text(&self, blocks: &[CommandBlock]) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            let Some(block) = blocks.get(segment.block_index) else {
                continue;
            };
            match segment.kind {
                SegmentKind::Header => out.push_str(&block.header_text().unwrap_or_default()),
                SegmentKind::Output => out.push_str(&block.output_text()),
            }
        }
        out
    }
}

/// Slice `s` by character indices; out-of-range bounds clamp.
pub(crate) fn char_slice(s: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let byte_at = |char_idx: usize| {
        s.char_indices()
            .nth(char_idx)
            .map(|(byte, _)| byte)
            .unwrap_or(s.len())
    };
    let start_byte = byte_at(start);
    let end_byte = byte_at(end);
    &s[start_byte..end_byte]
}
