//! Session controller.
//!
//! Owns the block list, the running parser, the derived global document and
//! the selection, and applies server events to them in arrival order. Every
//! change to committed text rebuilds the document before the call returns,
//! so readers never see a document built from a different block list.

mod error;
mod event;

pub use error::EventError;
pub use event::{CommandHistoryRecord, ServerEvent};

use tracing::{debug, warn};

use crate::blocks::{BlockRender, CommandBlock};
use crate::config::Config;
use crate::document::{DragEdge, GlobalDocument, SegmentKind, Selection, TextRange};
use crate::terminal::{AnsiParser, ScreenCursor, ScreenRowUpdate, StyledSegment};

/// Selection highlight for one block, in block-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockHighlights {
    /// Range within the `"$ command\n"` header line
    pub header: Option<TextRange>,
    /// Range within the committed output text
    pub output: Option<TextRange>,
}

#[derive(Debug, Clone)]
pub struct Session {
    blocks: Vec<CommandBlock>,
    /// Index of the block receiving output, if any
    current: Option<usize>,
    next_id: u64,
    parser: AnsiParser,
    document: GlobalDocument,
    selection: Selection,
    autoscroll_step: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            current: None,
            next_id: 1,
            parser: AnsiParser::new(),
            document: GlobalDocument::default(),
            selection: Selection::default(),
            autoscroll_step: Config::default().autoscroll_step(),
        }
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            autoscroll_step: config.autoscroll_step(),
            ..Self::new()
        }
    }

    pub fn blocks(&self) -> &[CommandBlock] {
        &self.blocks
    }

    pub fn current_block_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_block(&self) -> Option<&CommandBlock> {
        self.current.and_then(|idx| self.blocks.get(idx))
    }

    pub fn document(&self) -> &GlobalDocument {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Decode and apply one JSON event.
    ///
    /// A decode failure leaves the session untouched.
    pub fn apply_json(&mut self, json: &str) -> Result<(), EventError> {
        match ServerEvent::from_json(json) {
            Ok(event) => {
                self.apply(event);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Dropped undecodable server event");
                Err(err)
            }
        }
    }

    /// Apply one decoded event.
    pub fn apply(&mut self, event: ServerEvent) {
        debug!(kind = event.kind(), "Applying server event");
        match event {
            ServerEvent::CommandStart { command, cwd } => self.command_start(command, cwd),
            ServerEvent::CommandEnd { exit_code, cwd } => self.command_end(exit_code, cwd),
            ServerEvent::Output {
                segments: Some(segments),
                ..
            } => self.append_segments(segments),
            ServerEvent::Output {
                data: Some(data), ..
            } => self.append_raw(&data),
            ServerEvent::Output { .. } => debug!("Ignored empty output event"),
            ServerEvent::ScreenRowUpdate {
                updates,
                cursor_row,
                cursor_column,
            } => self.screen_update(
                &updates,
                Some(ScreenCursor {
                    row: cursor_row,
                    column: cursor_column,
                }),
            ),
            ServerEvent::History { commands } => self.load_history(commands),
        }
    }

    /// A command started: open a new current block.
    pub fn command_start(&mut self, command: Option<String>, cwd: Option<String>) {
        if let Some(open) = self.current_block() {
            debug!(id = open.id(), "Command started while previous block still open");
        }
        let id = self.allocate_id();
        debug!(id = id, command = ?command, "Command started");
        self.parser.reset();
        self.blocks.push(CommandBlock::start(id, command, cwd));
        self.current = Some(self.blocks.len() - 1);
        self.rebuild();
    }

    /// The current command finished. No-op when no block is open.
    pub fn command_end(&mut self, exit_code: i32, cwd: Option<String>) {
        let Some(idx) = self.current.take() else {
            debug!(exit_code = exit_code, "Command end without an open block");
            return;
        };
        if let Some(block) = self.blocks.get_mut(idx) {
            block.finish(exit_code, cwd);
            debug!(id = block.id(), exit_code = exit_code, "Command finished");
        }
        self.parser.reset();
        self.rebuild();
    }

    /// Append raw output, parsing escape sequences.
    pub fn append_raw(&mut self, data: &str) {
        let segments = self.parser.parse(data);
        self.append_segments(segments);
    }

    /// Append pre-parsed output segments.
    pub fn append_segments(&mut self, segments: Vec<StyledSegment>) {
        if segments.iter().all(|s| s.text.is_empty()) {
            return;
        }
        let idx = self.ensure_current();
        self.blocks[idx].append(segments);
        self.rebuild();
    }

    /// Replace active-screen rows of the current block.
    ///
    /// Committed text is untouched, so the document is not rebuilt.
    pub fn screen_update(&mut self, updates: &[ScreenRowUpdate], cursor: Option<ScreenCursor>) {
        let idx = self.ensure_current();
        self.blocks[idx].apply_screen_updates(updates, cursor);
    }

    /// Replace the block list with server history.
    ///
    /// An unfinished last record becomes current again. The selection is
    /// cleared since block indices no longer refer to the same text.
    pub fn load_history(&mut self, records: Vec<CommandHistoryRecord>) {
        let non_empty = |s: String| (!s.is_empty()).then_some(s);
        self.blocks = records
            .into_iter()
            .map(|record| {
                CommandBlock::restore(
                    record.id,
                    non_empty(record.command),
                    record.segments,
                    record.exit_code,
                    non_empty(record.cwd_start),
                    non_empty(record.cwd_end),
                    record.is_finished,
                )
            })
            .collect();

        self.current = self
            .blocks
            .last()
            .filter(|block| !block.is_finished())
            .map(|_| self.blocks.len() - 1);
        self.next_id = self
            .blocks
            .iter()
            .map(CommandBlock::id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        self.parser.reset();
        self.selection.clear();
        debug!(
            blocks = self.blocks.len(),
            resumed = self.current.is_some(),
            "History loaded"
        );
        self.rebuild();
    }

    /// Render payloads for every block, in order.
    pub fn render_blocks(&self) -> Vec<BlockRender> {
        self.blocks.iter().map(CommandBlock::render).collect()
    }

    /// Copy text for a global range.
    pub fn extract_text(&self, range: TextRange) -> String {
        self.document.extract_text(&self.blocks, range)
    }

    /// Start a drag selection at a block-local offset.
    ///
    /// Returns `false` when that block part is not in the document.
    pub fn begin_selection(&mut self, block_index: usize, kind: SegmentKind, local: i64) -> bool {
        match self.document.hit_test(block_index, kind, local) {
            Some(offset) => {
                self.selection.begin(offset);
                true
            }
            None => false,
        }
    }

    /// Move the drag endpoint to a block-local offset.
    pub fn drag_selection(&mut self, block_index: usize, kind: SegmentKind, local: i64) {
        if let Some(offset) = self.document.hit_test(block_index, kind, local) {
            self.selection.drag_to(offset);
        }
    }

    /// The pointer moved beyond an edge of the content area.
    pub fn drag_outside(&mut self, edge: DragEdge) {
        self.selection.drag_outside(edge, self.autoscroll_step);
    }

    /// Auto-scroll tick while dragging outside; `true` if the selection grew.
    pub fn autoscroll_tick(&mut self) -> bool {
        self.selection.autoscroll_tick(self.autoscroll_step)
    }

    pub fn end_selection(&mut self) -> Option<TextRange> {
        self.selection.end()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Highlight ranges of the current selection for one block.
    pub fn highlights(&self, block_index: usize) -> BlockHighlights {
        let Some(range) = self.selection.range() else {
            return BlockHighlights::default();
        };
        BlockHighlights {
            header: self
                .document
                .local_range(range, block_index, SegmentKind::Header),
            output: self
                .document
                .local_range(range, block_index, SegmentKind::Output),
        }
    }

    /// Text of the current selection, if any.
    pub fn selected_text(&self) -> Option<String> {
        let range = self.selection.range().filter(|r| !r.is_empty())?;
        Some(self.extract_text(range))
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Index of the current block, opening a command-less one if needed.
    fn ensure_current(&mut self) -> usize {
        if let Some(idx) = self.current {
            return idx;
        }
        let id = self.allocate_id();
        debug!(id = id, "Output without an open block; starting one");
        self.blocks.push(CommandBlock::start(id, None, None));
        let idx = self.blocks.len() - 1;
        self.current = Some(idx);
        idx
    }

    fn rebuild(&mut self) {
        self.document = GlobalDocument::build(&self.blocks);
        self.selection.set_total_length(self.document.total_length());
    }
}
