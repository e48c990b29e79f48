//! Command blocks.
//!
//! A [`CommandBlock`] holds everything produced by one executed command:
//! committed scrollback segments plus, while an interactive program owns
//! the terminal, a row-addressable active screen. The two are kept apart;
//! row updates never touch the committed segments.

mod render;
mod screen;

pub use render::BlockRender;
pub use screen::MAX_SCREEN_ROWS;

use chrono::{DateTime, Duration, Utc};

use crate::terminal::{segments_text, ScreenCursor, StyledSegment};

/// Prefix of the synthetic header line shown for a command.
pub const HEADER_PREFIX: &str = "$ ";

/// Derived status of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStatus {
    Running,
    Succeeded,
    Failed { exit_code: i32 },
}

impl BlockStatus {
    /// Short label for status lines.
    pub fn label(&self) -> String {
        match self {
            BlockStatus::Running => "running".to_string(),
            BlockStatus::Succeeded => "ok".to_string(),
            BlockStatus::Failed { exit_code } => format!("exit {exit_code}"),
        }
    }
}

/// The unit of terminal history for one command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandBlock {
    id: u64,
    command: Option<String>,
    segments: Vec<StyledSegment>,
    active_screen_lines: Vec<Vec<StyledSegment>>,
    active_cursor: Option<ScreenCursor>,
    is_finished: bool,
    exit_code: i32,
    cwd_start: Option<String>,
    cwd_end: Option<String>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl CommandBlock {
    /// A new unfinished block. An empty command is treated as no command.
    pub fn start(id: u64, command: Option<String>, cwd: Option<String>) -> Self {
        Self {
            id,
            command: command.filter(|c| !c.is_empty()),
            segments: Vec::new(),
            active_screen_lines: Vec::new(),
            active_cursor: None,
            is_finished: false,
            exit_code: 0,
            cwd_start: cwd,
            cwd_end: None,
            started_at: Some(Utc::now()),
            finished_at: None,
        }
    }

    /// Rebuild a block from a history record. No timestamps are known.
    pub fn restore(
        id: u64,
        command: Option<String>,
        segments: Vec<StyledSegment>,
        exit_code: i32,
        cwd_start: Option<String>,
        cwd_end: Option<String>,
        is_finished: bool,
    ) -> Self {
        Self {
            id,
            command: command.filter(|c| !c.is_empty()),
            segments: segments.into_iter().filter(|s| !s.text.is_empty()).collect(),
            active_screen_lines: Vec::new(),
            active_cursor: None,
            is_finished,
            exit_code,
            cwd_start,
            cwd_end,
            started_at: None,
            finished_at: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// Committed scrollback segments.
    pub fn segments(&self) -> &[StyledSegment] {
        &self.segments
    }

    /// Live active-screen rows.
    pub fn active_screen_lines(&self) -> &[Vec<StyledSegment>] {
        &self.active_screen_lines
    }

    /// Cursor reported with the last batch of row updates.
    pub fn active_cursor(&self) -> Option<ScreenCursor> {
        self.active_cursor
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn cwd_start(&self) -> Option<&str> {
        self.cwd_start.as_deref()
    }

    pub fn cwd_end(&self) -> Option<&str> {
        self.cwd_end.as_deref()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Elapsed time between start and finish, when both are known.
    pub fn duration(&self) -> Option<Duration> {
        Some(self.finished_at? - self.started_at?)
    }

    pub fn status(&self) -> BlockStatus {
        match (self.is_finished, self.exit_code) {
            (false, _) => BlockStatus::Running,
            (true, 0) => BlockStatus::Succeeded,
            (true, exit_code) => BlockStatus::Failed { exit_code },
        }
    }

    /// Header line `"$ " + command + "\n"`, if the block has a command.
    pub fn header_text(&self) -> Option<String> {
        self.command
            .as_ref()
            .map(|command| format!("{HEADER_PREFIX}{command}\n"))
    }

    /// Concatenated committed output text.
    pub fn output_text(&self) -> String {
        segments_text(&self.segments)
    }

    /// Append committed segments. Empty segments are skipped.
    ///
    /// Returns `false` (and changes nothing) once the block is finished.
    pub fn append(&mut self, segments: impl IntoIterator<Item = StyledSegment>) -> bool {
        if self.is_finished {
            return false;
        }
        self.segments
            .extend(segments.into_iter().filter(|s| !s.text.is_empty()));
        true
    }

    /// Record completion. Only the first call has an effect.
    pub fn finish(&mut self, exit_code: i32, cwd: Option<String>) -> bool {
        if self.is_finished {
            return false;
        }
        self.is_finished = true;
        self.exit_code = exit_code;
        self.cwd_end = cwd;
        self.finished_at = Some(Utc::now());
        true
    }
}
