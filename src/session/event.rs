//! Inbound server events.
//!
//! Events arrive as JSON objects tagged by `type`:
//!
//! ```text
//! {"type":"command_start","command":"ls","cwd":"/tmp"}
//! {"type":"output","data":"\u001b[1mbold\u001b[0m\n"}
//! {"type":"output","segments":[{"text":"hi","style":{"bold":true}}]}
//! {"type":"screen_row_update","updates":[{"row":0,"segments":[]}],"cursor_row":0,"cursor_column":0}
//! {"type":"command_end","exit_code":0,"cwd":"/tmp"}
//! {"type":"history","commands":[...]}
//! ```

use serde::{Deserialize, Serialize};

use super::error::EventError;
use crate::terminal::{ScreenRowUpdate, StyledSegment};

/// An event pushed by the remote session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    CommandStart {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        command: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cwd: Option<String>,
    },
    CommandEnd {
        exit_code: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cwd: Option<String>,
    },
    /// Pre-parsed `segments` or raw `data`; segments win when both are sent.
    Output {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        segments: Option<Vec<StyledSegment>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<String>,
    },
    ScreenRowUpdate {
        updates: Vec<ScreenRowUpdate>,
        #[serde(default)]
        cursor_row: i64,
        #[serde(default)]
        cursor_column: i64,
    },
    History {
        commands: Vec<CommandHistoryRecord>,
    },
}

impl ServerEvent {
    /// Decode one event from JSON.
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        let event: ServerEvent = serde_json::from_str(json)?;
        if let ServerEvent::Output {
            segments: None,
            data: None,
        } = event
        {
            return Err(EventError::MissingOutputPayload);
        }
        Ok(event)
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ServerEvent::CommandStart { .. } => "command_start",
            ServerEvent::CommandEnd { .. } => "command_end",
            ServerEvent::Output { .. } => "output",
            ServerEvent::ScreenRowUpdate { .. } => "screen_row_update",
            ServerEvent::History { .. } => "history",
        }
    }
}

/// One command as stored in the server's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandHistoryRecord {
    pub id: u64,
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub segments: Vec<StyledSegment>,
    #[serde(default)]
    pub exit_code: i32,
    #[serde(default)]
    pub cwd_start: String,
    #[serde(default)]
    pub cwd_end: String,
    pub is_finished: bool,
}
