//! Inbound event errors.

/// Failure to decode an inbound server event.
///
/// The session is left exactly as it was before the failed event.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Invalid event payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Output event carries neither `segments` nor `data`")]
    MissingOutputPayload,
}
