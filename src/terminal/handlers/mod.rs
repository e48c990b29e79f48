//! Escape sequence handlers.
//!
//! - style: SGR (Select Graphic Rendition) for colors and attributes
//!
//! Every other recognized sequence is consumed without effect; the helpers
//! here record what was skipped at `trace` level.

pub mod style;

use tracing::trace;

/// Log a CSI sequence that was consumed without effect.
pub fn log_unhandled_csi(action: char, params: &str, private: bool) {
    trace!(
        action = %action,
        params = %params,
        private = private,
        "Ignored CSI sequence"
    );
}

/// Log a CSI sequence cut short by the start of another sequence.
pub fn log_abandoned_csi(params: &str) {
    trace!(params = %params, "Abandoned unterminated CSI sequence");
}

/// Log an ESC sequence that was consumed without effect.
pub fn log_unhandled_esc(sequence: &[char]) {
    trace!(
        sequence = ?sequence,
        "Ignored ESC sequence"
    );
}

/// Log an OSC string that was skipped.
pub fn log_skipped_osc(length: usize, terminated: bool) {
    trace!(length = length, terminated = terminated, "Skipped OSC string");
}
