//! Escape sequence parser.
//!
//! Turns a character stream containing ANSI/VT control sequences into
//! styled text segments. Only SGR changes the output; cursor, erase, mode,
//! OSC and charset sequences are consumed without effect.
//!
//! The running style lives on the parser, so a style begun in one chunk of
//! a streamed response carries into the next. A sequence cut off at the end
//! of a chunk is held and resumed when the next chunk arrives.

use super::handlers::style::{apply_sgr, parse_sgr_params};
use super::handlers::{log_abandoned_csi, log_skipped_osc, log_unhandled_csi, log_unhandled_esc};
use super::types::{Style, StyledSegment};

const ESC: char = '\u{1b}';
const BEL: char = '\u{07}';
/// 8-bit Control Sequence Introducer
const CSI_8BIT: char = '\u{9b}';
/// 8-bit Operating System Command
const OSC_8BIT: char = '\u{9d}';
/// 8-bit String Terminator
const ST_8BIT: char = '\u{9c}';

/// Longest partial CSI/ESC sequence held across chunks before it is dropped.
pub const MAX_HELD_SEQUENCE: usize = 4096;

/// State carried between `parse` calls when a chunk ends mid-sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Pending {
    #[default]
    None,
    /// Raw characters of an unfinished ESC or CSI sequence.
    Sequence(String),
    /// Inside an OSC string; `saw_escape` when the chunk ended on `ESC`.
    Osc { saw_escape: bool },
}

/// Outcome of scanning one escape sequence.
enum Step {
    /// Sequence consumed; resume scanning at this index.
    Done(usize),
    /// Input ended before the sequence did.
    Held(Pending),
}

/// Stateful ANSI parser producing [`StyledSegment`]s.
#[derive(Debug, Clone, Default)]
pub struct AnsiParser {
    /// Style applied to the next emitted text
    current_style: Style,
    pending: Pending,
}

impl AnsiParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// The running style that will tag the next text.
    pub fn current_style(&self) -> Style {
        self.current_style
    }

    /// True while a sequence cut off by a chunk boundary is being held.
    pub fn has_pending_sequence(&self) -> bool {
        self.pending != Pending::None
    }

    /// Discard any held partial sequence. The running style is kept.
    pub fn finish(&mut self) {
        self.pending = Pending::None;
    }

    /// Return to the default style and drop any held partial sequence.
    pub fn reset(&mut self) {
        self.current_style = Style::default();
        self.pending = Pending::None;
    }

    /// Parse one chunk of output into styled segments.
    ///
    /// Never fails: malformed sequences are consumed minimally and scanning
    /// continues. Adjacent segments are not coalesced.
    pub fn parse(&mut self, input: &str) -> Vec<StyledSegment> {
        let mut segments = Vec::new();
        if input.is_empty() {
            return segments;
        }

        let mut chars: Vec<char> = Vec::with_capacity(input.len());
        let mut resume_osc = None;
        match std::mem::take(&mut self.pending) {
            Pending::None => {}
            Pending::Sequence(held) => chars.extend(held.chars()),
            Pending::Osc { saw_escape } => {
                if saw_escape {
                    chars.push(ESC);
                }
                resume_osc = Some(saw_escape);
            }
        }
        chars.extend(input.chars());

        let mut i = 0;
        match resume_osc {
            Some(true) => {
                // A trailing ESC either completes `ESC \` or ends the OSC and
                // introduces the next sequence.
                if chars.get(1) == Some(&'\\') {
                    i = 2;
                }
            }
            Some(false) => match scan_osc(&chars, 0) {
                Step::Done(next) => i = next,
                Step::Held(pending) => {
                    self.pending = pending;
                    return segments;
                }
            },
            None => {}
        }

        let mut text = String::new();
        while i < chars.len() {
            let c = chars[i];
            if !is_introducer(c) {
                text.push(c);
                i += 1;
                continue;
            }

            // Text before the sequence keeps the style in effect before it
            self.flush(&mut text, &mut segments);
            match self.scan_sequence(&chars, i) {
                Step::Done(next) => i = next,
                Step::Held(pending) => {
                    self.hold(pending);
                    break;
                }
            }
        }

        self.flush(&mut text, &mut segments);
        segments
    }

    fn flush(&self, text: &mut String, segments: &mut Vec<StyledSegment>) {
        if !text.is_empty() {
            segments.push(StyledSegment::new(std::mem::take(text), self.current_style));
        }
    }

    fn hold(&mut self, pending: Pending) {
        match pending {
            Pending::Sequence(held) if held.chars().count() > MAX_HELD_SEQUENCE => {
                tracing::trace!(length = held.len(), "Dropped oversized partial sequence");
                self.pending = Pending::None;
            }
            other => self.pending = other,
        }
    }

    /// Scan the sequence whose introducer is at `start`.
    fn scan_sequence(&mut self, chars: &[char], start: usize) -> Step {
        let held = || Step::Held(Pending::Sequence(chars[start..].iter().collect()));

        match chars[start] {
            CSI_8BIT => self.scan_csi(chars, start, start + 1),
            OSC_8BIT => scan_osc(chars, start + 1),
            _ => {
                let Some(&next) = chars.get(start + 1) else {
                    return held();
                };
                match next {
                    '[' => self.scan_csi(chars, start, start + 2),
                    ']' => scan_osc(chars, start + 2),
                    // Charset designation: ESC ( B
                    '(' | ')' => {
                        if chars.get(start + 2).copied().is_some_and(is_introducer) {
                            log_unhandled_esc(&chars[start..start + 2]);
                            Step::Done(start + 2)
                        } else if start + 2 < chars.len() {
                            log_unhandled_esc(&chars[start..start + 3]);
                            Step::Done(start + 3)
                        } else {
                            held()
                        }
                    }
                    // Keypad mode, index/reverse index/next line, save/restore cursor
                    '=' | '>' | 'M' | 'D' | 'E' | '7' | '8' => {
                        log_unhandled_esc(&chars[start..start + 2]);
                        Step::Done(start + 2)
                    }
                    _ => {
                        log_unhandled_esc(&chars[start..start + 1]);
                        Step::Done(start + 1)
                    }
                }
            }
        }
    }

    /// Scan CSI parameters from `body` up to and including the final letter.
    fn scan_csi(&mut self, chars: &[char], start: usize, body: usize) -> Step {
        let mut j = body;
        let private = matches!(chars.get(j), Some('?' | '<' | '=' | '>'));
        if private {
            j += 1;
        }
        let params_start = j;

        while j < chars.len() {
            let c = chars[j];
            if is_introducer(c) {
                // A new sequence starts before this one ended: drop this one
                let params: String = chars[params_start..j].iter().collect();
                log_abandoned_csi(&params);
                return Step::Done(j);
            }
            if is_final(c) {
                let params: String = chars[params_start..j].iter().collect();
                self.dispatch_csi(c, &params, private);
                return Step::Done(j + 1);
            }
            j += 1;
        }

        Step::Held(Pending::Sequence(chars[start..].iter().collect()))
    }

    fn dispatch_csi(&mut self, action: char, params: &str, private: bool) {
        if private {
            // DEC private modes (?25h, ?1049h, ...) and mouse reports
            log_unhandled_csi(action, params, true);
            return;
        }

        match action {
            'm' => apply_sgr(&mut self.current_style, &parse_sgr_params(params)),
            // Cursor, erase, scroll, mode and device status: consumed, no effect
            'H' | 'f' | 'A' | 'B' | 'C' | 'D' | 'E' | 'F' | 'G' | 'd' | 's' | 'u' | 'J' | 'K'
            | 'L' | 'M' | 'P' | 'X' | '@' | 'S' | 'T' | 'n' | 'r' | 'h' | 'l' | 'c' | 'q'
            | 't' => log_unhandled_csi(action, params, false),
            _ => tracing::trace!(action = %action, params = %params, "Unknown CSI final"),
        }
    }
}

/// Skip an OSC string starting at `body`.
///
/// Ends at BEL, the 8-bit ST, `ESC \`, or just before a new introducer.
fn scan_osc(chars: &[char], body: usize) -> Step {
    let mut j = body;
    while j < chars.len() {
        match chars[j] {
            BEL | ST_8BIT => {
                log_skipped_osc(j - body, true);
                return Step::Done(j + 1);
            }
            ESC => match chars.get(j + 1) {
                Some('\\') => {
                    log_skipped_osc(j - body, true);
                    return Step::Done(j + 2);
                }
                Some(_) => {
                    log_skipped_osc(j - body, false);
                    return Step::Done(j);
                }
                None => return Step::Held(Pending::Osc { saw_escape: true }),
            },
            CSI_8BIT | OSC_8BIT => {
                log_skipped_osc(j - body, false);
                return Step::Done(j);
            }
            _ => j += 1,
        }
    }
    Step::Held(Pending::Osc { saw_escape: false })
}

/// Characters that start an escape sequence.
fn is_introducer(c: char) -> bool {
    matches!(c, ESC | CSI_8BIT | OSC_8BIT)
}

/// Final characters that terminate a CSI sequence.
fn is_final(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '@' | '`' | '~')
}
