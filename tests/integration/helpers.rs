//! Shared fixtures for integration tests.

use blockterm::Session;

/// Events for a two-command session: `ls` (finished) then `pwd` (running).
pub const LS_PWD_EVENTS: &str = concat!(
    r#"{"type":"command_start","command":"ls","cwd":"/home/user"}"#,
    "\n",
    r#"{"type":"output","data":"\u001b[34ma.txt\u001b[0m\n"}"#,
    "\n",
    r#"{"type":"command_end","exit_code":0,"cwd":"/home/user"}"#,
    "\n",
    r#"{"type":"command_start","command":"pwd"}"#,
    "\n",
);

/// Session with `ls` -> "a.txt\n" finished and `pwd` running without output.
pub fn ls_pwd_session() -> Session {
    let mut session = Session::new();
    for line in LS_PWD_EVENTS.lines() {
        session.apply_json(line).unwrap();
    }
    session
}

/// Concatenated text of parser output.
pub fn joined(segments: &[blockterm::StyledSegment]) -> String {
    blockterm::terminal::segments_text(segments)
}
