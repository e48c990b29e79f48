//! Event application through the session controller.

use blockterm::blocks::BlockStatus;
use blockterm::document::TextRange;
use blockterm::{EventError, Session};

use crate::helpers::ls_pwd_session;

#[test]
fn events_build_blocks_in_order() {
    let session = ls_pwd_session();
    let blocks = session.blocks();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].command(), Some("ls"));
    assert_eq!(blocks[0].cwd_start(), Some("/home/user"));
    assert_eq!(blocks[0].status(), BlockStatus::Succeeded);
    assert_eq!(blocks[1].status(), BlockStatus::Running);
    assert_eq!(session.current_block_index(), Some(1));
}

#[test]
fn bad_json_leaves_session_untouched() {
    let mut session = ls_pwd_session();
    let before = session.document().clone();
    assert!(matches!(
        session.apply_json("{not json"),
        Err(EventError::InvalidJson(_))
    ));
    assert!(matches!(
        session.apply_json(r#"{"type":"output"}"#),
        Err(EventError::MissingOutputPayload)
    ));
    assert_eq!(session.document(), &before);
}

#[test]
fn screen_updates_are_rendered_but_not_copyable() {
    let mut session = Session::new();
    session
        .apply_json(r#"{"type":"command_start","command":"htop"}"#)
        .unwrap();
    session
        .apply_json(
            r#"{"type":"screen_row_update","updates":[{"row":0,"segments":[{"text":"CPU"}]}],"cursor_row":0,"cursor_column":3}"#,
        )
        .unwrap();

    let render = &session.render_blocks()[0];
    assert_eq!(render.body_text(), "CPU");
    assert_eq!(session.document().total_length(), "$ htop\n".len());
    assert_eq!(
        session.extract_text(TextRange::new(0, 100)),
        "htop\n"
    );
}

#[test]
fn history_replaces_blocks_and_resumes_unfinished() {
    let mut session = ls_pwd_session();
    session
        .apply_json(
            r#"{"type":"history","commands":[
                {"id":7,"command":"echo hi","segments":[{"text":"hi\n"}],"exit_code":0,"is_finished":true},
                {"id":9,"command":"sleep 10","is_finished":false}
            ]}"#,
        )
        .unwrap();

    assert_eq!(session.blocks().len(), 2);
    assert_eq!(session.current_block_index(), Some(1));
    session.apply_json(r#"{"type":"output","data":"zzz\n"}"#).unwrap();
    assert_eq!(session.blocks()[1].output_text(), "zzz\n");
    session
        .apply_json(r#"{"type":"command_end","exit_code":130}"#)
        .unwrap();
    assert_eq!(
        session.blocks()[1].status(),
        BlockStatus::Failed { exit_code: 130 }
    );

    session.command_start(Some("ls".into()), None);
    assert_eq!(session.blocks()[2].id(), 10);
}

#[test]
fn history_clears_selection() {
    let mut session = ls_pwd_session();
    session.begin_selection(0, blockterm::SegmentKind::Header, 0);
    session.drag_selection(0, blockterm::SegmentKind::Output, 3);
    session.end_selection();
    session.load_history(Vec::new());
    assert_eq!(session.selection().range(), None);
    assert_eq!(session.document().total_length(), 0);
}

#[test]
fn command_end_without_block_is_ignored() {
    let mut session = Session::new();
    session
        .apply_json(r#"{"type":"command_end","exit_code":1}"#)
        .unwrap();
    assert!(session.blocks().is_empty());
}

#[test]
fn raw_output_split_mid_sequence() {
    let mut session = Session::new();
    session.command_start(Some("cargo build".into()), None);
    session.append_raw("\u{1b}[1;3");
    session.append_raw("2mCompiling\u{1b}[0m foo\n");
    let segments = session.blocks()[0].segments();
    assert_eq!(segments[0].text, "Compiling");
    assert!(segments[0].style.bold);
    assert_eq!(session.blocks()[0].output_text(), "Compiling foo\n");
}
