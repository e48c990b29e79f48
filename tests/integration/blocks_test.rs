//! Command block lifecycle and rendering.

use blockterm::blocks::{BlockStatus, CommandBlock, MAX_SCREEN_ROWS};
use blockterm::terminal::{RenderTheme, ScreenCursor, ScreenRowUpdate, StyledSegment};

fn row(index: i64, text: &str) -> ScreenRowUpdate {
    ScreenRowUpdate {
        row: index,
        segments: vec![StyledSegment::plain(text)],
    }
}

#[test]
fn lifecycle_running_to_failed() {
    let mut block = CommandBlock::start(1, Some("make".into()), Some("/src".into()));
    assert_eq!(block.status(), BlockStatus::Running);
    assert!(block.append(vec![StyledSegment::plain("error\n")]));
    assert!(block.finish(2, Some("/src".into())));
    assert_eq!(block.status(), BlockStatus::Failed { exit_code: 2 });
    assert_eq!(block.status().label(), "exit 2");
    assert!(block.duration().is_some());
}

#[test]
fn finished_block_rejects_more_output() {
    let mut block = CommandBlock::start(1, Some("true".into()), None);
    block.finish(0, None);
    assert!(!block.append(vec![StyledSegment::plain("late")]));
    assert!(!block.finish(1, None));
    assert_eq!(block.exit_code(), 0);
    assert_eq!(block.output_text(), "");
}

#[test]
fn active_rows_render_after_committed_text() {
    let mut block = CommandBlock::start(1, Some("top".into()), None);
    block.append(vec![StyledSegment::plain("starting")]);
    block.apply_screen_updates(
        &[row(0, ""), row(1, "cpu 12%"), row(2, "mem 40%"), row(3, "   ")],
        Some(ScreenCursor { row: 2, column: 7 }),
    );

    let render = block.render();
    assert_eq!(render.header.as_deref(), Some("$ top\n"));
    assert_eq!(render.body_text(), "starting\ncpu 12%\nmem 40%");
    assert_eq!(render.cursor, Some(ScreenCursor { row: 2, column: 7 }));
    // Committed text is unaffected by the active screen
    assert_eq!(block.output_text(), "starting");
}

#[test]
fn later_update_replaces_row() {
    let mut block = CommandBlock::start(1, None, None);
    block.apply_screen_updates(&[row(0, "10%")], None);
    block.apply_screen_updates(&[row(0, "20%")], None);
    assert_eq!(block.visible_active_lines().len(), 1);
    assert_eq!(block.visible_active_lines()[0][0].text, "20%");
}

#[test]
fn out_of_range_rows_are_clamped() {
    let mut block = CommandBlock::start(1, None, None);
    block.apply_screen_updates(&[row(-5, "top"), row(i64::MAX, "bottom")], None);
    assert_eq!(block.active_screen_lines().len(), MAX_SCREEN_ROWS);
    assert_eq!(block.active_screen_lines()[0][0].text, "top");
    assert_eq!(block.active_screen_lines()[MAX_SCREEN_ROWS - 1][0].text, "bottom");
}

#[test]
fn to_lines_splits_on_newlines() {
    let mut block = CommandBlock::start(1, None, None);
    block.append(vec![
        StyledSegment::plain("one\ntw"),
        StyledSegment::plain("o\nthree"),
    ]);
    let lines = block.render().to_lines(&RenderTheme::default());
    let texts: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}
