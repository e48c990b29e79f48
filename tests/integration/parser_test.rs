//! Parser behavior over realistic command output.

use blockterm::terminal::{AnsiParser, Color, NamedColor, Style, StyledSegment};

use crate::helpers::joined;

fn fg(named: NamedColor) -> Style {
    Style {
        foreground: Some(Color::Named(named)),
        ..Style::default()
    }
}

#[test]
fn ls_color_output_splits_at_style_changes() {
    let mut parser = AnsiParser::new();
    let segments =
        parser.parse("\u{1b}[0m\u{1b}[01;34mbin\u{1b}[0m  \u{1b}[01;32mrun.sh\u{1b}[0m\n");

    let bold_blue = Style {
        bold: true,
        ..fg(NamedColor::Blue)
    };
    let bold_green = Style {
        bold: true,
        ..fg(NamedColor::Green)
    };
    assert_eq!(
        segments,
        vec![
            StyledSegment::new("bin", bold_blue),
            StyledSegment::plain("  "),
            StyledSegment::new("run.sh", bold_green),
            StyledSegment::plain("\n"),
        ]
    );
}

#[test]
fn progress_bar_redraw_keeps_only_text() {
    let mut parser = AnsiParser::new();
    let segments = parser.parse("\u{1b}[?25l\r\u{1b}[2K 50%\r\u{1b}[2K100%\u{1b}[?25h\n");
    assert_eq!(joined(&segments), "\r 50%\r100%\n");
    assert!(segments.iter().all(|s| s.style.is_default()));
}

#[test]
fn window_title_is_dropped() {
    let mut parser = AnsiParser::new();
    let segments = parser.parse("\u{1b}]0;user@host: ~\u{07}$ ");
    assert_eq!(joined(&segments), "$ ");
}

#[test]
fn hyperlink_osc_with_st_terminator() {
    let mut parser = AnsiParser::new();
    let segments =
        parser.parse("\u{1b}]8;;https://example.com\u{1b}\\link\u{1b}]8;;\u{1b}\\ done");
    assert_eq!(joined(&segments), "link done");
}

#[test]
fn truecolor_and_256_color_foregrounds() {
    let mut parser = AnsiParser::new();
    let segments = parser.parse("\u{1b}[38;2;255;136;0mA\u{1b}[38;5;208mB\u{1b}[39mC");
    assert_eq!(segments[0].style.foreground, Some(Color::Rgb(255, 136, 0)));
    assert_eq!(segments[1].style.foreground, Some(Color::Indexed(208)));
    assert_eq!(segments[2].style.foreground, None);
}

#[test]
fn style_survives_across_chunks() {
    let mut parser = AnsiParser::new();
    let first = parser.parse("\u{1b}[31merror: ");
    let second = parser.parse("file not found\u{1b}[0m\n");
    assert_eq!(first, vec![StyledSegment::new("error: ", fg(NamedColor::Red))]);
    assert_eq!(second[0], StyledSegment::new("file not found", fg(NamedColor::Red)));
    assert_eq!(second[1], StyledSegment::plain("\n"));
}

#[test]
fn sequence_split_across_chunks_is_resumed() {
    let mut parser = AnsiParser::new();
    assert_eq!(joined(&parser.parse("ok \u{1b}[3")), "ok ");
    assert!(parser.has_pending_sequence());
    let segments = parser.parse("2mgreen");
    assert!(!parser.has_pending_sequence());
    assert_eq!(segments, vec![StyledSegment::new("green", fg(NamedColor::Green))]);
}

#[test]
fn finish_discards_partial_sequence() {
    let mut parser = AnsiParser::new();
    parser.parse("text\u{1b}[");
    parser.finish();
    assert_eq!(joined(&parser.parse("31m")), "31m");
}

#[test]
fn unicode_text_passes_through() {
    let mut parser = AnsiParser::new();
    let segments = parser.parse("\u{1b}[1mcafé 日本語 🎉\u{1b}[0m");
    assert_eq!(joined(&segments), "café 日本語 🎉");
    assert!(segments[0].style.bold);
}
