//! JSON wire format of styled segments and events.

use blockterm::terminal::{Color, NamedColor, Style, StyledSegment};
use blockterm::ServerEvent;

#[test]
fn segment_with_partial_style_decodes() {
    let json = r##"{"text":"warn","style":{"foreground":"yellow","bold":true,"background":{"rgb":"#202020"}}}"##;
    let segment: StyledSegment = serde_json::from_str(json).unwrap();
    assert_eq!(segment.text, "warn");
    assert_eq!(
        segment.style,
        Style {
            foreground: Some(Color::Named(NamedColor::Yellow)),
            background: Some(Color::Rgb(0x20, 0x20, 0x20)),
            bold: true,
            ..Style::default()
        }
    );
}

#[test]
fn segment_without_style_is_default() {
    let segment: StyledSegment = serde_json::from_str(r#"{"text":"x"}"#).unwrap();
    assert!(segment.style.is_default());
}

#[test]
fn output_event_with_segments() {
    let json = r#"{"type":"output","segments":[{"text":"a","style":{"foreground":{"index":9}}}]}"#;
    match ServerEvent::from_json(json).unwrap() {
        ServerEvent::Output {
            segments: Some(segments),
            ..
        } => assert_eq!(segments[0].style.foreground, Some(Color::Indexed(9))),
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn invalid_color_fails_the_event() {
    let json = r#"{"type":"output","segments":[{"text":"a","style":{"foreground":"mauve"}}]}"#;
    assert!(ServerEvent::from_json(json).is_err());
}

#[test]
fn unknown_event_type_is_rejected() {
    assert!(ServerEvent::from_json(r#"{"type":"bell"}"#).is_err());
}
