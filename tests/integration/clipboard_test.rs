//! Integration tests for the clipboard module.

use std::sync::{Arc, Mutex};

use blockterm::clipboard::copy::Copy;
use blockterm::clipboard::tool::{CopyTool, CopyToolError};
use blockterm::clipboard::{copy_text_with_config, ClipboardError, CopyMethod, CopyResult};
use blockterm::config::ClipboardConfig;

/// Records what it was asked to copy.
struct MockTool {
    method: CopyMethod,
    available: bool,
    result: Result<(), CopyToolError>,
    copied: Arc<Mutex<Vec<String>>>,
}

impl MockTool {
    fn new(method: CopyMethod) -> Self {
        Self {
            method,
            available: true,
            result: Ok(()),
            copied: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    fn failing(mut self, msg: &str) -> Self {
        self.result = Err(CopyToolError::Failed(msg.to_string()));
        self
    }
}

impl CopyTool for MockTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        self.copied.lock().unwrap().push(text.to_string());
        self.result.clone()
    }
}

#[test]
fn copy_method_names() {
    assert_eq!(CopyMethod::Pbcopy.name(), "pbcopy");
    assert_eq!(CopyMethod::WlCopy.name(), "wl-copy");
    assert_eq!(CopyMethod::Xclip.name(), "xclip");
    assert_eq!(CopyMethod::Xsel.name(), "xsel");
}

#[test]
fn result_message_mentions_size_and_tool() {
    assert_eq!(
        CopyResult::new(CopyMethod::Xclip, 12).message(),
        "Copied 12 bytes to clipboard via xclip"
    );
    assert_eq!(
        CopyResult::new(CopyMethod::Pbcopy, 1).message(),
        "Copied 1 byte to clipboard via pbcopy"
    );
}

#[test]
fn first_available_tool_wins() {
    let skipped = MockTool::new(CopyMethod::WlCopy).unavailable();
    let used = MockTool::new(CopyMethod::Xclip);
    let never = MockTool::new(CopyMethod::Xsel);
    let used_log = used.copied.clone();
    let never_log = never.copied.clone();
    let skipped_log = skipped.copied.clone();

    let copy = Copy::with_tools(vec![Box::new(skipped), Box::new(used), Box::new(never)]);
    let result = copy.text("a.txt\n").unwrap();

    assert_eq!(result, CopyResult::new(CopyMethod::Xclip, 6));
    assert_eq!(*used_log.lock().unwrap(), vec!["a.txt\n".to_string()]);
    assert!(never_log.lock().unwrap().is_empty());
    assert!(skipped_log.lock().unwrap().is_empty());
}

#[test]
fn failing_tool_falls_through_to_next() {
    let broken = MockTool::new(CopyMethod::Xclip).failing("cannot open display");
    let working = MockTool::new(CopyMethod::Xsel);
    let copy = Copy::with_tools(vec![Box::new(broken), Box::new(working)]);
    assert_eq!(copy.text("x").unwrap().tool, CopyMethod::Xsel);
}

#[test]
fn all_tools_failing_reports_no_tool() {
    let copy = Copy::with_tools(vec![Box::new(
        MockTool::new(CopyMethod::Xclip).failing("boom"),
    )]);
    assert!(matches!(copy.text("x"), Err(ClipboardError::NoToolAvailable)));
}

#[test]
fn no_tools_reports_no_tool() {
    let copy = Copy::with_tools(vec![]);
    assert!(copy.tools().is_empty());
    assert!(matches!(copy.text("x"), Err(ClipboardError::NoToolAvailable)));
}

#[test]
fn empty_text_is_rejected_before_any_tool_runs() {
    let tool = MockTool::new(CopyMethod::Xclip);
    let log = tool.copied.clone();
    let copy = Copy::with_tools(vec![Box::new(tool)]);
    assert!(matches!(copy.text(""), Err(ClipboardError::EmptySelection)));
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn oversized_text_is_rejected() {
    let copy = Copy::with_tools(vec![Box::new(MockTool::new(CopyMethod::Xclip))]).max_bytes(4);
    match copy.text("12345") {
        Err(ClipboardError::ContentTooLarge {
            size_bytes,
            max_bytes,
        }) => assert_eq!((size_bytes, max_bytes), (5, 4)),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn disabled_config_refuses_copy() {
    let config = ClipboardConfig {
        enabled: false,
        ..ClipboardConfig::default()
    };
    assert!(matches!(
        copy_text_with_config("x", &config),
        Err(ClipboardError::Disabled)
    ));
}

#[test]
fn error_messages_are_actionable() {
    assert!(ClipboardError::NoToolAvailable
        .to_string()
        .contains("xclip"));
    let err = ClipboardError::ContentTooLarge {
        size_bytes: 20,
        max_bytes: 10,
    };
    assert!(err.to_string().contains("20 bytes"));
}
