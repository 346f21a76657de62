//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use toc_panel::config::PanelConfig;
use toc_panel::generator::{Generator, ToolbarLike};
use toc_panel::heading::HeadingEntry;
use toc_panel::model::AppModel;
use toc_panel::view::{Node, Tag};

/// Build headings from (text, level) pairs
pub fn headings(entries: &[(&str, u8)]) -> Vec<HeadingEntry> {
    entries
        .iter()
        .map(|(text, level)| HeadingEntry::new(*text, *level))
        .collect()
}

/// Config that never touches the filesystem
pub fn test_config() -> PanelConfig {
    PanelConfig {
        restore_state: false,
        ..PanelConfig::default()
    }
}

/// Model with a fixed heading list and no generator
pub fn test_model(entries: &[(&str, u8)]) -> AppModel {
    AppModel::new("Contents", headings(entries), test_config())
}

/// Keys of the rendered heading items, in render order
pub fn item_keys(view: &Node) -> Vec<String> {
    view.descendants()
        .filter(|n| n.tag == Tag::ListItem)
        .filter_map(|n| n.key.clone())
        .collect()
}

/// Text of the rendered heading items, in render order
pub fn item_texts(view: &Node) -> Vec<String> {
    view.descendants()
        .filter(|n| n.tag == Tag::ListItem)
        .map(|n| n.text_content())
        .collect()
}

/// Shared log of lifecycle calls observed by `RecordingToolbar`
pub type EventLog = Rc<RefCell<Vec<&'static str>>>;

/// Toolbar that records mount/unmount hook calls
pub struct RecordingToolbar {
    log: EventLog,
}

impl ToolbarLike for RecordingToolbar {
    fn render(&self) -> Node {
        Node::new(Tag::Div).class("recording-toolbar").child(Node::span("custom"))
    }

    fn mounted(&self) {
        self.log.borrow_mut().push("mounted");
    }

    fn unmounted(&self) {
        self.log.borrow_mut().push("unmounted");
    }
}

/// Generator returning one heading per non-empty line, with a recording toolbar
pub struct RecordingGenerator {
    toolbar: RecordingToolbar,
}

impl RecordingGenerator {
    pub fn new() -> (Self, EventLog) {
        let log = EventLog::default();
        let generator = Self {
            toolbar: RecordingToolbar { log: log.clone() },
        };
        (generator, log)
    }
}

impl Generator for RecordingGenerator {
    fn name(&self) -> &str {
        "recording"
    }

    fn generate(&self, source: &str) -> Vec<HeadingEntry> {
        source
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| HeadingEntry::new(l.trim(), 1))
            .collect()
    }

    fn toolbar(&self) -> Option<&dyn ToolbarLike> {
        Some(&self.toolbar)
    }
}

/// Generator without a custom toolbar
pub struct PlainGenerator;

impl Generator for PlainGenerator {
    fn name(&self) -> &str {
        "plain"
    }

    fn generate(&self, _source: &str) -> Vec<HeadingEntry> {
        Vec::new()
    }
}
