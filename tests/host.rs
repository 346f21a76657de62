//! Host tests: clicks, synchronous re-render, and mount/unmount lifecycle

mod common;

use common::{item_texts, test_config, test_model, EventLog, RecordingGenerator};
use toc_panel::generator::{Generator, ToolbarLike};
use toc_panel::heading::HeadingEntry;
use toc_panel::messages::{Msg, PanelMsg};
use toc_panel::model::{ActiveView, AppModel};
use toc_panel::runtime::Host;
use toc_panel::view::{classes, Node, Tag, CONTENT_KEY, GENERATOR_TOOLBAR_KEY, HEADER_KEY};

fn recording_host(source: &str) -> (Host, common::EventLog) {
    let (generator, log) = RecordingGenerator::new();
    let model = AppModel::with_document("Doc", source, Box::new(generator), test_config());
    (Host::new(model), log)
}

/// Row/column of the outline toggle in the current layout
fn toggle_cell(host: &Host) -> (usize, usize) {
    let layout = host.layout();
    let row = layout.find_row("Toggle ToC View").unwrap();
    (row, 0)
}

// ========================================================================
// Clicking the outline toggle
// ========================================================================

#[test]
fn test_click_toggle_hides_outline() {
    let mut host = Host::new(test_model(&[("Intro", 1), ("Usage", 2)]));
    assert_eq!(item_texts(host.view()).len(), 2);

    let (row, col) = toggle_cell(&host);
    assert!(host.click(row, col).is_some());

    let view = host.view();
    assert!(view.find_by_key(HEADER_KEY).is_none());
    assert!(view.find_by_key(CONTENT_KEY).is_none());
    assert_eq!(view.count_tag(Tag::ListItem), 0);

    let icon = view.find_by_class(classes::TOC_ICON).unwrap();
    assert!(!icon.has_class(classes::ICON_SELECTED));
    assert!(icon.has_class(classes::ICON_UNSELECTED));
}

#[test]
fn test_click_toggle_twice_restores_view() {
    let mut host = Host::new(test_model(&[("Intro", 1)]));
    let original = host.view().clone();

    let (row, col) = toggle_cell(&host);
    host.click(row, col);
    let (row, col) = toggle_cell(&host);
    host.click(row, col);

    assert_eq!(host.view(), &original);
    assert_eq!(host.model().panel.active_view(), ActiveView::Outline);
}

#[test]
fn test_click_on_inert_cells_does_nothing() {
    let mut host = Host::new(test_model(&[("Intro", 1)]));
    let layout = host.layout();

    let placeholder_row = layout.find_row("No tabs to display").unwrap();
    let placeholder_col = layout.lines[placeholder_row]
        .find("No tabs")
        .map(|byte| layout.lines[placeholder_row][..byte].chars().count())
        .unwrap();
    assert!(host.click(placeholder_row, placeholder_col).is_none());

    let item_row = layout.find_row("Intro").unwrap();
    assert!(host.click(item_row, 0).is_none());
    assert!(host.click(100, 0).is_none());

    assert_eq!(host.model().panel.active_view(), ActiveView::Outline);
}

#[test]
fn test_text_layout_of_full_panel() {
    let host = Host::new(test_model(&[("Intro", 1), ("Usage", 2)]));
    assert_eq!(
        host.layout().to_string(),
        "[*] Toggle ToC View │ No tabs to display\nContents\nIntro\n  Usage"
    );
}

#[test]
fn test_empty_toc_renders_header_only() {
    let host = Host::new(test_model(&[]));
    assert_eq!(
        host.layout().lines,
        vec!["[*] Toggle ToC View │ No tabs to display", "Contents"]
    );
}

// ========================================================================
// Lifecycle
// ========================================================================

#[test]
fn test_initial_render_mounts_generator_toolbar() {
    let (host, log) = recording_host("Alpha\nBeta\n");
    assert_eq!(*log.borrow(), vec!["mounted"]);
    assert!(host.view().find_by_key(GENERATOR_TOOLBAR_KEY).is_some());
}

#[test]
fn test_every_toggle_fires_lifecycle_event() {
    let (mut host, log) = recording_host("Alpha\n");

    let diff = host.dispatch(Msg::Panel(PanelMsg::ToggleOutline));
    assert!(diff.did_unmount(GENERATOR_TOOLBAR_KEY));
    assert!(diff.did_unmount(CONTENT_KEY));

    let diff = host.dispatch(Msg::Panel(PanelMsg::ToggleOutline));
    assert!(diff.did_mount(GENERATOR_TOOLBAR_KEY));

    host.dispatch(Msg::Panel(PanelMsg::ToggleOutline));
    host.dispatch(Msg::Panel(PanelMsg::ToggleOutline));

    assert_eq!(
        *log.borrow(),
        vec!["mounted", "unmounted", "mounted", "unmounted", "mounted"]
    );
}

#[test]
fn test_selecting_tab_unmounts_outline_subtree() {
    let (mut host, log) = recording_host("Alpha\nBeta\n");

    let diff = host.dispatch(Msg::Panel(PanelMsg::SelectTab(1)));
    assert!(diff.did_unmount(HEADER_KEY));
    assert!(diff.did_unmount(GENERATOR_TOOLBAR_KEY));
    assert!(diff.unmounted.iter().any(|p| p == "toc-content/Alpha-1-0"));
    assert!(diff.mounted.is_empty());

    // Selecting another tab while already hidden changes nothing mounted
    let diff = host.dispatch(Msg::Panel(PanelMsg::SelectTab(2)));
    assert!(diff.is_empty());
    assert_eq!(*log.borrow(), vec!["mounted", "unmounted"]);
    assert_eq!(host.model().panel.active_view(), ActiveView::Tab(2));
}

#[test]
fn test_redraw_without_changes_is_quiet() {
    let (mut host, log) = recording_host("Alpha\n");
    assert!(host.redraw().is_empty());
    assert_eq!(*log.borrow(), vec!["mounted"]);
}

/// Toolbar that logs hook calls to a shared log
struct LoggingToolbar {
    log: EventLog,
}

impl ToolbarLike for LoggingToolbar {
    fn render(&self) -> Node {
        Node::new(Tag::Div).child(Node::span("logging"))
    }

    fn mounted(&self) {
        self.log.borrow_mut().push("mounted");
    }

    fn unmounted(&self) {
        self.log.borrow_mut().push("unmounted");
    }
}

/// Implements the required methods plus `toolbar`, nothing else
struct ToolbarOnlyGenerator {
    toolbar: LoggingToolbar,
}

impl Generator for ToolbarOnlyGenerator {
    fn name(&self) -> &str {
        "toolbar-only"
    }

    fn generate(&self, _source: &str) -> Vec<HeadingEntry> {
        Vec::new()
    }

    fn toolbar(&self) -> Option<&dyn ToolbarLike> {
        Some(&self.toolbar)
    }
}

#[test]
fn test_hooks_fire_for_generator_overriding_only_toolbar() {
    let log = EventLog::default();
    let generator = ToolbarOnlyGenerator {
        toolbar: LoggingToolbar { log: log.clone() },
    };
    let model = AppModel::with_document("Doc", "", Box::new(generator), test_config());
    let mut host = Host::new(model);

    let diff = host.dispatch(Msg::Panel(PanelMsg::ToggleOutline));
    assert!(diff.did_unmount(GENERATOR_TOOLBAR_KEY));
    host.dispatch(Msg::Panel(PanelMsg::ToggleOutline));

    assert_eq!(*log.borrow(), vec!["mounted", "unmounted", "mounted"]);
}
