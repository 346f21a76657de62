//! Markdown heading generator using pulldown-cmark

use std::cell::Cell;

use pulldown_cmark::{Event, Options, Parser, Tag as MdTag, TagEnd};

use crate::commands::Cmd;
use crate::heading::HeadingEntry;
use crate::messages::GeneratorMsg;
use crate::view::{classes, Node, Tag};

use super::{Generator, ToolbarLike};

/// Label, accessible name, and tooltip of the numbering toggle
pub const NUMBERING_LABEL: &str = "Toggle Auto-Numbering";
/// Class of the numbering toolbar strip
pub const NUMBERING_TOOLBAR: &str = "toc-toolbar-numbering";

const MAX_LEVEL: usize = 6;

/// Custom toolbar of the Markdown generator: a single numbering toggle
#[derive(Debug, Clone, Default)]
pub struct NumberingToolbar {
    pub numbering: bool,
    mounted: Cell<bool>,
}

impl NumberingToolbar {
    /// Whether the toolbar is currently in the rendered tree
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}

impl ToolbarLike for NumberingToolbar {
    fn render(&self) -> Node {
        let state = if self.numbering {
            classes::ICON_SELECTED
        } else {
            classes::ICON_UNSELECTED
        };
        Node::new(Tag::Div).class(NUMBERING_TOOLBAR).child(
            Node::new(Tag::Button)
                .class(classes::TOOLBAR_BUTTON)
                .on_click(GeneratorMsg::ToggleNumbering)
                .child(
                    Node::new(Tag::Icon)
                        .role(classes::TOGGLE_ROLE)
                        .aria_label(NUMBERING_LABEL)
                        .title(NUMBERING_LABEL)
                        .class(state),
                ),
        )
    }

    fn mounted(&self) {
        self.mounted.set(true);
        tracing::debug!("numbering toolbar mounted");
    }

    fn unmounted(&self) {
        self.mounted.set(false);
        tracing::debug!("numbering toolbar unmounted");
    }
}

/// Extracts ATX and setext headings from Markdown source
#[derive(Debug, Clone, Default)]
pub struct MarkdownGenerator {
    toolbar: NumberingToolbar,
}

impl MarkdownGenerator {
    pub fn new(numbering: bool) -> Self {
        Self {
            toolbar: NumberingToolbar {
                numbering,
                mounted: Cell::new(false),
            },
        }
    }

    pub fn numbering(&self) -> bool {
        self.toolbar.numbering
    }

    pub fn numbering_toolbar(&self) -> &NumberingToolbar {
        &self.toolbar
    }
}

impl Generator for MarkdownGenerator {
    fn name(&self) -> &str {
        "markdown"
    }

    fn generate(&self, source: &str) -> Vec<HeadingEntry> {
        let headings = extract_headings(source);
        if self.toolbar.numbering {
            number_headings(headings)
        } else {
            headings
        }
    }

    fn toolbar(&self) -> Option<&dyn ToolbarLike> {
        Some(&self.toolbar)
    }

    fn update(&mut self, msg: GeneratorMsg) -> Option<Cmd> {
        match msg {
            GeneratorMsg::ToggleNumbering => {
                self.toolbar.numbering = !self.toolbar.numbering;
                tracing::debug!(numbering = self.toolbar.numbering, "toggled numbering");
                Some(Cmd::Redraw)
            }
        }
    }
}

/// Collect headings in document order with their 0-based source line
fn extract_headings(source: &str) -> Vec<HeadingEntry> {
    let mut headings = Vec::new();
    // (level, start offset, accumulated text) of the heading being read
    let mut current: Option<(u8, usize, String)> = None;
    // Line number at `scanned`; headings arrive in offset order
    let mut scanned = 0;
    let mut line = 0;

    for (event, range) in Parser::new_ext(source, Options::empty()).into_offset_iter() {
        match event {
            Event::Start(MdTag::Heading { level, .. }) => {
                current = Some((level as u8, range.start, String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, _, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, _, buf)) = current.as_mut() {
                    buf.push(' ');
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, start, text)) = current.take() {
                    let text = text.trim();
                    if !text.is_empty() {
                        line += source[scanned..start].matches('\n').count();
                        scanned = start;
                        headings.push(HeadingEntry::new(text, level).with_line(line));
                    }
                }
            }
            _ => {}
        }
    }

    headings
}

/// Assign hierarchical numbers (`1.`, `1.1.`, `2.`). Skipped levels count as 0.
fn number_headings(headings: Vec<HeadingEntry>) -> Vec<HeadingEntry> {
    let mut counters = [0usize; MAX_LEVEL];
    headings
        .into_iter()
        .map(|heading| {
            let depth = (heading.level as usize).clamp(1, MAX_LEVEL);
            counters[depth - 1] += 1;
            for counter in counters.iter_mut().skip(depth) {
                *counter = 0;
            }
            let prefix: String = counters[..depth]
                .iter()
                .map(|n| format!("{}.", n))
                .collect();
            heading.with_numbering(prefix)
        })
        .collect()
}
