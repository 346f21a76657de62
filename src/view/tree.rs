//! Table of contents tree rendering
//!
//! `render_tree` is a pure function of its props and the panel state: the
//! same inputs always produce an equal `Node`. While the outline is hidden the
//! outline section is left out of the tree entirely, so anything keyed inside
//! it (notably the generator toolbar) unmounts.

use crate::config::MAX_INDENT_WIDTH;
use crate::generator::Generator;
use crate::heading::{item_key, HeadingEntry};
use crate::messages::{select_tab, Msg, PanelMsg};
use crate::model::PanelState;

use super::classes;
use super::node::{Node, Tag};
use super::toolbar::{render_toolbar, ToolbarProps};

/// Key of the fixed toolbar strip
pub const TOOLBAR_KEY: &str = "toc-toolbar";
/// Key of the outline title header
pub const HEADER_KEY: &str = "toc-header";
/// Key under which a generator's custom toolbar is rendered
pub const GENERATOR_TOOLBAR_KEY: &str = "generator-toolbar";
/// Key of the heading list
pub const CONTENT_KEY: &str = "toc-content";

/// Renders the content of a single heading row; `None` skips the row
pub type ItemRenderer<'a> = dyn Fn(&HeadingEntry) -> Option<Node> + 'a;

/// Inputs supplied by the panel's owner every render
pub struct TreeProps<'a> {
    /// Display title
    pub title: &'a str,
    /// Headings to render, in display order
    pub toc: &'a [HeadingEntry],
    /// Generator that produced the headings, if any
    pub generator: Option<&'a dyn Generator>,
    pub item_renderer: &'a ItemRenderer<'a>,
}

/// Render the full panel for the given state
pub fn render_tree(props: &TreeProps<'_>, state: &PanelState) -> Node {
    let toolbar = render_toolbar(&ToolbarProps {
        show_outline: state.show_outline,
        on_toggle_outline: Msg::Panel(PanelMsg::ToggleOutline),
        selected_tab_index: state.selected_tab_index,
        on_select_tab: select_tab,
    })
    .key(TOOLBAR_KEY);

    let mut root = Node::new(Tag::Div).class(classes::PANEL).child(toolbar);

    if state.show_outline {
        root = root.child(Node::new(Tag::Header).key(HEADER_KEY).text(props.title));

        if let Some(custom) = props.generator.and_then(|g| g.toolbar()) {
            root = root.child(custom.render().key(GENERATOR_TOOLBAR_KEY));
        }

        root = root.child(render_list(props.toc, props.item_renderer));
    }

    root
}

fn render_list(toc: &[HeadingEntry], item_renderer: &ItemRenderer<'_>) -> Node {
    let items = toc.iter().enumerate().filter_map(|(position, heading)| {
        item_renderer(heading).map(|content| {
            Node::new(Tag::ListItem)
                .key(item_key(heading, position))
                .class(classes::ITEM)
                .child(content)
        })
    });

    Node::new(Tag::List)
        .key(CONTENT_KEY)
        .class(classes::CONTENT)
        .children(items)
}

/// Item renderer that indents by level and shows the numbering prefix.
/// `indent_width` is capped at `MAX_INDENT_WIDTH`.
pub fn default_item_renderer(indent_width: usize) -> impl Fn(&HeadingEntry) -> Option<Node> {
    let indent_width = indent_width.min(MAX_INDENT_WIDTH);
    move |heading| {
        let depth = (heading.level as usize).saturating_sub(1);
        let indent = " ".repeat(depth * indent_width);
        Some(
            Node::span(format!("{}{}", indent, heading.display_text()))
                .class(format!("toc-level-{}", heading.level)),
        )
    }
}
