//! Outline/side-tab toolbar
//!
//! Provides a simple, pure-function API for rendering the toolbar strip.
//! No stored state: the owner passes the current visibility and the
//! messages to dispatch on interaction.

use crate::messages::Msg;

use super::classes;
use super::node::{Node, Tag};

/// Inputs for rendering the toolbar, supplied by the owning panel each render
#[derive(Debug, Clone, Copy)]
pub struct ToolbarProps {
    /// Whether the outline is currently shown (drives icon styling)
    pub show_outline: bool,
    /// Dispatched when the outline toggle is clicked
    pub on_toggle_outline: Msg,
    /// Currently selected side tab
    pub selected_tab_index: usize,
    /// Builds the message for selecting a side tab.
    /// Unused until side tabs have content; the region shows a placeholder.
    pub on_select_tab: fn(usize) -> Msg,
}

/// Render the toolbar: outline toggle, divider, and the side-tab region
pub fn render_toolbar(props: &ToolbarProps) -> Node {
    let icon_state = if props.show_outline {
        classes::ICON_SELECTED
    } else {
        classes::ICON_UNSELECTED
    };

    let icon = Node::new(Tag::Icon)
        .role(classes::TOGGLE_ROLE)
        .aria_label(classes::TOGGLE_LABEL)
        .title(classes::TOGGLE_LABEL)
        .class(classes::TOC_ICON)
        .class(icon_state);

    let toggle = Node::new(Tag::Button)
        .class(classes::TOOLBAR_BUTTON)
        .on_click(props.on_toggle_outline)
        .child(icon);

    let strip = Node::new(Tag::Div)
        .class(classes::TOOLBAR)
        .child(toggle)
        .child(Node::new(Tag::Divider).class(classes::VERTICAL_DIVIDER))
        .child(Node::span(classes::NO_TABS_MESSAGE));

    Node::new(Tag::Div).child(strip)
}
