//! Plain-text layout of a render tree
//!
//! Lays a `Node` tree out as terminal rows and records where clickable nodes
//! landed, so a click at a (row, column) can be mapped back to the message
//! the node carries. This follows the "hit-test → dispatch" pattern: layout
//! produces regions, `hit_test` picks the region, the host dispatches.
//!
//! Layout rules:
//! - block nodes stack vertically; a block's own text is one row
//! - a block whose children are all inline renders them on one row,
//!   separated by a single space
//! - columns are counted in chars

use std::fmt;

use crate::messages::Msg;

use super::classes;
use super::node::{Node, Tag};

/// Glyphs used for non-text nodes
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub icon_selected: String,
    pub icon_unselected: String,
    pub divider: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            icon_selected: "[*]".to_string(),
            icon_unselected: "[ ]".to_string(),
            divider: "│".to_string(),
        }
    }
}

/// A clickable span of one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub row: usize,
    /// First column covered (inclusive)
    pub start_col: usize,
    /// Column after the last one covered (exclusive)
    pub end_col: usize,
    pub msg: Msg,
}

impl HitRegion {
    fn contains(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.start_col && col < self.end_col
    }
}

/// Result of laying out a render tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLayout {
    pub lines: Vec<String>,
    pub hits: Vec<HitRegion>,
}

impl TextLayout {
    /// Message of the innermost clickable node at the given cell, if any
    pub fn hit_test(&self, row: usize, col: usize) -> Option<Msg> {
        // Inner nodes are recorded before their ancestors finish, so the
        // first match is the innermost.
        self.hits
            .iter()
            .find(|hit| hit.contains(row, col))
            .map(|hit| hit.msg)
    }

    /// Row index of the first line containing `needle`
    pub fn find_row(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(needle))
    }
}

impl fmt::Display for TextLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Lay out a render tree as text rows
pub fn layout(root: &Node, style: &TextStyle) -> TextLayout {
    let mut out = TextLayout::default();
    layout_block(root, style, &mut out);
    out
}

fn layout_block(node: &Node, style: &TextStyle, out: &mut TextLayout) {
    if node.tag.is_inline() {
        layout_row(std::slice::from_ref(node), style, out);
        return;
    }

    if let Some(text) = &node.text {
        out.lines.push(text.clone());
    }

    if node.children.is_empty() {
        return;
    }

    if node.children.iter().all(|c| c.tag.is_inline()) {
        layout_row(&node.children, style, out);
    } else {
        for child in &node.children {
            layout_block(child, style, out);
        }
    }
}

fn layout_row(nodes: &[Node], style: &TextStyle, out: &mut TextLayout) {
    let row = out.lines.len();
    let mut line = String::new();
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        layout_inline(node, style, row, &mut line, &mut out.hits);
    }
    out.lines.push(line);
}

fn layout_inline(
    node: &Node,
    style: &TextStyle,
    row: usize,
    line: &mut String,
    hits: &mut Vec<HitRegion>,
) {
    let start_col = line.chars().count();

    match node.tag {
        Tag::Icon => {
            if node.has_class(classes::ICON_SELECTED) {
                line.push_str(&style.icon_selected);
            } else {
                line.push_str(&style.icon_unselected);
            }
            if let Some(title) = &node.title {
                line.push(' ');
                line.push_str(title);
            }
        }
        Tag::Divider => line.push_str(&style.divider),
        _ => {
            if let Some(text) = &node.text {
                line.push_str(text);
            }
        }
    }

    for child in &node.children {
        layout_inline(child, style, row, line, hits);
    }

    if let Some(msg) = node.on_click {
        hits.push(HitRegion {
            row,
            start_col,
            end_col: line.chars().count(),
            msg,
        });
    }
}
