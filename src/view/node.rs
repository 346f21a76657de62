//! Render tree primitives
//!
//! View functions return a `Node` tree describing what to draw. The tree is
//! plain data: no widget state, no closures. Click handlers are message
//! values the host dispatches through `update`.

use serde::Serialize;

use crate::messages::Msg;

/// Element kind of a render node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Div,
    Header,
    Span,
    Button,
    Icon,
    Divider,
    List,
    ListItem,
}

impl Tag {
    /// Inline nodes flow horizontally inside their parent row
    pub fn is_inline(self) -> bool {
        matches!(self, Tag::Span | Tag::Button | Tag::Icon | Tag::Divider)
    }
}

/// A node of the render tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub tag: Tag,
    /// Identity among siblings, used for mount/unmount tracking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<Msg>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            key: None,
            classes: Vec::new(),
            role: None,
            aria_label: None,
            title: None,
            text: None,
            on_click: None,
            children: Vec::new(),
        }
    }

    /// Shorthand for a span holding text
    pub fn span(text: impl Into<String>) -> Self {
        Self::new(Tag::Span).text(text)
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn on_click(mut self, msg: impl Into<Msg>) -> Self {
        self.on_click = Some(msg.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Pre-order traversal including `self`
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First node (pre-order) carrying the given class
    pub fn find_by_class(&self, class: &str) -> Option<&Node> {
        self.descendants().find(|n| n.has_class(class))
    }

    /// First node (pre-order) with the given key
    pub fn find_by_key(&self, key: &str) -> Option<&Node> {
        self.descendants().find(|n| n.key.as_deref() == Some(key))
    }

    /// Number of nodes with the given tag
    pub fn count_tag(&self, tag: Tag) -> usize {
        self.descendants().filter(|n| n.tag == tag).count()
    }

    /// Concatenated text of this node and its descendants, in tree order
    pub fn text_content(&self) -> String {
        self.descendants()
            .filter_map(|n| n.text.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Iterator returned by [`Node::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
