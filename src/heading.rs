//! Heading entries consumed by the outline panel
//!
//! A heading is one node of document structure: display text plus nesting
//! depth. Generators produce them; the panel only passes them through to the
//! item renderer and derives stable list keys from them.

use serde::{Deserialize, Serialize};

/// A single outline entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Display text
    pub text: String,
    /// Nesting level (1 = top-level)
    pub level: u8,
    /// Source line (0-based) the heading was found on, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Hierarchical numbering prefix such as `1.2.`, if the generator assigns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbering: Option<String>,
}

impl HeadingEntry {
    pub fn new(text: impl Into<String>, level: u8) -> Self {
        Self {
            text: text.into(),
            level,
            line: None,
            numbering: None,
        }
    }

    /// Attach a source line
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attach a numbering prefix
    pub fn with_numbering(mut self, numbering: impl Into<String>) -> Self {
        self.numbering = Some(numbering.into());
        self
    }

    /// Label shown in the outline, including the numbering prefix when present
    pub fn display_text(&self) -> String {
        match &self.numbering {
            Some(prefix) => format!("{} {}", prefix, self.text),
            None => self.text.clone(),
        }
    }
}

/// Stable list key for the heading at `position` in the heading sequence.
///
/// Position breaks ties, so two headings with identical text and level never
/// share a key within one render.
pub fn item_key(heading: &HeadingEntry, position: usize) -> String {
    format!("{}-{}-{}", heading.text, heading.level, position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_key_format() {
        let h = HeadingEntry::new("Intro", 1);
        assert_eq!(item_key(&h, 0), "Intro-1-0");
        assert_eq!(item_key(&h, 3), "Intro-1-3");
    }

    #[test]
    fn test_item_key_ignores_line_and_numbering() {
        let plain = HeadingEntry::new("Usage", 2);
        let decorated = HeadingEntry::new("Usage", 2)
            .with_line(40)
            .with_numbering("1.1.");
        assert_eq!(item_key(&plain, 1), item_key(&decorated, 1));
    }

    #[test]
    fn test_display_text_with_numbering() {
        let h = HeadingEntry::new("Install", 2).with_numbering("2.1.");
        assert_eq!(h.display_text(), "2.1. Install");
        assert_eq!(HeadingEntry::new("Install", 2).display_text(), "Install");
    }
}
