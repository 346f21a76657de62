//! Outline generators
//!
//! A generator knows how to turn a document into heading entries and may
//! contribute a custom toolbar rendered above the heading list. The panel
//! only asks whether a generator supplies a toolbar; everything else is the
//! owner's business.
//!
//! ## Capabilities
//!
//! - `ToolbarLike`: a zero-argument renderable with optional mount hooks
//! - `Generator`: heading extraction plus an optional `ToolbarLike`
//! - `Registry`: resolves a document path to a generator by file extension

mod markdown;

use std::path::Path;

use crate::commands::Cmd;
use crate::heading::HeadingEntry;
use crate::messages::GeneratorMsg;
use crate::view::Node;

pub use markdown::{MarkdownGenerator, NumberingToolbar};

/// A custom toolbar a generator can place above the heading list
pub trait ToolbarLike {
    /// Render the toolbar. Takes no props: everything it shows comes from
    /// the toolbar's own state.
    fn render(&self) -> Node;

    /// Called by the host after the toolbar enters the rendered tree.
    /// Hooks take `&self`; toolbars that track mount state keep it in a `Cell`.
    fn mounted(&self) {}

    /// Called by the host after the toolbar leaves the rendered tree
    fn unmounted(&self) {}
}

/// Produces heading entries for one kind of document
pub trait Generator {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Extract headings from document source, in document order
    fn generate(&self, source: &str) -> Vec<HeadingEntry>;

    /// Custom toolbar, if this generator has one. Used both to render it and
    /// to deliver its mount hooks.
    fn toolbar(&self) -> Option<&dyn ToolbarLike> {
        None
    }

    /// Handle interaction with the custom toolbar.
    ///
    /// Returns `Some(Cmd::Redraw)` when headings should be regenerated.
    fn update(&mut self, _msg: GeneratorMsg) -> Option<Cmd> {
        None
    }
}

struct Registration {
    extensions: Vec<String>,
    generator: Box<dyn Generator>,
}

/// Extension-keyed generator lookup
#[derive(Default)]
pub struct Registry {
    entries: Vec<Registration>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in generators
    pub fn with_builtins(numbering: bool) -> Self {
        let mut registry = Self::new();
        registry.register(
            &["md", "markdown"],
            Box::new(MarkdownGenerator::new(numbering)),
        );
        registry
    }

    /// Register a generator for the given extensions (without the dot).
    /// Earlier registrations win when extensions overlap.
    pub fn register(&mut self, extensions: &[&str], generator: Box<dyn Generator>) {
        tracing::debug!(generator = generator.name(), ?extensions, "registering generator");
        self.entries.push(Registration {
            extensions: extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
            generator,
        });
    }

    fn position(&self, path: &Path) -> Option<usize> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        self.entries
            .iter()
            .position(|entry| entry.extensions.iter().any(|e| *e == ext))
    }

    /// Find the generator for a document path
    pub fn find(&self, path: &Path) -> Option<&dyn Generator> {
        self.position(path)
            .map(|i| self.entries[i].generator.as_ref())
    }

    /// Remove and return the generator for a document path, so an owner can
    /// hold it mutably for the lifetime of a panel
    pub fn take(&mut self, path: &Path) -> Option<Box<dyn Generator>> {
        self.position(path)
            .map(|i| self.entries.remove(i).generator)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_find_by_extension_case_insensitive() {
        let registry = Registry::with_builtins(false);
        assert_eq!(registry.len(), 1);
        assert!(registry.find(&PathBuf::from("README.md")).is_some());
        assert!(registry.find(&PathBuf::from("notes.MARKDOWN")).is_some());
        assert!(registry.find(&PathBuf::from("main.rs")).is_none());
        assert!(registry.find(&PathBuf::from("Makefile")).is_none());
    }

    #[test]
    fn test_take_removes_registration() {
        let mut registry = Registry::with_builtins(false);
        let generator = registry.take(&PathBuf::from("a.md"));
        assert_eq!(generator.map(|g| g.name().to_string()), Some("markdown".to_string()));
        assert!(registry.is_empty());
    }
}
