//! Application model - everything the panel's owner holds
//!
//! The owner supplies the title, the heading sequence, the generator and the
//! item renderer on every render. The panel itself only keeps `PanelState`.

mod panel_state;

pub use panel_state::{ActiveView, PanelState};

use std::fmt;
use std::path::PathBuf;

use crate::config::PanelConfig;
use crate::generator::Generator;
use crate::heading::HeadingEntry;
use crate::panel::TreePanel;
use crate::view::{default_item_renderer, Node, TreeProps};

/// Boxed per-item renderer held by the owner
pub type BoxedItemRenderer = Box<dyn Fn(&HeadingEntry) -> Option<Node>>;

/// The complete owner-side model
pub struct AppModel {
    /// The table-of-contents panel (owns its visibility state)
    pub panel: TreePanel,
    /// Display title
    pub title: String,
    /// Document source the headings were generated from
    pub source: String,
    /// Current heading sequence
    pub toc: Vec<HeadingEntry>,
    /// Generator for the current document, if one was resolved
    pub generator: Option<Box<dyn Generator>>,
    /// Renders the content of one heading row
    pub item_renderer: BoxedItemRenderer,
    pub config: PanelConfig,
    /// Where `Cmd::PersistState` writes the panel state, if anywhere
    pub session_path: Option<PathBuf>,
}

impl fmt::Debug for AppModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppModel")
            .field("panel", &self.panel)
            .field("title", &self.title)
            .field("toc", &self.toc)
            .field("generator", &self.generator.as_ref().map(|g| g.name()))
            .field("config", &self.config)
            .field("session_path", &self.session_path)
            .finish_non_exhaustive()
    }
}

impl AppModel {
    /// Model with a fixed heading list and no generator
    pub fn new(title: impl Into<String>, toc: Vec<HeadingEntry>, config: PanelConfig) -> Self {
        let item_renderer: BoxedItemRenderer = Box::new(default_item_renderer(config.indent_width));
        Self {
            panel: TreePanel::new(),
            title: title.into(),
            source: String::new(),
            toc,
            generator: None,
            item_renderer,
            config,
            session_path: None,
        }
    }

    /// Model whose headings come from running `generator` over `source`
    pub fn with_document(
        title: impl Into<String>,
        source: impl Into<String>,
        generator: Box<dyn Generator>,
        config: PanelConfig,
    ) -> Self {
        let mut model = Self::new(title, Vec::new(), config);
        model.source = source.into();
        model.generator = Some(generator);
        model.regenerate();
        model
    }

    /// Re-run the generator over the current source
    pub fn regenerate(&mut self) {
        if let Some(generator) = &self.generator {
            self.toc = generator.generate(&self.source);
            tracing::debug!(
                generator = generator.name(),
                headings = self.toc.len(),
                "regenerated headings"
            );
        }
    }

    pub fn set_item_renderer(
        &mut self,
        renderer: impl Fn(&HeadingEntry) -> Option<Node> + 'static,
    ) {
        self.item_renderer = Box::new(renderer);
    }

    /// Render the panel from the current props and state
    pub fn render(&self) -> Node {
        let props = TreeProps {
            title: &self.title,
            toc: &self.toc,
            generator: self.generator.as_deref(),
            item_renderer: &*self.item_renderer,
        };
        self.panel.render(&props)
    }
}
