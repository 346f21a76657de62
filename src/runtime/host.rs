//! Synchronous host for a table-of-contents panel
//!
//! Every dispatch runs `update`, executes the returned command, and
//! re-renders before returning, so the view always reflects the latest state
//! before the next interaction is processed.

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;
use crate::session;
use crate::update::update;
use crate::view::{self, MountDiff, Node, TextLayout, TextStyle, GENERATOR_TOOLBAR_KEY};

pub struct Host {
    model: AppModel,
    view: Node,
    style: TextStyle,
}

impl Host {
    /// Render the initial view and mount it
    pub fn new(model: AppModel) -> Self {
        let rendered = model.render();
        let host = Self {
            model,
            view: rendered,
            style: TextStyle::default(),
        };
        let initial = view::diff(None, &host.view);
        host.fire_hooks(&initial);
        host
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    /// The most recent render
    pub fn view(&self) -> &Node {
        &self.view
    }

    /// Text layout of the most recent render
    pub fn layout(&self) -> TextLayout {
        view::layout(&self.view, &self.style)
    }

    /// Run a message through `update` and apply the resulting command
    pub fn dispatch(&mut self, msg: Msg) -> MountDiff {
        match update(&mut self.model, msg) {
            Some(cmd) => self.process_cmd(cmd),
            None => MountDiff::default(),
        }
    }

    /// Click a cell of the text layout. Returns `None` when nothing
    /// clickable is there.
    pub fn click(&mut self, row: usize, col: usize) -> Option<MountDiff> {
        let msg = self.layout().hit_test(row, col)?;
        tracing::debug!(row, col, ?msg, "click");
        Some(self.dispatch(msg))
    }

    /// Re-render and fire lifecycle hooks for whatever entered or left
    pub fn redraw(&mut self) -> MountDiff {
        let next = self.model.render();
        let diff = view::diff(Some(&self.view), &next);
        self.view = next;
        self.fire_hooks(&diff);
        diff
    }

    pub fn into_model(self) -> AppModel {
        self.model
    }

    fn process_cmd(&mut self, cmd: Cmd) -> MountDiff {
        if cmd.needs_persist() {
            self.persist();
        }
        if cmd.needs_redraw() {
            self.redraw()
        } else {
            MountDiff::default()
        }
    }

    fn persist(&self) {
        let Some(path) = &self.model.session_path else {
            return;
        };
        if let Err(e) = session::save_panel_state(path, self.model.panel.state()) {
            tracing::warn!("Failed to persist panel state: {:#}", e);
        }
    }

    fn fire_hooks(&self, diff: &MountDiff) {
        let mounted = diff.did_mount(GENERATOR_TOOLBAR_KEY);
        let unmounted = diff.did_unmount(GENERATOR_TOOLBAR_KEY);
        if !mounted && !unmounted {
            return;
        }

        if let Some(toolbar) = self
            .model
            .generator
            .as_deref()
            .and_then(|generator| generator.toolbar())
        {
            if unmounted {
                toolbar.unmounted();
            }
            if mounted {
                toolbar.mounted();
            }
        }
    }
}
