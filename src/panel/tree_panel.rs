//! Tree panel state and rendering

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::{ActiveView, PanelState};
use crate::view::{render_tree, Node, TreeProps};

/// The outline panel: owns visibility state, renders from owner props
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreePanel {
    state: PanelState,
}

impl TreePanel {
    /// Create a panel showing the outline
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a panel from previously saved state
    pub fn with_state(state: PanelState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn active_view(&self) -> ActiveView {
        self.state.active_view()
    }

    /// Flip outline visibility
    pub fn toggle_outline(&mut self) {
        self.state.toggle_outline();
    }

    /// Switch to the side tab at `index`
    pub fn toggle_tab(&mut self, index: usize) {
        self.state.toggle_tab(index);
    }

    /// Apply a panel message
    pub fn handle(&mut self, msg: PanelMsg) -> Option<Cmd> {
        match msg {
            PanelMsg::ToggleOutline => self.toggle_outline(),
            PanelMsg::SelectTab(index) => self.toggle_tab(index),
        }
        Some(Cmd::Redraw)
    }

    /// Render the panel for the current state
    pub fn render(&self, props: &TreeProps<'_>) -> Node {
        render_tree(props, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_routes_messages() {
        let mut panel = TreePanel::new();
        assert_eq!(panel.handle(PanelMsg::SelectTab(2)), Some(Cmd::Redraw));
        assert_eq!(panel.active_view(), ActiveView::Tab(2));

        panel.handle(PanelMsg::ToggleOutline);
        assert_eq!(panel.active_view(), ActiveView::Outline);
        assert_eq!(panel.state().selected_tab_index, 2);
    }

    #[test]
    fn test_with_state_restores() {
        let state = PanelState {
            show_outline: false,
            selected_tab_index: 1,
        };
        let panel = TreePanel::with_state(state);
        assert_eq!(panel.active_view(), ActiveView::Tab(1));
    }
}
