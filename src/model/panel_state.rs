//! Visibility/selection state of the table-of-contents panel

use serde::{Deserialize, Serialize};

/// Which view currently fills the panel body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActiveView {
    /// The heading outline
    Outline,
    /// A side tab (content not implemented; nothing renders)
    Tab(usize),
}

/// Panel state owned by a single `TreePanel`
///
/// Exactly one of {outline, a side tab} is active: `show_outline == true`
/// means the tab region is inactive, and selecting a tab clears
/// `show_outline`. The tab index is kept while the outline is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PanelState {
    #[serde(default = "default_show_outline")]
    pub show_outline: bool,
    #[serde(default)]
    pub selected_tab_index: usize,
}

fn default_show_outline() -> bool {
    true
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            show_outline: default_show_outline(),
            selected_tab_index: 0,
        }
    }
}

impl PanelState {
    /// Flip outline visibility; the tab index is left untouched
    pub fn toggle_outline(&mut self) {
        self.show_outline = !self.show_outline;
    }

    /// Hide the outline and record `index` as the selected tab.
    /// No bounds check: validating the index is the owner's job.
    pub fn toggle_tab(&mut self, index: usize) {
        self.show_outline = false;
        self.selected_tab_index = index;
    }

    pub fn active_view(&self) -> ActiveView {
        if self.show_outline {
            ActiveView::Outline
        } else {
            ActiveView::Tab(self.selected_tab_index)
        }
    }

    /// Short description of what changed, for trace logs
    pub fn diff(&self, other: &PanelState) -> Option<String> {
        if self == other {
            return None;
        }
        Some(format!("{:?} → {:?}", self.active_view(), other.active_view()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_outline() {
        let state = PanelState::default();
        assert!(state.show_outline);
        assert_eq!(state.selected_tab_index, 0);
        assert_eq!(state.active_view(), ActiveView::Outline);
    }

    #[test]
    fn test_toggle_outline_keeps_tab_index() {
        let mut state = PanelState::default();
        state.toggle_tab(3);
        assert_eq!(state.active_view(), ActiveView::Tab(3));

        state.toggle_outline();
        assert_eq!(state.active_view(), ActiveView::Outline);
        assert_eq!(state.selected_tab_index, 3);

        state.toggle_outline();
        assert_eq!(state.active_view(), ActiveView::Tab(3));
    }

    #[test]
    fn test_diff_reports_transition() {
        let before = PanelState::default();
        let mut after = before;
        after.toggle_outline();
        assert_eq!(before.diff(&before), None);
        assert_eq!(before.diff(&after).as_deref(), Some("Outline → Tab(0)"));
    }
}
