//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use serde::{Deserialize, Serialize};

/// Messages handled by the tree panel itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelMsg {
    /// Flip outline visibility (toolbar icon click)
    ToggleOutline,
    /// Switch away from the outline to the side tab at this index
    SelectTab(usize),
}

/// Messages forwarded to the active generator (custom toolbar interaction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneratorMsg {
    /// Toggle hierarchical heading numbering
    ToggleNumbering,
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Msg {
    Panel(PanelMsg),
    Generator(GeneratorMsg),
}

impl From<PanelMsg> for Msg {
    fn from(msg: PanelMsg) -> Self {
        Msg::Panel(msg)
    }
}

impl From<GeneratorMsg> for Msg {
    fn from(msg: GeneratorMsg) -> Self {
        Msg::Generator(msg)
    }
}

/// Constructor used by the toolbar to build side-tab selection messages
pub fn select_tab(index: usize) -> Msg {
    Msg::Panel(PanelMsg::SelectTab(index))
}
