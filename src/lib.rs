//! Table of contents panel - Elm-style
//!
//! This crate provides the state, update logic and pure views for a
//! collapsible outline panel with a side-tab toolbar, plus a small host that
//! dispatches clicks and tracks mount/unmount between renders.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod generator;
pub mod heading;
pub mod messages;
pub mod model;
pub mod panel;
pub mod runtime;
pub mod session;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::PanelConfig;
pub use heading::HeadingEntry;
pub use messages::Msg;
pub use model::{AppModel, PanelState};
pub use panel::TreePanel;
pub use runtime::Host;
