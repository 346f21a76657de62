//! Table-of-contents panel component
//!
//! `TreePanel` is the single owner of `PanelState`. It composes the fixed
//! toolbar, the generator's optional toolbar and the heading list, and only
//! changes state through its two toggles.

mod tree_panel;

pub use tree_panel::TreePanel;
