//! View layer: pure functions from state to a render tree
//!
//! - `node`: the render tree value type
//! - `toolbar`: the outline toggle / side-tab strip
//! - `tree`: the full table-of-contents panel
//! - `lifecycle`: mount/unmount diffing between renders
//! - `text`: plain-text layout with click hit-testing

pub mod classes;
pub mod lifecycle;
pub mod node;
pub mod text;
pub mod toolbar;
pub mod tree;

pub use lifecycle::{diff, MountDiff};
pub use node::{Node, Tag};
pub use text::{layout, HitRegion, TextLayout, TextStyle};
pub use toolbar::{render_toolbar, ToolbarProps};
pub use tree::{
    default_item_renderer, render_tree, ItemRenderer, TreeProps, CONTENT_KEY,
    GENERATOR_TOOLBAR_KEY, HEADER_KEY, TOOLBAR_KEY,
};
