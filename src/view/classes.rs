//! Styling and accessibility tokens
//!
//! These strings are part of the panel's visual contract and must not change.

/// Root container of the panel
pub const PANEL: &str = "jp-TableOfContents";
/// Heading list container
pub const CONTENT: &str = "jp-TableOfContents-content";
/// A single heading list item
pub const ITEM: &str = "jp-tocItem";

/// Toolbar strip
pub const TOOLBAR: &str = "toc-toolbar";
/// Clickable wrapper around the outline toggle icon
pub const TOOLBAR_BUTTON: &str = "toc-toolbar-button";
/// Base class of the outline toggle icon
pub const TOC_ICON: &str = "jp-TableOfContents-icon";
/// Icon styling while the outline is shown
pub const ICON_SELECTED: &str = "toc-toolbar-icon-selected";
/// Icon styling while the outline is hidden
pub const ICON_UNSELECTED: &str = "toc-toolbar-icon";
/// Separator between the toggle and the tab region
pub const VERTICAL_DIVIDER: &str = "vertical-divider";

/// Role, accessible label, and tooltip of the outline toggle
pub const TOGGLE_ROLE: &str = "text";
pub const TOGGLE_LABEL: &str = "Toggle ToC View";

/// Placeholder shown in the side-tab region
pub const NO_TABS_MESSAGE: &str = "No tabs to display";
