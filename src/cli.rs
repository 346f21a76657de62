//! Command-line argument parsing for the panel demo
//!
//! Supports:
//! - Rendering the outline of a document
//! - Replaying outline toggles and side-tab selection before rendering
//! - Text or JSON render-tree output

use clap::Parser;
use std::path::PathBuf;

/// Render a document's table of contents panel
#[derive(Parser, Debug)]
#[command(name = "toc-panel", version, about = "Render a table of contents panel")]
pub struct CliArgs {
    /// Document to outline
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Panel title (defaults to the file name)
    #[arg(long)]
    pub title: Option<String>,

    /// Click the outline toggle N times before rendering
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub toggle_outline: usize,

    /// Select side tab I before rendering (applied after toggles)
    #[arg(long, value_name = "I")]
    pub select_tab: Option<usize>,

    /// Enable hierarchical heading numbering
    #[arg(long)]
    pub numbering: bool,

    /// Print the render tree as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Ignore and do not write saved panel state
    #[arg(long)]
    pub no_restore: bool,
}

impl CliArgs {
    /// Title to show: explicit, else the file name, else the full path
    pub fn display_title(&self) -> String {
        self.title.clone().unwrap_or_else(|| {
            self.path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.path.display().to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "toc-panel",
            "docs/guide.md",
            "--toggle-outline",
            "2",
            "--select-tab",
            "1",
            "--json",
        ]);
        assert_eq!(args.path, PathBuf::from("docs/guide.md"));
        assert_eq!(args.toggle_outline, 2);
        assert_eq!(args.select_tab, Some(1));
        assert!(args.json);
        assert!(!args.numbering);
        assert_eq!(args.display_title(), "guide.md");
    }

    #[test]
    fn test_explicit_title_wins() {
        let args = CliArgs::parse_from(["toc-panel", "a.md", "--title", "Guide"]);
        assert_eq!(args.display_title(), "Guide");
    }
}
