//! Mount/unmount tracking between consecutive renders
//!
//! A keyed node is identified by the path of keys from the root down to it
//! (`toc-content/Intro-1-0`). Comparing the paths of two renders tells the
//! host which keyed subtrees entered or left the tree.

use std::collections::HashSet;

use super::node::Node;

/// Keyed paths that appeared or disappeared between two renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountDiff {
    /// Present in the new render only, in tree order
    pub mounted: Vec<String>,
    /// Present in the previous render only, in tree order
    pub unmounted: Vec<String>,
}

impl MountDiff {
    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty() && self.unmounted.is_empty()
    }

    /// Whether the node at `key` (a top-level keyed child) mounted
    pub fn did_mount(&self, key: &str) -> bool {
        self.mounted.iter().any(|p| p == key)
    }

    pub fn did_unmount(&self, key: &str) -> bool {
        self.unmounted.iter().any(|p| p == key)
    }
}

/// All keyed paths of a tree, in pre-order
pub fn keyed_paths(root: &Node) -> Vec<String> {
    let mut paths = Vec::new();
    collect(root, "", &mut paths);
    paths
}

fn collect(node: &Node, prefix: &str, paths: &mut Vec<String>) {
    let prefix = match &node.key {
        Some(key) => {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}/{}", prefix, key)
            };
            paths.push(path.clone());
            path
        }
        None => prefix.to_string(),
    };
    for child in &node.children {
        collect(child, &prefix, paths);
    }
}

/// Compare two renders. With no previous render everything keyed mounts.
pub fn diff(prev: Option<&Node>, next: &Node) -> MountDiff {
    let next_paths = keyed_paths(next);
    let prev_paths = prev.map(keyed_paths).unwrap_or_default();

    let prev_set: HashSet<&str> = prev_paths.iter().map(String::as_str).collect();
    let next_set: HashSet<&str> = next_paths.iter().map(String::as_str).collect();

    MountDiff {
        mounted: next_paths
            .iter()
            .filter(|p| !prev_set.contains(p.as_str()))
            .cloned()
            .collect(),
        unmounted: prev_paths
            .iter()
            .filter(|p| !next_set.contains(p.as_str()))
            .cloned()
            .collect(),
    }
}
