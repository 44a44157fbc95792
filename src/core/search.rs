//! Sidebar search filter.
//!
//! Filtering never touches the tree: it produces the set of visible paths and
//! the folders that must be opened so every match is reachable.

use std::collections::HashSet;

use super::tree::DocumentNode;

/// Case-insensitive substring filter over display names and paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    /// Create a filter, or `None` for a blank query (everything visible).
    pub fn new(query: &str) -> Option<Self> {
        let needle = query.trim().to_lowercase();
        (!needle.is_empty()).then_some(Self { needle })
    }

    /// Whether `node` itself matches.
    pub fn matches(&self, node: &DocumentNode) -> bool {
        node.display_name().to_lowercase().contains(&self.needle)
            || node.path.to_lowercase().contains(&self.needle)
    }

    /// Evaluate the filter over every node below `root`.
    pub fn apply(&self, root: &DocumentNode) -> SearchMatches {
        let mut matches = SearchMatches::default();
        for child in root.children.values() {
            self.visit(child, &mut matches);
        }
        matches
    }

    /// Returns whether `node` or any of its descendants matched.
    fn visit(&self, node: &DocumentNode, out: &mut SearchMatches) -> bool {
        let mut descendant_matched = false;
        for child in node.children.values() {
            // No short-circuit: every subtree has to be recorded.
            descendant_matched |= self.visit(child, out);
        }

        let matched = self.matches(node);
        if matched || descendant_matched {
            out.visible.insert(node.path.clone());
        }
        if descendant_matched {
            out.forced_open.insert(node.path.clone());
        }
        if matched {
            out.hits += 1;
        }
        matched || descendant_matched
    }
}

/// Outcome of applying a [`SearchFilter`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMatches {
    /// Paths of matching nodes and of every ancestor of a match.
    visible: HashSet<String>,
    /// Folders containing a match somewhere below them.
    forced_open: HashSet<String>,
    /// Number of nodes that matched directly.
    hits: usize,
}

impl SearchMatches {
    pub fn is_visible(&self, path: &str) -> bool {
        self.visible.contains(path)
    }

    pub fn is_forced_open(&self, path: &str) -> bool {
        self.forced_open.contains(path)
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}
