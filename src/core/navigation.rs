//! Navigation list built from the document tree.
//!
//! Flattens the tree into the rows the sidebar displays, combining the user's
//! expansion state with an optional search result.

use std::collections::HashSet;

use super::search::SearchMatches;
use super::tree::DocumentNode;
use crate::config::ui::DEFAULT_EXPANDED_DEPTH;
use crate::models::NavRow;

/// Folders the user has opened.
///
/// Search results never write here, so clearing a search restores exactly
/// what the user had open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: HashSet<String>,
}

impl ExpansionState {
    /// Initial state: folders up to [`DEFAULT_EXPANDED_DEPTH`] are open.
    pub fn initial(root: &DocumentNode) -> Self {
        let mut state = Self::default();
        collect_open(root, 0, &mut state.open);
        state
    }

    pub fn is_open(&self, path: &str) -> bool {
        self.open.contains(path)
    }

    /// Flip a folder, returning whether it is now open.
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.open.remove(path) {
            false
        } else {
            self.open.insert(path.to_string());
            true
        }
    }

    /// Open every folder on the way to `path`.
    pub fn reveal(&mut self, path: &str) {
        let mut prefix = String::new();
        let segments: Vec<&str> = path.split('/').collect();
        for segment in segments.iter().take(segments.len().saturating_sub(1)) {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            self.open.insert(prefix.clone());
        }
    }
}

fn collect_open(node: &DocumentNode, depth: usize, open: &mut HashSet<String>) {
    if depth > DEFAULT_EXPANDED_DEPTH {
        return;
    }
    for child in node.children.values().filter(|c| c.is_folder()) {
        open.insert(child.path.clone());
        collect_open(child, depth + 1, open);
    }
}

/// Flatten `root` into visible rows in render order.
///
/// A row is emitted when every ancestor is open (by the user or by the search)
/// and, while searching, when the node is part of the result.
pub fn nav_rows(
    root: &DocumentNode,
    expansion: &ExpansionState,
    search: Option<&SearchMatches>,
    active: Option<&str>,
) -> Vec<NavRow> {
    let mut rows = Vec::new();
    push_rows(root, 0, expansion, search, active, &mut rows);
    rows
}

fn push_rows(
    node: &DocumentNode,
    depth: usize,
    expansion: &ExpansionState,
    search: Option<&SearchMatches>,
    active: Option<&str>,
    rows: &mut Vec<NavRow>,
) {
    for child in node.sorted_children() {
        if search.is_some_and(|s| !s.is_visible(&child.path)) {
            continue;
        }

        let expanded = child.is_folder()
            && (expansion.is_open(&child.path)
                || search.is_some_and(|s| s.is_forced_open(&child.path)));

        rows.push(NavRow {
            label: child.display_name(),
            path: child.path.clone(),
            is_folder: child.is_folder(),
            depth,
            expanded,
            active: active == Some(child.path.as_str()),
        });

        if expanded {
            push_rows(child, depth + 1, expansion, search, active, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::SearchFilter;
    use crate::core::tree::TreeBuilder;

    fn sample() -> DocumentNode {
        TreeBuilder::new().with_placeholders(false).build([
            "README.md",
            "guide/setup.md",
            "guide/advanced/tuning.md",
            "api/auth.md",
        ])
    }

    fn paths(rows: &[NavRow]) -> Vec<&str> {
        rows.iter().map(|r| r.path.as_str()).collect()
    }

    #[test]
    fn test_initial_expansion_opens_top_level() {
        let root = sample();
        let expansion = ExpansionState::initial(&root);
        assert!(expansion.is_open("guide"));
        assert!(expansion.is_open("api"));
        assert!(!expansion.is_open("guide/advanced"));

        let rows = nav_rows(&root, &expansion, None, Some("guide/setup.md"));
        assert_eq!(
            paths(&rows),
            vec![
                "api",
                "api/auth.md",
                "api/index.md",
                "guide",
                "guide/advanced",
                "guide/index.md",
                "guide/setup.md",
                "README.md",
            ]
        );
        assert_eq!(rows[0].depth, 0);
        assert_eq!(rows[1].depth, 1);
        assert!(rows.iter().find(|r| r.path == "guide/setup.md").unwrap().active);
        assert!(!rows.iter().find(|r| r.path == "guide/advanced").unwrap().expanded);
    }

    #[test]
    fn test_toggle_and_reveal() {
        let root = sample();
        let mut expansion = ExpansionState::default();
        assert!(nav_rows(&root, &expansion, None, None).iter().all(|r| r.depth == 0));

        assert!(expansion.toggle("api"));
        assert!(!expansion.toggle("api"));

        expansion.reveal("guide/advanced/tuning.md");
        assert!(expansion.is_open("guide"));
        assert!(expansion.is_open("guide/advanced"));
        let rows = nav_rows(&root, &expansion, None, None);
        assert!(paths(&rows).contains(&"guide/advanced/tuning.md"));
    }

    #[test]
    fn test_search_forces_ancestors_without_touching_expansion() {
        let root = sample();
        let expansion = ExpansionState::default();
        let matches = SearchFilter::new("tuning").unwrap().apply(&root);

        let rows = nav_rows(&root, &expansion, Some(&matches), None);
        assert_eq!(
            paths(&rows),
            vec!["guide", "guide/advanced", "guide/advanced/tuning.md"]
        );
        assert!(rows[0].expanded && rows[1].expanded);

        // Clearing the search restores the user's (closed) state
        let rows = nav_rows(&root, &expansion, None, None);
        assert_eq!(paths(&rows), vec!["api", "guide", "README.md"]);
    }
}
