//! Document tree construction.
//!
//! Builds the sidebar hierarchy from a flat list of document paths.
//!
//! # Path Convention
//!
//! - Paths are relative to the document root (`guide/setup.md`); a leading
//!   `docs/` is tolerated and stripped
//! - File nodes keep the `.md` extension in `path` and drop it from `name`
//! - Folder nodes carry no extension (`guide`, `guide/advanced`)
//! - The synthetic root has an empty name and path

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::config::{INDEX_NAME, MARKDOWN_EXT, README_NAME, placeholders};
use crate::models::route::{relative_to_root, strip_extension};

/// Kind of a tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    File,
    Folder,
}

/// One entry of the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentNode {
    /// Raw segment name (extension stripped for files).
    pub name: String,
    pub kind: NodeKind,
    /// Location relative to the document root.
    pub path: String,
    /// Children keyed by name. Always empty for files.
    pub children: BTreeMap<String, DocumentNode>,
}

impl DocumentNode {
    /// Empty synthetic root folder.
    pub fn root() -> Self {
        Self::folder("", "")
    }

    fn folder(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::Folder,
            path: path.to_string(),
            children: BTreeMap::new(),
        }
    }

    fn file(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::File,
            path: path.to_string(),
            children: BTreeMap::new(),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Human-readable label, see [`format_name`].
    pub fn display_name(&self) -> String {
        format_name(&self.name)
    }

    /// Children in render order: folders first, then files, each group sorted
    /// by display name.
    pub fn sorted_children(&self) -> Vec<&DocumentNode> {
        let mut children: Vec<&DocumentNode> = self.children.values().collect();
        children.sort_by(|a, b| compare_for_render(a, b));
        children
    }

    /// Index page of this folder, if present.
    pub fn index(&self) -> Option<&DocumentNode> {
        self.children
            .get(INDEX_NAME)
            .filter(|child| child.kind == NodeKind::File)
    }

    /// Look up a node by path (relative to the document root).
    pub fn find(&self, path: &str) -> Option<&DocumentNode> {
        if self.path == path {
            return Some(self);
        }
        self.children.values().find_map(|child| {
            let is_ancestor =
                path == child.path || path.starts_with(&format!("{}/", child.path));
            if is_ancestor {
                child.find(path)
            } else {
                None
            }
        })
    }

    /// All nodes below this one, depth-first.
    #[cfg(test)]
    pub fn descendants(&self) -> Vec<&DocumentNode> {
        let mut out = Vec::new();
        let mut stack: Vec<&DocumentNode> = self.children.values().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.values().rev());
        }
        out
    }
}

fn compare_for_render(a: &DocumentNode, b: &DocumentNode) -> Ordering {
    let rank = |node: &DocumentNode| match node.kind {
        NodeKind::Folder => 0,
        NodeKind::File => 1,
    };
    rank(a)
        .cmp(&rank(b))
        .then_with(|| a.display_name().cmp(&b.display_name()))
        .then_with(|| a.name.cmp(&b.name))
}

// =============================================================================
// Builder
// =============================================================================

/// Tree builder options.
#[derive(Clone, Copy, Debug)]
pub struct TreeBuilder {
    pad_placeholders: bool,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self {
            pad_placeholders: true,
        }
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to pad non-empty trees with the fixed placeholder folders.
    pub fn with_placeholders(mut self, enabled: bool) -> Self {
        self.pad_placeholders = enabled;
        self
    }

    /// Build the tree for `paths`.
    ///
    /// Empty input yields a root without children; placeholders are never
    /// added to an empty tree.
    pub fn build<I, S>(&self, paths: I) -> DocumentNode
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = DocumentNode::root();

        for path in paths {
            insert_path(&mut root, path.as_ref());
        }

        if self.pad_placeholders && !root.children.is_empty() {
            add_placeholders(&mut root);
        }

        for child in root.children.values_mut() {
            ensure_index(child);
        }

        root
    }
}

/// Build a tree with the default options (placeholders enabled).
pub fn build<I, S>(paths: I) -> DocumentNode
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TreeBuilder::default().build(paths)
}

fn insert_path(root: &mut DocumentNode, raw: &str) {
    let relative = relative_to_root(raw.trim());
    let is_dir = relative.ends_with('/');
    let parts: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
    let Some((last, dirs)) = parts.split_last() else {
        return;
    };

    let mut current = root;
    let mut current_path = String::new();

    let folder_parts = if is_dir { parts.as_slice() } else { dirs };
    for part in folder_parts {
        if !current_path.is_empty() {
            current_path.push('/');
        }
        current_path.push_str(part);

        let entry = current
            .children
            .entry(part.to_string())
            .or_insert_with(|| DocumentNode::folder(part, &current_path));

        if entry.kind == NodeKind::File {
            // A file exists where we expect a folder - skip this entry.
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(
                &format!("Document conflict: '{}' blocked by existing file", relative).into(),
            );
            return;
        }
        current = entry;
    }

    if is_dir || !is_markdown(last) {
        return;
    }

    let name = strip_extension(last);
    let path = if current_path.is_empty() {
        last.to_string()
    } else {
        format!("{}/{}", current_path, last)
    };
    let existing_folder = current.children.get(&name).map(DocumentNode::is_folder);
    match existing_folder {
        None => {
            current.children.insert(name.clone(), DocumentNode::file(&name, &path));
        }
        // An index page outranks a folder of the same name
        Some(true) if name == INDEX_NAME => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(
                &format!("Document conflict: '{}' replaces a folder of the same name", relative)
                    .into(),
            );
            current.children.insert(name.clone(), DocumentNode::file(&name, &path));
        }
        Some(true) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(
                &format!("Document conflict: '{}' blocked by existing folder", relative).into(),
            );
        }
        Some(false) => {}
    }
}

fn is_markdown(segment: &str) -> bool {
    segment
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext == MARKDOWN_EXT)
}

fn add_placeholders(root: &mut DocumentNode) {
    for folder in placeholders::FOLDERS {
        root.children
            .entry(folder.to_string())
            .or_insert_with(|| DocumentNode::folder(folder, folder));
    }

    if let Some(guide) = root.children.get_mut(placeholders::GUIDE_FOLDER)
        && guide.is_folder()
    {
        for file in placeholders::GUIDE_FILES {
            let path = format!("{}/{}.{}", guide.path, file, MARKDOWN_EXT);
            guide
                .children
                .entry(file.to_string())
                .or_insert_with(|| DocumentNode::file(file, &path));
        }
    }
}

/// Give every folder below (and including) `node` an index page.
fn ensure_index(node: &mut DocumentNode) {
    if !node.is_folder() {
        return;
    }

    if node.index().is_none() {
        let path = format!("{}/{}.{}", node.path, INDEX_NAME, MARKDOWN_EXT);
        #[cfg(target_arch = "wasm32")]
        if node.children.contains_key(INDEX_NAME) {
            web_sys::console::warn_1(
                &format!("Document conflict: folder replaced by index page '{}'", path).into(),
            );
        }
        node.children
            .insert(INDEX_NAME.to_string(), DocumentNode::file(INDEX_NAME, &path));
    }

    for child in node.children.values_mut() {
        ensure_index(child);
    }
}

// =============================================================================
// Name Formatting
// =============================================================================

/// Format a segment name for the navigation tree.
///
/// `index` → "Home", `README` → "Document Home", anything else has `-`/`_`
/// replaced by spaces and every word capitalized.
pub fn format_name(name: &str) -> String {
    match name {
        INDEX_NAME => "Home".to_string(),
        README_NAME => "Document Home".to_string(),
        _ => title_case(name),
    }
}

/// Format a segment name for breadcrumbs (`README` and `index` both → "Home").
pub fn format_crumb_name(name: &str) -> String {
    match name {
        INDEX_NAME | README_NAME => "Home".to_string(),
        _ => title_case(name),
    }
}

/// Replace separators with spaces and uppercase the first character of each
/// ASCII word.
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_word = false;

    for c in name.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric();
        if is_word && !prev_is_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(root: &DocumentNode) {
        for node in root.descendants() {
            match node.kind {
                NodeKind::File => assert!(node.children.is_empty(), "{} has children", node.path),
                NodeKind::Folder => {
                    assert!(node.index().is_some(), "{} has no index", node.path);
                    let kinds: Vec<NodeKind> =
                        node.sorted_children().iter().map(|c| c.kind).collect();
                    let first_file = kinds.iter().position(|k| *k == NodeKind::File);
                    if let Some(pos) = first_file {
                        assert!(kinds[pos..].iter().all(|k| *k == NodeKind::File));
                    }
                }
            }
        }
    }

    // =========================================================================
    // Builder Tests
    // =========================================================================

    #[test]
    fn test_build_empty() {
        let root = build(Vec::<String>::new());
        assert!(root.children.is_empty());
        assert!(root.is_folder());
    }

    #[test]
    fn test_build_probe_result() {
        let root = build(["docs/README.md", "docs/guide/index.md"]);

        let readme = root.children.get("README").unwrap();
        assert_eq!(readme.kind, NodeKind::File);
        assert_eq!(readme.path, "README.md");
        assert_eq!(readme.display_name(), "Document Home");

        let guide = root.children.get("guide").unwrap();
        assert_eq!(guide.path, "guide");
        assert_eq!(guide.index().unwrap().path, "guide/index.md");
        assert_eq!(
            guide.children.get("installation").unwrap().path,
            "guide/installation.md"
        );

        for folder in placeholders::FOLDERS {
            let node = root.children.get(*folder).unwrap();
            assert!(node.is_folder());
            assert_eq!(node.index().unwrap().path, format!("{}/index.md", folder));
        }
        assert_invariants(&root);
    }

    #[test]
    fn test_build_without_placeholders() {
        let root = TreeBuilder::new()
            .with_placeholders(false)
            .build(["README.md", "api/auth/tokens.md"]);

        assert_eq!(root.children.len(), 2);
        let auth = root.find("api/auth").unwrap();
        assert!(auth.is_folder());
        assert_eq!(auth.index().unwrap().path, "api/auth/index.md");
        assert!(root.find("api/auth/tokens.md").is_some());
        assert!(root.find("tutorial").is_none());
        assert_invariants(&root);
    }

    #[test]
    fn test_build_invariants_hold_for_varied_inputs() {
        let inputs: Vec<Vec<&str>> = vec![
            vec!["index.md"],
            vec!["a/b/c/d.md", "a/b/e.md", "a/f.md"],
            vec!["guide/README.md", "guide/", "tutorial/intro.md"],
            vec!["notes.txt", "img/logo.png", "x/y.md"],
            vec!["/docs/deep/er/est.md", "deep/er/index.md"],
            vec!["guide/index/x.md", "guide/index.md"],
            vec!["guide/index.md", "guide/index/x.md"],
            vec!["guide/index/x.md"],
        ];

        for paths in inputs {
            assert_invariants(&build(paths.clone()));
            assert_invariants(&TreeBuilder::new().with_placeholders(false).build(paths));
        }
    }

    #[test]
    fn test_existing_index_is_kept() {
        let root = TreeBuilder::new()
            .with_placeholders(false)
            .build(["guide/index.md", "guide/index.md"]);
        let guide = root.children.get("guide").unwrap();
        assert_eq!(guide.children.len(), 1);
    }

    #[test]
    fn test_non_markdown_files_are_ignored() {
        let root = TreeBuilder::new()
            .with_placeholders(false)
            .build(["notes.txt", "assets/logo.png", ".md"]);
        assert!(!root.children.contains_key("notes.txt"));
        let assets = root.children.get("assets").unwrap();
        assert_eq!(assets.children.len(), 1);
        assert!(assets.index().is_some());
    }

    #[test]
    fn test_file_blocks_folder() {
        let root = TreeBuilder::new()
            .with_placeholders(false)
            .build(["faq.md", "faq/billing.md"]);
        let faq = root.children.get("faq").unwrap();
        assert_eq!(faq.kind, NodeKind::File);
        assert!(faq.children.is_empty());
    }

    #[test]
    fn test_index_file_outranks_index_folder() {
        for paths in [
            ["guide/index/x.md", "guide/index.md"],
            ["guide/index.md", "guide/index/x.md"],
        ] {
            let root = TreeBuilder::new().with_placeholders(false).build(paths);
            let guide = root.children.get("guide").unwrap();
            assert_eq!(guide.index().unwrap().path, "guide/index.md");
            assert_eq!(guide.children.len(), 1);
        }
    }

    #[test]
    fn test_folder_blocks_later_file() {
        let root = TreeBuilder::new()
            .with_placeholders(false)
            .build(["faq/billing.md", "faq.md"]);
        let faq = root.children.get("faq").unwrap();
        assert!(faq.is_folder());
        assert!(faq.children.contains_key("billing"));
    }

    #[test]
    fn test_uppercase_extension_is_not_a_document() {
        let root = TreeBuilder::new()
            .with_placeholders(false)
            .build(["Guide.MD", "notes/Setup.Md", "intro.md"]);
        assert!(!root.children.contains_key("Guide.MD"));
        assert!(!root.children.contains_key("Guide"));
        assert!(root.children.contains_key("intro"));
        let notes = root.children.get("notes").unwrap();
        assert_eq!(notes.children.len(), 1);
        assert!(notes.index().is_some());
    }

    #[test]
    fn test_render_order() {
        let root = TreeBuilder::new().with_placeholders(false).build([
            "zeta.md",
            "alpha.md",
            "beta/index.md",
            "Alpha-folder/x.md",
        ]);
        let labels: Vec<String> = root
            .sorted_children()
            .iter()
            .map(|n| n.display_name())
            .collect();
        assert_eq!(labels, vec!["Alpha Folder", "Beta", "Alpha", "Zeta"]);
    }

    #[test]
    fn test_find() {
        let root = build(["guide/advanced/tuning.md"]);
        assert_eq!(root.find("").unwrap().path, "");
        assert!(root.find("guide/advanced").unwrap().is_folder());
        assert!(root.find("guide/adv").is_none());
    }

    // =========================================================================
    // Name Formatting Tests
    // =========================================================================

    #[test]
    fn test_format_name() {
        assert_eq!(format_name("getting-started"), "Getting Started");
        assert_eq!(format_name("index"), "Home");
        assert_eq!(format_name("README"), "Document Home");
        assert_eq!(format_name("api_reference"), "Api Reference");
        assert_eq!(format_name("v2.0-notes"), "V2.0 Notes");
        assert_eq!(format_name("already Capital"), "Already Capital");
    }

    #[test]
    fn test_format_crumb_name() {
        assert_eq!(format_crumb_name("README"), "Home");
        assert_eq!(format_crumb_name("index"), "Home");
        assert_eq!(format_crumb_name("faq"), "Faq");
    }
}
