//! Breadcrumb generation for the displayed document.

use crate::config::{INDEX_NAME, MARKDOWN_EXT, ROOT_DOCUMENT};
use crate::core::tree::format_crumb_name;
use crate::models::Crumb;
use crate::models::route::{relative_to_root, strip_extension};

/// Breadcrumb segments for a document path.
///
/// The first crumb always points at the root document. Folder segments link to
/// that folder's index page; the last segment is plain text. Accepts paths with
/// or without the document-root prefix.
pub fn breadcrumbs(document_path: &str) -> Vec<Crumb> {
    let relative = relative_to_root(document_path);
    if relative.is_empty() || relative == ROOT_DOCUMENT {
        return vec![Crumb::current(format_crumb_name(INDEX_NAME))];
    }

    let stripped = strip_extension(&relative);
    let segments: Vec<&str> = stripped.split('/').filter(|s| !s.is_empty()).collect();

    let mut crumbs = vec![Crumb::link(format_crumb_name(INDEX_NAME), ROOT_DOCUMENT)];
    let mut prefix = String::new();

    for (idx, segment) in segments.iter().enumerate() {
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(segment);

        let label = format_crumb_name(segment);
        if idx == segments.len() - 1 {
            crumbs.push(Crumb::current(label));
        } else {
            crumbs.push(Crumb::link(
                label,
                format!("{}/{}.{}", prefix, INDEX_NAME, MARKDOWN_EXT),
            ));
        }
    }

    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_breadcrumb() {
        assert_eq!(breadcrumbs("README.md"), vec![Crumb::current("Home")]);
        assert_eq!(breadcrumbs("docs/README.md"), vec![Crumb::current("Home")]);
    }

    #[test]
    fn test_nested_breadcrumb() {
        assert_eq!(
            breadcrumbs("docs/guide/getting-started.md"),
            vec![
                Crumb::link("Home", "README.md"),
                Crumb::link("Guide", "guide/index.md"),
                Crumb::current("Getting Started"),
            ]
        );
    }

    #[test]
    fn test_index_and_readme_segments_render_as_home() {
        let crumbs = breadcrumbs("api/v1/index.md");
        assert_eq!(crumbs.len(), 4);
        assert_eq!(crumbs[2], Crumb::link("V1", "api/v1/index.md"));
        assert_eq!(crumbs[3], Crumb::current("Home"));

        assert_eq!(breadcrumbs("faq/README.md")[2], Crumb::current("Home"));
    }
}
