//! Document discovery.
//!
//! Static hosting offers no directory listing. Discovery reads an explicit
//! manifest when one is published next to the documents and otherwise probes a
//! fixed list of well-known paths.

use serde::Deserialize;

use super::error::FetchError;
use super::tree::{DocumentNode, TreeBuilder, build};
use crate::config::{MANIFEST_FILE, PROBE_PATHS};
use crate::models::route::fetch_path;

/// Anything able to return the raw text of a document.
///
/// Paths are fetch paths (`docs/guide/setup.md`).
pub trait DocumentSource {
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, FetchError>>;
}

/// How the document list was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscoveryMode {
    /// Listed by the manifest
    Manifest,
    /// Guessed by probing well-known paths
    Probe,
}

/// Result of [`discover`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discovery {
    pub mode: DiscoveryMode,
    /// Document paths relative to the document root
    pub paths: Vec<String>,
}

impl Discovery {
    /// Build the navigation tree.
    ///
    /// Probed trees are padded with placeholder folders; manifest trees mirror
    /// the manifest exactly.
    pub fn into_tree(self) -> DocumentNode {
        match self.mode {
            DiscoveryMode::Probe => build(self.paths),
            DiscoveryMode::Manifest => TreeBuilder::new().with_placeholders(false).build(self.paths),
        }
    }
}

/// Manifest file shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum Manifest {
    List(Vec<String>),
    Object { documents: Vec<String> },
}

/// Parse a manifest body into document paths.
pub fn parse_manifest(text: &str) -> Result<Vec<String>, FetchError> {
    let manifest: Manifest =
        serde_json::from_str(text).map_err(|e| FetchError::JsonParseError(e.to_string()))?;
    let paths = match manifest {
        Manifest::List(paths) => paths,
        Manifest::Object { documents } => documents,
    };
    Ok(paths
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect())
}

/// Discover the available documents.
///
/// Never fails: with neither a manifest nor any probe hit the path list is
/// empty.
pub async fn discover<S: DocumentSource>(source: &S) -> Discovery {
    match source.fetch(&fetch_path(MANIFEST_FILE)).await.and_then(|text| parse_manifest(&text)) {
        Ok(paths) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(
                &format!("Loaded {} documents from {}", paths.len(), MANIFEST_FILE).into(),
            );
            Discovery {
                mode: DiscoveryMode::Manifest,
                paths,
            }
        }
        Err(_err) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(
                &format!("No usable manifest ({}), probing known paths", _err).into(),
            );
            Discovery {
                mode: DiscoveryMode::Probe,
                paths: probe(source).await,
            }
        }
    }
}

/// Keep the [`PROBE_PATHS`] that can be fetched.
async fn probe<S: DocumentSource>(source: &S) -> Vec<String> {
    let mut found = Vec::new();
    for path in PROBE_PATHS {
        if source.fetch(&fetch_path(path)).await.is_ok() {
            found.push(path.to_string());
        }
    }

    #[cfg(target_arch = "wasm32")]
    if found.is_empty() {
        web_sys::console::warn_1(&"No documents found".into());
    }

    found
}
