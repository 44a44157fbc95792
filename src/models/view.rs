//! View-model types handed to the rendering layer.
//!
//! The controller produces these; components only display them.

/// One visible row of the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavRow {
    /// Display label
    pub label: String,
    /// Node path relative to the document root
    pub path: String,
    pub is_folder: bool,
    /// Nesting level (0 = top level)
    pub depth: usize,
    /// Folder children are shown below this row
    pub expanded: bool,
    /// Row is the displayed document
    pub active: bool,
}

/// Navigation tree region content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeView {
    /// Discovery still running
    Loading,
    /// Discovery found nothing
    NoDocuments,
    /// A search is active and nothing matched
    NoMatches { query: String },
    Rows(Vec<NavRow>),
}

/// One breadcrumb segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Document to open on click (relative to the document root);
    /// `None` for the current, non-clickable segment.
    pub target: Option<String>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: Some(target.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: None,
        }
    }
}

/// Heading listed in the "On this page" panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level (1-6)
    pub level: u8,
    /// Anchor id of the rendered heading
    pub id: String,
    /// Plain heading text
    pub text: String,
}

/// Rendered document ready for injection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    /// Document path relative to the document root
    pub path: String,
    /// Sanitized HTML
    pub html: String,
    pub toc: Vec<TocEntry>,
}

/// Recovery actions offered by the error view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorAction {
    /// Open the root document
    GoHome,
    /// Reload the whole page
    Reload,
}

impl ErrorAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::GoHome => "Back to home",
            Self::Reload => "Reload page",
        }
    }
}

/// Fallback shown when a document cannot be loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorView {
    /// Fetch path of the missing document (e.g. `docs/missing.md`)
    pub path: String,
    /// Underlying error message
    pub message: String,
    pub actions: Vec<ErrorAction>,
}

impl ErrorView {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            actions: vec![ErrorAction::GoHome, ErrorAction::Reload],
        }
    }
}

/// Main content region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContentView {
    /// Nothing loaded yet
    #[default]
    Blank,
    Document(RenderedPage),
    Error(ErrorView),
    /// Built-in page describing the viewer
    About,
}

/// Short-lived notice shown over the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Distinguishes consecutive toasts with the same message
    pub id: u64,
    pub message: String,
}
