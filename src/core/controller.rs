//! Page controller.
//!
//! Owns the navigation state and drives the view through the
//! `Idle -> Loading -> Displayed | Error` cycle. Fetching is left to the
//! caller: [`PageController::navigate`] hands out a tagged
//! [`NavigationRequest`], and the fetch result comes back through
//! [`PageController::complete_navigation`], which drops anything that is no
//! longer the pending request.

use super::breadcrumb::breadcrumbs;
use super::error::{FetchError, StorageError};
use super::navigation::{ExpansionState, nav_rows};
use super::search::SearchFilter;
use super::tree::{DocumentNode, format_crumb_name};
use crate::config::{ABOUT_TITLE, README_NAME, ROOT_DOCUMENT};
use crate::models::route::{PageRoute, fetch_path, relative_to_root};
use crate::models::{ContentView, Crumb, ErrorView, RenderedPage, Theme, TreeView};
use crate::utils::render_markdown;

// =============================================================================
// Seams
// =============================================================================

/// Rendering targets owned by the view layer.
pub trait DocView {
    fn render_tree(&self, tree: TreeView);
    fn render_breadcrumb(&self, crumbs: Vec<Crumb>);
    fn render_content(&self, content: ContentView);
    fn set_loading(&self, loading: bool);
    fn scroll_to_top(&self);
    fn apply_theme(&self, theme: Theme);
}

/// Browser history without full page navigation.
///
/// `path` is the document path relative to the document root and is stored as
/// the history entry state.
pub trait AddressBar {
    fn push(&self, url: &str, path: &str);
    fn replace(&self, url: &str, path: &str);
}

/// Persisted theme preference.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme) -> Result<(), StorageError>;
}

// =============================================================================
// State
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PagePhase {
    #[default]
    Idle,
    Loading,
    Displayed,
    Error,
}

/// Session-wide navigation state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Displayed document (relative to the document root)
    pub current_path: Option<String>,
    pub theme: Theme,
    /// Raw search box content
    pub search_filter: String,
}

/// What to do with the address bar once a document is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    /// New history entry (user navigation)
    Push,
    /// Overwrite the current entry (startup)
    Replace,
    /// Leave history alone (back/forward)
    Keep,
}

/// A document fetch the controller is waiting for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Monotonic tag; only the latest request is ever applied
    pub seq: u64,
    /// Document path relative to the document root
    pub path: String,
    /// Path to request from the server
    pub fetch_path: String,
    pub history: HistoryMode,
}

// =============================================================================
// Controller
// =============================================================================

pub struct PageController<V, A, S> {
    view: V,
    address: A,
    store: S,
    state: NavigationState,
    phase: PagePhase,
    tree: Option<DocumentNode>,
    expansion: ExpansionState,
    pending: Option<NavigationRequest>,
    next_seq: u64,
}

impl<V: DocView, A: AddressBar, S: ThemeStore> PageController<V, A, S> {
    /// Create the controller and apply the stored theme.
    pub fn new(view: V, address: A, store: S) -> Self {
        let theme = store.load().unwrap_or_default();
        view.apply_theme(theme);
        view.render_tree(TreeView::Loading);

        Self {
            view,
            address,
            store,
            state: NavigationState {
                theme,
                ..NavigationState::default()
            },
            phase: PagePhase::Idle,
            tree: None,
            expansion: ExpansionState::default(),
            pending: None,
            next_seq: 0,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn phase(&self) -> PagePhase {
        self.phase
    }

    /// Install the navigation tree once discovery finishes.
    pub fn load_tree(&mut self, root: DocumentNode) {
        self.expansion = ExpansionState::initial(&root);
        if let Some(current) = &self.state.current_path {
            self.expansion.reveal(current);
        }
        self.tree = Some(root);
        self.refresh_tree();
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Resolve the startup URL. The initial history entry is replaced.
    pub fn start(&mut self, route: &PageRoute) -> NavigationRequest {
        self.begin(route.document_path(), HistoryMode::Replace)
    }

    /// User navigation to a document. Folders resolve to their index page.
    pub fn navigate(&mut self, path: &str) -> NavigationRequest {
        let path = self.resolve(path);
        self.begin(path, HistoryMode::Push)
    }

    /// Open the root document.
    pub fn go_home(&mut self) -> NavigationRequest {
        self.navigate(ROOT_DOCUMENT)
    }

    /// Back/forward navigation.
    ///
    /// Uses the path stored in the history entry, then the route parsed from
    /// the URL. Never pushes a new entry.
    pub fn handle_pop_state(&mut self, state: Option<String>, route: &PageRoute) -> NavigationRequest {
        let path = state
            .filter(|p| !p.is_empty())
            .map(|p| relative_to_root(&p))
            .unwrap_or_else(|| route.document_path());
        self.begin(path, HistoryMode::Keep)
    }

    fn resolve(&self, path: &str) -> String {
        let path = relative_to_root(path);
        if path.is_empty() {
            return ROOT_DOCUMENT.to_string();
        }
        self.tree
            .as_ref()
            .and_then(|t| t.find(&path))
            .filter(|node| node.is_folder())
            .and_then(|folder| folder.index())
            .map(|index| index.path.clone())
            .unwrap_or(path)
    }

    fn begin(&mut self, path: String, history: HistoryMode) -> NavigationRequest {
        self.next_seq += 1;
        let request = NavigationRequest {
            seq: self.next_seq,
            fetch_path: fetch_path(&path),
            path,
            history,
        };

        self.pending = Some(request.clone());
        self.phase = PagePhase::Loading;
        self.view.set_loading(true);
        request
    }

    /// Apply a finished fetch.
    ///
    /// Returns `false` when the request was superseded and the result dropped.
    pub fn complete_navigation(
        &mut self,
        request: &NavigationRequest,
        result: Result<String, FetchError>,
    ) -> bool {
        if self.pending.as_ref().map(|p| p.seq) != Some(request.seq) {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&format!("Dropping stale response for {}", request.path).into());
            return false;
        }
        self.pending = None;
        self.view.set_loading(false);

        match result {
            Ok(markdown) => self.display(request, &markdown),
            Err(err) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(
                    &format!("Failed to load {}: {}", request.fetch_path, err).into(),
                );
                self.phase = PagePhase::Error;
                self.view.render_content(ContentView::Error(ErrorView::new(
                    request.fetch_path.clone(),
                    err.to_string(),
                )));
            }
        }
        true
    }

    fn display(&mut self, request: &NavigationRequest, markdown: &str) {
        let rendered = render_markdown(markdown);
        self.view.render_content(ContentView::Document(RenderedPage {
            path: request.path.clone(),
            html: rendered.html,
            toc: rendered.toc,
        }));

        self.state.current_path = Some(request.path.clone());
        self.phase = PagePhase::Displayed;
        self.view.render_breadcrumb(breadcrumbs(&request.path));

        let url = PageRoute::from_document(&request.path).to_url();
        match request.history {
            HistoryMode::Push => self.address.push(&url, &request.path),
            HistoryMode::Replace => self.address.replace(&url, &request.path),
            HistoryMode::Keep => {}
        }

        self.expansion.reveal(&request.path);
        self.refresh_tree();
        self.view.scroll_to_top();
    }

    /// Show the built-in About page.
    ///
    /// Any pending fetch is abandoned and the address bar is left alone.
    pub fn show_about(&mut self) {
        self.pending = None;
        self.view.set_loading(false);
        self.state.current_path = None;
        self.phase = PagePhase::Displayed;

        self.view.render_content(ContentView::About);
        self.view.render_breadcrumb(vec![
            Crumb::link(format_crumb_name(README_NAME), ROOT_DOCUMENT),
            Crumb::current(ABOUT_TITLE),
        ]);
        self.refresh_tree();
        self.view.scroll_to_top();
    }

    // -------------------------------------------------------------------------
    // Tree interaction
    // -------------------------------------------------------------------------

    /// Update the search filter. A blank query restores full visibility.
    pub fn search(&mut self, query: &str) {
        self.state.search_filter = query.to_string();
        self.refresh_tree();
    }

    /// Flip a folder's user expansion, returning whether it is now open.
    pub fn toggle_folder(&mut self, path: &str) -> bool {
        let open = self.expansion.toggle(path);
        self.refresh_tree();
        open
    }

    fn refresh_tree(&self) {
        let Some(root) = &self.tree else {
            self.view.render_tree(TreeView::Loading);
            return;
        };
        if root.children.is_empty() {
            self.view.render_tree(TreeView::NoDocuments);
            return;
        }

        let matches = SearchFilter::new(&self.state.search_filter).map(|f| f.apply(root));
        let rows = nav_rows(
            root,
            &self.expansion,
            matches.as_ref(),
            self.state.current_path.as_deref(),
        );

        if matches.as_ref().is_some_and(|m| m.hits() == 0) {
            self.view.render_tree(TreeView::NoMatches {
                query: self.state.search_filter.trim().to_string(),
            });
        } else {
            self.view.render_tree(TreeView::Rows(rows));
        }
    }

    // -------------------------------------------------------------------------
    // Theme
    // -------------------------------------------------------------------------

    /// Switch theme and persist it. Storage failures keep the new theme for
    /// this session.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.state.theme.toggled();
        self.state.theme = theme;
        self.view.apply_theme(theme);

        if let Err(_err) = self.store.save(theme) {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&format!("Failed to save theme: {}", _err).into());
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::core::tree::TreeBuilder;
    use crate::models::{ErrorAction, NavRow};

    #[derive(Default)]
    struct Log {
        tree: Option<TreeView>,
        crumbs: Vec<Crumb>,
        content: ContentView,
        loading: bool,
        scrolls: usize,
        theme: Option<Theme>,
        history: Vec<(&'static str, String, String)>,
        saved: Option<Theme>,
        stored: Option<Theme>,
        fail_save: bool,
    }

    /// Records every call made through the three seams.
    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Log>>);

    impl DocView for Recorder {
        fn render_tree(&self, tree: TreeView) {
            self.0.borrow_mut().tree = Some(tree);
        }
        fn render_breadcrumb(&self, crumbs: Vec<Crumb>) {
            self.0.borrow_mut().crumbs = crumbs;
        }
        fn render_content(&self, content: ContentView) {
            self.0.borrow_mut().content = content;
        }
        fn set_loading(&self, loading: bool) {
            self.0.borrow_mut().loading = loading;
        }
        fn scroll_to_top(&self) {
            self.0.borrow_mut().scrolls += 1;
        }
        fn apply_theme(&self, theme: Theme) {
            self.0.borrow_mut().theme = Some(theme);
        }
    }

    impl AddressBar for Recorder {
        fn push(&self, url: &str, path: &str) {
            self.0
                .borrow_mut()
                .history
                .push(("push", url.to_string(), path.to_string()));
        }
        fn replace(&self, url: &str, path: &str) {
            self.0
                .borrow_mut()
                .history
                .push(("replace", url.to_string(), path.to_string()));
        }
    }

    impl ThemeStore for Recorder {
        fn load(&self) -> Option<Theme> {
            self.0.borrow().stored
        }
        fn save(&self, theme: Theme) -> Result<(), StorageError> {
            let mut log = self.0.borrow_mut();
            if log.fail_save {
                return Err(StorageError::SaveFailed);
            }
            log.saved = Some(theme);
            Ok(())
        }
    }

    type Controller = PageController<Recorder, Recorder, Recorder>;

    fn setup(paths: &[&str]) -> (Controller, Recorder) {
        let rec = Recorder::default();
        let mut ctl = PageController::new(rec.clone(), rec.clone(), rec.clone());
        ctl.load_tree(TreeBuilder::new().with_placeholders(false).build(paths.iter().copied()));
        (ctl, rec)
    }

    fn rows(rec: &Recorder) -> Vec<NavRow> {
        match rec.0.borrow().tree.clone() {
            Some(TreeView::Rows(rows)) => rows,
            other => panic!("expected rows, got {:?}", other),
        }
    }

    const DOCS: &[&str] = &[
        "README.md",
        "guide/installation.md",
        "guide/advanced/deep/tuning.md",
    ];

    #[test]
    fn test_startup_replaces_history() {
        let (mut ctl, rec) = setup(DOCS);
        assert_eq!(ctl.phase(), PagePhase::Idle);

        let req = ctl.start(&PageRoute::Root);
        assert_eq!(req.fetch_path, "docs/README.md");
        assert_eq!(ctl.phase(), PagePhase::Loading);
        assert!(rec.0.borrow().loading);

        assert!(ctl.complete_navigation(&req, Ok("# Welcome".into())));
        assert_eq!(ctl.phase(), PagePhase::Displayed);
        assert_eq!(ctl.state().current_path.as_deref(), Some("README.md"));

        let log = rec.0.borrow();
        assert!(!log.loading);
        assert_eq!(log.scrolls, 1);
        assert_eq!(
            log.history,
            vec![("replace", "/".to_string(), "README.md".to_string())]
        );
        assert_eq!(log.crumbs, vec![Crumb::current("Home")]);
        match &log.content {
            ContentView::Document(page) => assert!(page.html.contains("Welcome")),
            other => panic!("unexpected content {:?}", other),
        }
    }

    #[test]
    fn test_navigate_pushes_query_url() {
        let (mut ctl, rec) = setup(DOCS);
        let req = ctl.navigate("guide/installation.md");
        assert_eq!(req.fetch_path, "docs/guide/installation.md");
        ctl.complete_navigation(&req, Ok("## Install".into()));

        let log = rec.0.borrow();
        assert_eq!(
            log.history.last(),
            Some(&(
                "push",
                "?page=guide/installation".to_string(),
                "guide/installation.md".to_string()
            ))
        );
        assert_eq!(
            log.crumbs,
            vec![
                Crumb::link("Home", "README.md"),
                Crumb::link("Guide", "guide/index.md"),
                Crumb::current("Installation"),
            ]
        );
        drop(log);

        let active: Vec<_> = rows(&rec).into_iter().filter(|r| r.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].path, "guide/installation.md");
    }

    #[test]
    fn test_missing_document_shows_error_view() {
        let (mut ctl, rec) = setup(DOCS);
        let home = ctl.start(&PageRoute::Root);
        ctl.complete_navigation(&home, Ok("# Home".into()));

        let req = ctl.navigate("missing.md");
        assert!(ctl.complete_navigation(&req, Err(FetchError::HttpError(404))));
        assert_eq!(ctl.phase(), PagePhase::Error);
        assert_eq!(ctl.state().current_path.as_deref(), Some("README.md"));

        let log = rec.0.borrow();
        match &log.content {
            ContentView::Error(view) => {
                assert_eq!(view.path, "docs/missing.md");
                assert!(view.message.contains("404"));
                assert_eq!(view.actions, vec![ErrorAction::GoHome, ErrorAction::Reload]);
            }
            other => panic!("unexpected content {:?}", other),
        }
        assert_eq!(log.history.len(), 1);
        assert!(!log.loading);
    }

    #[test]
    fn test_about_page_abandons_pending_fetch() {
        let (mut ctl, rec) = setup(DOCS);
        let home = ctl.start(&PageRoute::Root);
        ctl.complete_navigation(&home, Ok("# Home".into()));

        let req = ctl.navigate("guide/installation.md");
        ctl.show_about();
        assert!(!ctl.complete_navigation(&req, Ok("# Install".into())));

        assert_eq!(ctl.phase(), PagePhase::Displayed);
        assert_eq!(ctl.state().current_path, None);
        let log = rec.0.borrow();
        assert_eq!(log.content, ContentView::About);
        assert!(!log.loading);
        assert_eq!(
            log.crumbs,
            vec![Crumb::link("Home", "README.md"), Crumb::current("About")]
        );
        assert_eq!(log.history.len(), 1);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let (mut ctl, rec) = setup(DOCS);
        let first = ctl.navigate("guide/installation.md");
        let second = ctl.navigate("README.md");
        assert!(second.seq > first.seq);

        assert!(ctl.complete_navigation(&second, Ok("# Root".into())));
        assert!(!ctl.complete_navigation(&first, Ok("# Late".into())));

        assert_eq!(ctl.state().current_path.as_deref(), Some("README.md"));
        match &rec.0.borrow().content {
            ContentView::Document(page) => assert!(!page.html.contains("Late")),
            other => panic!("unexpected content {:?}", other),
        }
    }

    #[test]
    fn test_same_path_twice_keeps_latest() {
        let (mut ctl, _rec) = setup(DOCS);
        let first = ctl.navigate("README.md");
        let second = ctl.navigate("README.md");
        assert!(!ctl.complete_navigation(&first, Ok("old".into())));
        assert!(ctl.complete_navigation(&second, Ok("new".into())));
        assert_eq!(ctl.phase(), PagePhase::Displayed);
    }

    #[test]
    fn test_folder_navigation_opens_index() {
        let (mut ctl, _rec) = setup(DOCS);
        let req = ctl.navigate("guide");
        assert_eq!(req.path, "guide/index.md");
        assert_eq!(ctl.navigate("").path, "README.md");
    }

    #[test]
    fn test_pop_state_does_not_push() {
        let (mut ctl, rec) = setup(DOCS);
        let req = ctl.handle_pop_state(Some("guide/installation.md".into()), &PageRoute::Root);
        assert_eq!(req.history, HistoryMode::Keep);
        ctl.complete_navigation(&req, Ok("text".into()));
        assert!(rec.0.borrow().history.is_empty());

        let route = PageRoute::from_param(Some("my notes/setup"));
        assert_eq!(ctl.handle_pop_state(None, &route).path, "my notes/setup.md");
        assert_eq!(ctl.handle_pop_state(None, &PageRoute::Root).path, "README.md");
    }

    #[test]
    fn test_empty_tree_reports_no_documents() {
        let (mut ctl, rec) = setup(&[]);
        assert_eq!(rec.0.borrow().tree, Some(TreeView::NoDocuments));
        ctl.search("x");
        assert_eq!(rec.0.borrow().tree, Some(TreeView::NoDocuments));
    }

    #[test]
    fn test_tree_loading_before_discovery() {
        let rec = Recorder::default();
        let _ctl: Controller = PageController::new(rec.clone(), rec.clone(), rec.clone());
        assert_eq!(rec.0.borrow().tree, Some(TreeView::Loading));
    }

    #[test]
    fn test_deep_search_expands_ancestors_and_clears() {
        let (mut ctl, rec) = setup(DOCS);
        ctl.toggle_folder("guide");
        assert!(rows(&rec).iter().all(|r| r.depth == 0));

        ctl.search("TUNING");
        let found = rows(&rec);
        let paths: Vec<_> = found.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "guide",
                "guide/advanced",
                "guide/advanced/deep",
                "guide/advanced/deep/tuning.md"
            ]
        );
        assert!(found.iter().filter(|r| r.is_folder).all(|r| r.expanded));

        ctl.search("zzz");
        assert_eq!(
            rec.0.borrow().tree,
            Some(TreeView::NoMatches {
                query: "zzz".into()
            })
        );

        ctl.search("  ");
        assert!(rows(&rec).iter().all(|r| r.depth == 0));
    }

    #[test]
    fn test_theme_loaded_and_toggled() {
        let rec = Recorder::default();
        rec.0.borrow_mut().stored = Some(Theme::Dark);
        let mut ctl: Controller = PageController::new(rec.clone(), rec.clone(), rec.clone());
        assert_eq!(ctl.state().theme, Theme::Dark);
        assert_eq!(rec.0.borrow().theme, Some(Theme::Dark));

        assert_eq!(ctl.toggle_theme(), Theme::Light);
        assert_eq!(rec.0.borrow().saved, Some(Theme::Light));
        assert_eq!(rec.0.borrow().theme, Some(Theme::Light));
    }

    #[test]
    fn test_theme_survives_storage_failure() {
        let (mut ctl, rec) = setup(DOCS);
        assert_eq!(ctl.state().theme, Theme::Light);
        rec.0.borrow_mut().fail_save = true;
        assert_eq!(ctl.toggle_theme(), Theme::Dark);
        assert_eq!(ctl.state().theme, Theme::Dark);
        assert_eq!(rec.0.borrow().saved, None);
    }
}
