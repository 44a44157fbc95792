//! Root application module.
//!
//! Contains the main App component, the AppContext wiring the page controller
//! to Leptos signals, and application-level startup logic.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::DocsLayout;
use crate::core::{DocView, DocumentSource, NavigationRequest, PageController, discover};
use crate::config::ui;
use crate::models::{ContentView, Crumb, PageRoute, Theme, Toast, TreeView};
use crate::utils::{BrowserHistory, HttpSource, LocalThemeStore, apply_theme, dom};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// SignalView
// ============================================================================

/// Rendering targets exposed as signals.
///
/// The controller writes here; components subscribe.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub tree: RwSignal<TreeView>,
    pub breadcrumb: RwSignal<Vec<Crumb>>,
    pub content: RwSignal<ContentView>,
    pub loading: RwSignal<bool>,
    pub theme: RwSignal<Theme>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            tree: RwSignal::new(TreeView::Loading),
            breadcrumb: RwSignal::new(Vec::new()),
            content: RwSignal::new(ContentView::Blank),
            loading: RwSignal::new(false),
            theme: RwSignal::new(Theme::default()),
        }
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl DocView for SignalView {
    fn render_tree(&self, tree: TreeView) {
        self.tree.set(tree);
    }

    fn render_breadcrumb(&self, crumbs: Vec<Crumb>) {
        self.breadcrumb.set(crumbs);
    }

    fn render_content(&self, content: ContentView) {
        self.content.set(content);
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn scroll_to_top(&self) {
        dom::scroll_to_top(false);
    }

    fn apply_theme(&self, theme: Theme) {
        self.theme.set(theme);
        apply_theme(theme);
    }
}

// ============================================================================
// AppContext
// ============================================================================

type Controller = PageController<SignalView, BrowserHistory, LocalThemeStore>;

/// Application-wide context.
///
/// Provided at the root of the component tree; components reach it with
/// `use_context::<AppContext>()`. All navigation goes through the methods
/// here so that every fetch result flows back into the controller.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signals the controller renders into.
    pub view: SignalView,

    /// The single page controller.
    controller: StoredValue<Controller>,

    /// Search box content.
    pub search_query: RwSignal<String>,

    /// Sidebar visibility (only meaningful on mobile).
    pub sidebar_open: RwSignal<bool>,

    /// Notice currently shown over the page.
    pub toast: RwSignal<Option<Toast>>,
    toast_seq: StoredValue<u64>,
}

impl AppContext {
    pub fn new() -> Self {
        let view = SignalView::new();
        Self {
            view,
            controller: StoredValue::new(PageController::new(
                view,
                BrowserHistory,
                LocalThemeStore,
            )),
            search_query: RwSignal::new(String::new()),
            sidebar_open: RwSignal::new(false),
            toast: RwSignal::new(None),
            toast_seq: StoredValue::new(0),
        }
    }

    /// Load the startup document and discover the navigation tree.
    pub fn start(&self) {
        let route = PageRoute::current();
        if let Some(request) = self.controller.try_update_value(|c| c.start(&route)) {
            self.fetch(request);
        }

        let controller = self.controller;
        spawn_local(async move {
            let tree = discover(&HttpSource).await.into_tree();
            controller.update_value(|c| c.load_tree(tree));
        });
    }

    /// Open a document (or a folder's index page).
    pub fn navigate(&self, path: &str) {
        if let Some(request) = self.controller.try_update_value(|c| c.navigate(path)) {
            self.fetch(request);
        }
    }

    pub fn go_home(&self) {
        if let Some(request) = self.controller.try_update_value(|c| c.go_home()) {
            self.fetch(request);
        }
    }

    /// Browser back/forward.
    pub fn pop_state(&self, state: Option<String>) {
        let route = PageRoute::current();
        if let Some(request) = self
            .controller
            .try_update_value(|c| c.handle_pop_state(state, &route))
        {
            self.fetch(request);
        }
    }

    pub fn show_about(&self) {
        self.controller.update_value(|c| c.show_about());
    }

    /// Copy the address bar URL and confirm with a toast.
    pub fn copy_link(&self) {
        let ctx = *self;
        spawn_local(async move {
            let message = match dom::copy_to_clipboard(&dom::location_href()).await {
                Ok(()) => "Link copied to clipboard",
                Err(_err) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::warn_1(&_err);
                    "Could not copy the link, copy it from the address bar"
                }
            };
            ctx.notify(message);
        });
    }

    /// Show a toast; it hides itself unless replaced in the meantime.
    pub fn notify(&self, message: impl Into<String>) {
        self.toast_seq.update_value(|seq| *seq += 1);
        let id = self.toast_seq.get_value();
        self.toast.set(Some(Toast {
            id,
            message: message.into(),
        }));

        let toast = self.toast;
        spawn_local(async move {
            dom::delay(ui::TOAST_DURATION_MS).await;
            toast.update(|current| {
                if current.as_ref().is_some_and(|t| t.id == id) {
                    *current = None;
                }
            });
        });
    }

    pub fn search(&self, query: String) {
        self.controller.update_value(|c| c.search(&query));
        self.search_query.set(query);
    }

    pub fn toggle_folder(&self, path: &str) {
        self.controller.update_value(|c| {
            c.toggle_folder(path);
        });
    }

    pub fn toggle_theme(&self) {
        self.controller.update_value(|c| {
            c.toggle_theme();
        });
    }

    fn fetch(&self, request: NavigationRequest) {
        let controller = self.controller;
        spawn_local(async move {
            let result = HttpSource.fetch(&request.fetch_path).await;
            controller.update_value(|c| {
                c.complete_navigation(&request, result);
            });
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts loading the initial document and the navigation tree
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Startup runs once
    let started = StoredValue::new(false);
    Effect::new(move || {
        if !started.get_value() {
            started.set_value(true);
            ctx.start();
        }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::crash>
                    <div class=css::crashBody>
                        <h1 class=css::crashTitle>"Something went wrong"</h1>
                        <p class=css::crashText>
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details class=css::crashDetails>
                            <summary>"Error details"</summary>
                            <ul>
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button class=css::crashButton on:click=move |_| dom::reload()>
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <DocsLayout />
        </ErrorBoundary>
    }
}
