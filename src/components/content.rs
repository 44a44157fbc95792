//! Main content region: rendered document, table of contents, error view and
//! the About page.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::ui::TOC_LEVELS;
use crate::config::{APP_NAME, APP_VERSION};
use crate::models::route::resolve_link;
use crate::models::{ContentView, ErrorAction, ErrorView, RenderedPage, TocEntry};
use crate::utils::dom;
use crate::utils::format::{LocalTime, format_last_updated};

stylance::import_crate_style!(css, "src/components/content.module.css");

#[component]
pub fn Content() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::content>
            // Previous content stays visible underneath
            <Show when=move || ctx.view.loading.get()>
                <div class=css::loading role="status">
                    <span class=css::spinner></span>
                    "Loading..."
                </div>
            </Show>

            {move || match ctx.view.content.get() {
                ContentView::Blank => ().into_any(),
                ContentView::Document(page) => view! { <DocumentPage page=page /> }.into_any(),
                ContentView::Error(error) => view! { <ErrorPanel error=error /> }.into_any(),
                ContentView::About => view! { <AboutPanel /> }.into_any(),
            }}
        </div>
    }
}

/// `href` of the link under a plain left click, if any.
fn clicked_link(ev: &ev::MouseEvent) -> Option<String> {
    if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
        return None;
    }
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let anchor = target.closest("a").ok()??;
    anchor.get_attribute("href")
}

#[component]
fn DocumentPage(page: RenderedPage) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let toc: Vec<TocEntry> = page
        .toc
        .into_iter()
        .filter(|entry| TOC_LEVELS.contains(&entry.level))
        .collect();

    let updated = format_last_updated(&LocalTime::now());

    // Anchors scroll in place; relative document links navigate in-app
    let current = page.path;
    let on_click = move |ev: ev::MouseEvent| {
        let Some(href) = clicked_link(&ev) else {
            return;
        };
        if let Some(id) = href.strip_prefix('#') {
            ev.prevent_default();
            dom::scroll_to_anchor(id);
        } else if let Some(path) = resolve_link(&current, &href) {
            ev.prevent_default();
            ctx.navigate(&path);
        }
    };

    view! {
        <div class=css::page>
            <div class=css::document>
                <article class=css::markdown inner_html=page.html on:click=on_click></article>
                <footer class=css::footer>"Last updated: " {updated}</footer>
            </div>
            {(!toc.is_empty()).then(|| view! { <TableOfContents entries=toc /> })}
        </div>
    }
}

/// "On this page" panel.
#[component]
fn TableOfContents(entries: Vec<TocEntry>) -> impl IntoView {
    view! {
        <aside class=css::toc>
            <p class=css::tocTitle>"On this page"</p>
            <ul class=css::tocList>
                {entries
                    .into_iter()
                    .map(|entry| {
                        let class = if entry.level > *TOC_LEVELS.start() {
                            css::tocNested
                        } else {
                            css::tocItem
                        };
                        let href = format!("#{}", entry.id);
                        let id = entry.id;
                        view! {
                            <li class=class>
                                <a
                                    href=href
                                    on:click=move |ev: ev::MouseEvent| {
                                        ev.prevent_default();
                                        dom::scroll_to_anchor(&id);
                                    }
                                >
                                    {entry.text}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}

/// Fallback for a document that failed to load.
#[component]
fn ErrorPanel(error: ErrorView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::error role="alert">
            <span class=css::errorIcon>
                <Icon icon=ic::ALERT />
            </span>
            <h2 class=css::errorTitle>"Document unavailable"</h2>
            <p>"Could not load " <code>{error.path}</code></p>
            <p class=css::errorDetail>{error.message}</p>
            <div class=css::actions>
                {error
                    .actions
                    .into_iter()
                    .map(|action| {
                        let icon = match action {
                            ErrorAction::GoHome => ic::HOME,
                            ErrorAction::Reload => ic::RELOAD,
                        };
                        view! {
                            <button
                                class=css::actionButton
                                on:click=move |_| match action {
                                    ErrorAction::GoHome => ctx.go_home(),
                                    ErrorAction::Reload => dom::reload(),
                                }
                            >
                                <Icon icon=icon />
                                <span>{action.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

const FEATURES: &[&str] = &[
    "Navigation tree discovered from the document folder",
    "Light and dark themes, remembered between visits",
    "Instant filtering of the navigation tree",
    "Responsive layout with a drawer on small screens",
    "Markdown rendering with tables, task lists and footnotes",
    "Syntax highlighting for fenced code blocks",
    "Shareable links for every page",
];

/// Built-in page describing the viewer.
#[component]
fn AboutPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::about>
            <h1>{format!("About {}", APP_NAME)}</h1>
            <p>"A documentation viewer for Markdown files. It supports:"</p>
            <ul>
                {FEATURES.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
            </ul>
            <p class=css::errorDetail>{format!("Version {}", APP_VERSION)}</p>
            <div class=css::actions>
                <button class=css::actionButton on:click=move |_| ctx.go_home()>
                    <Icon icon=ic::BOOK />
                    <span>"Start reading"</span>
                </button>
            </div>
        </div>
    }
}
