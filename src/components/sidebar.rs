//! Navigation sidebar: search box and document tree.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::ui::SEARCH_INPUT_ID;
use crate::models::{NavRow, PageRoute, TreeView};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/sidebar.module.css");

/// Rem of left padding per nesting level.
const INDENT_REM: f32 = 1.0;

#[component]
pub fn Sidebar(is_mobile: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let class = move || {
        if is_mobile.get() && !ctx.sidebar_open.get() {
            format!("{} {}", css::sidebar, css::closed)
        } else {
            css::sidebar.to_string()
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ctx.search(String::new());
            dom::blur_active_element();
        }
    };

    view! {
        <aside class=class>
            <div class=css::search>
                <span class=css::searchIcon>
                    <Icon icon=ic::SEARCH />
                </span>
                <input
                    id=SEARCH_INPUT_ID
                    type="search"
                    class=css::searchInput
                    placeholder="Search docs"
                    autocomplete="off"
                    prop:value=move || ctx.search_query.get()
                    on:input=move |ev| ctx.search(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <kbd class=css::shortcut>"Ctrl K"</kbd>
            </div>

            <nav class=css::tree aria-label="Documents">
                {move || match ctx.view.tree.get() {
                    TreeView::Loading => {
                        view! { <p class=css::notice>"Loading documents..."</p> }.into_any()
                    }
                    TreeView::NoDocuments => {
                        view! { <p class=css::notice>"No documents found"</p> }.into_any()
                    }
                    TreeView::NoMatches { query } => {
                        view! {
                            <p class=css::notice>{format!("No results for \"{}\"", query)}</p>
                        }
                            .into_any()
                    }
                    TreeView::Rows(rows) => {
                        view! {
                            <ul class=css::rows>
                                {rows
                                    .into_iter()
                                    .map(|row| view! { <TreeRow row=row is_mobile=is_mobile /> })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                }}
            </nav>
        </aside>
    }
}

/// One folder or document row.
#[component]
fn TreeRow(row: NavRow, is_mobile: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let indent = format!("padding-left: {}rem", 0.75 + row.depth as f32 * INDENT_REM);
    let class = if row.active {
        format!("{} {}", css::row, css::active)
    } else {
        css::row.to_string()
    };
    let path = row.path.clone();

    if row.is_folder {
        let (chevron, icon) = if row.expanded {
            (ic::CHEVRON_DOWN, ic::FOLDER_OPEN)
        } else {
            (ic::CHEVRON_RIGHT, ic::FOLDER)
        };

        view! {
            <li>
                <button
                    class=class
                    style=indent
                    aria-expanded=row.expanded.to_string()
                    on:click=move |_| ctx.toggle_folder(&path)
                >
                    <span class=css::chevron>
                        <Icon icon=chevron />
                    </span>
                    <span class=css::icon>
                        <Icon icon=icon />
                    </span>
                    <span class=css::label>{row.label}</span>
                </button>
            </li>
        }
        .into_any()
    } else {
        let href = PageRoute::from_document(&row.path).to_url();
        let on_click = move |ev: ev::MouseEvent| {
            ev.prevent_default();
            ctx.navigate(&path);
            if is_mobile.get_untracked() {
                ctx.sidebar_open.set(false);
            }
        };

        view! {
            <li>
                <a
                    class=class
                    style=indent
                    href=href
                    aria-current=row.active.then_some("page")
                    on:click=on_click
                >
                    <span class=css::chevron></span>
                    <span class=css::icon>
                        <Icon icon=ic::FILE_TEXT />
                    </span>
                    <span class=css::label>{row.label}</span>
                </a>
            </li>
        }
        .into_any()
    }
}
