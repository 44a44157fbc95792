//! Breadcrumb trail above the document.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::PageRoute;

stylance::import_crate_style!(css, "src/components/breadcrumb.module.css");

#[component]
pub fn Breadcrumb() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::breadcrumb aria-label="Breadcrumb">
            {move || {
                let crumbs = ctx.view.breadcrumb.get();
                let last = crumbs.len().saturating_sub(1);
                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        let segment = match crumb.target {
                            Some(target) => {
                                let href = PageRoute::from_document(&target).to_url();
                                let on_click = move |ev: ev::MouseEvent| {
                                    ev.prevent_default();
                                    ctx.navigate(&target);
                                };
                                view! {
                                    <a class=css::link href=href on:click=on_click>
                                        {crumb.label}
                                    </a>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <span class=css::current aria-current="page">
                                        {crumb.label}
                                    </span>
                                }
                                    .into_any()
                            }
                        };
                        let separator = (idx < last)
                            .then(|| {
                                view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                }
                            });
                        view! { {segment} {separator} }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
