//! Site header: drawer toggle, title, page actions and theme switch.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_VERSION};
use crate::models::{PageRoute, Theme};

stylance::import_crate_style!(css, "src/components/header.module.css");

#[component]
pub fn Header(is_mobile: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let theme = ctx.view.theme;

    let drawer_icon = Memo::new(move |_| {
        if ctx.sidebar_open.get() {
            ic::CLOSE
        } else {
            ic::MENU
        }
    });

    let theme_icon = Memo::new(move |_| match theme.get() {
        Theme::Light => ic::MOON,
        Theme::Dark => ic::SUN,
    });

    let on_home = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ctx.go_home();
    };

    view! {
        <header class=css::header>
            <Show when=move || is_mobile.get()>
                <button
                    class=css::iconButton
                    title="Toggle navigation"
                    aria-label="Toggle navigation"
                    on:click=move |_| ctx.sidebar_open.update(|open| *open = !*open)
                >
                    {move || view! { <Icon icon=drawer_icon.get() /> }}
                </button>
            </Show>

            <a class=css::title href=PageRoute::Root.to_url() on:click=on_home>
                <span class=css::titleIcon>
                    <Icon icon=ic::BOOK />
                </span>
                <span class=css::titleLabel>{APP_NAME}</span>
            </a>
            <span class=css::version>{format!("v{}", APP_VERSION)}</span>

            <div class=css::spacer></div>

            <button
                class=css::iconButton
                title="Copy page link"
                aria-label="Copy page link"
                on:click=move |_| ctx.copy_link()
            >
                <Icon icon=ic::LINK />
            </button>

            <button
                class=css::iconButton
                title="About"
                aria-label="About"
                on:click=move |_| {
                    ctx.sidebar_open.set(false);
                    ctx.show_about();
                }
            >
                <Icon icon=ic::INFO />
            </button>

            <button
                class=css::iconButton
                title=move || theme.get().toggle_label()
                aria-label=move || theme.get().toggle_label()
                on:click=move |_| ctx.toggle_theme()
            >
                {move || view! { <Icon icon=theme_icon.get() /> }}
            </button>
        </header>
    }
}
