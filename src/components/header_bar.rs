//! Header Bar Component
//!
//! Top bar of the main page: new-recipe button, view switcher and app menu.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ViewSwitcher;
use crate::commands;
use crate::context::use_app_context;
use crate::models::Theme;
use crate::navigation::Page;
use crate::store::{use_ui_store, UiStateStoreFields};

/// Mirror the theme on the document so the stylesheet can follow it
pub fn apply_document_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

#[component]
pub fn HeaderBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let (menu_open, set_menu_open) = signal(false);

    let choose_theme = move |theme: Theme| {
        set_menu_open.set(false);
        spawn_local(async move {
            match commands::set_theme(theme).await {
                Ok(settings) => {
                    *store.theme().write() = settings.theme;
                    apply_document_theme(settings.theme);
                }
                Err(e) => ctx.toast(format!("Could not change theme: {}", e)),
            }
        });
    };

    let quit = move |_| {
        spawn_local(async {
            let _ = commands::quit_app().await;
        });
    };

    view! {
        <header class="header-bar">
            <button
                class="flat-btn"
                title="New Recipe"
                on:click=move |_| ctx.push_page(Page::NewRecipe)
            >
                "+"
            </button>

            <ViewSwitcher />

            <div class="menu-anchor">
                <button
                    class="flat-btn"
                    title="Main Menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <Show when=move || menu_open.get()>
                    <div class="popover-menu">
                        <div class="menu-section">
                            <span class="menu-heading dim">"Theme"</span>
                            {Theme::ALL
                                .into_iter()
                                .map(|theme| {
                                    view! {
                                        <button
                                            class="menu-item"
                                            class:checked=move || store.theme().get() == theme
                                            on:click=move |_| choose_theme(theme)
                                        >
                                            {theme.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="menu-section">
                            <button
                                class="menu-item"
                                on:click=move |_| {
                                    set_menu_open.set(false);
                                    ctx.about_open.set(true);
                                }
                            >
                                "About Bistro"
                            </button>
                            <button class="menu-item" on:click=quit>"Quit"</button>
                        </div>
                    </div>
                </Show>
            </div>
        </header>
    }
}
