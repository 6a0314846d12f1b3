//! Bistro Frontend App
//!
//! Main page with four tabs, plus a navigation stack of pages on top.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{
    apply_document_theme, AboutDialog, CollectionPage, HeaderBar, NewRecipePage, SearchPage,
    ShoppingListPage, ToastHost,
};
use crate::context::AppContext;
use crate::models::ExternalKind;
use crate::navigation::{Page, Tab};
use crate::store::{store_set_favorite_ids, UiState, UiStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(UiState::default());
    provide_context(store);
    let ctx = AppContext::new(store);
    provide_context(ctx);

    // Initial load of the state several pages share
    spawn_local(async move {
        for kind in [ExternalKind::Cocktail, ExternalKind::Meal] {
            match commands::list_favorite_ids(kind).await {
                Ok(ids) => store_set_favorite_ids(&store, kind, ids),
                Err(e) => web_sys::console::warn_1(&format!("[APP] favorites: {}", e).into()),
            }
        }
        if let Ok(items) = commands::list_shopping_items().await {
            *store.shopping_items().write() = items;
        }
        if let Ok(settings) = commands::get_settings().await {
            *store.theme().write() = settings.theme;
            apply_document_theme(settings.theme);
        }
        if let Ok(available) = commands::scrape_available().await {
            *store.scrape_available().write() = available;
        }
    });

    let tab_style = move |tab: Tab| move || {
        if ctx.active_tab.get() == tab {
            ""
        } else {
            "display: none"
        }
    };

    view! {
        <div class="app-layout">
            <div class="page main-page" style:display=move || if ctx.nav.with(|n| n.is_root()) { "" } else { "none" }>
                <HeaderBar />
                <main class="main-content">
                    <div style=tab_style(Tab::Cocktails)>
                        <SearchPage kind=ExternalKind::Cocktail />
                    </div>
                    <div style=tab_style(Tab::Recipes)>
                        <SearchPage kind=ExternalKind::Meal />
                    </div>
                    <div style=tab_style(Tab::Collection)>
                        <CollectionPage />
                    </div>
                    <div style=tab_style(Tab::ShoppingList)>
                        <ShoppingListPage />
                    </div>
                </main>
            </div>

            {move || match ctx.nav.with(|n| n.current()) {
                Page::Main => ().into_any(),
                Page::NewRecipe => view! { <NewRecipePage /> }.into_any(),
            }}

            <ToastHost />
            <AboutDialog />
        </div>
    }
}
