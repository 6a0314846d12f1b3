//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the data
//! several pages show at once, so a change on one page is reflected on all.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ExternalKind, Theme};

/// Shared UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Ids of saved cocktails
    pub favorite_cocktails: Vec<String>,
    /// Ids of saved meals
    pub favorite_meals: Vec<String>,
    /// Shopping list, in insertion order
    pub shopping_items: Vec<String>,
    pub theme: Theme,
    /// Whether the backend was built with the URL importer
    pub scrape_available: bool,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_favorite_ids(store: &UiStore, kind: ExternalKind, ids: Vec<String>) {
    match kind {
        ExternalKind::Cocktail => *store.favorite_cocktails().write() = ids,
        ExternalKind::Meal => *store.favorite_meals().write() = ids,
    }
}

/// Reflect a toggle or unsave without reloading the whole list
pub fn store_set_favorited(store: &UiStore, kind: ExternalKind, id: &str, favorited: bool) {
    let update = |ids: &mut Vec<String>| {
        ids.retain(|existing| existing != id);
        if favorited {
            ids.push(id.to_string());
        }
    };
    match kind {
        ExternalKind::Cocktail => update(&mut *store.favorite_cocktails().write()),
        ExternalKind::Meal => update(&mut *store.favorite_meals().write()),
    }
}

/// Reactive read of one favorite's membership
pub fn store_is_favorited(store: &UiStore, kind: ExternalKind, id: &str) -> bool {
    match kind {
        ExternalKind::Cocktail => store.favorite_cocktails().read().iter().any(|i| i == id),
        ExternalKind::Meal => store.favorite_meals().read().iter().any(|i| i == id),
    }
}

pub fn store_add_shopping_item(store: &UiStore, item: String) {
    let binding = store.shopping_items();
    let mut items = binding.write();
    if !items.contains(&item) {
        items.push(item);
    }
}

pub fn store_remove_shopping_item(store: &UiStore, item: &str) {
    store.shopping_items().write().retain(|i| i != item);
}
