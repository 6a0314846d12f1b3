//! Application Context
//!
//! Shared signals and actions provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::AddOutcome;
use crate::navigation::{NavStack, Page, Tab};
use crate::store::{store_add_shopping_item, UiStore};

/// How long a toast stays on screen
const TOAST_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped whenever the Collection must re-read its data
    pub collection_version: RwSignal<u32>,
    pub nav: RwSignal<NavStack>,
    pub active_tab: RwSignal<Tab>,
    pub toasts: RwSignal<Vec<Toast>>,
    pub about_open: RwSignal<bool>,
    next_toast_id: StoredValue<u64>,
    store: UiStore,
}

impl AppContext {
    pub fn new(store: UiStore) -> Self {
        Self {
            collection_version: RwSignal::new(0),
            nav: RwSignal::new(NavStack::default()),
            active_tab: RwSignal::new(Tab::Cocktails),
            toasts: RwSignal::new(Vec::new()),
            about_open: RwSignal::new(false),
            next_toast_id: StoredValue::new(0),
            store,
        }
    }

    /// Ask the Collection page to reload
    pub fn reload_collection(&self) {
        self.collection_version.update(|v| *v += 1);
    }

    pub fn push_page(&self, page: Page) {
        self.nav.update(|nav| nav.push(page));
    }

    pub fn pop_page(&self) {
        self.nav.update(|nav| {
            nav.pop();
        });
    }

    /// Show a transient message
    pub fn toast(&self, message: impl Into<String>) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);
        self.toasts.update(|t| {
            t.push(Toast {
                id,
                message: message.into(),
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            toasts.update(|t| t.retain(|toast| toast.id != id));
        });
    }

    /// Add an ingredient line to the shopping list and report the outcome
    pub fn add_to_shopping_list(&self, item: String) {
        let ctx = *self;
        spawn_local(async move {
            match commands::add_shopping_item(&item).await {
                Ok(AddOutcome::Added) => {
                    let text = item.trim().to_string();
                    ctx.toast(format!("Added '{}' to list", text));
                    store_add_shopping_item(&ctx.store, text);
                }
                Ok(AddOutcome::AlreadyPresent) => {
                    ctx.toast(format!("'{}' is already in list", item.trim()));
                }
                Err(e) => ctx.toast(format!("Could not add item: {}", e)),
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
