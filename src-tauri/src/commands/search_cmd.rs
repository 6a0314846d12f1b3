//! Search Commands
//!
//! Remote search merged with local favorites and custom recipes.

use std::collections::HashSet;
use tauri::State;

use crate::domain::{ExternalKind, RecipeCard};
use crate::repository::SearchableRepository;
use crate::services::search::{merge_results, remote_cards};
use crate::services::{SearchMode, SearchOutcome};
use crate::AppState;

/// Search one database; a blank query yields no results
#[tauri::command]
pub async fn search_recipes(
    state: State<'_, AppState>,
    kind: ExternalKind,
    mode: Option<SearchMode>,
    query: String,
) -> Result<SearchOutcome, String> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(SearchOutcome::default());
    }
    let mode = mode.unwrap_or_default();
    let favorites_repo = state.favorites(kind);

    let favorite_hits = favorites_repo.search(query).await.map_err(|e| e.to_string())?;
    let favorite_ids: HashSet<String> = favorites_repo.ids().await.into_iter().collect();
    let custom_hits = match kind {
        ExternalKind::Meal => state.custom_recipes.search(query).await.map_err(|e| e.to_string())?,
        ExternalKind::Cocktail => Vec::new(),
    };
    let remote = state.api.search(kind, mode, query).await;

    Ok(merge_results(kind, query, favorite_hits, custom_hits, remote, &favorite_ids))
}

/// One random record; `None` when the API returned nothing
#[tauri::command]
pub async fn random_recipe(
    state: State<'_, AppState>,
    kind: ExternalKind,
) -> Result<Option<RecipeCard>, String> {
    let record = state.api.random(kind).await.map_err(|e| e.to_string())?;
    let favorite_ids: HashSet<String> = state.favorites(kind).ids().await.into_iter().collect();
    Ok(record.and_then(|record| {
        remote_cards(kind, vec![record], &favorite_ids, &mut HashSet::new())
            .into_iter()
            .next()
    }))
}

/// Full record for a summary row
#[tauri::command]
pub async fn lookup_recipe(
    state: State<'_, AppState>,
    kind: ExternalKind,
    id: String,
) -> Result<Option<RecipeCard>, String> {
    let record = state.api.lookup(kind, &id).await.map_err(|e| e.to_string())?;
    let favorited = state.favorites(kind).contains(&id).await;
    Ok(record.and_then(|record| RecipeCard::from_external(kind, record, favorited)))
}
