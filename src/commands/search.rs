//! Search Commands

use serde::Serialize;

use super::{call, to_args};
use crate::models::{ExternalKind, FavoriteState, RecipeCard, SearchMode, SearchOutcome};

#[derive(Serialize)]
struct SearchArgs<'a> {
    kind: ExternalKind,
    mode: SearchMode,
    query: &'a str,
}

#[derive(Serialize)]
struct KindArgs {
    kind: ExternalKind,
}

#[derive(Serialize)]
struct KindIdArgs<'a> {
    kind: ExternalKind,
    id: &'a str,
}

#[derive(Serialize)]
struct ToggleFavoriteArgs<'a> {
    kind: ExternalKind,
    id: &'a str,
    record: &'a serde_json::Map<String, serde_json::Value>,
}

pub async fn search_recipes(
    kind: ExternalKind,
    mode: SearchMode,
    query: &str,
) -> Result<SearchOutcome, String> {
    call("search_recipes", to_args(&SearchArgs { kind, mode, query })?).await
}

pub async fn random_recipe(kind: ExternalKind) -> Result<Option<RecipeCard>, String> {
    call("random_recipe", to_args(&KindArgs { kind })?).await
}

pub async fn lookup_recipe(kind: ExternalKind, id: &str) -> Result<Option<RecipeCard>, String> {
    call("lookup_recipe", to_args(&KindIdArgs { kind, id })?).await
}

pub async fn toggle_favorite(
    kind: ExternalKind,
    id: &str,
    record: &serde_json::Map<String, serde_json::Value>,
) -> Result<FavoriteState, String> {
    call("toggle_favorite", to_args(&ToggleFavoriteArgs { kind, id, record })?).await
}

pub async fn remove_favorite(kind: ExternalKind, id: &str) -> Result<(), String> {
    call("remove_favorite", to_args(&KindIdArgs { kind, id })?).await
}

pub async fn list_favorite_ids(kind: ExternalKind) -> Result<Vec<String>, String> {
    call("list_favorite_ids", to_args(&KindArgs { kind })?).await
}
