//! Favorite Commands

use tauri::State;

use crate::domain::{ExternalKind, ExternalRecord, FavoriteState};
use crate::repository::Repository;
use crate::AppState;

/// Save or unsave a record, returning the new membership
#[tauri::command]
pub async fn toggle_favorite(
    state: State<'_, AppState>,
    kind: ExternalKind,
    id: String,
    record: ExternalRecord,
) -> Result<FavoriteState, String> {
    state
        .favorites(kind)
        .toggle(&id, record)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn remove_favorite(
    state: State<'_, AppState>,
    kind: ExternalKind,
    id: String,
) -> Result<(), String> {
    state.favorites(kind).delete(id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn list_favorite_ids(
    state: State<'_, AppState>,
    kind: ExternalKind,
) -> Result<Vec<String>, String> {
    Ok(state.favorites(kind).ids().await)
}
