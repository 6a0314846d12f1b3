//! Shopping List Commands

use tauri::State;

use crate::domain::AddOutcome;
use crate::AppState;

#[tauri::command]
pub async fn list_shopping_items(state: State<'_, AppState>) -> Result<Vec<String>, String> {
    Ok(state.shopping_list.list().await)
}

/// `already_present` is an answer, not an error
#[tauri::command]
pub async fn add_shopping_item(
    state: State<'_, AppState>,
    item: String,
) -> Result<AddOutcome, String> {
    state.shopping_list.add(&item).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn remove_shopping_item(
    state: State<'_, AppState>,
    item: String,
) -> Result<bool, String> {
    state.shopping_list.remove(&item).await.map_err(|e| e.to_string())
}
