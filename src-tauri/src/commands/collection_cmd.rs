//! Collection Commands

use tauri::State;

use crate::domain::ExternalKind;
use crate::repository::Repository;
use crate::services::search::build_collection;
use crate::services::CollectionView;
use crate::AppState;

/// Custom recipes and both favorite sets, filtered by title or category
#[tauri::command]
pub async fn list_collection(
    state: State<'_, AppState>,
    filter: Option<String>,
) -> Result<CollectionView, String> {
    let custom = state.custom_recipes.list().await.map_err(|e| e.to_string())?;
    let cocktails = state
        .favorites(ExternalKind::Cocktail)
        .list()
        .await
        .map_err(|e| e.to_string())?;
    let meals = state
        .favorites(ExternalKind::Meal)
        .list()
        .await
        .map_err(|e| e.to_string())?;
    Ok(build_collection(
        custom,
        cocktails,
        meals,
        filter.as_deref().unwrap_or(""),
    ))
}
