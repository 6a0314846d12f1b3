//! Custom Recipe Commands

use tauri::State;
use uuid::Uuid;

use crate::domain::{RecipeCard, RecipeDraft};
use crate::repository::Repository;
use crate::AppState;

#[tauri::command]
pub async fn create_custom_recipe(
    state: State<'_, AppState>,
    draft: RecipeDraft,
) -> Result<RecipeCard, String> {
    let recipe = state
        .custom_recipes
        .create_from_draft(draft)
        .await
        .map_err(|e| e.to_string())?;
    Ok(RecipeCard::from_custom(recipe))
}

#[tauri::command]
pub async fn delete_custom_recipe(state: State<'_, AppState>, id: String) -> Result<(), String> {
    let id = Uuid::parse_str(&id).map_err(|e| format!("Invalid recipe id '{}': {}", id, e))?;
    state.custom_recipes.delete(id).await.map_err(|e| e.to_string())
}
