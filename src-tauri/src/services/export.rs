//! Plain-text Export

use std::path::Path;

use crate::domain::{DomainResult, RecipeView};

/// Render a recipe the same way whatever its origin
pub fn export_text(view: &RecipeView) -> String {
    let mut text = format!(
        "Title: {}\nCategory: {}\n\nIngredients:\n",
        view.title, view.category
    );
    for ingredient in &view.ingredients {
        text.push_str("- ");
        text.push_str(ingredient);
        text.push('\n');
    }
    text.push_str("\nInstructions:\n");
    text.push_str(view.instructions.as_deref().unwrap_or(""));
    text.push('\n');
    text
}

/// Keep alphanumerics, space, `-` and `_`
pub fn sanitize_file_stem(title: &str) -> String {
    let stem: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let stem = stem.trim();
    if stem.is_empty() {
        "recipe".to_string()
    } else {
        stem.to_string()
    }
}

/// Suggested name for the save dialog
pub fn export_file_name(view: &RecipeView) -> String {
    format!("{}.txt", sanitize_file_stem(&view.title))
}

pub async fn write_export(path: &Path, view: &RecipeView) -> DomainResult<()> {
    tokio::fs::write(path, export_text(view)).await?;
    log::info!("Exported '{}' to {}", view.title, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomRecipe, ExternalKind, ExternalRecord, Recipe, RecipeDraft};
    use serde_json::json;

    fn tea() -> RecipeView {
        let recipe = CustomRecipe::from_draft(
            RecipeDraft {
                name: "Tea".to_string(),
                ingredients: vec!["Water".to_string(), "Tea bag".to_string()],
                instructions: "Boil.".to_string(),
                ..Default::default()
            },
            None,
        );
        Recipe::custom(recipe).view()
    }

    #[test]
    fn test_export_lines_in_order() {
        let text = export_text(&tea());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Title: Tea",
                "Category: Unknown",
                "",
                "Ingredients:",
                "- Water",
                "- Tea bag",
                "",
                "Instructions:",
                "Boil.",
            ]
        );
    }

    #[test]
    fn test_external_record_exports_like_custom() {
        let record = ExternalRecord::from_value(json!({
            "idDrink": "1",
            "strDrink": "Gin Tonic",
            "strCategory": "Cocktail",
            "strIngredient1": "Gin",
            "strMeasure1": "2 oz",
            "strInstructions": "Stir."
        }))
        .unwrap();
        let text = export_text(&Recipe::external(ExternalKind::Cocktail, record).view());
        assert!(text.starts_with("Title: Gin Tonic\nCategory: Cocktail\n"));
        assert!(text.contains("\n- 2 oz Gin\n"));
        assert!(text.ends_with("Instructions:\nStir.\n"));
    }

    #[test]
    fn test_file_name_sanitized() {
        assert_eq!(sanitize_file_stem("Mac & Cheese / v2"), "Mac  Cheese  v2");
        assert_eq!(sanitize_file_stem(" Crème brûlée "), "Crème brûlée");
        assert_eq!(sanitize_file_stem("???"), "recipe");
        assert_eq!(export_file_name(&tea()), "Tea.txt");
    }

    #[tokio::test]
    async fn test_write_export_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Tea.txt");
        write_export(&path, &tea()).await.unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("- Tea bag"));
    }
}
