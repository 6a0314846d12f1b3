//! Custom Recipe Entity
//!
//! A user-authored recipe, identified by a UUID assigned at creation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::{DomainError, DomainResult, Entity};

/// A recipe written (or imported) by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRecipe {
    /// Stable identifier; nil for entries written before ids existed
    #[serde(default = "Uuid::nil")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    /// Copy inside the owned image directory, never the user-picked original
    #[serde(default)]
    pub image_path: Option<String>,
}

impl CustomRecipe {
    /// Build a new recipe with a fresh id from a validated draft
    pub fn from_draft(draft: RecipeDraft, image_path: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            category: draft.category,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            image_path,
        }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_nil()
    }
}

impl Entity for CustomRecipe {
    type Id = Uuid;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Form contents submitted by the New Recipe page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    /// Path picked by the user (or downloaded by the importer)
    #[serde(default)]
    pub image_path: Option<String>,
}

impl RecipeDraft {
    /// Trim every field, drop blank ingredients and require a name
    pub fn validate(self) -> DomainResult<Self> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("Name is required".to_string()));
        }
        Ok(Self {
            name,
            category: self.category.trim().to_string(),
            ingredients: self
                .ingredients
                .iter()
                .map(|i| i.trim())
                .filter(|i| !i.is_empty())
                .map(str::to_string)
                .collect(),
            instructions: self.instructions.trim().to_string(),
            image_path: self
                .image_path
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_validation_trims_and_drops_blank_ingredients() {
        let draft = RecipeDraft {
            name: "  Tea ".to_string(),
            category: " Drinks ".to_string(),
            ingredients: vec!["Water".to_string(), "   ".to_string(), " Tea bag".to_string()],
            instructions: "Boil.\n".to_string(),
            image_path: Some(String::new()),
        };

        let valid = draft.validate().unwrap();
        assert_eq!(valid.name, "Tea");
        assert_eq!(valid.category, "Drinks");
        assert_eq!(valid.ingredients, vec!["Water", "Tea bag"]);
        assert_eq!(valid.instructions, "Boil.");
        assert!(valid.image_path.is_none());
    }

    #[test]
    fn test_draft_requires_name() {
        let draft = RecipeDraft {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            DomainError::InvalidInput("Name is required".to_string())
        );
    }

    #[test]
    fn test_legacy_entry_without_id_gets_nil() {
        let json = r#"{"name":"Old","category":"","ingredients":[],"instructions":"","image_path":null}"#;
        let recipe: CustomRecipe = serde_json::from_str(json).unwrap();
        assert!(!recipe.has_id());
        assert_eq!(recipe.name, "Old");
    }

    #[test]
    fn test_from_draft_assigns_fresh_id() {
        let a = CustomRecipe::from_draft(RecipeDraft { name: "A".into(), ..Default::default() }, None);
        let b = CustomRecipe::from_draft(RecipeDraft { name: "B".into(), ..Default::default() }, None);
        assert!(a.has_id());
        assert_ne!(a.id(), b.id());
    }
}
