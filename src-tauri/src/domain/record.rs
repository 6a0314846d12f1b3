//! Recipe Union and Normalized View
//!
//! Custom recipes and API records have different schemas. `Recipe` tags the
//! origin, and `RecipeView` is the one shape every list row, detail panel,
//! search filter and export works from.

use serde::{Deserialize, Serialize};

use super::external::{ExternalKind, ExternalRecord};
use super::recipe::CustomRecipe;

/// A recipe from either origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Recipe {
    Custom(CustomRecipe),
    External {
        kind: ExternalKind,
        record: ExternalRecord,
    },
}

/// Where a card came from, as shown by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Custom,
    Cocktail,
    Meal,
}

impl From<ExternalKind> for SourceKind {
    fn from(kind: ExternalKind) -> Self {
        match kind {
            ExternalKind::Cocktail => SourceKind::Cocktail,
            ExternalKind::Meal => SourceKind::Meal,
        }
    }
}

/// Picture shown for a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum RecipeImage {
    /// Remote thumbnail (small `/preview` variant)
    Remote(String),
    /// File inside the owned image directory
    Local(String),
}

/// Uniform view over both schemas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeView {
    pub title: String,
    pub category: String,
    pub area: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Option<String>,
    pub image: Option<RecipeImage>,
    /// False for summary records (filter endpoints) that need a lookup
    pub has_details: bool,
}

const DEFAULT_TITLE: &str = "Recipe";
const DEFAULT_CATEGORY: &str = "Unknown";

fn non_blank(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

impl Recipe {
    pub fn custom(recipe: CustomRecipe) -> Self {
        Recipe::Custom(recipe)
    }

    pub fn external(kind: ExternalKind, record: ExternalRecord) -> Self {
        Recipe::External { kind, record }
    }

    /// Normalize either schema. Field precedence: custom keys first, then
    /// the cocktail keys, then the meal keys.
    pub fn view(&self) -> RecipeView {
        match self {
            Recipe::Custom(recipe) => RecipeView {
                title: non_blank(&recipe.name).unwrap_or(DEFAULT_TITLE).to_string(),
                category: non_blank(&recipe.category)
                    .unwrap_or(DEFAULT_CATEGORY)
                    .to_string(),
                area: None,
                ingredients: recipe.ingredients.clone(),
                instructions: non_blank(&recipe.instructions).map(str::to_string),
                image: recipe
                    .image_path
                    .as_deref()
                    .and_then(non_blank)
                    .map(|p| RecipeImage::Local(p.to_string())),
                has_details: true,
            },
            Recipe::External { kind, record } => {
                let title = record
                    .field("name")
                    .or_else(|| record.field("strDrink"))
                    .or_else(|| record.field("strMeal"))
                    .unwrap_or(DEFAULT_TITLE)
                    .to_string();
                let category = record
                    .field("category")
                    .or_else(|| record.field("strCategory"))
                    .unwrap_or(DEFAULT_CATEGORY)
                    .to_string();
                let instructions = record
                    .field("instructions")
                    .or_else(|| record.field("strInstructions"))
                    .map(str::to_string);
                let ingredients = external_ingredients(*kind, record);
                let has_details = instructions.is_some() || !ingredients.is_empty();
                RecipeView {
                    title,
                    category,
                    area: record.field("strArea").map(str::to_string),
                    ingredients,
                    instructions,
                    image: record
                        .field(kind.thumb_key())
                        .map(|thumb| RecipeImage::Remote(format!("{}/preview", thumb))),
                    has_details,
                }
            }
        }
    }
}

/// `"{measure} {ingredient}"` for every filled slot, in slot order
fn external_ingredients(kind: ExternalKind, record: &ExternalRecord) -> Vec<String> {
    (1..=kind.max_ingredients())
        .filter_map(|i| {
            let ingredient = record.field(&format!("strIngredient{}", i))?;
            let measure = record.field(&format!("strMeasure{}", i)).unwrap_or("");
            Some(format!("{} {}", measure, ingredient).trim().to_string())
        })
        .collect()
}

impl RecipeView {
    /// Case-insensitive substring match on title or category
    pub fn matches(&self, filter: &str) -> bool {
        let filter = filter.trim().to_lowercase();
        if filter.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&filter)
            || self.category.to_lowercase().contains(&filter)
    }

    pub fn title_contains(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.trim().to_lowercase())
    }
}

/// What the frontend renders for one list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCard {
    pub source: SourceKind,
    /// UUID for custom recipes, external id otherwise
    pub id: String,
    pub favorited: bool,
    pub recipe: Recipe,
    pub view: RecipeView,
}

impl RecipeCard {
    pub fn from_custom(recipe: CustomRecipe) -> Self {
        let id = recipe.id.to_string();
        let recipe = Recipe::custom(recipe);
        Self {
            source: SourceKind::Custom,
            id,
            favorited: false,
            view: recipe.view(),
            recipe,
        }
    }

    /// None when the record carries no external id
    pub fn from_external(kind: ExternalKind, record: ExternalRecord, favorited: bool) -> Option<Self> {
        let id = record.external_id(kind)?;
        let recipe = Recipe::external(kind, record);
        Some(Self {
            source: kind.into(),
            id,
            favorited,
            view: recipe.view(),
            recipe,
        })
    }
}
