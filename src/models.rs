//! Frontend Models
//!
//! Data structures matching the backend DTOs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which remote database a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalKind {
    Cocktail,
    Meal,
}

impl ExternalKind {
    /// Heading of the search page
    pub fn search_title(&self) -> &'static str {
        match self {
            ExternalKind::Cocktail => "Find a Drink",
            ExternalKind::Meal => "Find a Meal",
        }
    }

    pub fn search_placeholder(&self) -> &'static str {
        match self {
            ExternalKind::Cocktail => "Search cocktails...",
            ExternalKind::Meal => "Search recipes...",
        }
    }

    /// Toast shown after removing a favorite from the Collection
    pub fn unsaved_message(&self) -> &'static str {
        match self {
            ExternalKind::Cocktail => "Cocktail unsaved",
            ExternalKind::Meal => "Meal unsaved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Custom,
    Cocktail,
    Meal,
}

impl SourceKind {
    pub fn external(&self) -> Option<ExternalKind> {
        match self {
            SourceKind::Custom => None,
            SourceKind::Cocktail => Some(ExternalKind::Cocktail),
            SourceKind::Meal => Some(ExternalKind::Meal),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum RecipeImage {
    Remote(String),
    Local(String),
}

/// Normalized view computed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeView {
    pub title: String,
    pub category: String,
    pub area: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Option<String>,
    pub image: Option<RecipeImage>,
    pub has_details: bool,
}

impl RecipeView {
    /// `Category (Area)` when the area is known
    pub fn subtitle(&self) -> String {
        match &self.area {
            Some(area) => format!("{} ({})", self.category, area),
            None => self.category.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRecipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub image_path: Option<String>,
}

/// Either origin, tagged the same way as the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Recipe {
    Custom(CustomRecipe),
    External {
        kind: ExternalKind,
        record: Map<String, Value>,
    },
}

/// One list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCard {
    pub source: SourceKind,
    pub id: String,
    pub favorited: bool,
    pub recipe: Recipe,
    pub view: RecipeView,
}

impl RecipeCard {
    /// Key unique across sources
    pub fn key(&self) -> String {
        format!("{:?}:{}", self.source, self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub cards: Vec<RecipeCard>,
    pub remote_error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionView {
    pub custom: Vec<RecipeCard>,
    pub cocktails: Vec<RecipeCard>,
    pub meals: Vec<RecipeCard>,
}

impl CollectionView {
    pub fn is_empty(&self) -> bool {
        self.custom.is_empty() && self.cocktails.is_empty() && self.meals.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Name,
    Ingredient,
    Category,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::Name, SearchMode::Ingredient, SearchMode::Category];

    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Name => "Name",
            SearchMode::Ingredient => "Ingredient",
            SearchMode::Category => "Category",
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.label() == label)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteState {
    Favorited,
    NotFavorited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Light, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::System => "System",
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub website: String,
    pub license: String,
}

/// New Recipe form contents
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub name: String,
    pub category: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image_path: Option<String>,
}

/// Fields read from a recipe web page
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedRecipe {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub image_path: Option<String>,
}
