//! Domain Layer
//!
//! Recipes, favorites, the shopping list and settings.
//! No I/O happens here.

mod entity;
mod external;
mod recipe;
mod record;
mod settings;
mod shopping;

pub use entity::{DomainError, DomainResult, Entity};
pub use external::{ExternalKind, ExternalRecord, Favorite, FavoriteState};
pub use recipe::{CustomRecipe, RecipeDraft};
pub use record::{Recipe, RecipeCard, RecipeImage, RecipeView, SourceKind};
pub use settings::{Settings, Theme};
pub use shopping::{AddOutcome, ShoppingList};
