//! Repository Layer
//!
//! JSON-file backed stores, one per entity, shared through app state.

mod traits;
mod paths;
mod json_file;
mod images;
mod favorites_repo;
mod custom_recipe_repo;
mod shopping_list_repo;
mod settings_repo;

#[cfg(test)]
mod tests;

pub use traits::{Repository, SearchableRepository};
pub use paths::DataPaths;
pub use json_file::JsonFile;
pub use images::{extension_from_url, ImageStore};
pub use favorites_repo::FavoritesRepository;
pub use custom_recipe_repo::CustomRecipeRepository;
pub use shopping_list_repo::ShoppingListRepository;
pub use settings_repo::SettingsRepository;
