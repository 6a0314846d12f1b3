//! Custom Recipe Repository
//!
//! `my_recipes.json`: an ordered array of user recipes. Pictures are owned
//! by the repository through an `ImageStore`.

use async_trait::async_trait;
use std::path::Path;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::images::ImageStore;
use super::json_file::JsonFile;
use super::paths::{DataPaths, CUSTOM_RECIPES_FILE};
use super::traits::{Repository, SearchableRepository};
use crate::domain::{CustomRecipe, DomainError, DomainResult, RecipeDraft};

pub struct CustomRecipeRepository {
    file: JsonFile,
    images: ImageStore,
    recipes: Mutex<Vec<CustomRecipe>>,
}

impl CustomRecipeRepository {
    /// Load, assigning ids to entries written before ids existed
    pub async fn load(paths: &DataPaths) -> DomainResult<Self> {
        let file = JsonFile::new(paths.data_file(CUSTOM_RECIPES_FILE));
        let recipes = load_migrated(&file).await?;
        log::info!("Loaded {} custom recipes", recipes.len());
        Ok(Self {
            file,
            images: ImageStore::new(paths.images_dir()),
            recipes: Mutex::new(recipes),
        })
    }

    pub fn images(&self) -> &ImageStore {
        &self.images
    }

    /// Validate a form draft, copy its picture in, and persist it
    pub async fn create_from_draft(&self, draft: RecipeDraft) -> DomainResult<CustomRecipe> {
        let mut draft = draft.validate()?;
        let image_path = match draft.image_path.take() {
            Some(picked) => self
                .images
                .adopt_or_import(Path::new(&picked))
                .await?
                .map(|p| p.to_string_lossy().into_owned()),
            None => None,
        };
        let recipe = CustomRecipe::from_draft(draft, image_path);
        self.insert(recipe).await
    }

    async fn insert(&self, recipe: CustomRecipe) -> DomainResult<CustomRecipe> {
        let mut recipes = self.recipes.lock().await;
        recipes.push(recipe.clone());
        self.file.save(&*recipes).await?;
        log::info!("Created custom recipe '{}' ({})", recipe.name, recipe.id);
        Ok(recipe)
    }
}

async fn load_migrated(file: &JsonFile) -> DomainResult<Vec<CustomRecipe>> {
    let mut recipes: Vec<CustomRecipe> = file.load().await;
    save_migrated(file, &mut recipes).await?;
    Ok(recipes)
}

/// Give id-less entries a fresh id and persist them
async fn save_migrated(file: &JsonFile, recipes: &mut [CustomRecipe]) -> DomainResult<()> {
    let mut migrated = 0;
    for recipe in recipes.iter_mut().filter(|r| !r.has_id()) {
        recipe.id = Uuid::new_v4();
        migrated += 1;
    }
    if migrated > 0 {
        log::info!("Assigned ids to {} custom recipes", migrated);
        file.save(&recipes).await?;
    }
    Ok(())
}

#[async_trait]
impl Repository<CustomRecipe> for CustomRecipeRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<CustomRecipe>> {
        let recipes = self.recipes.lock().await;
        Ok(recipes.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<CustomRecipe>> {
        Ok(self.recipes.lock().await.clone())
    }

    /// Reload from disk first so the id is matched against the current file.
    /// An unreadable file leaves the in-memory list in charge.
    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut recipes = self.recipes.lock().await;
        match self.file.reload::<Vec<CustomRecipe>>().await {
            Ok(mut fresh) => {
                save_migrated(&self.file, &mut fresh).await?;
                *recipes = fresh;
            }
            Err(e) => log::warn!("Keeping {} loaded recipes, reload failed: {}", recipes.len(), e),
        }
        let index = recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Recipe {}", id)))?;
        let removed = recipes.remove(index);
        self.file.save(&*recipes).await?;
        drop(recipes);

        if let Some(image) = removed.image_path.as_deref() {
            if let Err(e) = self.images.remove_owned(Path::new(image)).await {
                log::warn!("Failed to remove image {}: {}", image, e);
            }
        }
        log::info!("Deleted custom recipe '{}' ({})", removed.name, id);
        Ok(())
    }
}

#[async_trait]
impl SearchableRepository<CustomRecipe> for CustomRecipeRepository {
    async fn search(&self, query: &str) -> DomainResult<Vec<CustomRecipe>> {
        let query = query.trim().to_lowercase();
        let recipes = self.recipes.lock().await;
        Ok(recipes
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&query))
            .cloned()
            .collect())
    }
}
