//! Favorites Repository
//!
//! One instance per `ExternalKind`, backed by `cocktails.json` or
//! `meals.json`: an object mapping external id → raw record, in insertion
//! order.

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use super::json_file::JsonFile;
use super::paths::DataPaths;
use super::traits::{Repository, SearchableRepository};
use crate::domain::{
    DomainError, DomainResult, ExternalKind, ExternalRecord, Favorite, FavoriteState, Recipe,
};

pub struct FavoritesRepository {
    kind: ExternalKind,
    file: JsonFile,
    entries: Mutex<Map<String, Value>>,
}

impl FavoritesRepository {
    /// Load from the user file, falling back to the bundled default
    pub async fn load(kind: ExternalKind, paths: &DataPaths) -> Self {
        let file = JsonFile::with_fallback(
            paths.data_file(kind.file_name()),
            paths.bundled_file(kind.file_name()),
        );
        let entries: Map<String, Value> = file.load().await;
        log::info!("Loaded {} {} favorites", entries.len(), kind.as_str());
        Self {
            kind,
            file,
            entries: Mutex::new(entries),
        }
    }

    /// Flip membership of `id`, storing `record` verbatim when adding
    pub async fn toggle(&self, id: &str, record: ExternalRecord) -> DomainResult<FavoriteState> {
        let mut entries = self.entries.lock().await;
        let state = if entries.shift_remove(id).is_some() {
            FavoriteState::NotFavorited
        } else {
            entries.insert(id.to_string(), record.into_value());
            FavoriteState::Favorited
        };
        self.file.save(&*entries).await?;
        log::info!("{} {} {:?}", self.kind.as_str(), id, state);
        Ok(state)
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.entries.lock().await.contains_key(id)
    }

    pub async fn ids(&self) -> Vec<String> {
        self.entries.lock().await.keys().cloned().collect()
    }
}

fn to_favorite(id: &str, value: &Value) -> Option<Favorite> {
    ExternalRecord::from_value(value.clone()).map(|record| Favorite {
        id: id.to_string(),
        record,
    })
}

#[async_trait]
impl Repository<Favorite> for FavoritesRepository {
    async fn find_by_id(&self, id: String) -> DomainResult<Option<Favorite>> {
        let entries = self.entries.lock().await;
        Ok(entries.get(&id).and_then(|value| to_favorite(&id, value)))
    }

    async fn list(&self) -> DomainResult<Vec<Favorite>> {
        let entries = self.entries.lock().await;
        Ok(entries
            .iter()
            .filter_map(|(id, value)| to_favorite(id, value))
            .collect())
    }

    async fn delete(&self, id: String) -> DomainResult<()> {
        let mut entries = self.entries.lock().await;
        if entries.shift_remove(&id).is_none() {
            return Err(DomainError::NotFound(format!("{} {}", self.kind.as_str(), id)));
        }
        self.file.save(&*entries).await
    }
}

#[async_trait]
impl SearchableRepository<Favorite> for FavoritesRepository {
    async fn search(&self, query: &str) -> DomainResult<Vec<Favorite>> {
        let kind = self.kind;
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|fav| Recipe::external(kind, fav.record.clone()).view().title_contains(query))
            .collect())
    }
}
