//! Shopping List Repository
//!
//! `shopping_list.json`: a JSON array of strings.

use tokio::sync::Mutex;

use super::json_file::JsonFile;
use super::paths::{DataPaths, SHOPPING_LIST_FILE};
use crate::domain::{AddOutcome, DomainResult, ShoppingList};

pub struct ShoppingListRepository {
    file: JsonFile,
    list: Mutex<ShoppingList>,
}

impl ShoppingListRepository {
    pub async fn load(paths: &DataPaths) -> Self {
        let file = JsonFile::new(paths.data_file(SHOPPING_LIST_FILE));
        let items: Vec<String> = file.load().await;
        Self {
            file,
            list: Mutex::new(ShoppingList::new(items)),
        }
    }

    pub async fn list(&self) -> Vec<String> {
        self.list.lock().await.items().to_vec()
    }

    /// Append unless already present; only an actual change is written
    pub async fn add(&self, item: &str) -> DomainResult<AddOutcome> {
        let mut list = self.list.lock().await;
        let outcome = list.add(item)?;
        if outcome == AddOutcome::Added {
            self.file.save(&*list).await?;
        }
        Ok(outcome)
    }

    /// Returns whether the item was present
    pub async fn remove(&self, item: &str) -> DomainResult<bool> {
        let mut list = self.list.lock().await;
        let removed = list.remove(item);
        if removed {
            self.file.save(&*list).await?;
        }
        Ok(removed)
    }
}
