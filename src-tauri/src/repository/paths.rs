//! Data Paths
//!
//! Where user files live and where bundled defaults are shipped.

use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.json";
pub const CUSTOM_RECIPES_FILE: &str = "my_recipes.json";
pub const SHOPPING_LIST_FILE: &str = "shopping_list.json";
pub const IMAGES_DIR: &str = "user_images";

/// Resolved storage locations
#[derive(Debug, Clone)]
pub struct DataPaths {
    /// Per-user writable directory
    pub data_dir: PathBuf,
    /// Bundled resources; holds `data/<file>` defaults when present
    pub resource_dir: Option<PathBuf>,
}

impl DataPaths {
    pub fn new(data_dir: PathBuf, resource_dir: Option<PathBuf>) -> Self {
        Self {
            data_dir,
            resource_dir,
        }
    }

    pub fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Bundled default with the same basename as a user file
    pub fn bundled_file(&self, name: &str) -> Option<PathBuf> {
        self.resource_dir
            .as_ref()
            .map(|dir| dir.join("data").join(name))
    }

    pub fn images_dir(&self) -> PathBuf {
        self.data_dir.join(IMAGES_DIR)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
