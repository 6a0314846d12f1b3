//! Settings Repository

use tokio::sync::Mutex;

use super::json_file::JsonFile;
use super::paths::{DataPaths, SETTINGS_FILE};
use crate::domain::{DomainResult, Settings, Theme};

pub struct SettingsRepository {
    file: JsonFile,
    settings: Mutex<Settings>,
}

impl SettingsRepository {
    pub async fn load(paths: &DataPaths) -> Self {
        let file = JsonFile::new(paths.data_file(SETTINGS_FILE));
        let settings = file.load().await;
        Self {
            file,
            settings: Mutex::new(settings),
        }
    }

    pub async fn get(&self) -> Settings {
        self.settings.lock().await.clone()
    }

    /// Read-modify-write: keys added to the file by anyone else survive
    pub async fn set_theme(&self, theme: Theme) -> DomainResult<Settings> {
        let mut settings = self.settings.lock().await;
        let mut current: Settings = self.file.load().await;
        current.theme = theme;
        self.file.save(&current).await?;
        *settings = current;
        log::info!("Theme set to {}", theme.as_str());
        Ok(settings.clone())
    }
}
