//! JSON File Store
//!
//! Every store is a single pretty-printed JSON document that is loaded whole
//! and rewritten whole after each mutation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{DomainError, DomainResult};

/// A JSON document on disk with an optional read-only fallback
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
    fallback: Option<PathBuf>,
}

impl JsonFile {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            fallback: None,
        }
    }

    /// Read `fallback` whenever `path` is missing or unreadable
    pub fn with_fallback(path: PathBuf, fallback: Option<PathBuf>) -> Self {
        Self { path, fallback }
    }

    /// Load with the chain: user file → fallback file → `T::default()`.
    /// Missing and malformed files are treated alike; malformed ones are
    /// logged.
    pub async fn load<T: DeserializeOwned + Default>(&self) -> T {
        if let Some(value) = read_json(&self.path).await {
            return value;
        }
        if let Some(fallback) = &self.fallback {
            if let Some(value) = read_json(fallback).await {
                log::info!("Loaded bundled default {}", fallback.display());
                return value;
            }
        }
        T::default()
    }

    /// Read only the user file. Missing or malformed is an error, so a
    /// caller can keep what it already holds.
    pub async fn reload<T: DeserializeOwned>(&self) -> DomainResult<T> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                DomainError::NotFound(self.path.display().to_string())
            } else {
                e.into()
            }
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Rewrite the whole document, creating parent directories on demand
    pub async fn save<T: Serialize>(&self, value: &T) -> DomainResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(value)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            log::warn!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", path.display(), e);
            None
        }
    }
}
