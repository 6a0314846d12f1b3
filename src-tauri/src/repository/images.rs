//! Owned Image Directory
//!
//! Custom recipe pictures are copied into `user_images/` under a fresh
//! `<uuid>.<ext>` name, so the stored path never points at a file the user
//! might move or delete.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult};

const DEFAULT_EXTENSION: &str = "jpg";

#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
    /// Downloads not yet attached to a recipe
    pending: Arc<Mutex<HashSet<PathBuf>>>,
}

impl ImageStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            pending: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Whether `path` names an existing file inside the owned directory
    pub fn owns(&self, path: &Path) -> bool {
        match (self.dir.canonicalize(), path.canonicalize()) {
            (Ok(dir), Ok(file)) => file != dir && file.starts_with(&dir),
            _ => false,
        }
    }

    /// Copy a user-picked file in under a fresh name. A missing source
    /// yields `None`.
    pub async fn import_file(&self, source: &Path) -> DomainResult<Option<PathBuf>> {
        if !tokio::fs::try_exists(source).await.unwrap_or(false) {
            log::warn!("Picked image {} no longer exists", source.display());
            return Ok(None);
        }
        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or(DEFAULT_EXTENSION);
        let dest = self.fresh_path(ext).await?;
        tokio::fs::copy(source, &dest).await?;
        Ok(Some(dest))
    }

    /// Attach a picture to a new recipe: a pending download is taken over
    /// once, anything else is copied.
    pub async fn adopt_or_import(&self, source: &Path) -> DomainResult<Option<PathBuf>> {
        if self.pending.lock().await.remove(source) {
            return Ok(Some(source.to_path_buf()));
        }
        self.import_file(source).await
    }

    /// Write downloaded bytes under a fresh name, pending adoption
    pub async fn store_bytes(&self, bytes: &[u8], ext: &str) -> DomainResult<PathBuf> {
        let dest = self.fresh_path(ext).await?;
        tokio::fs::write(&dest, bytes).await?;
        self.pending.lock().await.insert(dest.clone());
        Ok(dest)
    }

    /// Delete a file if it belongs to the directory; anything else is left alone
    pub async fn remove_owned(&self, path: &Path) -> DomainResult<()> {
        if !self.owns(path) {
            return Ok(());
        }
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Map a requested path to a readable file inside the directory
    pub fn resolve(&self, requested: &Path) -> DomainResult<PathBuf> {
        let dir = self
            .dir
            .canonicalize()
            .map_err(|_| DomainError::NotFound(requested.display().to_string()))?;
        let file = requested
            .canonicalize()
            .map_err(|_| DomainError::NotFound(requested.display().to_string()))?;
        if file.starts_with(&dir) && file.is_file() {
            Ok(file)
        } else {
            Err(DomainError::NotFound(requested.display().to_string()))
        }
    }

    async fn fresh_path(&self, ext: &str) -> DomainResult<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let ext = ext.trim_start_matches('.');
        let ext = if ext.is_empty() { DEFAULT_EXTENSION } else { ext };
        Ok(self.dir.join(format!("{}.{}", Uuid::new_v4(), ext)))
    }
}

/// Extension of the last path segment of a URL, without the dot
pub fn extension_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or("");
    let segment = path.rsplit('/').next().unwrap_or("");
    match segment.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && !ext.is_empty()
                && ext.len() <= 5
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            ext.to_ascii_lowercase()
        }
        _ => DEFAULT_EXTENSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_from_url() {
        assert_eq!(extension_from_url("https://x.com/img/pic.PNG?w=100"), "png");
        assert_eq!(extension_from_url("https://x.com/img/pic.webp#top"), "webp");
        assert_eq!(extension_from_url("https://x.com/img/photo"), "jpg");
        assert_eq!(extension_from_url("https://x.com/"), "jpg");
    }

    #[test]
    fn test_owns_rejects_parent_escape() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("user_images");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("a.png"), b"a").unwrap();
        std::fs::write(tmp.path().join("outside.png"), b"x").unwrap();
        let store = ImageStore::new(dir.clone());

        assert!(store.owns(&dir.join("a.png")));
        assert!(!store.owns(&dir.join("../outside.png")));
        assert!(!store.owns(&dir));
        assert!(!store.owns(&dir.join("missing.png")));
    }

    #[tokio::test]
    async fn test_download_is_adopted_once_then_copied() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = ImageStore::new(tmp.path().join("user_images"));

        let downloaded = store.store_bytes(b"jpeg", "jpg").await.unwrap();
        let first = store.adopt_or_import(&downloaded).await.unwrap().unwrap();
        assert_eq!(first, downloaded);

        let second = store.adopt_or_import(&downloaded).await.unwrap().unwrap();
        assert_ne!(second, downloaded);
        assert_eq!(std::fs::read(&second).unwrap(), b"jpeg");
    }
}
