//! File Store Module
//!
//! JSON document store over a single file: the whole collection lives in
//! one pretty-printed top-level array, and the file's mtime serves as the
//! modification token.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::catalog::Item;
use crate::error::{CatalogError, Result};
use crate::store::{ItemStore, ModificationToken};

// == File Store ==
/// Stores the item collection as a single JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is not touched here; a missing or malformed file surfaces
    /// as a read error on first access.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ItemStore for FileStore {
    async fn load(&self) -> Result<Vec<Item>> {
        let raw = fs::read(&self.path).await.map_err(|e| {
            CatalogError::Read(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_slice(&raw).map_err(|e| {
            CatalogError::Read(format!(
                "Malformed item data in {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn save(&self, items: &[Item]) -> Result<()> {
        let raw = serde_json::to_vec_pretty(items)
            .map_err(|e| CatalogError::Write(format!("Failed to encode item data: {}", e)))?;

        fs::write(&self.path, raw).await.map_err(|e| {
            CatalogError::Write(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        debug!(count = items.len(), path = %self.path.display(), "collection saved");
        Ok(())
    }

    async fn modification_token(&self) -> Result<ModificationToken> {
        let metadata = fs::metadata(&self.path).await.map_err(|e| {
            CatalogError::Read(format!("Failed to stat {}: {}", self.path.display(), e))
        })?;

        let mtime = metadata.modified().map_err(|e| {
            CatalogError::Read(format!(
                "No modification time for {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(ModificationToken::from_mtime(mtime))
    }
}
