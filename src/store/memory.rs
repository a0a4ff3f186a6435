//! Memory Store Module
//!
//! In-memory store used by tests: same contract as the file store, with a
//! version counter standing in for the file mtime.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::Item;
use crate::error::Result;
use crate::store::{ItemStore, ModificationToken};

// == Memory Store ==
/// In-memory collection with a version-counter modification token.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<Vec<Item>>,
    version: AtomicU64,
    loads: AtomicUsize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pre-populated store.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
            version: AtomicU64::new(1),
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of full reads served, for cache behavior assertions.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Bumps the modification token without changing the data, the way an
    /// external writer touching the backing file would.
    pub fn touch(&self) {
        self.version.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Item>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.read().await.clone())
    }

    async fn save(&self, items: &[Item]) -> Result<()> {
        let mut guard = self.items.write().await;
        *guard = items.to_vec();
        self.version.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn modification_token(&self) -> Result<ModificationToken> {
        Ok(ModificationToken::from_version(
            self.version.load(Ordering::SeqCst),
        ))
    }
}
