//! Store Module
//!
//! Persistence seam for the item collection: a whole-document store with
//! a cheap modification probe.

mod file;
mod memory;

// Re-export public types
pub use file::FileStore;
pub use memory::MemoryStore;

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;

use crate::catalog::Item;
use crate::error::Result;

// == Modification Token ==
/// Opaque marker for the store's last modification.
///
/// Compared by equality only; callers must not assume tokens are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModificationToken(u128);

impl ModificationToken {
    /// Token derived from a file modification timestamp.
    pub(crate) fn from_mtime(mtime: SystemTime) -> Self {
        let nanos = mtime
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        Self(nanos)
    }

    /// Token derived from a plain version counter.
    pub(crate) fn from_version(version: u64) -> Self {
        Self(version as u128)
    }
}

// == Item Store ==
/// Whole-collection document store.
///
/// The collection is always read and written in full; there is no
/// per-record access and no write locking. Concurrent writers are
/// last-write-wins by contract.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Reads the full collection.
    async fn load(&self) -> Result<Vec<Item>>;

    /// Replaces the full collection.
    async fn save(&self, items: &[Item]) -> Result<()>;

    /// Probes the store's modification token without reading the data.
    async fn modification_token(&self) -> Result<ModificationToken>;
}
