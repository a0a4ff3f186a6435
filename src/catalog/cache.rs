//! Stats Cache Module
//!
//! Single-slot statistics cache validated against the store's
//! modification token.

use tokio::sync::RwLock;
use tracing::debug;

use crate::catalog::stats::{compute_stats, CatalogStats};
use crate::error::Result;
use crate::store::{ItemStore, ModificationToken};

// == Cache Outcome ==
/// Whether a stats request was served from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    Hit,
    Miss,
}

impl CacheOutcome {
    /// Value for the `X-Cache` response header.
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheOutcome::Hit => "HIT",
            CacheOutcome::Miss => "MISS",
        }
    }
}

#[derive(Debug, Clone)]
struct CachedStats {
    stats: CatalogStats,
    token: ModificationToken,
}

// == Stats Cache ==
/// Holds the last computed statistics together with the modification
/// token observed just before the full read that produced them.
///
/// A request is a HIT only when the freshly probed token equals the
/// stored one. Tokens are compared by equality, never ordering, so a
/// token that moves backwards (a restored backup) still forces a
/// recompute.
#[derive(Debug, Default)]
pub struct StatsCache {
    slot: RwLock<Option<CachedStats>>,
}

impl StatsCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns current statistics, recomputing only when the store has
    /// changed since the cached value was taken.
    ///
    /// The slot lock is never held across store I/O: concurrent misses
    /// may each recompute and overwrite the slot, last writer wins. A
    /// failed probe or read propagates without touching the slot, so a
    /// stale-but-valid entry survives for a later successful call.
    pub async fn get_or_compute(
        &self,
        store: &dyn ItemStore,
    ) -> Result<(CatalogStats, CacheOutcome)> {
        let token = store.modification_token().await?;

        {
            let slot = self.slot.read().await;
            if let Some(cached) = slot.as_ref() {
                if cached.token == token {
                    debug!("stats cache hit");
                    return Ok((cached.stats.clone(), CacheOutcome::Hit));
                }
            }
        }

        let items = store.load().await?;
        let stats = compute_stats(&items);

        *self.slot.write().await = Some(CachedStats {
            stats: stats.clone(),
            token,
        });

        debug!(total = stats.total, "stats cache refreshed");
        Ok((stats, CacheOutcome::Miss))
    }
}
