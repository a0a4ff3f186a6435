//! Id Generation Module
//!
//! Creation-time ids with an injectable seam so tests stay deterministic.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of ids for newly created items.
pub trait IdGenerator: Send + Sync {
    /// Returns the id for the next created item.
    fn next_id(&self) -> u64;
}

// == Clock Ids ==
/// Production id source: milliseconds since the Unix epoch.
///
/// Two creations within the same millisecond can collide; the catalog
/// accepts that risk rather than switching id schemes.
#[derive(Debug, Default)]
pub struct ClockIdGenerator;

impl IdGenerator for ClockIdGenerator {
    fn next_id(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

// == Sequence Ids ==
/// Deterministic id source for tests: counts up from a starting value.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    next: AtomicU64,
}

impl SequenceIdGenerator {
    /// Creates a generator that starts at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}
