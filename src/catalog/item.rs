//! Catalog Item Module
//!
//! Defines the record stored in the catalog collection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// == Item ==
/// A single catalog record.
///
/// `price` is kept as raw JSON: existing datasets carry string-encoded or
/// outright invalid prices, and those records must survive load/save
/// round-trips unchanged. Coercion to a number happens only where a number
/// is actually needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id, assigned at creation (milliseconds since the Unix epoch)
    pub id: u64,
    /// Display name, matched by the listing search
    pub name: String,
    /// Category label
    pub category: String,
    /// Price as stored
    pub price: Value,
}

impl Item {
    /// Creates a new item record.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Value,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
        }
    }
}
