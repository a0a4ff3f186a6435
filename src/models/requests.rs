//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming HTTP request bodies and query
//! parameters.

use serde::Deserialize;
use serde_json::Value;

use crate::catalog::{coerce_price, MAX_CATEGORY_LENGTH, MAX_NAME_LENGTH};

// == List Params ==
/// Raw query-string parameters for `GET /items`.
///
/// Values stay as strings here so that limit parsing can fall back to its
/// default instead of rejecting the whole request at the serde layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListItemsParams {
    /// Free-text search
    pub q: Option<String>,
    /// 1-indexed page number
    pub page: Option<String>,
    /// Requested page size
    pub limit: Option<String>,
}

// == Create Item Request ==
/// Request body for `POST /items`.
///
/// Every field is optional at the serde layer: a missing field is
/// reported by `validate` together with the other violations, rather than
/// letting deserialization reject them one at a time.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
}

/// A creation payload that passed validation: trimmed text, finite price.
#[derive(Debug, Clone)]
pub struct ValidatedItem {
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl CreateItemRequest {
    /// Validates the payload, collecting every violation.
    ///
    /// Violations are reported in a fixed order (name empty, name too
    /// long, category empty, category too long, price not a number,
    /// price negative) and joined into a single message. String-encoded
    /// prices are accepted.
    pub fn validate(&self) -> std::result::Result<ValidatedItem, String> {
        let mut violations = Vec::new();

        let name = self.name.as_deref().unwrap_or("").trim().to_string();
        if name.is_empty() {
            violations.push("name is required".to_string());
        } else if name.chars().count() > MAX_NAME_LENGTH {
            violations.push(format!(
                "name must be at most {} characters",
                MAX_NAME_LENGTH
            ));
        }

        let category = self.category.as_deref().unwrap_or("").trim().to_string();
        if category.is_empty() {
            violations.push("category is required".to_string());
        } else if category.chars().count() > MAX_CATEGORY_LENGTH {
            violations.push(format!(
                "category must be at most {} characters",
                MAX_CATEGORY_LENGTH
            ));
        }

        let price = match self.price.as_ref().and_then(coerce_price) {
            None => {
                violations.push("price must be a number".to_string());
                None
            }
            Some(price) if price < 0.0 => {
                violations.push("price must be non-negative".to_string());
                None
            }
            Some(price) => Some(price),
        };

        if !violations.is_empty() {
            return Err(violations.join(", "));
        }

        Ok(ValidatedItem {
            name,
            category,
            // Violations are empty, so the price coerced and is non-negative
            price: price.unwrap_or(0.0),
        })
    }
}
