//! Catalog Statistics Module
//!
//! Aggregate statistics over the full item collection.

use serde::Serialize;
use serde_json::Value;

use crate::catalog::Item;

// == Catalog Stats ==
/// Aggregate statistics for the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    /// Number of records in the collection, coercible prices or not
    pub total: usize,
    /// Mean of the coercible prices, 0.0 when none are coercible
    pub average_price: f64,
}

// == Price Coercion ==
/// Coerces a stored price to a finite number.
///
/// Accepts JSON numbers and strings that trim and parse to a finite f64.
/// Anything else (null, bool, nested values, non-numeric text) yields None.
pub fn coerce_price(price: &Value) -> Option<f64> {
    let parsed = match price {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|p| p.is_finite())
}

// == Compute Stats ==
/// Computes collection statistics.
///
/// `total` counts every record. The average divides only over records
/// whose price coerces to a finite number: a record with a broken price
/// counts toward `total` but never enters the average's denominator.
pub fn compute_stats(items: &[Item]) -> CatalogStats {
    let total = items.len();

    let prices: Vec<f64> = items
        .iter()
        .filter_map(|item| coerce_price(&item.price))
        .collect();

    let average_price = if prices.is_empty() {
        0.0
    } else {
        prices.iter().sum::<f64>() / prices.len() as f64
    };

    CatalogStats {
        total,
        average_price,
    }
}
