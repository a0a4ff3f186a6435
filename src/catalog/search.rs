//! Search and Pagination Module
//!
//! Turns raw listing parameters into a validated query and slices the
//! collection into a page.

use serde::Serialize;

use crate::catalog::normalize::normalize;
use crate::catalog::Item;
use crate::error::{CatalogError, Result};

// == Public Constants ==
/// Page size used when `limit` is absent or unparsable
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Upper bound for `limit`; larger requests are clamped, not rejected
pub const MAX_PAGE_SIZE: usize = 100;

// == List Query ==
/// Validated listing parameters.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Free-text search, empty means match all
    pub q: String,
    /// 1-indexed page number
    pub page: usize,
    /// Page size, within [1, MAX_PAGE_SIZE]
    pub limit: usize,
}

impl ListQuery {
    /// Validates raw query-string parameters.
    ///
    /// `page` must parse as an integer >= 1; anything else is rejected
    /// rather than clamped. `limit` never rejects: an unparsable value
    /// falls back to the default, and the result is clamped into
    /// [1, MAX_PAGE_SIZE].
    pub fn from_params(
        q: Option<&str>,
        page: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Self> {
        let page = match page {
            None => 1,
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|p| *p >= 1)
                .ok_or_else(|| {
                    CatalogError::Validation("Invalid page parameter".to_string())
                })?,
        };

        let limit = limit
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE as i64)
            .clamp(1, MAX_PAGE_SIZE as i64) as usize;

        Ok(Self {
            q: q.unwrap_or_default().to_string(),
            page,
            limit,
        })
    }
}

// == Page ==
/// One page of listing results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Records for this page, in collection order
    pub items: Vec<Item>,
    /// Size of the filtered collection, before pagination
    pub total: usize,
    /// The page that was served
    pub page: usize,
    /// The effective page size
    pub limit: usize,
    /// Whether pages beyond this one exist
    pub has_more: bool,
}

// == List Page ==
/// Filters and slices the collection into a page.
///
/// When the normalized query trims to something non-empty, only items
/// whose normalized name contains it as a substring are kept; an empty
/// or whitespace query matches everything. Collection order is
/// preserved. A page past the end of the data returns empty items with
/// the correct `total`, not an error.
pub fn list_page(items: &[Item], query: &ListQuery) -> Page {
    let needle = normalize(&query.q);
    let needle = needle.trim();

    let filtered: Vec<&Item> = if needle.is_empty() {
        items.iter().collect()
    } else {
        items
            .iter()
            .filter(|item| normalize(&item.name).contains(needle))
            .collect()
    };

    let total = filtered.len();
    let start = query.page.saturating_sub(1).saturating_mul(query.limit);
    let end = start.saturating_add(query.limit);

    let page_items: Vec<Item> = filtered
        .iter()
        .skip(start)
        .take(query.limit)
        .map(|item| (*item).clone())
        .collect();

    Page {
        items: page_items,
        total,
        page: query.page,
        limit: query.limit,
        has_more: end < total,
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collection() -> Vec<Item> {
        vec![
            Item::new(1, "Álpha Widget", "Tools", json!(10.0)),
            Item::new(2, "Beta Widget", "Tools", json!(20.0)),
            Item::new(3, "Gamma Gadget", "Toys", json!(30.0)),
        ]
    }

    fn query(q: &str, page: usize, limit: usize) -> ListQuery {
        ListQuery {
            q: q.to_string(),
            page,
            limit,
        }
    }

    #[test]
    fn test_from_params_defaults() {
        let parsed = ListQuery::from_params(None, None, None).unwrap();
        assert_eq!(parsed.q, "");
        assert_eq!(parsed.page, 1);
        assert_eq!(parsed.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_from_params_rejects_bad_page() {
        for raw in ["0", "-1", "abc", "1.5", ""] {
            let result = ListQuery::from_params(None, Some(raw), None);
            assert!(
                matches!(result, Err(CatalogError::Validation(_))),
                "page {:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_from_params_limit_is_forgiving() {
        // Unparsable falls back to the default
        let parsed = ListQuery::from_params(None, None, Some("abc")).unwrap();
        assert_eq!(parsed.limit, DEFAULT_PAGE_SIZE);

        // Oversized and undersized values are clamped
        let parsed = ListQuery::from_params(None, None, Some("1000")).unwrap();
        assert_eq!(parsed.limit, MAX_PAGE_SIZE);
        let parsed = ListQuery::from_params(None, None, Some("0")).unwrap();
        assert_eq!(parsed.limit, 1);
        let parsed = ListQuery::from_params(None, None, Some("-5")).unwrap();
        assert_eq!(parsed.limit, 1);
    }

    #[test]
    fn test_list_page_empty_query_matches_all() {
        let page = list_page(&collection(), &query("", 1, 20));
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 3);
        assert!(!page.has_more);
    }

    #[test]
    fn test_list_page_whitespace_query_matches_all() {
        let page = list_page(&collection(), &query("   ", 1, 20));
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_list_page_search_is_accent_and_case_insensitive() {
        let page = list_page(&collection(), &query("alp", 1, 20));
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Álpha Widget");

        let page = list_page(&collection(), &query("ÁLPHA", 1, 20));
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_list_page_substring_not_prefix() {
        let page = list_page(&collection(), &query("widget", 1, 20));
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_list_page_walks_pages_with_limit_one() {
        let items = collection();
        for (page_no, expected_more) in [(1, true), (2, true), (3, false)] {
            let page = list_page(&items, &query("", page_no, 1));
            assert_eq!(page.items.len(), 1);
            assert_eq!(page.total, 3);
            assert_eq!(page.has_more, expected_more, "page {}", page_no);
        }
    }

    #[test]
    fn test_list_page_past_end_is_empty_not_error() {
        let page = list_page(&collection(), &query("", 9, 20));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
        assert!(!page.has_more);
    }

    #[test]
    fn test_list_page_empty_collection() {
        let page = list_page(&[], &query("", 1, 20));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert!(!page.has_more);
    }

    #[test]
    fn test_page_serialize_camel_case() {
        let page = list_page(&collection(), &query("", 1, 2));
        let encoded = serde_json::to_value(&page).unwrap();
        assert_eq!(encoded["hasMore"], json!(true));
        assert_eq!(encoded["total"], json!(3));
    }
}
