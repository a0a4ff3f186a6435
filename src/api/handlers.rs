//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{AppendHeaders, IntoResponse},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::catalog::{
    list_page, ClockIdGenerator, IdGenerator, Item, ListQuery, Page, StatsCache,
};
use crate::error::{CatalogError, Result};
use crate::models::{CreateItemRequest, HealthResponse, ListItemsParams};
use crate::store::{FileStore, ItemStore};

/// Application state shared across all handlers.
///
/// The store and id source sit behind trait objects so tests can swap in
/// the in-memory fakes; the stats cache is the only shared mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Item collection persistence
    pub store: Arc<dyn ItemStore>,
    /// Single-slot statistics cache
    pub stats_cache: Arc<StatsCache>,
    /// Id source for created items
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    /// Creates a new AppState over the given store and id source.
    pub fn new(store: Arc<dyn ItemStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            stats_cache: Arc::new(StatsCache::new()),
            ids,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Wires the file-backed store and the millisecond-clock id source.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let store = Arc::new(FileStore::new(&config.data_path));
        Self::new(store, Arc::new(ClockIdGenerator))
    }
}

/// Handler for GET /items
///
/// Lists items with optional search, paginated.
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<ListItemsParams>,
) -> Result<Json<Page>> {
    let query = ListQuery::from_params(
        params.q.as_deref(),
        params.page.as_deref(),
        params.limit.as_deref(),
    )?;

    let items = state.store.load().await?;
    Ok(Json(list_page(&items, &query)))
}

/// Handler for GET /items/:id
///
/// Looks up a single item. A non-numeric id cannot match anything, so it
/// is reported as not found rather than as a malformed request.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>> {
    let not_found = || CatalogError::NotFound("Item not found".to_string());
    let id: u64 = id.parse().map_err(|_| not_found())?;

    let items = state.store.load().await?;
    items
        .into_iter()
        .find(|item| item.id == id)
        .map(Json)
        .ok_or_else(not_found)
}

/// Handler for POST /items
///
/// Validates the payload, assigns an id, appends the item and persists
/// the whole collection.
pub async fn create_item(
    State(state): State<AppState>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>)> {
    let validated = req.validate().map_err(CatalogError::Validation)?;

    let mut items = state.store.load().await?;
    let item = Item::new(
        state.ids.next_id(),
        validated.name,
        validated.category,
        Value::from(validated.price),
    );
    items.push(item.clone());
    state.store.save(&items).await?;

    info!(id = item.id, name = %item.name, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Handler for GET /stats
///
/// Returns collection statistics; the `X-Cache` header reports whether
/// the cached value was still valid.
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let (stats, outcome) = state.stats_cache.get_or_compute(state.store.as_ref()).await?;

    Ok((
        AppendHeaders([("x-cache", outcome.as_str())]),
        Json(stats),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
