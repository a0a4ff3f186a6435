//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET /items` - List items with search and pagination
//! - `POST /items` - Create an item
//! - `GET /items/:id` - Fetch a single item
//! - `GET /stats` - Collection statistics (`X-Cache: HIT|MISS`)
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
