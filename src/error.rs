//! Error types for the catalog server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Catalog Error Enum ==
/// Unified error type for the catalog server.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Requested item does not exist
    #[error("{0}")]
    NotFound(String),

    /// Client-caused failure; the message lists every violation
    #[error("{0}")]
    Validation(String),

    /// Store read failure (missing or malformed data)
    #[error("{0}")]
    Read(String),

    /// Store write failure
    #[error("{0}")]
    Write(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::Read(_) | CatalogError::Write(_) | CatalogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog server.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CatalogError::NotFound("Item not found".into()), StatusCode::NOT_FOUND),
            (CatalogError::Validation("name is required".into()), StatusCode::BAD_REQUEST),
            (CatalogError::Read("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (CatalogError::Write("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (CatalogError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_message_passes_through_unchanged() {
        let err = CatalogError::Validation("name is required, price must be a number".into());
        assert_eq!(
            err.to_string(),
            "name is required, price must be a number"
        );
    }
}
