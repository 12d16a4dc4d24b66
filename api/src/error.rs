//! Unified error types for the moderation API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Moderation store and state machine errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::{ItemId, ItemStatus};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Picture {0} not found")]
    NotFound(ItemId),

    #[error("Picture {id} is already {current}; cannot mark it {requested}")]
    InvalidTransition {
        id: ItemId,
        current: ItemStatus,
        requested: ItemStatus,
    },

    /// The store could not be reached or rejected the query
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Unauthorized")]
    Unauthorized,
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    fn status_and_body(&self) -> (StatusCode, &'static str, Option<String>) {
        match self {
            AppError::Domain(e @ DomainError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(e.to_string()))
            }
            AppError::Domain(e @ DomainError::InvalidTransition { .. }) => {
                (StatusCode::CONFLICT, "Conflict", Some(e.to_string()))
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = self.status_and_body();

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_message() {
        let err = AppError::from(DomainError::NotFound(ItemId::from("42")));
        let (status, error, details) = err.status_and_body();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error, "Not found");
        assert_eq!(details.as_deref(), Some("Picture 42 not found"));
    }

    #[test]
    fn invalid_transition_maps_to_409() {
        let err = AppError::from(DomainError::InvalidTransition {
            id: ItemId::from("42"),
            current: ItemStatus::Approved,
            requested: ItemStatus::Deleted,
        });
        let (status, _, details) = err.status_and_body();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            details.as_deref(),
            Some("Picture 42 is already approved; cannot mark it deleted")
        );
    }

    #[test]
    fn database_error_hides_details() {
        let err = AppError::from(DomainError::Database("connection refused".to_string()));
        let (status, error, details) = err.status_and_body();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error, "Internal server error");
        assert!(details.is_none());
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let (status, _, _) = AppError::Unauthorized.status_and_body();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
