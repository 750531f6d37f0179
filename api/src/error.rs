//! Unified error types for the Tripline API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors (rule violations and storage failures)
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// A business rule rejected the operation
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Storage-level constraint or isolation conflict; the unit of work may be retried
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl Into<i32>) -> Self {
        DomainError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Whether the failure is an expected business outcome rather than a system fault
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            DomainError::NotFound { .. } | DomainError::InvalidState(_)
        )
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    code: &'static str,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error, details) = match &self {
            AppError::Domain(err @ DomainError::NotFound { .. }) => (
                StatusCode::NOT_FOUND,
                "not_found",
                "Not found",
                Some(err.to_string()),
            ),
            AppError::Domain(DomainError::InvalidState(msg)) => (
                StatusCode::BAD_REQUEST,
                "invalid_state",
                "Operation not allowed",
                Some(msg.clone()),
            ),
            // Conflicts reaching here already exhausted their retries
            AppError::Domain(err @ (DomainError::Conflict(_) | DomainError::Database(_))) => {
                tracing::error!("Storage failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "unexpected",
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "bad_request",
                "Bad request",
                Some(msg.clone()),
            ),
        };

        let body = Json(ErrorResponse {
            code,
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
