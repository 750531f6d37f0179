//! Client handlers
//!
//! Endpoints for client management.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::domain::entities::ClientId;
use crate::domain::ports::TravelStore;
use crate::error::AppError;
use crate::AppState;

/// DELETE /api/clients/:id
///
/// Remove a client that holds no enrollments.
pub async fn remove_client<S: TravelStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.client_service.remove_client(ClientId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
