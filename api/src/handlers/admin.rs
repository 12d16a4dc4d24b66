//! Listing handler
//!
//! The reviewer's queue of pictures awaiting moderation.

use axum::{extract::State, Json};

use crate::app::PendingItems;
use crate::error::AppError;
use crate::AppState;

/// GET /admin
///
/// List every unmoderated picture as `{"result": [...]}`.
pub async fn list_pending(State(state): State<AppState>) -> Result<Json<PendingItems>, AppError> {
    tracing::debug!("List pictures that need moderation");
    let pending = state.listing_service.list_pending().await?;
    Ok(Json(pending))
}
