//! Decision handler
//!
//! Records approve/reject verdicts.
//! Supports content negotiation: Accept: application/json for JSON, otherwise text/plain.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::wants_json;
use crate::app::DecisionOutcome;
use crate::domain::entities::{DecisionParam, ItemStatus};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for a decision. Both are optional on the wire;
/// missing or undecodable values produce guidance rather than a 400.
#[derive(Debug, Default, Deserialize)]
pub struct ModerateQuery {
    pub id: Option<String>,
    /// `"true"` approves, `"false"` rejects
    pub approve: Option<String>,
}

/// JSON response for decisions
#[derive(Debug, Serialize)]
pub struct ModerateResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
}

impl From<&DecisionOutcome> for ModerateResponse {
    fn from(outcome: &DecisionOutcome) -> Self {
        match outcome {
            DecisionOutcome::Guidance => Self {
                success: false,
                message: outcome.message(),
                id: None,
                status: None,
            },
            DecisionOutcome::Applied { item, .. } => Self {
                success: true,
                message: outcome.message(),
                id: Some(item.id.to_string()),
                status: Some(item.status),
            },
        }
    }
}

/// GET /moderate?id=<id>&approve=<true|false>
///
/// Approve or reject a picture.
/// - 200 with the outcome message, or guidance when input is incomplete
/// - 404 unknown id, 409 already moderated
pub async fn moderate(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ModerateQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    // A repeated key fails to decode; treat it like a request naming nothing
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Undecodable moderate query, returning guidance");
            ModerateQuery::default()
        }
    };

    tracing::debug!(item_id = ?query.id, approve = ?query.approve, "Moderate request received");

    let approve = DecisionParam::from_query(query.approve.as_deref());
    let outcome = state
        .decision_service
        .decide(query.id.as_deref(), &approve)
        .await?;

    if wants_json(&headers) {
        Ok(Json(ModerateResponse::from(&outcome)).into_response())
    } else {
        Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            outcome.message(),
        )
            .into_response())
    }
}
