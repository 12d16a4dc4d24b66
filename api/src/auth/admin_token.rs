//! Admin token authentication middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use sha2::{Digest, Sha256};

use crate::error::AppError;
use crate::AppState;

/// Hash a token for comparison (SHA-256, hex encoded)
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Authentication middleware
///
/// When an admin token is configured, requests must present it as
/// `Authorization: Bearer <token>`. Without one, requests pass through.
pub async fn admin_token_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = state.admin_token_hash.as_deref() else {
        return Ok(next.run(request).await);
    };

    let authorized = extract_bearer_token(&request)
        .map(|token| hash_token(token) == expected)
        .unwrap_or(false);

    if !authorized {
        tracing::warn!(path = %request.uri().path(), "Rejected moderation request without valid admin token");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
