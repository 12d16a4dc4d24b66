//! HTTP handlers
//!
//! Axum request handlers for the moderation endpoints.

pub mod admin;
pub mod moderate;

use axum::http::{header, HeaderMap};

pub use admin::list_pending;
pub use moderate::moderate;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}
