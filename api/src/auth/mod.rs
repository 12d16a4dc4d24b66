//! Authentication
//!
//! Optional shared admin token for the moderation routes.

pub mod admin_token;

pub use admin_token::{admin_token_middleware, hash_token};
