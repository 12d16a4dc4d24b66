//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Items, statuses and reviewer decisions
//! - `ports`: Trait definitions for the moderation store

pub mod entities;
pub mod ports;
