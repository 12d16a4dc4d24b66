//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services validate input and coordinate with the moderation store.

pub mod decision_service;
pub mod listing_service;

pub use decision_service::{DecisionOutcome, DecisionService};
pub use listing_service::{ListingService, PendingItems};
