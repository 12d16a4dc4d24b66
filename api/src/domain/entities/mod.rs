//! Domain entities
//!
//! Pure domain models for moderation.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod decision;
pub mod item;

pub use decision::{Decision, DecisionParam};
pub use item::{Item, ItemId, ItemStatus};
