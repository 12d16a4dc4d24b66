//! Repository port traits
//!
//! The moderation store: where items and their status are persisted.
//! Implementations are provided by adapters (PostgreSQL, in-memory).

use async_trait::async_trait;

use crate::domain::entities::{Item, ItemId, ItemStatus};
use crate::error::DomainError;

/// Repository for moderatable items
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items still awaiting review, oldest first.
    /// An empty store yields an empty vector.
    async fn list_unmoderated(&self) -> Result<Vec<Item>, DomainError>;

    /// Atomically move an `unmoderated` item to `new_status`.
    ///
    /// Fails with `NotFound` for an unknown id and with `InvalidTransition`
    /// when the item is no longer `unmoderated`. Of two concurrent calls for
    /// the same id, at most one succeeds.
    async fn set_status(&self, id: &ItemId, new_status: ItemStatus) -> Result<Item, DomainError>;

    /// Find an item by ID
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError>;
}
