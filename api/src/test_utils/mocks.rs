//! Mock implementations of port traits

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::adapters::InMemoryItemRepository;
use crate::domain::entities::{Item, ItemId, ItemStatus};
use crate::domain::ports::ItemRepository;
use crate::error::DomainError;

// ============================================================================
// Counting Item Repository
// ============================================================================

/// Wraps the in-memory store and counts calls, so tests can assert that a
/// request did (or did not) reach the store.
#[derive(Default)]
pub struct CountingItemRepository {
    inner: InMemoryItemRepository,
    list_calls: AtomicUsize,
    set_status_calls: AtomicUsize,
}

impl CountingItemRepository {
    pub fn new(inner: InMemoryItemRepository) -> Self {
        Self {
            inner,
            ..Default::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn set_status_calls(&self) -> usize {
        self.set_status_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemRepository for CountingItemRepository {
    async fn list_unmoderated(&self) -> Result<Vec<Item>, DomainError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_unmoderated().await
    }

    async fn set_status(&self, id: &ItemId, new_status: ItemStatus) -> Result<Item, DomainError> {
        self.set_status_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.set_status(id, new_status).await
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        self.inner.find_by_id(id).await
    }
}

// ============================================================================
// Failing Item Repository
// ============================================================================

/// A store that is always unreachable
pub struct UnavailableItemRepository;

fn unavailable() -> DomainError {
    DomainError::Database("connection refused".to_string())
}

#[async_trait]
impl ItemRepository for UnavailableItemRepository {
    async fn list_unmoderated(&self) -> Result<Vec<Item>, DomainError> {
        Err(unavailable())
    }

    async fn set_status(
        &self,
        _id: &ItemId,
        _new_status: ItemStatus,
    ) -> Result<Item, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &ItemId) -> Result<Option<Item>, DomainError> {
        Err(unavailable())
    }
}
