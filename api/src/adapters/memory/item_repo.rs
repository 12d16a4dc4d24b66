//! In-memory implementation of `ItemRepository`.
//!
//! All items are held in a `HashMap` behind a `RwLock` and lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Item, ItemId, ItemStatus};
use crate::domain::ports::ItemRepository;
use crate::error::DomainError;

#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<HashMap<ItemId, Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an item
    #[cfg(test)]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.get_mut().insert(item.id.clone(), item);
        self
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list_unmoderated(&self) -> Result<Vec<Item>, DomainError> {
        let items = self.items.read().await;
        let mut pending: Vec<Item> = items.values().filter(|i| i.is_pending()).cloned().collect();
        pending.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        Ok(pending)
    }

    async fn set_status(&self, id: &ItemId, new_status: ItemStatus) -> Result<Item, DomainError> {
        // Check and write under the same guard
        let mut items = self.items.write().await;
        let item = items
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(id.clone()))?;

        if !item.status.can_transition_to(new_status) {
            return Err(DomainError::InvalidTransition {
                id: id.clone(),
                current: item.status,
                requested: new_status,
            });
        }

        item.status = new_status;
        Ok(item.clone())
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        Ok(self.items.read().await.get(id).cloned())
    }
}
