//! Listing service
//!
//! Surfaces the items still waiting for a reviewer.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Item;
use crate::domain::ports::ItemRepository;
use crate::error::AppError;

/// A pending item as shown to reviewers.
/// Status is left out: everything in this list is `unmoderated`.
#[derive(Debug, Clone, Serialize)]
pub struct PendingItem {
    pub id: String,
    pub file_name: String,
    pub url: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Item> for PendingItem {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.0,
            file_name: item.file_name,
            url: item.url,
            description: item.description,
            created_at: item.created_at,
        }
    }
}

/// Response envelope for the pending list: `{"result": [...]}`
#[derive(Debug, Clone, Serialize)]
pub struct PendingItems {
    pub result: Vec<PendingItem>,
}

/// Service for listing unmoderated items
pub struct ListingService<R>
where
    R: ItemRepository + ?Sized,
{
    items: Arc<R>,
}

impl<R> ListingService<R>
where
    R: ItemRepository + ?Sized,
{
    pub fn new(items: Arc<R>) -> Self {
        Self { items }
    }

    /// List every unmoderated item. Read-only.
    pub async fn list_pending(&self) -> Result<PendingItems, AppError> {
        let pending = self.items.list_unmoderated().await?;
        tracing::debug!(count = pending.len(), "Listed unmoderated items");

        Ok(PendingItems {
            result: pending.into_iter().map(PendingItem::from).collect(),
        })
    }
}
