//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{Item, ItemId, ItemStatus};

/// Create an unmoderated test item with the given id
pub fn test_item(id: &str) -> Item {
    test_item_with_status(id, ItemStatus::Unmoderated)
}

/// Create a test item in a specific status
pub fn test_item_with_status(id: &str, status: ItemStatus) -> Item {
    Item {
        id: ItemId::from(id),
        file_name: format!("{}.png", id),
        url: format!("https://tinyhats.s3.amazonaws.com/{}.png", id),
        description: Some("cowboy".to_string()),
        status,
        created_at: Utc::now(),
    }
}
