//! Item domain entity
//!
//! A user-submitted picture awaiting (or past) human moderation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier for an item, assigned by the ingestion path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Moderation status of an item
///
/// `Unmoderated` is the only non-terminal status. `Deleted` is a status value,
/// the record itself is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Unmoderated,
    Approved,
    Deleted,
}

impl ItemStatus {
    /// Terminal statuses accept no further transitions
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ItemStatus::Unmoderated)
    }

    /// Whether the state machine allows moving from `self` to `next`
    pub fn can_transition_to(&self, next: ItemStatus) -> bool {
        !self.is_terminal() && next.is_terminal()
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStatus::Unmoderated => write!(f, "unmoderated"),
            ItemStatus::Approved => write!(f, "approved"),
            ItemStatus::Deleted => write!(f, "deleted"),
        }
    }
}

impl std::str::FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unmoderated" => Ok(ItemStatus::Unmoderated),
            "approved" => Ok(ItemStatus::Approved),
            "deleted" => Ok(ItemStatus::Deleted),
            _ => Err(format!("Unknown item status: {}", s)),
        }
    }
}

/// A moderatable picture
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub id: ItemId,
    /// Stored object name (e.g. `abc123.png`)
    pub file_name: String,
    /// Public URL of the picture
    pub url: String,
    pub description: Option<String>,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn is_pending(&self) -> bool {
        self.status == ItemStatus::Unmoderated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unmoderated_is_non_terminal() {
        assert!(!ItemStatus::Unmoderated.is_terminal());
        assert!(ItemStatus::Approved.is_terminal());
        assert!(ItemStatus::Deleted.is_terminal());
    }

    #[test]
    fn unmoderated_can_move_to_either_terminal_status() {
        assert!(ItemStatus::Unmoderated.can_transition_to(ItemStatus::Approved));
        assert!(ItemStatus::Unmoderated.can_transition_to(ItemStatus::Deleted));
        assert!(!ItemStatus::Unmoderated.can_transition_to(ItemStatus::Unmoderated));
    }

    #[test]
    fn terminal_statuses_have_no_outgoing_transitions() {
        for from in [ItemStatus::Approved, ItemStatus::Deleted] {
            for to in [
                ItemStatus::Unmoderated,
                ItemStatus::Approved,
                ItemStatus::Deleted,
            ] {
                assert!(!from.can_transition_to(to), "{} -> {}", from, to);
            }
        }
    }

    #[test]
    fn item_status_display() {
        assert_eq!(ItemStatus::Unmoderated.to_string(), "unmoderated");
        assert_eq!(ItemStatus::Approved.to_string(), "approved");
        assert_eq!(ItemStatus::Deleted.to_string(), "deleted");
    }

    #[test]
    fn item_status_from_str() {
        assert_eq!(
            "unmoderated".parse::<ItemStatus>().unwrap(),
            ItemStatus::Unmoderated
        );
        assert_eq!(
            "APPROVED".parse::<ItemStatus>().unwrap(),
            ItemStatus::Approved
        );
        assert_eq!(
            "deleted".parse::<ItemStatus>().unwrap(),
            ItemStatus::Deleted
        );
        assert!("pending".parse::<ItemStatus>().is_err());
    }

    #[test]
    fn item_status_serializes_lowercase() {
        let json = serde_json::to_string(&ItemStatus::Unmoderated).unwrap();
        assert_eq!(json, "\"unmoderated\"");
    }

    #[test]
    fn item_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ItemId::from("42")).unwrap();
        assert_eq!(json, "\"42\"");
    }
}
