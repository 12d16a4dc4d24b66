//! Decision service
//!
//! Records a reviewer's approve/reject verdict against an item.
//!
//! Malformed input never reaches the store: a missing id or an absent or
//! unrecognized decision yields a guidance message instead of an error.
//! Store failures (`NotFound`, `InvalidTransition`, `Database`) propagate
//! as distinct `AppError`s.

use std::sync::Arc;

use crate::domain::entities::{Decision, DecisionParam, Item, ItemId};
use crate::domain::ports::ItemRepository;
use crate::error::AppError;

/// Returned when the request does not name both an item and a decision
pub const GUIDANCE_MESSAGE: &str =
    "Please tell us what picture you would like to approve and a valid id.";

/// Result of a decide request
#[derive(Debug, Clone)]
pub enum DecisionOutcome {
    /// Input was incomplete; nothing was changed
    Guidance,
    /// The item moved to its terminal status
    Applied { item: Item, decision: Decision },
}

impl DecisionOutcome {
    pub fn message(&self) -> String {
        match self {
            DecisionOutcome::Guidance => GUIDANCE_MESSAGE.to_string(),
            DecisionOutcome::Applied { item, .. } => {
                format!("Picture {} {}.", item.id, item.status)
            }
        }
    }
}

/// Service applying moderation decisions
pub struct DecisionService<R>
where
    R: ItemRepository + ?Sized,
{
    items: Arc<R>,
}

impl<R> DecisionService<R>
where
    R: ItemRepository + ?Sized,
{
    pub fn new(items: Arc<R>) -> Self {
        Self { items }
    }

    /// Apply `approve` to the item named by `id`.
    ///
    /// Exactly one store mutation per well-formed request, none otherwise.
    pub async fn decide(
        &self,
        id: Option<&str>,
        approve: &DecisionParam,
    ) -> Result<DecisionOutcome, AppError> {
        let id = id.filter(|id| !id.trim().is_empty());

        let (id, decision) = match (id, approve.decision()) {
            (Some(id), Some(decision)) => (ItemId::from(id), decision),
            (id, _) => {
                if let DecisionParam::Unspecified(Some(raw)) = approve {
                    tracing::warn!(
                        approve = %raw,
                        item_id = id.unwrap_or_default(),
                        "Unrecognized decision value, returning guidance"
                    );
                } else {
                    tracing::debug!("Incomplete decide request, returning guidance");
                }
                return Ok(DecisionOutcome::Guidance);
            }
        };

        let item = self
            .items
            .set_status(&id, decision.target_status())
            .await?;

        tracing::info!(item_id = %id, %decision, status = %item.status, "Moderation decision applied");

        Ok(DecisionOutcome::Applied { item, decision })
    }
}
