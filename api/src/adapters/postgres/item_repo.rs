//! PostgreSQL adapter for ItemRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{Item, ItemId, ItemStatus};
use crate::domain::ports::ItemRepository;
use crate::entity::items;
use crate::error::DomainError;

/// PostgreSQL implementation of ItemRepository
pub struct PostgresItemRepository {
    db: DatabaseConnection,
}

impl PostgresItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn require(&self, id: &ItemId) -> Result<Item, DomainError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(id.clone()))
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn list_unmoderated(&self) -> Result<Vec<Item>, DomainError> {
        let results = items::Entity::find()
            .filter(items::Column::Status.eq(ItemStatus::Unmoderated.to_string()))
            .order_by_asc(items::Column::CreatedAt)
            .order_by_asc(items::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Item::try_from).collect()
    }

    async fn set_status(&self, id: &ItemId, new_status: ItemStatus) -> Result<Item, DomainError> {
        if !ItemStatus::Unmoderated.can_transition_to(new_status) {
            let current = self.require(id).await?;
            return Err(DomainError::InvalidTransition {
                id: id.clone(),
                current: current.status,
                requested: new_status,
            });
        }

        // Compare-and-set: only a row still `unmoderated` is touched, so two
        // racing decisions cannot both land.
        let result = items::Entity::update_many()
            .col_expr(items::Column::Status, Expr::value(new_status.to_string()))
            .filter(items::Column::Id.eq(id.as_str()))
            .filter(items::Column::Status.eq(ItemStatus::Unmoderated.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let item = self.require(id).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::InvalidTransition {
                id: id.clone(),
                current: item.status,
                requested: new_status,
            });
        }

        Ok(item)
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        let result = items::Entity::find_by_id(id.0.clone())
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Item::try_from).transpose()
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<items::Model> for Item {
    type Error = DomainError;

    fn try_from(model: items::Model) -> Result<Self, Self::Error> {
        let status = model.status.parse::<ItemStatus>().map_err(|e: String| {
            DomainError::Internal(format!("item {} has corrupt status: {}", model.id, e))
        })?;

        Ok(Item {
            id: ItemId(model.id),
            file_name: model.file_name,
            url: model.url,
            description: model.description,
            status,
            created_at: model.created_at.with_timezone(&Utc),
        })
    }
}
