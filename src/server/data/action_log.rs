//! Action log repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::action_log::{ActionLog, CreateActionLogParam},
};

pub struct ActionLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActionLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry to the action log.
    ///
    /// # Returns
    /// - `Ok(ActionLog)` - The stored entry with its id and timestamp
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateActionLogParam) -> Result<ActionLog, AppError> {
        let entity = entity::action_log::ActiveModel {
            target_id: ActiveValue::Set(param.target_id.to_string()),
            admin_id: ActiveValue::Set(param.admin_id.to_string()),
            action: ActiveValue::Set(param.action.as_str().to_string()),
            reason: ActiveValue::Set(param.reason),
            detail: ActiveValue::Set(param.detail),
            warn_level: ActiveValue::Set(param.warn_level),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ActionLog::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ActionLog>, AppError> {
        entity::prelude::ActionLog::find_by_id(id)
            .one(self.db)
            .await?
            .map(ActionLog::from_entity)
            .transpose()
    }

    /// Returns every entry targeting a member, newest first.
    pub async fn get_by_target(&self, target_id: u64) -> Result<Vec<ActionLog>, AppError> {
        entity::prelude::ActionLog::find()
            .filter(entity::action_log::Column::TargetId.eq(target_id.to_string()))
            .order_by_desc(entity::action_log::Column::CreatedAt)
            .order_by_desc(entity::action_log::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ActionLog::from_entity)
            .collect()
    }

    /// Total number of entries, polled by the dashboard to detect new actions.
    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(entity::prelude::ActionLog::find().count(self.db).await?)
    }
}
