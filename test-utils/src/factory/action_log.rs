//! Action log factory for warnings and other recorded staff actions.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for `action_log` rows. Defaults to a level 1 warning.
pub struct ActionLogFactory<'a> {
    db: &'a DatabaseConnection,
    target_id: String,
    admin_id: String,
    action: String,
    reason: String,
    detail: Option<String>,
    warn_level: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> ActionLogFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            target_id: next_id().to_string(),
            admin_id: next_id().to_string(),
            action: "warn".to_string(),
            reason: "Test warning".to_string(),
            detail: None,
            warn_level: Some(1),
            created_at: Utc::now(),
        }
    }

    pub fn target_id(mut self, target_id: u64) -> Self {
        self.target_id = target_id.to_string();
        self
    }

    pub fn admin_id(mut self, admin_id: u64) -> Self {
        self.admin_id = admin_id.to_string();
        self
    }

    /// Sets the action column; non-warning actions carry no warn level.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        if self.action != "warn" {
            self.warn_level = None;
        }
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn warn_level(mut self, level: i32) -> Self {
        self.warn_level = Some(level);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::action_log::Model, DbErr> {
        entity::action_log::ActiveModel {
            target_id: ActiveValue::Set(self.target_id),
            admin_id: ActiveValue::Set(self.admin_id),
            action: ActiveValue::Set(self.action),
            reason: ActiveValue::Set(self.reason),
            detail: ActiveValue::Set(self.detail),
            warn_level: ActiveValue::Set(self.warn_level),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a level 1 warning against `target_id`.
pub async fn create_warning(
    db: &DatabaseConnection,
    target_id: u64,
) -> Result<entity::action_log::Model, DbErr> {
    ActionLogFactory::new(db).target_id(target_id).build().await
}
