//! Appeal factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for `appeal` rows. The referenced action log must already exist.
pub struct AppealFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    action_log_id: i32,
    text: String,
    status: String,
    reviewed_by: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> AppealFactory<'a> {
    /// Creates a pending appeal filed by the warned member.
    pub fn new(db: &'a DatabaseConnection, warning: &entity::action_log::Model) -> Self {
        Self {
            db,
            discord_id: warning.target_id.clone(),
            action_log_id: warning.id,
            text: "I would like this warning reviewed.".to_string(),
            status: "pending".to_string(),
            reviewed_by: None,
            created_at: Utc::now(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn reviewed_by(mut self, reviewer: u64) -> Self {
        self.reviewed_by = Some(reviewer.to_string());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::appeal::Model, DbErr> {
        let reviewed_at = self.reviewed_by.as_ref().map(|_| Utc::now());
        entity::appeal::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            action_log_id: ActiveValue::Set(self.action_log_id),
            text: ActiveValue::Set(self.text),
            status: ActiveValue::Set(self.status),
            reviewed_by: ActiveValue::Set(self.reviewed_by),
            created_at: ActiveValue::Set(self.created_at),
            reviewed_at: ActiveValue::Set(reviewed_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending appeal for `warning`.
pub async fn create_appeal(
    db: &DatabaseConnection,
    warning: &entity::action_log::Model,
) -> Result<entity::appeal::Model, DbErr> {
    AppealFactory::new(db, warning).build().await
}
