//! Leave-of-absence request factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for `loa_request` rows. Defaults to a pending 7 day request.
pub struct LoaRequestFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    days: i32,
    reason: String,
    status: String,
    reviewed_by: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> LoaRequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            discord_id: next_id().to_string(),
            days: 7,
            reason: "Vacation".to_string(),
            status: "pending".to_string(),
            reviewed_by: None,
            created_at: Utc::now(),
        }
    }

    pub fn discord_id(mut self, discord_id: u64) -> Self {
        self.discord_id = discord_id.to_string();
        self
    }

    pub fn days(mut self, days: i32) -> Self {
        self.days = days;
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
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

    pub async fn build(self) -> Result<entity::loa_request::Model, DbErr> {
        let reviewed_at = self.reviewed_by.as_ref().map(|_| Utc::now());
        entity::loa_request::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            days: ActiveValue::Set(self.days),
            reason: ActiveValue::Set(self.reason),
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

/// Creates a pending request for `discord_id`.
pub async fn create_loa_request(
    db: &DatabaseConnection,
    discord_id: u64,
) -> Result<entity::loa_request::Model, DbErr> {
    LoaRequestFactory::new(db).discord_id(discord_id).build().await
}
