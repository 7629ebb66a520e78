//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing dashboard accounts. It handles
//! the login upsert and lookups with conversion between entity models and domain models
//! at the infrastructure boundary.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};

use crate::server::{
    error::AppError,
    model::user::{UpsertUserParam, User},
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user or refreshes an existing one on login.
    ///
    /// Name, admin flag and `last_login_at` are overwritten on conflict so revoking an
    /// id from `ADMIN_DISCORD_IDS` takes effect on the user's next login.
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
            admin: ActiveValue::Set(param.admin),
            created_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns([
                    entity::user::Column::Name,
                    entity::user::Column::Admin,
                    entity::user::Column::LastLoginAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that Discord ID
    /// - `Err(AppError)` - Database error or corrupted id
    pub async fn find_by_discord_id(&self, user_id: u64) -> Result<Option<User>, AppError> {
        entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }
}
