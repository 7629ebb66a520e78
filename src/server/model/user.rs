//! User domain models and parameters.
//!
//! A user is a dashboard account created on first Discord login. Admin privileges come
//! from configuration and are re-applied on every login.

use chrono::{DateTime, Utc};

use crate::{
    model::user::UserDto,
    server::{error::AppError, util::parse::parse_u64_from_string},
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Discord username at last login.
    pub name: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    pub last_login_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            discord_id: self.discord_id,
            name: self.name,
            admin: self.admin,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord ID is not numeric
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            discord_id: parse_u64_from_string(&entity.discord_id)?,
            name: entity.name,
            admin: entity.admin,
            last_login_at: entity.last_login_at,
        })
    }
}

/// Parameters for upserting a user during login.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub discord_id: u64,
    pub name: String,
    pub admin: bool,
}
