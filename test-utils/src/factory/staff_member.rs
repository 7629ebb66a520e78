//! Staff member factory, including the member's guild roles.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for roster entries.
///
/// Requires the `staff_member` table, plus `staff_member_role` when roles are set.
///
/// # Example
///
/// ```rust,ignore
/// let member = StaffMemberFactory::new(&db)
///     .display_name("Alice")
///     .roles(vec![STAFF_ROLE, TRAINEE_ROLE])
///     .build()
///     .await?;
/// ```
pub struct StaffMemberFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::staff_member::Model,
    roles: Vec<u64>,
}

impl<'a> StaffMemberFactory<'a> {
    /// Creates a factory for an active member with no warnings and a balance of 5000.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            entity: entity::staff_member::Model {
                discord_id: id.to_string(),
                username: format!("staff{}", id),
                display_name: format!("Staff {}", id),
                avatar: None,
                active: true,
                minecraft_nick: None,
                banner_url: None,
                warn_count: 0,
                balance: 5000,
                last_withdraw_at: None,
                loa_until: None,
                loa_reason: None,
                synced_at: Utc::now(),
            },
            roles: Vec::new(),
        }
    }

    pub fn discord_id(mut self, discord_id: u64) -> Self {
        self.entity.discord_id = discord_id.to_string();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.entity.display_name = display_name.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.entity.active = active;
        self
    }

    pub fn warn_count(mut self, warn_count: i32) -> Self {
        self.entity.warn_count = warn_count;
        self
    }

    pub fn balance(mut self, balance: i64) -> Self {
        self.entity.balance = balance;
        self
    }

    pub fn last_withdraw_at(mut self, at: DateTime<Utc>) -> Self {
        self.entity.last_withdraw_at = Some(at);
        self
    }

    pub fn loa(mut self, until: DateTime<Utc>, reason: impl Into<String>) -> Self {
        self.entity.loa_until = Some(until);
        self.entity.loa_reason = Some(reason.into());
        self
    }

    pub fn minecraft_nick(mut self, nick: impl Into<String>) -> Self {
        self.entity.minecraft_nick = Some(nick.into());
        self
    }

    /// Guild role ids stored for the member.
    pub fn roles(mut self, roles: Vec<u64>) -> Self {
        self.roles = roles;
        self
    }

    /// Inserts the member and its role rows.
    pub async fn build(self) -> Result<entity::staff_member::Model, DbErr> {
        let member = entity::staff_member::ActiveModel::from(self.entity)
            .reset_all()
            .insert(self.db)
            .await?;

        for role_id in self.roles {
            entity::staff_member_role::ActiveModel {
                discord_id: ActiveValue::Set(member.discord_id.clone()),
                role_id: ActiveValue::Set(role_id.to_string()),
            }
            .insert(self.db)
            .await?;
        }

        Ok(member)
    }
}

/// Creates an active staff member without roles.
pub async fn create_staff_member(
    db: &DatabaseConnection,
) -> Result<entity::staff_member::Model, DbErr> {
    StaffMemberFactory::new(db).build().await
}
