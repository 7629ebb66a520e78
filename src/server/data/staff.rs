//! Staff roster repository.
//!
//! Persists the guild members that hold the staff role together with their guild roles,
//! and the dashboard-owned state attached to each member (warnings, leave of absence,
//! profile). Wallet balances are changed through `WalletRepository` so every change is
//! paired with a transaction row.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::server::{
    error::AppError,
    model::{
        staff::{StaffMember, SyncStaffMemberParam, UpdateProfileParam},
        wallet::STARTING_BALANCE,
    },
    util::parse::parse_u64_from_string,
};

pub struct StaffRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or refreshes a roster entry from guild member data.
    ///
    /// New members start active with no warnings and the starting balance. Existing
    /// members keep their dashboard state; only Discord-owned fields are refreshed and
    /// the member is re-activated. The stored role set is replaced with `param.roles`.
    ///
    /// # Returns
    /// - `Ok(StaffMember)` - The synced member including roles
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn sync_member(&self, param: SyncStaffMemberParam) -> Result<StaffMember, AppError> {
        let entity = entity::prelude::StaffMember::insert(entity::staff_member::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            username: ActiveValue::Set(param.username),
            display_name: ActiveValue::Set(param.display_name),
            avatar: ActiveValue::Set(param.avatar),
            active: ActiveValue::Set(true),
            minecraft_nick: ActiveValue::Set(None),
            banner_url: ActiveValue::Set(None),
            warn_count: ActiveValue::Set(0),
            balance: ActiveValue::Set(STARTING_BALANCE),
            last_withdraw_at: ActiveValue::Set(None),
            loa_until: ActiveValue::Set(None),
            loa_reason: ActiveValue::Set(None),
            synced_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::staff_member::Column::DiscordId)
                .update_columns([
                    entity::staff_member::Column::Username,
                    entity::staff_member::Column::DisplayName,
                    entity::staff_member::Column::Avatar,
                    entity::staff_member::Column::Active,
                    entity::staff_member::Column::SyncedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        let roles = self.replace_roles(param.discord_id, &param.roles).await?;

        StaffMember::from_entity(entity, roles)
    }

    /// Replaces the stored guild roles of a member.
    pub async fn replace_roles(
        &self,
        discord_id: u64,
        roles: &[u64],
    ) -> Result<Vec<entity::staff_member_role::Model>, AppError> {
        entity::prelude::StaffMemberRole::delete_many()
            .filter(entity::staff_member_role::Column::DiscordId.eq(discord_id.to_string()))
            .exec(self.db)
            .await?;

        let models: Vec<entity::staff_member_role::Model> = roles
            .iter()
            .map(|role_id| entity::staff_member_role::Model {
                discord_id: discord_id.to_string(),
                role_id: role_id.to_string(),
            })
            .collect();

        if !models.is_empty() {
            entity::prelude::StaffMemberRole::insert_many(models.iter().cloned().map(
                |model| entity::staff_member_role::ActiveModel {
                    discord_id: ActiveValue::Set(model.discord_id),
                    role_id: ActiveValue::Set(model.role_id),
                },
            ))
            .exec(self.db)
            .await?;
        }

        Ok(models)
    }

    /// Marks a member as no longer on staff. Their history and wallet are kept.
    ///
    /// # Returns
    /// - `Ok(true)` - Member was active and is now deactivated
    /// - `Ok(false)` - Member unknown or already inactive
    pub async fn deactivate(&self, discord_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::StaffMember::update_many()
            .col_expr(entity::staff_member::Column::Active, Expr::value(false))
            .filter(entity::staff_member::Column::DiscordId.eq(discord_id.to_string()))
            .filter(entity::staff_member::Column::Active.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deactivates every active member not contained in `staff_ids`.
    ///
    /// Used after a full guild sync so members who lost the staff role while the bot was
    /// offline drop off the roster.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of members deactivated
    pub async fn deactivate_missing(&self, staff_ids: &[u64]) -> Result<u64, AppError> {
        let ids: Vec<String> = staff_ids.iter().map(|id| id.to_string()).collect();

        let result = entity::prelude::StaffMember::update_many()
            .col_expr(entity::staff_member::Column::Active, Expr::value(false))
            .filter(entity::staff_member::Column::Active.eq(true))
            .filter(entity::staff_member::Column::DiscordId.is_not_in(ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Finds a member, active or not, with their roles.
    pub async fn find_by_id(&self, discord_id: u64) -> Result<Option<StaffMember>, AppError> {
        let Some(member) = entity::prelude::StaffMember::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let roles = entity::prelude::StaffMemberRole::find()
            .filter(entity::staff_member_role::Column::DiscordId.eq(discord_id.to_string()))
            .all(self.db)
            .await?;

        StaffMember::from_entity(member, roles).map(Some)
    }

    /// Finds a member only if they are currently on staff.
    pub async fn find_active_by_id(
        &self,
        discord_id: u64,
    ) -> Result<Option<StaffMember>, AppError> {
        Ok(self
            .find_by_id(discord_id)
            .await?
            .filter(|member| member.active))
    }

    /// Returns all active members with their roles, unsorted.
    pub async fn get_active(&self) -> Result<Vec<StaffMember>, AppError> {
        entity::prelude::StaffMember::find()
            .filter(entity::staff_member::Column::Active.eq(true))
            .find_with_related(entity::prelude::StaffMemberRole)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(member, roles)| StaffMember::from_entity(member, roles))
            .collect()
    }

    /// Display names of every roster entry, active or not, keyed by Discord id.
    pub async fn get_display_names(&self) -> Result<HashMap<u64, String>, AppError> {
        entity::prelude::StaffMember::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(|member| {
                Ok((
                    parse_u64_from_string(&member.discord_id)?,
                    member.display_name,
                ))
            })
            .collect()
    }

    /// Adds `delta` to the member's warning count in a single statement, flooring the
    /// result at zero.
    pub async fn add_warn_count(&self, discord_id: u64, delta: i32) -> Result<(), AppError> {
        let warn_count = Expr::col(entity::staff_member::Column::WarnCount).add(delta);

        entity::prelude::StaffMember::update_many()
            .col_expr(
                entity::staff_member::Column::WarnCount,
                Expr::case(warn_count.clone().lt(0), 0)
                    .finally(warn_count)
                    .into(),
            )
            .filter(entity::staff_member::Column::DiscordId.eq(discord_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn update_profile(
        &self,
        discord_id: u64,
        param: UpdateProfileParam,
    ) -> Result<(), AppError> {
        entity::prelude::StaffMember::update_many()
            .col_expr(
                entity::staff_member::Column::MinecraftNick,
                Expr::value(param.minecraft_nick),
            )
            .col_expr(
                entity::staff_member::Column::BannerUrl,
                Expr::value(param.banner_url),
            )
            .filter(entity::staff_member::Column::DiscordId.eq(discord_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Starts a leave of absence ending at `until`, or ends it when `until` is `None`.
    pub async fn set_loa(
        &self,
        discord_id: u64,
        until: Option<DateTime<Utc>>,
        reason: Option<String>,
    ) -> Result<(), AppError> {
        entity::prelude::StaffMember::update_many()
            .col_expr(entity::staff_member::Column::LoaUntil, Expr::value(until))
            .col_expr(entity::staff_member::Column::LoaReason, Expr::value(reason))
            .filter(entity::staff_member::Column::DiscordId.eq(discord_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Clears every leave of absence that ended at or before `now`.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of members whose leave was cleared
    pub async fn clear_expired_loa(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result = entity::prelude::StaffMember::update_many()
            .col_expr(
                entity::staff_member::Column::LoaUntil,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .col_expr(
                entity::staff_member::Column::LoaReason,
                Expr::value(Option::<String>::None),
            )
            .filter(entity::staff_member::Column::LoaUntil.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
