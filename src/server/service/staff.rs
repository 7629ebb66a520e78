//! Staff roster service.
//!
//! Reads the roster for the dashboard and keeps it in sync with the guild. The bot
//! feeds guild members in; only members holding the staff role stay active.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::staff::StaffRepository,
    error::AppError,
    model::{
        rank::RankLadder,
        staff::{sort_roster, StaffMember, SyncStaffMemberParam, UpdateProfileParam},
    },
};

pub struct StaffService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active staff sorted by rank weight (highest first), then display name.
    pub async fn get_roster(&self, ladder: &RankLadder) -> Result<Vec<StaffMember>, AppError> {
        let mut members = StaffRepository::new(self.db).get_active().await?;
        sort_roster(&mut members, ladder);
        Ok(members)
    }

    /// # Returns
    /// - `Ok(StaffMember)` - Active roster entry
    /// - `Err(AppError::NotFound)` - Unknown or no longer on staff
    pub async fn get_member(&self, discord_id: u64) -> Result<StaffMember, AppError> {
        StaffRepository::new(self.db)
            .find_active_by_id(discord_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Staff member {} not found", discord_id)))
    }

    /// Updates the caller's own profile fields.
    ///
    /// # Returns
    /// - `Ok(StaffMember)` - The updated entry
    /// - `Err(AppError::NotFound)` - Caller is not on staff
    pub async fn update_profile(
        &self,
        discord_id: u64,
        param: UpdateProfileParam,
    ) -> Result<StaffMember, AppError> {
        let staff_repo = StaffRepository::new(self.db);

        if staff_repo.find_active_by_id(discord_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Staff member {} not found",
                discord_id
            )));
        }

        staff_repo.update_profile(discord_id, param).await?;

        self.get_member(discord_id).await
    }

    /// Mirrors a single guild member onto the roster.
    ///
    /// # Returns
    /// - `Ok(true)` - Member holds the staff role and was synced
    /// - `Ok(false)` - Member is not staff; any existing entry was deactivated
    pub async fn sync_param(
        &self,
        param: SyncStaffMemberParam,
        staff_role_id: u64,
    ) -> Result<bool, AppError> {
        let staff_repo = StaffRepository::new(self.db);

        if param.roles.contains(&staff_role_id) {
            staff_repo.sync_member(param).await?;
            return Ok(true);
        }

        if staff_repo.deactivate(param.discord_id).await? {
            tracing::info!("{} lost the staff role, removed from roster", param.discord_id);
        }

        Ok(false)
    }

    /// Syncs a complete guild member list.
    ///
    /// Staff not present in `members` (left the guild or lost the role while the bot was
    /// offline) are deactivated.
    ///
    /// # Returns
    /// - `Ok((synced, deactivated))` - Number of active staff and of removed entries
    pub async fn sync_guild(
        &self,
        members: Vec<SyncStaffMemberParam>,
        staff_role_id: u64,
    ) -> Result<(usize, u64), AppError> {
        let mut staff_ids = Vec::new();

        for param in members {
            let discord_id = param.discord_id;
            if self.sync_param(param, staff_role_id).await? {
                staff_ids.push(discord_id);
            }
        }

        let deactivated = StaffRepository::new(self.db)
            .deactivate_missing(&staff_ids)
            .await?;

        Ok((staff_ids.len(), deactivated))
    }

    /// Removes a member who left the guild.
    pub async fn remove_member(&self, discord_id: u64) -> Result<bool, AppError> {
        StaffRepository::new(self.db).deactivate(discord_id).await
    }
}
