//! Administrative staff actions: promote, demote, warn and kick.
//!
//! An action is applied in a fixed order: validate against the member's current state,
//! edit the member's roles on Discord, mirror the result in the database and write the
//! action log, then notify. A Discord failure aborts before anything is recorded;
//! notifications after that point are best effort.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{GuildId, RoleId, UserId},
    http::Http,
};

use crate::server::{
    config::Config,
    data::{action_log::ActionLogRepository, staff::StaffRepository},
    error::AppError,
    model::{
        action::{
            plan_action, roles_after_kick, roles_after_rank_change, PlannedAction,
            StaffActionParam,
        },
        action_log::{ActionLog, CreateActionLogParam},
        staff::StaffMember,
    },
    service::notification::NotificationService,
};

pub struct StaffActionService<'a> {
    db: &'a DatabaseConnection,
    http: &'a Http,
    config: &'a Config,
}

impl<'a> StaffActionService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: &'a Http, config: &'a Config) -> Self {
        Self { db, http, config }
    }

    /// Applies an action to an active staff member.
    ///
    /// # Returns
    /// - `Ok((ActionLog, Some(StaffMember)))` - Applied; the refreshed entry
    /// - `Ok((ActionLog, None))` - Applied and the member is no longer on staff (kick)
    /// - `Err(AppError::NotFound)` - Target is not on staff
    /// - `Err(AppError::BadRequest)` / `Err(AppError::RankErr)` - Action is not valid
    /// - `Err(AppError::DiscordErr)` - Role edit failed, nothing was recorded
    pub async fn execute(
        &self,
        param: StaffActionParam,
    ) -> Result<(ActionLog, Option<StaffMember>), AppError> {
        let staff_repo = StaffRepository::new(self.db);

        let member = staff_repo
            .find_active_by_id(param.target_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Staff member {} not found", param.target_id))
            })?;

        let planned = plan_action(&self.config.rank_ladder, &member, &param)?;

        self.apply_roles(&member, &planned, &param.reason).await?;

        let log = self.record(&member, &param, &planned).await?;

        tracing::info!(
            "{} applied {} to {} ({})",
            param.admin_id,
            log.action,
            member.display_name,
            member.discord_id
        );

        let notifications = NotificationService::new(
            self.http,
            self.config.log_channel_id,
            &self.config.app_url,
        );
        notifications.post_log(&log, &member.display_name).await;
        if log.is_warning() {
            notifications.send_warning_dm(&log).await;
        }

        let member = staff_repo.find_active_by_id(member.discord_id).await?;

        Ok((log, member))
    }

    /// Mirrors a planned action in the database and writes its log entry.
    pub async fn record(
        &self,
        member: &StaffMember,
        param: &StaffActionParam,
        planned: &PlannedAction,
    ) -> Result<ActionLog, AppError> {
        let staff_repo = StaffRepository::new(self.db);
        let log_repo = ActionLogRepository::new(self.db);
        let ladder = &self.config.rank_ladder;

        match planned {
            PlannedAction::Rank { change, .. } => {
                let roles = roles_after_rank_change(ladder, &member.roles, change.to.role_id);
                staff_repo.replace_roles(member.discord_id, &roles).await?;
            }
            PlannedAction::Warn { level } => {
                staff_repo
                    .add_warn_count(member.discord_id, *level)
                    .await?;
            }
            PlannedAction::Kick => {
                let roles = roles_after_kick(ladder, &member.roles, self.config.staff_role_id);
                staff_repo.replace_roles(member.discord_id, &roles).await?;
                staff_repo.deactivate(member.discord_id).await?;
            }
        }

        log_repo
            .create(CreateActionLogParam {
                target_id: member.discord_id,
                admin_id: param.admin_id,
                action: planned.log_action(),
                reason: param.reason.clone(),
                detail: planned.detail(),
                warn_level: planned.warn_level(),
            })
            .await
    }

    async fn apply_roles(
        &self,
        member: &StaffMember,
        planned: &PlannedAction,
        reason: &str,
    ) -> Result<(), AppError> {
        let ladder = &self.config.rank_ladder;

        let (add, remove): (Vec<u64>, Vec<u64>) = match planned {
            PlannedAction::Rank { change, .. } => {
                let add = if member.roles.contains(&change.to.role_id) {
                    Vec::new()
                } else {
                    vec![change.to.role_id]
                };
                let remove = member
                    .roles
                    .iter()
                    .copied()
                    .filter(|role_id| ladder.contains(*role_id) && *role_id != change.to.role_id)
                    .collect();
                (add, remove)
            }
            PlannedAction::Kick => {
                let remove = member
                    .roles
                    .iter()
                    .copied()
                    .filter(|role_id| {
                        *role_id == self.config.staff_role_id || ladder.contains(*role_id)
                    })
                    .collect();
                (Vec::new(), remove)
            }
            PlannedAction::Warn { .. } => return Ok(()),
        };

        let guild_id = GuildId::new(self.config.guild_id);
        let user_id = UserId::new(member.discord_id);

        for role_id in add {
            self.http
                .add_member_role(guild_id, user_id, RoleId::new(role_id), Some(reason))
                .await?;
        }
        for role_id in remove {
            self.http
                .remove_member_role(guild_id, user_id, RoleId::new(role_id), Some(reason))
                .await?;
        }

        Ok(())
    }
}
