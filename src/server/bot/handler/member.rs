use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, GuildMemberUpdateEvent, Member, User};

use crate::server::{
    config::Config, model::staff::SyncStaffMemberParam, service::staff::StaffService,
};

/// Handles the guild_member_removal event: members leaving the guild leave the roster.
pub async fn handle_guild_member_removal(
    db: &DatabaseConnection,
    config: &Config,
    _ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    if guild_id.get() != config.guild_id {
        return;
    }

    match StaffService::new(db).remove_member(user.id.get()).await {
        Ok(true) => tracing::info!("{} ({}) left the guild and the roster", user.name, user.id),
        Ok(false) => {}
        Err(e) => tracing::error!("Failed to remove {} from the roster: {:?}", user.id, e),
    }
}

/// Handles the guild_member_update event (roles, nickname, avatar).
///
/// Gaining the staff role adds the member to the roster, losing it deactivates them.
pub async fn handle_guild_member_update(
    db: &DatabaseConnection,
    config: &Config,
    _ctx: Context,
    _old: Option<Member>,
    _new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    if event.guild_id.get() != config.guild_id {
        return;
    }

    let param = SyncStaffMemberParam::from_update_event(&event);

    match StaffService::new(db)
        .sync_param(param, config.staff_role_id)
        .await
    {
        Ok(is_staff) => tracing::debug!(
            "Synced member {} ({}), staff: {}",
            event.user.name,
            event.user.id,
            is_staff
        ),
        Err(e) => tracing::error!("Failed to sync member {}: {:?}", event.user.id, e),
    }
}
