//! Guild event handler for the full roster sync.
//!
//! `guild_create` fires on startup for every guild the bot is in, when it joins a new
//! guild and when a guild becomes available again after an outage. Each time, the
//! configured guild's member list is fetched in full and mirrored onto the roster, which
//! also catches role changes and departures missed while the bot was offline.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild, Member};

use crate::server::{
    config::Config, model::staff::SyncStaffMemberParam, service::staff::StaffService,
};

/// Maximum number of members to fetch per API request.
///
/// Discord's API supports up to 1000 members per request.
static MEMBERS_PER_REQUEST: u64 = 1000;

/// Handles the guild_create event for the configured guild.
///
/// Other guilds the bot happens to be in are ignored. If fetching the member list fails
/// part way the sync is skipped entirely, since a partial list would deactivate every
/// staff member that was not fetched.
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    config: &Config,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    if guild_id != config.guild_id {
        tracing::debug!("Ignoring guild {} ({})", guild.name, guild_id);
        return;
    }

    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}",
        guild.name,
        guild_id,
        guild.member_count,
    );

    let members = match fetch_all_members(&ctx, guild_id).await {
        Ok(members) => members,
        Err(e) => {
            tracing::error!("Failed to fetch guild {} members: {:?}", guild_id, e);
            return;
        }
    };

    let params: Vec<SyncStaffMemberParam> = members
        .iter()
        .map(SyncStaffMemberParam::from_member)
        .collect();

    match StaffService::new(db)
        .sync_guild(params, config.staff_role_id)
        .await
    {
        Ok((synced, deactivated)) => tracing::info!(
            "Synced {} staff members from {} guild members ({} deactivated)",
            synced,
            members.len(),
            deactivated
        ),
        Err(e) => tracing::error!("Failed to sync staff roster: {:?}", e),
    }
}

/// Pages through the guild's members, 1000 at a time.
async fn fetch_all_members(ctx: &Context, guild_id: u64) -> Result<Vec<Member>, serenity::Error> {
    let mut all_members = Vec::new();
    let mut after: Option<u64> = None;

    loop {
        let members = ctx
            .http
            .get_guild_members(guild_id.into(), Some(MEMBERS_PER_REQUEST), after)
            .await?;

        let fetched_count = members.len();
        after = members.last().map(|m| m.user.id.get());
        all_members.extend(members);

        tracing::debug!(
            "Fetched {} members for guild {} (total so far: {})",
            fetched_count,
            guild_id,
            all_members.len()
        );

        if fetched_count < MEMBERS_PER_REQUEST as usize {
            break;
        }
    }

    Ok(all_members)
}
