//! Staff roster domain models.
//!
//! A staff member is a guild member that holds the configured staff role. The roster
//! row keeps the member's guild roles so ranks can be resolved without calling Discord,
//! plus dashboard-owned state (warnings, wallet, leave of absence, profile).

use chrono::{DateTime, Utc};
use serenity::all::{GuildMemberUpdateEvent, Member};
use url::Url;

use crate::{
    model::staff::{LoaStatusDto, StaffDto, UpdateProfileDto},
    server::{error::AppError, model::rank::RankLadder, util::parse::parse_u64_from_string},
};

const DISCORD_CDN: &str = "https://cdn.discordapp.com";

/// Rank name shown for staff holding no ladder role.
pub const UNRANKED_NAME: &str = "Staff";

#[derive(Debug, Clone, PartialEq)]
pub struct StaffMember {
    pub discord_id: u64,
    pub username: String,
    pub display_name: String,
    /// Avatar hash, `None` for Discord's default avatar.
    pub avatar: Option<String>,
    /// False once the member lost the staff role or left the guild.
    pub active: bool,
    pub minecraft_nick: Option<String>,
    pub banner_url: Option<String>,
    pub warn_count: i32,
    pub balance: i64,
    pub last_withdraw_at: Option<DateTime<Utc>>,
    pub loa_until: Option<DateTime<Utc>>,
    pub loa_reason: Option<String>,
    /// All guild role ids of the member.
    pub roles: Vec<u64>,
}

impl StaffMember {
    /// Builds the domain model from the staff row and its role rows.
    pub fn from_entity(
        entity: entity::staff_member::Model,
        roles: Vec<entity::staff_member_role::Model>,
    ) -> Result<Self, AppError> {
        let roles = roles
            .iter()
            .map(|role| parse_u64_from_string(&role.role_id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            discord_id: parse_u64_from_string(&entity.discord_id)?,
            username: entity.username,
            display_name: entity.display_name,
            avatar: entity.avatar,
            active: entity.active,
            minecraft_nick: entity.minecraft_nick,
            banner_url: entity.banner_url,
            warn_count: entity.warn_count,
            balance: entity.balance,
            last_withdraw_at: entity.last_withdraw_at,
            loa_until: entity.loa_until,
            loa_reason: entity.loa_reason,
            roles,
        })
    }

    /// Avatar URL on the Discord CDN, falling back to the default avatar.
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(hash) => {
                let ext = if hash.starts_with("a_") { "gif" } else { "png" };
                format!(
                    "{}/avatars/{}/{}.{}",
                    DISCORD_CDN, self.discord_id, hash, ext
                )
            }
            None => format!(
                "{}/embed/avatars/{}.png",
                DISCORD_CDN,
                (self.discord_id >> 22) % 6
            ),
        }
    }

    /// The member's leave of absence if it has not expired at `now`.
    pub fn active_loa(&self, now: DateTime<Utc>) -> Option<LoaStatusDto> {
        self.loa_until
            .filter(|until| *until > now)
            .map(|until| LoaStatusDto {
                until,
                reason: self.loa_reason.clone(),
            })
    }

    /// Converts to the roster DTO, resolving the rank from the ladder.
    ///
    /// # Arguments
    /// - `ladder` - Configured rank ladder
    /// - `current_user_id` - Discord id of the requesting user, flags their own entry
    pub fn into_dto(self, ladder: &RankLadder, current_user_id: u64) -> StaffDto {
        let rank = ladder.highest_of(&self.roles).cloned();
        let loa = self.active_loa(Utc::now());
        let avatar_url = self.avatar_url();

        StaffDto {
            id: self.discord_id,
            username: self.username,
            display_name: self.display_name,
            avatar_url,
            rank_role_id: rank.as_ref().map(|rank| rank.role_id),
            rank_name: rank
                .as_ref()
                .map(|rank| rank.name.clone())
                .unwrap_or_else(|| UNRANKED_NAME.to_string()),
            rank_weight: rank
                .as_ref()
                .map(|rank| ladder.weight(rank.role_id))
                .unwrap_or(0),
            roles: self.roles,
            loa,
            minecraft_nick: self.minecraft_nick,
            banner_url: self.banner_url,
            warn_count: self.warn_count,
            balance: self.balance,
            is_current_user: self.discord_id == current_user_id,
        }
    }
}

/// Guild member data written to the roster during a sync.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncStaffMemberParam {
    pub discord_id: u64,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub roles: Vec<u64>,
}

impl SyncStaffMemberParam {
    pub fn from_member(member: &Member) -> Self {
        Self {
            discord_id: member.user.id.get(),
            username: member.user.name.clone(),
            display_name: member.display_name().to_string(),
            avatar: member.user.avatar.map(|hash| hash.to_string()),
            roles: member.roles.iter().map(|role| role.get()).collect(),
        }
    }

    /// Member data carried by a `guild_member_update` event, which is delivered even
    /// when the member is not cached.
    pub fn from_update_event(event: &GuildMemberUpdateEvent) -> Self {
        let display_name = event
            .nick
            .clone()
            .or_else(|| event.user.global_name.clone())
            .unwrap_or_else(|| event.user.name.clone());

        Self {
            discord_id: event.user.id.get(),
            username: event.user.name.clone(),
            display_name,
            avatar: event.user.avatar.map(|hash| hash.to_string()),
            roles: event.roles.iter().map(|role| role.get()).collect(),
        }
    }
}

/// Profile fields a staff member may edit on their own entry.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProfileParam {
    pub minecraft_nick: Option<String>,
    pub banner_url: Option<String>,
}

impl UpdateProfileParam {
    /// Validates the submitted profile. Blank fields clear the stored value.
    ///
    /// # Returns
    /// - `Ok(UpdateProfileParam)` - Nick is a valid Minecraft name, banner an http(s) URL
    /// - `Err(AppError::BadRequest)` - Either field is malformed
    pub fn from_dto(dto: UpdateProfileDto) -> Result<Self, AppError> {
        let minecraft_nick = non_blank(dto.minecraft_nick);
        let banner_url = non_blank(dto.banner_url);

        if let Some(nick) = &minecraft_nick {
            let valid_chars = nick
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !(3..=16).contains(&nick.len()) || !valid_chars {
                return Err(AppError::BadRequest(
                    "Minecraft nick must be 3 to 16 letters, digits or underscores".to_string(),
                ));
            }
        }

        if let Some(banner) = &banner_url {
            let valid = Url::parse(banner)
                .map(|url| matches!(url.scheme(), "http" | "https"))
                .unwrap_or(false);
            if !valid {
                return Err(AppError::BadRequest(
                    "Banner must be an http or https URL".to_string(),
                ));
            }
        }

        Ok(Self {
            minecraft_nick,
            banner_url,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Sorts roster entries by rank weight (highest first), then display name.
pub fn sort_roster(members: &mut [StaffMember], ladder: &RankLadder) {
    members.sort_by(|a, b| {
        let weight_a = ladder.highest_of(&a.roles).map(|r| ladder.weight(r.role_id));
        let weight_b = ladder.highest_of(&b.roles).map(|r| ladder.weight(r.role_id));

        weight_b
            .cmp(&weight_a)
            .then_with(|| a.display_name.to_lowercase().cmp(&b.display_name.to_lowercase()))
    });
}
