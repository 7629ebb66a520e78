use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ModerationStatsDto {
    pub bans: u64,
    pub mutes: u64,
    pub checks: u64,
    pub playtime_seconds: u64,
    pub history: Vec<PunishmentDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PunishmentDto {
    /// `ban` or `mute`.
    pub kind: String,
    /// Punished player's uuid as stored by LiteBans.
    pub target: String,
    pub reason: Option<String>,
    /// Milliseconds since the unix epoch.
    pub time: i64,
}
