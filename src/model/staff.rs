use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// One entry of the staff roster.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StaffDto {
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub id: u64,
    pub username: String,
    pub display_name: String,
    pub avatar_url: String,
    #[serde(with = "crate::model::snowflake::option", default)]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub rank_role_id: Option<u64>,
    /// Rank name, "Staff" for members not on the ladder.
    pub rank_name: String,
    /// 1 for the lowest rank, 0 when unranked.
    pub rank_weight: u32,
    #[serde(with = "crate::model::snowflake::vec")]
    #[cfg_attr(feature = "server", schema(value_type = Vec<String>))]
    pub roles: Vec<u64>,
    pub loa: Option<LoaStatusDto>,
    pub minecraft_nick: Option<String>,
    pub banner_url: Option<String>,
    pub warn_count: i32,
    pub balance: i64,
    pub is_current_user: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LoaStatusDto {
    #[serde(with = "chrono::serde::ts_seconds")]
    #[cfg_attr(feature = "server", schema(value_type = i64))]
    pub until: DateTime<Utc>,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateProfileDto {
    pub minecraft_nick: Option<String>,
    pub banner_url: Option<String>,
}

/// Administrative action kinds accepted by the action endpoint.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum StaffActionKind {
    Promote,
    Demote,
    Warn,
    Kick,
}

impl StaffActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Promote => "promote",
            Self::Demote => "demote",
            Self::Warn => "warn",
            Self::Kick => "kick",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StaffActionDto {
    pub action: StaffActionKind,
    #[serde(default)]
    pub reason: String,
    /// Explicit rank for promote/demote; the next rank on the ladder when absent.
    #[serde(with = "crate::model::snowflake::option", default)]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub target_role_id: Option<u64>,
    /// Warning weight between 1 and 3, defaults to 1.
    pub warn_level: Option<u8>,
}

/// Result of an applied action, returning the refreshed roster entry when the
/// member is still on staff.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StaffActionResultDto {
    pub log: super::log::ActionLogDto,
    pub member: Option<StaffDto>,
}
