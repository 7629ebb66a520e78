use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Toggles the caller's leave of absence.
///
/// `active: true` files a request for `days` (default 7), `active: false` ends the
/// current leave and cancels any pending request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LoaToggleDto {
    pub active: bool,
    pub days: Option<u32>,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum RequestStatusDto {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LoaRequestDto {
    pub id: i32,
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub discord_id: u64,
    pub display_name: Option<String>,
    pub days: i32,
    pub reason: String,
    pub status: RequestStatusDto,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[cfg_attr(feature = "server", schema(value_type = i64))]
    pub created_at: DateTime<Utc>,
}
