use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use super::{loa::RequestStatusDto, log::ActionLogDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateAppealDto {
    pub action_log_id: i32,
    pub text: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AppealDto {
    pub id: i32,
    #[serde(with = "crate::model::snowflake")]
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub discord_id: u64,
    pub display_name: Option<String>,
    pub text: String,
    pub status: RequestStatusDto,
    /// The warning being appealed.
    pub warning: ActionLogDto,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[cfg_attr(feature = "server", schema(value_type = i64))]
    pub created_at: DateTime<Utc>,
}
