//! Appeals against warnings.

use chrono::{DateTime, Utc};

use crate::{
    model::appeal::AppealDto,
    server::{
        error::AppError,
        model::{action_log::ActionLog, request::RequestStatus},
        util::parse::parse_u64_from_string,
    },
};

/// Longest appeal text accepted, matching the Discord modal limit.
pub const MAX_APPEAL_LENGTH: usize = 2000;

/// Custom id prefix of the "Explain" button attached to warning DMs.
pub const APPEAL_BUTTON_PREFIX: &str = "appeal";
/// Custom id prefix of the modal the button opens.
pub const APPEAL_MODAL_PREFIX: &str = "appeal_modal";
/// Custom id of the modal's text input.
pub const APPEAL_TEXT_INPUT: &str = "appeal_text";

#[derive(Debug, Clone, PartialEq)]
pub struct Appeal {
    pub id: i32,
    pub discord_id: u64,
    pub action_log_id: i32,
    pub text: String,
    pub status: RequestStatus,
    pub reviewed_by: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl Appeal {
    pub fn from_entity(entity: entity::appeal::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            discord_id: parse_u64_from_string(&entity.discord_id)?,
            action_log_id: entity.action_log_id,
            text: entity.text,
            status: RequestStatus::from_column(&entity.status)?,
            reviewed_by: entity
                .reviewed_by
                .as_deref()
                .map(parse_u64_from_string)
                .transpose()?,
            created_at: entity.created_at,
            reviewed_at: entity.reviewed_at,
        })
    }
}

/// An appeal together with the warning it contests.
#[derive(Debug, Clone, PartialEq)]
pub struct AppealWithWarning {
    pub appeal: Appeal,
    pub warning: ActionLog,
}

impl AppealWithWarning {
    pub fn into_dto(self, display_name: Option<String>) -> AppealDto {
        AppealDto {
            id: self.appeal.id,
            discord_id: self.appeal.discord_id,
            display_name,
            text: self.appeal.text,
            status: self.appeal.status.into_dto(),
            warning: self.warning.into_dto(),
            created_at: self.appeal.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAppealParam {
    pub discord_id: u64,
    pub action_log_id: i32,
    pub text: String,
}

/// Trims and validates appeal text.
pub fn normalize_appeal_text(text: &str) -> Result<String, AppError> {
    let text = text.trim();

    if text.is_empty() {
        return Err(AppError::BadRequest("Appeal text must not be empty".to_string()));
    }
    if text.chars().count() > MAX_APPEAL_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Appeal text must be at most {} characters",
            MAX_APPEAL_LENGTH
        )));
    }

    Ok(text.to_string())
}

/// Builds a component custom id such as `appeal:42` for the warning log `42`.
pub fn appeal_custom_id(prefix: &str, action_log_id: i32) -> String {
    format!("{}:{}", prefix, action_log_id)
}

/// Extracts the warning log id from a custom id built with the same `prefix`.
pub fn parse_appeal_custom_id(prefix: &str, custom_id: &str) -> Option<i32> {
    let (found, id) = custom_id.split_once(':')?;
    if found != prefix {
        return None;
    }
    id.parse().ok()
}
