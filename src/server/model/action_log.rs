//! Audit trail of administrative actions.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::{
    model::log::ActionLogDto,
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// Every kind of entry written to the action log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    Promote,
    Demote,
    Warn,
    Kick,
    AppealApproved,
    AppealRejected,
    LoaApproved,
    LoaRejected,
    Adjust,
}

impl LogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Promote => "promote",
            Self::Demote => "demote",
            Self::Warn => "warn",
            Self::Kick => "kick",
            Self::AppealApproved => "appeal_approved",
            Self::AppealRejected => "appeal_rejected",
            Self::LoaApproved => "loa_approved",
            Self::LoaRejected => "loa_rejected",
            Self::Adjust => "adjust",
        }
    }

    /// Human readable title used in log channel embeds.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Promote => "Staff promoted",
            Self::Demote => "Staff demoted",
            Self::Warn => "Staff warned",
            Self::Kick => "Staff removed",
            Self::AppealApproved => "Appeal approved",
            Self::AppealRejected => "Appeal rejected",
            Self::LoaApproved => "Leave of absence approved",
            Self::LoaRejected => "Leave of absence rejected",
            Self::Adjust => "Balance adjusted",
        }
    }

    /// Embed colour for the log channel.
    pub fn colour(&self) -> u32 {
        match self {
            Self::Promote | Self::AppealApproved | Self::LoaApproved => 0x2ecc71,
            Self::Demote | Self::Warn => 0xe67e22,
            Self::Kick | Self::AppealRejected | Self::LoaRejected => 0xe74c3c,
            Self::Adjust => 0x3498db,
        }
    }
}

impl FromStr for LogAction {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "promote" => Self::Promote,
            "demote" => Self::Demote,
            "warn" => Self::Warn,
            "kick" => Self::Kick,
            "appeal_approved" => Self::AppealApproved,
            "appeal_rejected" => Self::AppealRejected,
            "loa_approved" => Self::LoaApproved,
            "loa_rejected" => Self::LoaRejected,
            "adjust" => Self::Adjust,
            other => return Err(format!("Unknown log action '{}'", other)),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionLog {
    pub id: i32,
    /// Staff member the action was applied to.
    pub target_id: u64,
    /// Admin who performed the action.
    pub admin_id: u64,
    pub action: String,
    pub reason: String,
    /// Extra context, e.g. `Trainee -> Moderator` for rank changes.
    pub detail: Option<String>,
    pub warn_level: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl ActionLog {
    pub fn is_warning(&self) -> bool {
        self.action == LogAction::Warn.as_str()
    }

    pub fn into_dto(self) -> ActionLogDto {
        ActionLogDto {
            id: self.id,
            target_id: self.target_id,
            admin_id: self.admin_id,
            action: self.action,
            reason: self.reason,
            detail: self.detail,
            warn_level: self.warn_level,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::action_log::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            target_id: parse_u64_from_string(&entity.target_id)?,
            admin_id: parse_u64_from_string(&entity.admin_id)?,
            action: entity.action,
            reason: entity.reason,
            detail: entity.detail,
            warn_level: entity.warn_level,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateActionLogParam {
    pub target_id: u64,
    pub admin_id: u64,
    pub action: LogAction,
    pub reason: String,
    pub detail: Option<String>,
    pub warn_level: Option<i32>,
}
