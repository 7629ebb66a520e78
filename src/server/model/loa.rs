//! Leave of absence requests.

use chrono::{DateTime, Utc};

use crate::{
    model::loa::LoaRequestDto,
    server::{
        error::AppError, model::request::RequestStatus, util::parse::parse_u64_from_string,
    },
};

pub const DEFAULT_LOA_DAYS: u32 = 7;
pub const MAX_LOA_DAYS: u32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct LoaRequest {
    pub id: i32,
    pub discord_id: u64,
    pub days: i32,
    pub reason: String,
    pub status: RequestStatus,
    pub reviewed_by: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl LoaRequest {
    /// # Arguments
    /// - `display_name` - Roster name of the requester, if they are still on staff
    pub fn into_dto(self, display_name: Option<String>) -> LoaRequestDto {
        LoaRequestDto {
            id: self.id,
            discord_id: self.discord_id,
            display_name,
            days: self.days,
            reason: self.reason,
            status: self.status.into_dto(),
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::loa_request::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            discord_id: parse_u64_from_string(&entity.discord_id)?,
            days: entity.days,
            reason: entity.reason,
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

#[derive(Debug, Clone, PartialEq)]
pub struct CreateLoaRequestParam {
    pub discord_id: u64,
    pub days: i32,
    pub reason: String,
}

/// Resolves the requested duration, applying the default and the allowed range.
///
/// # Returns
/// - `Ok(days)` - Between 1 and `MAX_LOA_DAYS`
/// - `Err(AppError::BadRequest)` - Out of range
pub fn resolve_loa_days(days: Option<u32>) -> Result<i32, AppError> {
    let days = days.unwrap_or(DEFAULT_LOA_DAYS);

    if !(1..=MAX_LOA_DAYS).contains(&days) {
        return Err(AppError::BadRequest(format!(
            "Leave of absence must be between 1 and {} days",
            MAX_LOA_DAYS
        )));
    }

    Ok(days as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_a_week() {
        assert_eq!(resolve_loa_days(None).unwrap(), 7);
    }

    #[test]
    fn enforces_range() {
        assert_eq!(resolve_loa_days(Some(1)).unwrap(), 1);
        assert_eq!(resolve_loa_days(Some(60)).unwrap(), 60);
        assert!(matches!(resolve_loa_days(Some(0)), Err(AppError::BadRequest(_))));
        assert!(matches!(resolve_loa_days(Some(61)), Err(AppError::BadRequest(_))));
    }
}
