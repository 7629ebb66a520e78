//! Administrative actions on staff members.
//!
//! An action is planned against the member's current state before anything is sent
//! to Discord, so invalid requests never leave partial role edits behind.

use crate::{
    model::staff::{StaffActionDto, StaffActionKind},
    server::{
        error::AppError,
        model::{
            action_log::LogAction,
            rank::{RankChange, RankDirection, RankLadder},
            staff::StaffMember,
        },
    },
};

/// Highest warning weight a single warning may carry.
pub const MAX_WARN_LEVEL: u8 = 3;

pub const NO_REASON: &str = "No reason provided";

#[derive(Debug, Clone, PartialEq)]
pub struct StaffActionParam {
    pub target_id: u64,
    pub admin_id: u64,
    pub kind: StaffActionKind,
    pub reason: String,
    pub target_role_id: Option<u64>,
    pub warn_level: Option<u8>,
}

impl StaffActionParam {
    pub fn from_dto(target_id: u64, admin_id: u64, dto: StaffActionDto) -> Self {
        let reason = dto.reason.trim();

        Self {
            target_id,
            admin_id,
            kind: dto.action,
            reason: if reason.is_empty() {
                NO_REASON.to_string()
            } else {
                reason.to_string()
            },
            target_role_id: dto.target_role_id,
            warn_level: dto.warn_level,
        }
    }
}

/// The validated effect of an action.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannedAction {
    Rank {
        direction: RankDirection,
        change: RankChange,
    },
    Warn {
        level: i32,
    },
    Kick,
}

impl PlannedAction {
    pub fn log_action(&self) -> LogAction {
        match self {
            Self::Rank {
                direction: RankDirection::Promote,
                ..
            } => LogAction::Promote,
            Self::Rank {
                direction: RankDirection::Demote,
                ..
            } => LogAction::Demote,
            Self::Warn { .. } => LogAction::Warn,
            Self::Kick => LogAction::Kick,
        }
    }

    /// Human readable detail stored with the log entry.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Rank { change, .. } => Some(format!(
                "{} → {}",
                change
                    .from
                    .as_ref()
                    .map(|rank| rank.name.as_str())
                    .unwrap_or("Unranked"),
                change.to.name
            )),
            Self::Warn { level } => Some(format!("Level {}", level)),
            Self::Kick => None,
        }
    }

    pub fn warn_level(&self) -> Option<i32> {
        match self {
            Self::Warn { level } => Some(*level),
            _ => None,
        }
    }
}

/// Validates an action against the member's current rank.
///
/// # Returns
/// - `Ok(PlannedAction)` - The action can be applied
/// - `Err(AppError::BadRequest)` - Admin targets themselves or the warn level is out of range
/// - `Err(AppError::RankErr)` - The rank change is not possible on the ladder
pub fn plan_action(
    ladder: &RankLadder,
    member: &StaffMember,
    param: &StaffActionParam,
) -> Result<PlannedAction, AppError> {
    if param.admin_id == member.discord_id {
        return Err(AppError::BadRequest(
            "You cannot perform staff actions on yourself".to_string(),
        ));
    }

    let current = ladder.highest_of(&member.roles).map(|rank| rank.role_id);

    let planned = match param.kind {
        StaffActionKind::Promote | StaffActionKind::Demote => {
            let direction = if param.kind == StaffActionKind::Promote {
                RankDirection::Promote
            } else {
                RankDirection::Demote
            };
            let change = ladder.transition(current, direction, param.target_role_id)?;

            PlannedAction::Rank { direction, change }
        }
        StaffActionKind::Warn => {
            let level = param.warn_level.unwrap_or(1);
            if !(1..=MAX_WARN_LEVEL).contains(&level) {
                return Err(AppError::BadRequest(format!(
                    "Warning level must be between 1 and {}",
                    MAX_WARN_LEVEL
                )));
            }

            PlannedAction::Warn {
                level: level as i32,
            }
        }
        StaffActionKind::Kick => PlannedAction::Kick,
    };

    Ok(planned)
}

/// The member's guild roles after a rank change: every other ladder role is dropped.
pub fn roles_after_rank_change(ladder: &RankLadder, roles: &[u64], new_rank: u64) -> Vec<u64> {
    let mut roles: Vec<u64> = roles
        .iter()
        .copied()
        .filter(|role_id| !ladder.contains(*role_id))
        .collect();
    roles.push(new_rank);
    roles
}

/// The member's guild roles after removal from staff.
pub fn roles_after_kick(ladder: &RankLadder, roles: &[u64], staff_role_id: u64) -> Vec<u64> {
    roles
        .iter()
        .copied()
        .filter(|role_id| *role_id != staff_role_id && !ladder.contains(*role_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{error::rank::RankError, model::rank::Rank};

    const STAFF: u64 = 1;
    const HELPER: u64 = 10;
    const MOD: u64 = 20;
    const ADMIN: u64 = 30;

    fn ladder() -> RankLadder {
        RankLadder::new(vec![
            Rank {
                role_id: HELPER,
                name: "Helper".to_string(),
            },
            Rank {
                role_id: MOD,
                name: "Moderator".to_string(),
            },
            Rank {
                role_id: ADMIN,
                name: "Admin".to_string(),
            },
        ])
        .unwrap()
    }

    fn member(roles: Vec<u64>) -> StaffMember {
        StaffMember {
            discord_id: 500,
            username: "alice".to_string(),
            display_name: "Alice".to_string(),
            avatar: None,
            active: true,
            minecraft_nick: None,
            banner_url: None,
            warn_count: 0,
            balance: 5000,
            last_withdraw_at: None,
            loa_until: None,
            loa_reason: None,
            roles,
        }
    }

    fn param(kind: StaffActionKind) -> StaffActionParam {
        StaffActionParam {
            target_id: 500,
            admin_id: 900,
            kind,
            reason: "Reason".to_string(),
            target_role_id: None,
            warn_level: None,
        }
    }

    #[test]
    fn promotes_one_step() {
        let planned = plan_action(
            &ladder(),
            &member(vec![STAFF, HELPER]),
            &param(StaffActionKind::Promote),
        )
        .unwrap();

        assert_eq!(planned.log_action(), LogAction::Promote);
        assert_eq!(planned.detail().as_deref(), Some("Helper → Moderator"));
    }

    #[test]
    fn demote_at_bottom_is_rejected() {
        let result = plan_action(
            &ladder(),
            &member(vec![STAFF, HELPER]),
            &param(StaffActionKind::Demote),
        );

        assert!(matches!(
            result,
            Err(AppError::RankErr(RankError::AlreadyLowest(_)))
        ));
    }

    #[test]
    fn explicit_target_must_be_above_for_promotion() {
        let mut param = param(StaffActionKind::Promote);
        param.target_role_id = Some(HELPER);

        let result = plan_action(&ladder(), &member(vec![MOD]), &param);

        assert!(matches!(
            result,
            Err(AppError::RankErr(RankError::WrongDirection { .. }))
        ));
    }

    #[test]
    fn warn_defaults_to_level_one_and_checks_range() {
        let planned = plan_action(&ladder(), &member(vec![]), &param(StaffActionKind::Warn));
        assert_eq!(planned.unwrap(), PlannedAction::Warn { level: 1 });

        let mut too_high = param(StaffActionKind::Warn);
        too_high.warn_level = Some(4);
        assert!(matches!(
            plan_action(&ladder(), &member(vec![]), &too_high),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn admin_cannot_target_themselves() {
        let mut param = param(StaffActionKind::Kick);
        param.admin_id = 500;

        assert!(matches!(
            plan_action(&ladder(), &member(vec![]), &param),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rank_change_replaces_every_ladder_role() {
        let roles = roles_after_rank_change(&ladder(), &[STAFF, HELPER, MOD, 99], ADMIN);

        assert_eq!(roles, vec![STAFF, 99, ADMIN]);
    }

    #[test]
    fn kick_strips_staff_and_ladder_roles() {
        let roles = roles_after_kick(&ladder(), &[STAFF, HELPER, 99], STAFF);

        assert_eq!(roles, vec![99]);
    }

    #[test]
    fn blank_reason_gets_placeholder() {
        let dto = StaffActionDto {
            action: StaffActionKind::Kick,
            reason: "   ".to_string(),
            target_role_id: None,
            warn_level: None,
        };

        assert_eq!(StaffActionParam::from_dto(1, 2, dto).reason, NO_REASON);
    }
}
