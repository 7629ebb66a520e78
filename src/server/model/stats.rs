//! Moderation statistics read from the external LiteBans and checks databases.

use crate::model::stats::{ModerationStatsDto, PunishmentDto};

/// Number of punishments listed in the history.
pub const HISTORY_LIMIT: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunishmentKind {
    Ban,
    Mute,
}

impl PunishmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ban => "ban",
            Self::Mute => "mute",
        }
    }

    /// LiteBans table for this kind, e.g. `litebans_bans`.
    pub fn table(&self, prefix: &str) -> String {
        match self {
            Self::Ban => format!("{}bans", prefix),
            Self::Mute => format!("{}mutes", prefix),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Punishment {
    pub kind: PunishmentKind,
    /// Punished player's uuid.
    pub target: String,
    pub reason: Option<String>,
    /// Milliseconds since the unix epoch.
    pub time: i64,
}

impl Punishment {
    pub fn into_dto(self) -> PunishmentDto {
        PunishmentDto {
            kind: self.kind.as_str().to_string(),
            target: self.target,
            reason: self.reason,
            time: self.time,
        }
    }
}

/// Aggregated statistics for a single moderator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModerationStats {
    pub bans: u64,
    pub mutes: u64,
    pub checks: u64,
    pub playtime_seconds: u64,
    pub history: Vec<Punishment>,
}

impl ModerationStats {
    pub fn into_dto(self) -> ModerationStatsDto {
        ModerationStatsDto {
            bans: self.bans,
            mutes: self.mutes,
            checks: self.checks,
            playtime_seconds: self.playtime_seconds,
            history: self.history.into_iter().map(Punishment::into_dto).collect(),
        }
    }
}

/// Merges the newest punishments of both kinds, newest first, keeping `limit` entries.
pub fn merge_history(
    bans: Vec<Punishment>,
    mutes: Vec<Punishment>,
    limit: usize,
) -> Vec<Punishment> {
    let mut history: Vec<Punishment> = bans.into_iter().chain(mutes).collect();
    history.sort_by(|a, b| b.time.cmp(&a.time));
    history.truncate(limit);
    history
}

#[cfg(test)]
mod tests {
    use super::*;

    fn punishment(kind: PunishmentKind, time: i64) -> Punishment {
        Punishment {
            kind,
            target: "069a79f4-44e9-4726-a5be-fca90e38aaf5".to_string(),
            reason: None,
            time,
        }
    }

    #[test]
    fn builds_prefixed_table_names() {
        assert_eq!(PunishmentKind::Ban.table("litebans_"), "litebans_bans");
        assert_eq!(PunishmentKind::Mute.table("lb_"), "lb_mutes");
    }

    #[test]
    fn merges_history_newest_first() {
        let bans = vec![
            punishment(PunishmentKind::Ban, 300),
            punishment(PunishmentKind::Ban, 100),
        ];
        let mutes = vec![
            punishment(PunishmentKind::Mute, 400),
            punishment(PunishmentKind::Mute, 200),
        ];

        let history = merge_history(bans, mutes, 3);

        let times: Vec<_> = history.iter().map(|p| p.time).collect();
        assert_eq!(times, vec![400, 300, 200]);
        assert_eq!(history[0].kind, PunishmentKind::Mute);
    }
}
