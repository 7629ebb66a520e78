//! Moderation statistics from the external plugin databases.
//!
//! Either database may be unconfigured or unreachable; its numbers then read as zero
//! and the failure is logged, so the stats card always renders.

use std::future::Future;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::stats::{ChecksRepository, LiteBansRepository},
    error::AppError,
    model::stats::{merge_history, ModerationStats, PunishmentKind, HISTORY_LIMIT},
};

pub struct StatsService<'a> {
    litebans: Option<&'a DatabaseConnection>,
    litebans_prefix: &'a str,
    checks: Option<&'a DatabaseConnection>,
}

impl<'a> StatsService<'a> {
    pub fn new(
        litebans: Option<&'a DatabaseConnection>,
        litebans_prefix: &'a str,
        checks: Option<&'a DatabaseConnection>,
    ) -> Self {
        Self {
            litebans,
            litebans_prefix,
            checks,
        }
    }

    /// Aggregated statistics for the moderator playing as `ign`.
    pub async fn get(&self, ign: &str) -> ModerationStats {
        let mut stats = ModerationStats::default();

        if let Some(db) = self.litebans {
            let repo = LiteBansRepository::new(db, self.litebans_prefix);

            stats.bans = or_zero("ban count", repo.count_issued(PunishmentKind::Ban, ign)).await;
            stats.mutes =
                or_zero("mute count", repo.count_issued(PunishmentKind::Mute, ign)).await;

            let bans = or_zero(
                "ban history",
                repo.recent_issued(PunishmentKind::Ban, ign, HISTORY_LIMIT),
            )
            .await;
            let mutes = or_zero(
                "mute history",
                repo.recent_issued(PunishmentKind::Mute, ign, HISTORY_LIMIT),
            )
            .await;
            stats.history = merge_history(bans, mutes, HISTORY_LIMIT as usize);
        }

        if let Some(db) = self.checks {
            let repo = ChecksRepository::new(db);

            stats.checks = or_zero("check count", repo.count_checks(ign)).await;
            stats.playtime_seconds = or_zero("playtime", repo.playtime_seconds(ign)).await;
        }

        stats
    }
}

async fn or_zero<T, F>(what: &str, query: F) -> T
where
    T: Default,
    F: Future<Output = Result<T, AppError>>,
{
    match query.await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to read {} from moderation database: {}", what, e);
            T::default()
        }
    }
}
