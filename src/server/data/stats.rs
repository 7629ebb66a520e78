//! Read-only access to the external moderation databases.
//!
//! These databases belong to the Minecraft server plugins (LiteBans and the checks /
//! playtime plugin), so there are no entities for them. Queries are built with
//! `sea_query` against the plugin table layouts and mapped with `FromQueryResult`.

use sea_orm::{
    sea_query::{Alias, Asterisk, Expr, ExprTrait, Func, Order, Query, SelectStatement},
    ConnectionTrait, DatabaseConnection, FromQueryResult,
};

use crate::server::{
    error::AppError,
    model::stats::{Punishment, PunishmentKind},
};

#[derive(Debug, FromQueryResult)]
struct CountRow {
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct PunishmentRow {
    uuid: Option<String>,
    reason: Option<String>,
    time: i64,
}

#[derive(Debug, FromQueryResult)]
struct PlaytimeRow {
    seconds: i64,
}

/// LiteBans ban and mute tables.
pub struct LiteBansRepository<'a> {
    db: &'a DatabaseConnection,
    table_prefix: &'a str,
}

impl<'a> LiteBansRepository<'a> {
    /// # Arguments
    /// - `db` - Connection to the LiteBans database
    /// - `table_prefix` - LiteBans table prefix, `litebans_` by default
    pub fn new(db: &'a DatabaseConnection, table_prefix: &'a str) -> Self {
        Self { db, table_prefix }
    }

    /// Number of punishments of `kind` issued by the moderator `ign`.
    pub async fn count_issued(&self, kind: PunishmentKind, ign: &str) -> Result<u64, AppError> {
        let query = Query::select()
            .expr_as(Func::count(Expr::col(Asterisk)), Alias::new("count"))
            .from(Alias::new(kind.table(self.table_prefix)))
            .and_where(Expr::col(Alias::new("banned_by_name")).eq(ign))
            .to_owned();

        count(self.db, &query).await
    }

    /// The most recent punishments of `kind` issued by `ign`, newest first.
    pub async fn recent_issued(
        &self,
        kind: PunishmentKind,
        ign: &str,
        limit: u64,
    ) -> Result<Vec<Punishment>, AppError> {
        let query = Query::select()
            .columns([Alias::new("uuid"), Alias::new("reason"), Alias::new("time")])
            .from(Alias::new(kind.table(self.table_prefix)))
            .and_where(Expr::col(Alias::new("banned_by_name")).eq(ign))
            .order_by(Alias::new("time"), Order::Desc)
            .limit(limit)
            .to_owned();

        let rows = PunishmentRow::find_by_statement(self.db.get_database_backend().build(&query))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Punishment {
                kind,
                target: row.uuid.unwrap_or_default(),
                reason: row.reason,
                time: row.time,
            })
            .collect())
    }
}

/// Checks and playtime tables.
pub struct ChecksRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChecksRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Number of player checks performed by the moderator `ign`.
    pub async fn count_checks(&self, ign: &str) -> Result<u64, AppError> {
        let query = Query::select()
            .expr_as(Func::count(Expr::col(Asterisk)), Alias::new("count"))
            .from(Alias::new("checks"))
            .and_where(Expr::col(Alias::new("moderator")).eq(ign))
            .to_owned();

        count(self.db, &query).await
    }

    /// Recorded playtime of `ign` in seconds, zero when the player is unknown.
    pub async fn playtime_seconds(&self, ign: &str) -> Result<u64, AppError> {
        let query = Query::select()
            .column(Alias::new("seconds"))
            .from(Alias::new("playtime"))
            .and_where(Expr::col(Alias::new("nick")).eq(ign))
            .limit(1)
            .to_owned();

        let row = PlaytimeRow::find_by_statement(self.db.get_database_backend().build(&query))
            .one(self.db)
            .await?;

        Ok(row.map(|row| Ord::max(row.seconds, 0) as u64).unwrap_or(0))
    }
}

async fn count(db: &DatabaseConnection, query: &SelectStatement) -> Result<u64, AppError> {
    let row = CountRow::find_by_statement(db.get_database_backend().build(query))
        .one(db)
        .await?;

    Ok(row.map(|row| Ord::max(row.count, 0) as u64).unwrap_or(0))
}
