use crate::server::{
    data::stats::{ChecksRepository, LiteBansRepository},
    error::AppError,
    model::stats::PunishmentKind,
};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use test_utils::builder::TestBuilder;

mod checks;
mod litebans;

/// Creates the plugin tables the stats repositories read.
async fn create_plugin_tables(db: &DatabaseConnection) -> Result<(), AppError> {
    for table in ["litebans_bans", "litebans_mutes"] {
        db.execute_unprepared(&format!(
            "CREATE TABLE {table} (id INTEGER PRIMARY KEY, uuid TEXT, reason TEXT, \
             banned_by_name TEXT NOT NULL, time BIGINT NOT NULL)"
        ))
        .await?;
    }

    db.execute_unprepared(
        "CREATE TABLE checks (id INTEGER PRIMARY KEY, moderator TEXT NOT NULL, target TEXT)",
    )
    .await?;
    db.execute_unprepared(
        "CREATE TABLE playtime (nick TEXT PRIMARY KEY, seconds BIGINT NOT NULL)",
    )
    .await?;

    Ok(())
}
