use std::collections::HashMap;

use crate::server::{config::Config, error::AppError};

mod loa;
mod staff;
mod stats;

const STAFF_ROLE: u64 = 1;
const HELPER: u64 = 10;
const MODERATOR: u64 = 20;
const ADMIN: u64 = 30;

/// Configuration with a three rank ladder and no log channel.
fn test_config() -> Config {
    let vars = HashMap::from([
        ("DATABASE_URL", "sqlite::memory:"),
        ("DISCORD_CLIENT_ID", "client"),
        ("DISCORD_CLIENT_SECRET", "secret"),
        ("DISCORD_REDIRECT_URL", "http://localhost:8080/api/auth/callback"),
        ("DISCORD_BOT_TOKEN", "token"),
        ("DISCORD_GUILD_ID", "1458138848822431770"),
        ("STAFF_ROLE_ID", "1"),
        ("RANK_ROLES", "10:Helper,20:Moderator,30:Admin"),
        ("ADMIN_DISCORD_IDS", "900"),
        ("APP_URL", "http://localhost:8080"),
    ]);

    Config::from_lookup(|name| vars.get(name).map(|value| value.to_string()))
        .expect("test configuration is valid")
}

fn assert_not_found<T: std::fmt::Debug>(result: Result<T, AppError>) {
    assert!(
        matches!(result, Err(AppError::NotFound(_))),
        "Expected NotFound, got {:?}",
        result
    );
}
