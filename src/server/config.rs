//! Environment-based application configuration.
//!
//! All settings are read once at startup (after `.env` has been loaded by `dotenvy`).
//! Required variables that are missing abort startup with `ConfigError::MissingEnvVar`,
//! values that fail to parse abort with `ConfigError::InvalidEnvVar`.

use crate::server::{
    error::{config::ConfigError, AppError},
    model::rank::{Rank, RankLadder},
};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_LITEBANS_TABLE_PREFIX: &str = "litebans_";

pub struct Config {
    pub database_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub discord_bot_token: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// The community guild whose staff is managed.
    pub guild_id: u64,
    /// Role marking a guild member as staff.
    pub staff_role_id: u64,
    /// Channel receiving an embed for every staff action.
    pub log_channel_id: Option<u64>,
    pub rank_ladder: RankLadder,
    /// Discord ids allowed to use administrative endpoints.
    pub admin_ids: Vec<u64>,

    pub app_url: String,
    pub cors_origin: Option<String>,

    pub litebans_database_url: Option<String>,
    pub litebans_table_prefix: String,
    pub checks_database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let log_channel_id = match optional("LOG_CHANNEL_ID") {
            Some(value) => Some(parse_id("LOG_CHANNEL_ID", &value)?),
            None => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            guild_id: parse_id("DISCORD_GUILD_ID", &required("DISCORD_GUILD_ID")?)?,
            staff_role_id: parse_id("STAFF_ROLE_ID", &required("STAFF_ROLE_ID")?)?,
            log_channel_id,
            rank_ladder: parse_rank_ladder(&required("RANK_ROLES")?)?,
            admin_ids: parse_id_list("ADMIN_DISCORD_IDS", &required("ADMIN_DISCORD_IDS")?)?,
            app_url: required("APP_URL")?.trim_end_matches('/').to_string(),
            cors_origin: optional("CORS_ORIGIN"),
            litebans_database_url: optional("LITEBANS_DATABASE_URL"),
            litebans_table_prefix: lookup("LITEBANS_TABLE_PREFIX")
                .unwrap_or_else(|| DEFAULT_LITEBANS_TABLE_PREFIX.to_string()),
            checks_database_url: optional("CHECKS_DATABASE_URL"),
        })
    }

    pub fn is_admin(&self, discord_id: u64) -> bool {
        self.admin_ids.contains(&discord_id)
    }
}

fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("'{}' is not a Discord id: {}", value.trim(), e),
        })
}

fn parse_id_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_id(name, entry))
        .collect()
}

/// Parses `RANK_ROLES`: comma separated `role_id[:Name]` entries, lowest rank first.
fn parse_rank_ladder(value: &str) -> Result<RankLadder, ConfigError> {
    let mut ranks = Vec::new();

    for entry in value.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (id, name) = match entry.split_once(':') {
            Some((id, name)) => (id, name.trim().to_string()),
            None => (entry, format!("Rank {}", ranks.len() + 1)),
        };

        ranks.push(Rank {
            role_id: parse_id("RANK_ROLES", id)?,
            name,
        });
    }

    RankLadder::new(ranks).map_err(|e| ConfigError::InvalidEnvVar {
        name: "RANK_ROLES".to_string(),
        reason: e.to_string(),
    })
}
