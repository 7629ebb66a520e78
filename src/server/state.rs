//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through
//! Axum's state extraction. It holds:
//! - the application database and the optional moderation databases
//! - HTTP clients for OAuth and the Discord REST API
//! - the loaded configuration

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use super::config::Config;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Shared resources for request handlers.
///
/// Every field is cheap to clone: connections are pools, `reqwest::Client` and the
/// Discord client are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Application database (SQLite).
    pub db: DatabaseConnection,

    /// HTTP client for the OAuth code exchange and `/users/@me`.
    ///
    /// Configured without redirects.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Discord REST client shared with the bot, used for role edits, DMs and log embeds.
    pub discord_http: Arc<Http>,

    pub config: Arc<Config>,

    /// LiteBans database, when `LITEBANS_DATABASE_URL` is set and reachable.
    pub litebans: Option<DatabaseConnection>,

    /// Checks/playtime database, when `CHECKS_DATABASE_URL` is set and reachable.
    pub checks: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_http: Arc<Http>,
        config: Arc<Config>,
        litebans: Option<DatabaseConnection>,
        checks: Option<DatabaseConnection>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_http,
            config,
            litebans,
            checks,
        }
    }
}
