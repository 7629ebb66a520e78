use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};

use crate::server::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client without connecting.
///
/// The returned `Http` client is shared with the API so role edits and messages go
/// through the same rate limiter as the bot.
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready for [`start_bot`] and its HTTP client
/// - `Err(AppError::DiscordErr)` - The client could not be built
pub async fn init_bot(
    config: Arc<Config>,
    db: DatabaseConnection,
) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::DIRECT_MESSAGES;

    let token = config.discord_bot_token.clone();
    let handler = Handler::new(db, config);

    let client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the bot to the gateway. Runs until the connection is shut down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot");

    client.start().await?;

    Ok(())
}
