//! Ready event handler.
//!
//! Fired once per gateway connection after the initial handshake.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

/// Logs the bot user and the number of guilds it was connected to.
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );
}
