//! Discord bot integration.
//!
//! The bot keeps the staff roster in sync with the guild and turns the "Explain" button
//! on warning DMs into appeals. It is initialized during server startup and runs in its
//! own tokio task; its HTTP client is shared with the API for role edits, DMs and log
//! embeds.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability, triggers the full roster sync
//! - `GUILD_MEMBERS` - Member updates and removals (privileged intent)
//! - `DIRECT_MESSAGES` - Interactions on the warning DMs
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
