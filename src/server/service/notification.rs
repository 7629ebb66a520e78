//! Discord notifications for staff actions.
//!
//! Everything here is best effort: failures are logged and swallowed so a Discord
//! outage never rolls back an action that is already recorded.

use dioxus_logger::tracing;
use serenity::{
    all::{
        ButtonStyle, ChannelId, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter,
        CreateMessage, Timestamp, UserId,
    },
    http::Http,
};

use crate::server::{
    error::AppError,
    model::{
        action_log::{ActionLog, LogAction},
        appeal::{appeal_custom_id, APPEAL_BUTTON_PREFIX},
    },
};

pub struct NotificationService<'a> {
    http: &'a Http,
    log_channel_id: Option<u64>,
    app_url: &'a str,
}

impl<'a> NotificationService<'a> {
    pub fn new(http: &'a Http, log_channel_id: Option<u64>, app_url: &'a str) -> Self {
        Self {
            http,
            log_channel_id,
            app_url,
        }
    }

    /// Posts the log entry to the configured log channel, if any.
    pub async fn post_log(&self, log: &ActionLog, target_name: &str) {
        let Some(channel_id) = self.log_channel_id else {
            return;
        };

        let message = CreateMessage::new().embed(log_embed(log, target_name));

        if let Err(e) = ChannelId::new(channel_id)
            .send_message(self.http, message)
            .await
        {
            tracing::warn!(
                "Failed to post log {} to channel {}: {}",
                log.id,
                channel_id,
                e
            );
        }
    }

    /// Sends the warned member a DM with an "Explain" button opening the appeal modal.
    pub async fn send_warning_dm(&self, warning: &ActionLog) {
        if let Err(e) = self.try_send_warning_dm(warning).await {
            tracing::warn!(
                "Failed to DM warning {} to {}: {}",
                warning.id,
                warning.target_id,
                e
            );
        }
    }

    async fn try_send_warning_dm(&self, warning: &ActionLog) -> Result<(), AppError> {
        let channel = UserId::new(warning.target_id)
            .create_dm_channel(self.http)
            .await?;

        let embed = CreateEmbed::new()
            .title("You have received a warning")
            .description(&warning.reason)
            .colour(LogAction::Warn.colour())
            .field(
                "Level",
                warning.warn_level.unwrap_or(1).to_string(),
                true,
            )
            .footer(CreateEmbedFooter::new(format!(
                "Appeal with the button below or at {}",
                self.app_url
            )));

        let button = CreateButton::new(appeal_custom_id(APPEAL_BUTTON_PREFIX, warning.id))
            .label("Explain")
            .style(ButtonStyle::Primary);

        let message = CreateMessage::new()
            .embed(embed)
            .components(vec![CreateActionRow::Buttons(vec![button])]);

        channel.id.send_message(self.http, message).await?;

        Ok(())
    }
}

/// Log channel embed for an action log entry.
pub fn log_embed(log: &ActionLog, target_name: &str) -> CreateEmbed {
    let action = log.action.parse::<LogAction>().ok();

    let mut embed = CreateEmbed::new()
        .title(action.map(|a| a.title()).unwrap_or("Staff action"))
        .colour(action.map(|a| a.colour()).unwrap_or(0x95a5a6))
        .field("Member", format!("{} (<@{}>)", target_name, log.target_id), true)
        .field("By", format!("<@{}>", log.admin_id), true)
        .field("Reason", &log.reason, false);

    if let Some(detail) = &log.detail {
        embed = embed.field("Detail", detail, false);
    }

    if let Ok(timestamp) = Timestamp::from_unix_timestamp(log.created_at.timestamp()) {
        embed = embed.timestamp(timestamp);
    }

    embed
}
