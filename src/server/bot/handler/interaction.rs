//! Appeals filed from the warning DM.
//!
//! The "Explain" button on a warning DM carries the warning's log id in its custom id.
//! Pressing it opens a modal with a single paragraph input; submitting the modal files
//! the appeal exactly as the web form does.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{
    ActionRow, ActionRowComponent, ComponentInteraction, Context, CreateActionRow,
    CreateInputText, CreateInteractionResponse, CreateInteractionResponseMessage, CreateModal,
    InputTextStyle, Interaction, ModalInteraction,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::appeal::{
        appeal_custom_id, parse_appeal_custom_id, APPEAL_BUTTON_PREFIX, APPEAL_MODAL_PREFIX,
        APPEAL_TEXT_INPUT, MAX_APPEAL_LENGTH,
    },
    service::appeal::AppealService,
};

pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    ctx: Context,
    interaction: Interaction,
) {
    match interaction {
        Interaction::Component(component) => handle_appeal_button(ctx, component).await,
        Interaction::Modal(modal) => handle_appeal_modal(db, ctx, modal).await,
        _ => {}
    }
}

async fn handle_appeal_button(ctx: Context, component: ComponentInteraction) {
    let Some(action_log_id) =
        parse_appeal_custom_id(APPEAL_BUTTON_PREFIX, &component.data.custom_id)
    else {
        return;
    };

    let input = CreateInputText::new(
        InputTextStyle::Paragraph,
        "Why should this warning be lifted?",
        APPEAL_TEXT_INPUT,
    )
    .min_length(1)
    .max_length(MAX_APPEAL_LENGTH as u16)
    .required(true);

    let modal = CreateModal::new(
        appeal_custom_id(APPEAL_MODAL_PREFIX, action_log_id),
        "Appeal warning",
    )
    .components(vec![CreateActionRow::InputText(input)]);

    if let Err(e) = component
        .create_response(&ctx.http, CreateInteractionResponse::Modal(modal))
        .await
    {
        tracing::warn!(
            "Failed to open appeal modal for {}: {}",
            component.user.id,
            e
        );
    }
}

async fn handle_appeal_modal(db: &DatabaseConnection, ctx: Context, modal: ModalInteraction) {
    let Some(action_log_id) = parse_appeal_custom_id(APPEAL_MODAL_PREFIX, &modal.data.custom_id)
    else {
        return;
    };

    let discord_id = modal.user.id.get();
    let text = submitted_text(&modal.data.components).unwrap_or_default();

    let reply = match AppealService::new(db)
        .create(discord_id, action_log_id, &text)
        .await
    {
        Ok(appeal) => {
            tracing::info!(
                "{} appealed warning {} from Discord (appeal {})",
                discord_id,
                action_log_id,
                appeal.id
            );
            "Your appeal was submitted and will be reviewed by an admin.".to_string()
        }
        Err(e) => appeal_error_reply(e),
    };

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(reply)
            .ephemeral(true),
    );

    if let Err(e) = modal.create_response(&ctx.http, response).await {
        tracing::warn!("Failed to answer appeal modal for {}: {}", discord_id, e);
    }
}

/// Value of the appeal text input among the modal's rows.
fn submitted_text(rows: &[ActionRow]) -> Option<String> {
    rows.iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == APPEAL_TEXT_INPUT => {
                input.value.clone()
            }
            _ => None,
        })
}

/// Message shown to the member when the appeal is refused.
fn appeal_error_reply(error: AppError) -> String {
    match error {
        AppError::BadRequest(msg) | AppError::Conflict(msg) | AppError::NotFound(msg) => msg,
        AppError::AuthErr(AuthError::AccessDenied(..)) => {
            "You can only appeal your own warnings.".to_string()
        }
        e => {
            tracing::error!("Failed to create appeal from Discord: {}", e);
            "Something went wrong, please try again from the dashboard.".to_string()
        }
    }
}
