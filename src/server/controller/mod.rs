//! HTTP request handlers.
//!
//! Controllers check access with [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert DTOs into service parameters and domain models back into DTOs. Every handler
//! carries a `utoipa::path` annotation and is registered in [`router`](crate::server::router).

use crate::server::{
    data::staff::StaffRepository, model::action_log::ActionLog,
    service::notification::NotificationService, state::AppState,
};

pub mod appeal;
pub mod auth;
pub mod economy;
pub mod loa;
pub mod staff;
pub mod stats;
pub mod updates;

/// Posts a review's log entry to the log channel, best effort.
async fn post_review_log(state: &AppState, log: &ActionLog) {
    let target_name = match StaffRepository::new(&state.db).find_by_id(log.target_id).await {
        Ok(Some(member)) => member.display_name,
        _ => log.target_id.to_string(),
    };

    NotificationService::new(
        &state.discord_http,
        state.config.log_channel_id,
        &state.config.app_url,
    )
    .post_log(log, &target_name)
    .await;
}
