use crate::{client::model::error::ApiError, model::stats::ModerationStatsDto};

use super::helper::{get, parse_response, send_request};

/// Moderation statistics for a Minecraft nick.
pub async fn get_stats(ign: &str) -> Result<ModerationStatsDto, ApiError> {
    let url = format!("/api/stats/{}", ign);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
