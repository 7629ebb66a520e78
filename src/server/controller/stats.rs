use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, stats::ModerationStatsDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::stats::StatsService,
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Get moderation statistics for a Minecraft nick.
///
/// Sources that are not configured or fail to answer read as zero.
#[utoipa::path(
    get,
    path = "/api/stats/{ign}",
    tag = STATS_TAG,
    params(
        ("ign" = String, Path, description = "Minecraft nick of the moderator")
    ),
    responses(
        (status = 200, description = "Moderation statistics", body = ModerationStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
    Path(ign): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = StatsService::new(
        state.litebans.as_ref(),
        &state.config.litebans_table_prefix,
        state.checks.as_ref(),
    );
    let stats = service.get(ign.trim()).await;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
