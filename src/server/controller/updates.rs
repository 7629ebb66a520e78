use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, updates::UpdateCountsDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::updates::UpdatesService,
        state::AppState,
    },
};

/// Tag for grouping polling endpoints in OpenAPI documentation
pub static UPDATES_TAG: &str = "updates";

/// Counters polled by the dashboard to detect new log entries and review items.
#[utoipa::path(
    get,
    path = "/api/updates",
    tag = UPDATES_TAG,
    responses(
        (status = 200, description = "Current counters", body = UpdateCountsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_updates(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let counts = UpdatesService::new(&state.db).counts().await?;

    Ok((StatusCode::OK, Json(counts)))
}
