use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        appeal::{AppealDto, CreateAppealDto},
        log::ActionLogDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::request::ReviewDecision,
        service::appeal::AppealService,
        state::AppState,
    },
};

use super::post_review_log;

/// Tag for grouping appeal endpoints in OpenAPI documentation
pub static APPEAL_TAG: &str = "appeal";

/// Appeal one of the caller's warnings.
///
/// The same appeal can also be filed from the "Explain" button in the warning DM.
///
/// # Returns
/// - `201 Created` - The pending appeal
/// - `400 Bad Request` - Entry is not a warning, or the text is empty or too long
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - The warning belongs to someone else
/// - `404 Not Found` - No such log entry
/// - `409 Conflict` - The warning was already appealed
#[utoipa::path(
    post,
    path = "/api/appeals",
    tag = APPEAL_TAG,
    request_body = CreateAppealDto,
    responses(
        (status = 201, description = "Appeal filed"),
        (status = 400, description = "Invalid appeal", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Warning belongs to another member", body = ErrorDto),
        (status = 404, description = "Warning not found", body = ErrorDto),
        (status = 409, description = "Warning already appealed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appeal(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAppealDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AppealService::new(&state.db)
        .create(user.discord_id, payload.action_log_id, &payload.text)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Get pending appeals with the warnings they contest, oldest first.
///
/// # Access Control
/// - `Admin` - Only admins can review appeals
#[utoipa::path(
    get,
    path = "/api/appeals",
    tag = APPEAL_TAG,
    responses(
        (status = 200, description = "Pending appeals", body = Vec<AppealDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appeals(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let appeals: Vec<AppealDto> = AppealService::new(&state.db)
        .get_pending()
        .await?
        .into_iter()
        .map(|(appeal, name)| appeal.into_dto(name))
        .collect();

    Ok((StatusCode::OK, Json(appeals)))
}

/// Get the caller's own appeals, newest first.
#[utoipa::path(
    get,
    path = "/api/appeals/mine",
    tag = APPEAL_TAG,
    responses(
        (status = 200, description = "The caller's appeals", body = Vec<AppealDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_appeals(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let appeals: Vec<AppealDto> = AppealService::new(&state.db)
        .get_by_member(user.discord_id)
        .await?
        .into_iter()
        .map(|appeal| appeal.into_dto(None))
        .collect();

    Ok((StatusCode::OK, Json(appeals)))
}

/// Approve a pending appeal, removing the warning's level from the member's count.
#[utoipa::path(
    post,
    path = "/api/appeals/{id}/approve",
    tag = APPEAL_TAG,
    params(
        ("id" = i32, Path, description = "Appeal ID")
    ),
    responses(
        (status = 200, description = "Appeal approved", body = ActionLogDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Appeal not found", body = ErrorDto),
        (status = 409, description = "Appeal was already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_appeal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    review(state, session, id, ReviewDecision::Approve).await
}

/// Reject a pending appeal.
#[utoipa::path(
    post,
    path = "/api/appeals/{id}/reject",
    tag = APPEAL_TAG,
    params(
        ("id" = i32, Path, description = "Appeal ID")
    ),
    responses(
        (status = 200, description = "Appeal rejected", body = ActionLogDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Appeal not found", body = ErrorDto),
        (status = 409, description = "Appeal was already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_appeal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    review(state, session, id, ReviewDecision::Reject).await
}

async fn review(
    state: AppState,
    session: Session,
    id: i32,
    decision: ReviewDecision,
) -> Result<(StatusCode, Json<ActionLogDto>), AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let log = AppealService::new(&state.db)
        .review(id, decision, admin.discord_id)
        .await?;

    post_review_log(&state, &log).await;

    Ok((StatusCode::OK, Json(log.into_dto())))
}
