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
        loa::{LoaRequestDto, LoaToggleDto},
        log::ActionLogDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::request::ReviewDecision,
        service::loa::LoaService,
        state::AppState,
    },
};

use super::post_review_log;

/// Tag for grouping leave of absence endpoints in OpenAPI documentation
pub static LOA_TAG: &str = "loa";

/// Start or end the caller's leave of absence.
///
/// `active: true` files a pending request for `days` (default 7, at most 60) which an
/// admin must approve. `active: false` ends the current leave and cancels any pending
/// request.
///
/// # Returns
/// - `200 OK` - The filed request, or `null` when the leave was ended
/// - `400 Bad Request` - Duration out of range
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Caller is not on staff
/// - `409 Conflict` - A request is already pending
#[utoipa::path(
    post,
    path = "/api/loa",
    tag = LOA_TAG,
    request_body = LoaToggleDto,
    responses(
        (status = 200, description = "Request filed or leave ended", body = Option<LoaRequestDto>),
        (status = 400, description = "Invalid duration", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Caller is not on staff", body = ErrorDto),
        (status = 409, description = "A request is already pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_loa(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoaToggleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let request = LoaService::new(&state.db)
        .toggle(user.discord_id, payload.active, payload.days, payload.reason)
        .await?
        .map(|request| request.into_dto(Some(user.name)));

    Ok((StatusCode::OK, Json(request)))
}

/// Get pending leave requests, oldest first.
///
/// # Access Control
/// - `Admin` - Only admins can review requests
#[utoipa::path(
    get,
    path = "/api/loa/requests",
    tag = LOA_TAG,
    responses(
        (status = 200, description = "Pending requests", body = Vec<LoaRequestDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_loa_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let requests: Vec<LoaRequestDto> = LoaService::new(&state.db)
        .get_pending()
        .await?
        .into_iter()
        .map(|(request, name)| request.into_dto(name))
        .collect();

    Ok((StatusCode::OK, Json(requests)))
}

/// Approve a pending leave request; the leave starts now.
#[utoipa::path(
    post,
    path = "/api/loa/requests/{id}/approve",
    tag = LOA_TAG,
    params(
        ("id" = i32, Path, description = "LOA request ID")
    ),
    responses(
        (status = 200, description = "Request approved", body = ActionLogDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request was already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_loa_request(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    review(state, session, id, ReviewDecision::Approve).await
}

/// Reject a pending leave request.
#[utoipa::path(
    post,
    path = "/api/loa/requests/{id}/reject",
    tag = LOA_TAG,
    params(
        ("id" = i32, Path, description = "LOA request ID")
    ),
    responses(
        (status = 200, description = "Request rejected", body = ActionLogDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request was already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_loa_request(
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

    let log = LoaService::new(&state.db)
        .review(id, decision, admin.discord_id)
        .await?;

    post_review_log(&state, &log).await;

    Ok((StatusCode::OK, Json(log.into_dto())))
}
