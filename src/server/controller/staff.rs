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
        log::ActionLogDto,
        staff::{StaffActionDto, StaffActionResultDto, StaffDto, UpdateProfileDto},
    },
    server::{
        data::action_log::ActionLogRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{action::StaffActionParam, staff::UpdateProfileParam},
        service::{action::StaffActionService, staff::StaffService},
        state::AppState,
    },
};

/// Tag for grouping roster endpoints in OpenAPI documentation
pub static STAFF_TAG: &str = "staff";

/// Get the staff roster.
///
/// Returns every active staff member sorted by rank weight (highest first), then by
/// display name. The caller's own entry is flagged with `is_current_user`.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `200 OK` - Roster entries
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/staff",
    tag = STAFF_TAG,
    responses(
        (status = 200, description = "Successfully retrieved the roster", body = Vec<StaffDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_staff(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let ladder = &state.config.rank_ladder;
    let roster = StaffService::new(&state.db).get_roster(ladder).await?;

    let roster: Vec<StaffDto> = roster
        .into_iter()
        .map(|member| member.into_dto(ladder, user.discord_id))
        .collect();

    Ok((StatusCode::OK, Json(roster)))
}

/// Get a single roster entry.
///
/// # Returns
/// - `200 OK` - The entry
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No active staff member with this id
#[utoipa::path(
    get,
    path = "/api/staff/{id}",
    tag = STAFF_TAG,
    params(
        ("id" = u64, Path, description = "Discord user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the member", body = StaffDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_staff_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let member = StaffService::new(&state.db).get_member(id).await?;

    Ok((
        StatusCode::OK,
        Json(member.into_dto(&state.config.rank_ladder, user.discord_id)),
    ))
}

/// Update the caller's own profile.
///
/// Blank fields clear the stored value.
///
/// # Returns
/// - `200 OK` - The updated entry
/// - `400 Bad Request` - Invalid Minecraft nick or banner URL
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Caller is not on staff
#[utoipa::path(
    put,
    path = "/api/staff/me/profile",
    tag = STAFF_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Successfully updated the profile", body = StaffDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Caller is not on staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = UpdateProfileParam::from_dto(payload)?;
    let member = StaffService::new(&state.db)
        .update_profile(user.discord_id, param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(member.into_dto(&state.config.rank_ladder, user.discord_id)),
    ))
}

/// Promote, demote, warn or kick a staff member.
///
/// Role changes are applied on Discord first; the action is only recorded once they
/// succeed. The log embed and the warning DM are sent best effort.
///
/// # Access Control
/// - `Admin` - Only admins can act on staff
///
/// # Returns
/// - `200 OK` - The log entry and the refreshed member (`null` after a kick)
/// - `400 Bad Request` - Self-targeted action, invalid warn level or rank change
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - Target is not on staff
/// - `500 Internal Server Error` - Database or Discord error
#[utoipa::path(
    post,
    path = "/api/staff/{id}/action",
    tag = STAFF_TAG,
    params(
        ("id" = u64, Path, description = "Discord user ID of the target")
    ),
    request_body = StaffActionDto,
    responses(
        (status = 200, description = "Action applied", body = StaffActionResultDto),
        (status = 400, description = "Action is not valid for this member", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn perform_action(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<u64>,
    Json(payload): Json<StaffActionDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = StaffActionService::new(&state.db, &state.discord_http, &state.config);

    let param = StaffActionParam::from_dto(id, admin.discord_id, payload);
    let (log, member) = service.execute(param).await?;

    let ladder = &state.config.rank_ladder;
    Ok((
        StatusCode::OK,
        Json(StaffActionResultDto {
            log: log.into_dto(),
            member: member.map(|member| member.into_dto(ladder, admin.discord_id)),
        }),
    ))
}

/// Get the action log of a member, newest first.
#[utoipa::path(
    get,
    path = "/api/logs/{id}",
    tag = STAFF_TAG,
    params(
        ("id" = u64, Path, description = "Discord user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the log", body = Vec<ActionLogDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_logs(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let logs: Vec<ActionLogDto> = ActionLogRepository::new(&state.db)
        .get_by_target(id)
        .await?
        .into_iter()
        .map(|log| log.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(logs)))
}
