use crate::{
    client::model::error::ApiError,
    model::{
        log::ActionLogDto,
        staff::{StaffActionDto, StaffActionResultDto, StaffDto, UpdateProfileDto},
    },
};

use super::helper::{get, parse_response, post, put, send_request, serialize_json};

pub async fn get_staff() -> Result<Vec<StaffDto>, ApiError> {
    let response = send_request(get("/api/staff")).await?;
    parse_response(response).await
}

pub async fn get_staff_member(id: u64) -> Result<StaffDto, ApiError> {
    let url = format!("/api/staff/{}", id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn update_profile(payload: UpdateProfileDto) -> Result<StaffDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(put("/api/staff/me/profile").body(body)).await?;
    parse_response(response).await
}

pub async fn perform_action(
    id: u64,
    payload: StaffActionDto,
) -> Result<StaffActionResultDto, ApiError> {
    let url = format!("/api/staff/{}/action", id);
    let body = serialize_json(&payload)?;

    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

/// Action history of one member, newest first.
pub async fn get_logs(id: u64) -> Result<Vec<ActionLogDto>, ApiError> {
    let url = format!("/api/logs/{}", id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
