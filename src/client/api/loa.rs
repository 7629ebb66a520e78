use crate::{
    client::model::error::ApiError,
    model::{
        loa::{LoaRequestDto, LoaToggleDto},
        log::ActionLogDto,
    },
};

use super::helper::{get, parse_response, post, send_request, serialize_json};

/// Files a leave request, or ends the current leave when `active` is false.
pub async fn toggle_loa(payload: LoaToggleDto) -> Result<Option<LoaRequestDto>, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/loa").body(body)).await?;
    parse_response(response).await
}

pub async fn get_loa_requests() -> Result<Vec<LoaRequestDto>, ApiError> {
    let response = send_request(get("/api/loa/requests")).await?;
    parse_response(response).await
}

pub async fn approve_loa_request(id: i32) -> Result<ActionLogDto, ApiError> {
    let url = format!("/api/loa/requests/{}/approve", id);

    let response = send_request(post(&url)).await?;
    parse_response(response).await
}

pub async fn reject_loa_request(id: i32) -> Result<ActionLogDto, ApiError> {
    let url = format!("/api/loa/requests/{}/reject", id);

    let response = send_request(post(&url)).await?;
    parse_response(response).await
}
