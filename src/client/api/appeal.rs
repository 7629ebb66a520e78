use crate::{
    client::model::error::ApiError,
    model::{
        appeal::{AppealDto, CreateAppealDto},
        log::ActionLogDto,
    },
};

use super::helper::{
    get, parse_empty_response, parse_response, post, send_request, serialize_json,
};

pub async fn create_appeal(payload: CreateAppealDto) -> Result<(), ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/appeals").body(body)).await?;
    parse_empty_response(response).await
}

pub async fn get_appeals() -> Result<Vec<AppealDto>, ApiError> {
    let response = send_request(get("/api/appeals")).await?;
    parse_response(response).await
}

pub async fn get_my_appeals() -> Result<Vec<AppealDto>, ApiError> {
    let response = send_request(get("/api/appeals/mine")).await?;
    parse_response(response).await
}

pub async fn approve_appeal(id: i32) -> Result<ActionLogDto, ApiError> {
    let url = format!("/api/appeals/{}/approve", id);

    let response = send_request(post(&url)).await?;
    parse_response(response).await
}

pub async fn reject_appeal(id: i32) -> Result<ActionLogDto, ApiError> {
    let url = format!("/api/appeals/{}/reject", id);

    let response = send_request(post(&url)).await?;
    parse_response(response).await
}
