use crate::{client::model::error::ApiError, model::updates::UpdateCountsDto};

use super::helper::{get, parse_response, send_request};

pub async fn get_updates() -> Result<UpdateCountsDto, ApiError> {
    let response = send_request(get("/api/updates")).await?;
    parse_response(response).await
}
