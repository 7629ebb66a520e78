use crate::{
    client::model::error::ApiError,
    model::economy::{AdjustBalanceDto, WalletDto, WithdrawDto},
};

use super::helper::{get, parse_response, post, send_request, serialize_json};

pub async fn get_wallet(id: u64) -> Result<WalletDto, ApiError> {
    let url = format!("/api/economy/history/{}", id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Withdraws from the caller's own wallet. Answers 429 while the cooldown runs.
pub async fn withdraw(amount: i64) -> Result<WalletDto, ApiError> {
    let body = serialize_json(&WithdrawDto { amount })?;

    let response = send_request(post("/api/economy/withdraw").body(body)).await?;
    parse_response(response).await
}

pub async fn adjust_balance(id: u64, payload: AdjustBalanceDto) -> Result<WalletDto, ApiError> {
    let url = format!("/api/economy/{}/adjust", id);
    let body = serialize_json(&payload)?;

    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}
