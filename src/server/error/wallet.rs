use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WalletError {
    /// Withdrawals must move a positive amount.
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    /// The wallet does not hold enough to cover the operation.
    #[error("Insufficient balance: {balance} available, {requested} requested")]
    InsufficientBalance { balance: i64, requested: i64 },

    /// A credit would push the balance past the largest storable value.
    #[error("Adjustment of {amount} would exceed the maximum balance from {balance}")]
    BalanceOverflow { balance: i64, amount: i64 },

    /// The 24 hour withdrawal cooldown has not elapsed.
    ///
    /// Results in 429 Too Many Requests.
    #[error("Next withdrawal is available at {}", available_at.to_rfc3339())]
    Cooldown { available_at: DateTime<Utc> },
}

/// Converts wallet errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For invalid amounts, insufficient balance and overflow
/// - 429 Too Many Requests - For withdrawals attempted during the cooldown
impl IntoResponse for WalletError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Cooldown { .. } => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
