use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        economy::{AdjustBalanceDto, WalletDto, WithdrawDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::wallet::WalletService,
        state::AppState,
    },
};

/// Tag for grouping wallet endpoints in OpenAPI documentation
pub static ECONOMY_TAG: &str = "economy";

/// Get a member's balance and transaction history.
///
/// # Access Control
/// - `SelfOrAdmin` - Members see their own wallet, admins see every wallet
///
/// # Returns
/// - `200 OK` - Balance, withdrawal cooldown and transactions (newest first)
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Another member's wallet
/// - `404 Not Found` - No roster entry for this id
#[utoipa::path(
    get,
    path = "/api/economy/history/{id}",
    tag = ECONOMY_TAG,
    params(
        ("id" = u64, Path, description = "Discord user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the wallet", body = WalletDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Wallet belongs to another member", body = ErrorDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_wallet(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrAdmin(id)])
        .await?;

    let wallet = WalletService::new(&state.db).history(id).await?;

    Ok((StatusCode::OK, Json(wallet.into_dto(Utc::now()))))
}

/// Withdraw from the caller's own balance.
///
/// Allowed once every 24 hours; the amount must be positive and covered by the balance.
#[utoipa::path(
    post,
    path = "/api/economy/withdraw",
    tag = ECONOMY_TAG,
    request_body = WithdrawDto,
    responses(
        (status = 200, description = "Withdrawal recorded", body = WalletDto),
        (status = 400, description = "Invalid amount or insufficient balance", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Caller is not on staff", body = ErrorDto),
        (status = 429, description = "Withdrawal cooldown active", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn withdraw(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<WithdrawDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let wallet = WalletService::new(&state.db)
        .withdraw(user.discord_id, payload.amount)
        .await?;

    Ok((StatusCode::OK, Json(wallet.into_dto(Utc::now()))))
}

/// Credit or debit a member's balance.
///
/// # Access Control
/// - `Admin` - Only admins can adjust balances
///
/// # Returns
/// - `200 OK` - The member's wallet after the adjustment
/// - `400 Bad Request` - Zero amount, or the balance would become negative
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No roster entry for this id
#[utoipa::path(
    post,
    path = "/api/economy/{id}/adjust",
    tag = ECONOMY_TAG,
    params(
        ("id" = u64, Path, description = "Discord user ID")
    ),
    request_body = AdjustBalanceDto,
    responses(
        (status = 200, description = "Balance adjusted", body = WalletDto),
        (status = 400, description = "Invalid adjustment", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn adjust_balance(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<u64>,
    Json(payload): Json<AdjustBalanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let wallet = WalletService::new(&state.db)
        .adjust(id, admin.discord_id, payload.amount, &payload.reason)
        .await?;

    Ok((StatusCode::OK, Json(wallet.into_dto(Utc::now()))))
}
