use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct WalletTransactionDto {
    pub id: i32,
    pub amount: i64,
    pub kind: String,
    pub note: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[cfg_attr(feature = "server", schema(value_type = i64))]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct WalletDto {
    pub balance: i64,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    #[cfg_attr(feature = "server", schema(value_type = Option<i64>))]
    pub last_withdraw: Option<DateTime<Utc>>,
    /// When the next withdrawal opens, absent if one is allowed now.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    #[cfg_attr(feature = "server", schema(value_type = Option<i64>))]
    pub next_withdraw_at: Option<DateTime<Utc>>,
    pub logs: Vec<WalletTransactionDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct WithdrawDto {
    pub amount: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AdjustBalanceDto {
    pub amount: i64,
    pub reason: String,
}
