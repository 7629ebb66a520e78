//! Staff wallet: balance rules and transaction history.

use chrono::{DateTime, Duration, Utc};

use crate::{
    model::economy::{WalletDto, WalletTransactionDto},
    server::{error::wallet::WalletError, error::AppError, util::parse::parse_u64_from_string},
};

/// Balance credited to newly synced staff members.
pub const STARTING_BALANCE: i64 = 5000;

/// Minimum time between two withdrawals.
pub const WITHDRAW_COOLDOWN_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Withdraw,
    Adjust,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Withdraw => "withdraw",
            Self::Adjust => "adjust",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalletTransaction {
    pub id: i32,
    pub discord_id: u64,
    /// Signed change applied to the balance.
    pub amount: i64,
    pub kind: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WalletTransaction {
    pub fn into_dto(self) -> WalletTransactionDto {
        WalletTransactionDto {
            id: self.id,
            amount: self.amount,
            kind: self.kind,
            note: self.note,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::wallet_transaction::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            discord_id: parse_u64_from_string(&entity.discord_id)?,
            amount: entity.amount,
            kind: entity.kind,
            note: entity.note,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wallet {
    pub balance: i64,
    pub last_withdraw_at: Option<DateTime<Utc>>,
    pub transactions: Vec<WalletTransaction>,
}

impl Wallet {
    pub fn into_dto(self, now: DateTime<Utc>) -> WalletDto {
        WalletDto {
            balance: self.balance,
            last_withdraw: self.last_withdraw_at,
            next_withdraw_at: next_withdraw_at(self.last_withdraw_at, now),
            logs: self
                .transactions
                .into_iter()
                .map(WalletTransaction::into_dto)
                .collect(),
        }
    }
}

/// Parameters for a balance change. The change and its transaction row are written
/// together.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyTransactionParam {
    pub discord_id: u64,
    pub amount: i64,
    pub kind: TransactionKind,
    pub note: Option<String>,
}

/// When the next withdrawal opens, or `None` if one is allowed at `now`.
pub fn next_withdraw_at(
    last_withdraw_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let available_at = last_withdraw_at? + Duration::hours(WITHDRAW_COOLDOWN_HOURS);

    (available_at > now).then_some(available_at)
}

/// Validates a withdrawal against the balance and cooldown.
///
/// # Returns
/// - `Ok(())` - Withdrawal may proceed
/// - `Err(WalletError::NonPositiveAmount)` - Amount is zero or negative
/// - `Err(WalletError::InsufficientBalance)` - Amount exceeds the balance
/// - `Err(WalletError::Cooldown)` - Last withdrawal was less than 24 hours ago
pub fn check_withdraw(
    balance: i64,
    amount: i64,
    last_withdraw_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<(), WalletError> {
    if amount <= 0 {
        return Err(WalletError::NonPositiveAmount);
    }
    if amount > balance {
        return Err(WalletError::InsufficientBalance {
            balance,
            requested: amount,
        });
    }
    if let Some(available_at) = next_withdraw_at(last_withdraw_at, now) {
        return Err(WalletError::Cooldown { available_at });
    }

    Ok(())
}

/// Validates an admin adjustment, which may be negative but never overdraws.
///
/// # Returns
/// - `Ok(i64)` - Balance after the adjustment
/// - `Err(WalletError::NonPositiveAmount)` - Amount is zero
/// - `Err(WalletError::InsufficientBalance)` - Adjustment would leave a negative balance
/// - `Err(WalletError::BalanceOverflow)` - Adjustment exceeds the representable balance
pub fn check_adjust(balance: i64, amount: i64) -> Result<i64, WalletError> {
    if amount == 0 {
        return Err(WalletError::NonPositiveAmount);
    }

    let Some(new_balance) = balance.checked_add(amount) else {
        return Err(if amount > 0 {
            WalletError::BalanceOverflow { balance, amount }
        } else {
            WalletError::InsufficientBalance {
                balance,
                requested: amount.checked_neg().unwrap_or(i64::MAX),
            }
        });
    };
    if new_balance < 0 {
        return Err(WalletError::InsufficientBalance {
            balance,
            requested: amount.checked_neg().unwrap_or(i64::MAX),
        });
    }

    Ok(new_balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_withdrawal_has_no_cooldown() {
        assert_eq!(next_withdraw_at(None, Utc::now()), None);
        assert!(check_withdraw(5000, 100, None, Utc::now()).is_ok());
    }

    #[test]
    fn cooldown_lasts_24_hours() {
        let now = Utc::now();
        let last = now - Duration::hours(23);

        assert_eq!(
            check_withdraw(5000, 100, Some(last), now),
            Err(WalletError::Cooldown {
                available_at: last + Duration::hours(24)
            })
        );

        let last = now - Duration::hours(24);
        assert!(check_withdraw(5000, 100, Some(last), now).is_ok());
    }

    #[test]
    fn rejects_invalid_amounts() {
        let now = Utc::now();

        assert_eq!(
            check_withdraw(5000, 0, None, now),
            Err(WalletError::NonPositiveAmount)
        );
        assert_eq!(
            check_withdraw(5000, -5, None, now),
            Err(WalletError::NonPositiveAmount)
        );
        assert_eq!(
            check_withdraw(50, 51, None, now),
            Err(WalletError::InsufficientBalance {
                balance: 50,
                requested: 51
            })
        );
        assert!(check_withdraw(50, 50, None, now).is_ok());
    }

    #[test]
    fn adjustments_cannot_overdraw() {
        assert!(check_adjust(100, -100).is_ok());
        assert!(check_adjust(100, 250).is_ok());
        assert!(check_adjust(100, -101).is_err());
        assert!(check_adjust(100, 0).is_err());
        assert_eq!(check_adjust(100, -40), Ok(60));
    }

    #[test]
    fn adjustments_at_integer_limits() {
        assert_eq!(
            check_adjust(100, i64::MAX),
            Err(WalletError::BalanceOverflow {
                balance: 100,
                amount: i64::MAX
            })
        );
        assert_eq!(
            check_adjust(100, i64::MIN),
            Err(WalletError::InsufficientBalance {
                balance: 100,
                requested: i64::MAX
            })
        );
        assert_eq!(check_adjust(0, i64::MAX), Ok(i64::MAX));
        assert_eq!(check_adjust(i64::MAX, i64::MIN + 1), Ok(0));
    }
}
