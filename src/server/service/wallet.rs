//! Staff wallet service.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{action_log::ActionLogRepository, wallet::WalletRepository},
    error::AppError,
    model::{
        action::NO_REASON,
        action_log::{CreateActionLogParam, LogAction},
        wallet::{ApplyTransactionParam, TransactionKind, Wallet, WalletTransaction},
    },
};

pub struct WalletService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WalletService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(Wallet)` - Balance and transactions, newest first
    /// - `Err(AppError::NotFound)` - No roster entry for `discord_id`
    pub async fn history(&self, discord_id: u64) -> Result<Wallet, AppError> {
        WalletRepository::new(self.db)
            .find_by_member(discord_id)
            .await?
            .ok_or_else(|| not_found(discord_id))
    }

    /// Withdraws `amount` from the caller's own balance.
    ///
    /// # Returns
    /// - `Ok(Wallet)` - The wallet after the withdrawal
    /// - `Err(AppError::WalletErr)` - Invalid amount, insufficient balance or cooldown
    /// - `Err(AppError::NotFound)` - Caller is not on the roster
    pub async fn withdraw(&self, discord_id: u64, amount: i64) -> Result<Wallet, AppError> {
        self.apply(ApplyTransactionParam {
            discord_id,
            amount,
            kind: TransactionKind::Withdraw,
            note: None,
        })
        .await?;

        self.history(discord_id).await
    }

    /// Credits or debits a member's balance on behalf of an admin.
    ///
    /// The change is written to the action log as `adjust`.
    pub async fn adjust(
        &self,
        discord_id: u64,
        admin_id: u64,
        amount: i64,
        reason: &str,
    ) -> Result<Wallet, AppError> {
        let reason = match reason.trim() {
            "" => NO_REASON.to_string(),
            reason => reason.to_string(),
        };

        self.apply(ApplyTransactionParam {
            discord_id,
            amount,
            kind: TransactionKind::Adjust,
            note: Some(reason.clone()),
        })
        .await?;

        ActionLogRepository::new(self.db)
            .create(CreateActionLogParam {
                target_id: discord_id,
                admin_id,
                action: LogAction::Adjust,
                reason,
                detail: Some(format!("{:+}", amount)),
                warn_level: None,
            })
            .await?;

        self.history(discord_id).await
    }

    async fn apply(&self, param: ApplyTransactionParam) -> Result<WalletTransaction, AppError> {
        let discord_id = param.discord_id;

        WalletRepository::new(self.db)
            .apply(param, Utc::now())
            .await?
            .ok_or_else(|| not_found(discord_id))
    }
}

fn not_found(discord_id: u64) -> AppError {
    AppError::NotFound(format!("Staff member {} not found", discord_id))
}
