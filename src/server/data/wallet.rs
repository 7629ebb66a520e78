//! Wallet repository.
//!
//! Balance changes and their transaction rows are written in a single database
//! transaction, and the balance is re-read inside it so concurrent withdrawals cannot
//! overdraw.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::wallet::{
        check_adjust, check_withdraw, ApplyTransactionParam, TransactionKind, Wallet,
        WalletTransaction,
    },
};

pub struct WalletRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WalletRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a member's wallet with transactions, newest first.
    ///
    /// # Returns
    /// - `Ok(Some(Wallet))` - Member exists
    /// - `Ok(None)` - No roster entry for `discord_id`
    pub async fn find_by_member(&self, discord_id: u64) -> Result<Option<Wallet>, AppError> {
        let Some(member) = entity::prelude::StaffMember::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let transactions = entity::prelude::WalletTransaction::find()
            .filter(entity::wallet_transaction::Column::DiscordId.eq(discord_id.to_string()))
            .order_by_desc(entity::wallet_transaction::Column::CreatedAt)
            .order_by_desc(entity::wallet_transaction::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(WalletTransaction::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Wallet {
            balance: member.balance,
            last_withdraw_at: member.last_withdraw_at,
            transactions,
        }))
    }

    /// Applies a balance change and records it.
    ///
    /// Withdrawals (`amount` is the positive sum to take out) are checked against the
    /// balance and the 24 hour cooldown and stamp `last_withdraw_at`. Adjustments are
    /// signed and may not overdraw.
    ///
    /// # Returns
    /// - `Ok(Some(WalletTransaction))` - The recorded transaction
    /// - `Ok(None)` - No roster entry for the member
    /// - `Err(AppError::WalletErr)` - The change violates a wallet rule
    pub async fn apply(
        &self,
        param: ApplyTransactionParam,
        now: DateTime<Utc>,
    ) -> Result<Option<WalletTransaction>, AppError> {
        let txn = self.db.begin().await?;

        let Some(member) = entity::prelude::StaffMember::find_by_id(param.discord_id.to_string())
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let (delta, new_balance) = match param.kind {
            TransactionKind::Withdraw => {
                check_withdraw(member.balance, param.amount, member.last_withdraw_at, now)?;
                (-param.amount, member.balance - param.amount)
            }
            TransactionKind::Adjust => {
                let new_balance = check_adjust(member.balance, param.amount)?;
                (param.amount, new_balance)
            }
        };

        let mut update = entity::prelude::StaffMember::update_many()
            .col_expr(entity::staff_member::Column::Balance, Expr::value(new_balance))
            .filter(entity::staff_member::Column::DiscordId.eq(param.discord_id.to_string()));
        if param.kind == TransactionKind::Withdraw {
            update = update.col_expr(
                entity::staff_member::Column::LastWithdrawAt,
                Expr::value(now),
            );
        }
        update.exec(&txn).await?;

        let transaction = entity::wallet_transaction::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            amount: ActiveValue::Set(delta),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            note: ActiveValue::Set(param.note),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        WalletTransaction::from_entity(transaction).map(Some)
    }
}
