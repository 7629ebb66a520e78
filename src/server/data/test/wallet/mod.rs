use crate::server::{
    data::wallet::WalletRepository,
    error::{wallet::WalletError, AppError},
    model::wallet::{ApplyTransactionParam, TransactionKind},
};
use chrono::{Duration, Utc};
use test_utils::{
    builder::TestBuilder,
    factory::{create_transaction, staff_member::StaffMemberFactory},
};

mod apply;
mod find_by_member;

fn builder() -> TestBuilder {
    TestBuilder::new()
        .with_staff_tables()
        .with_table(entity::prelude::WalletTransaction)
}

fn withdraw(discord_id: u64, amount: i64) -> ApplyTransactionParam {
    ApplyTransactionParam {
        discord_id,
        amount,
        kind: TransactionKind::Withdraw,
        note: None,
    }
}

fn adjust(discord_id: u64, amount: i64) -> ApplyTransactionParam {
    ApplyTransactionParam {
        discord_id,
        amount,
        kind: TransactionKind::Adjust,
        note: Some("Event reward".to_string()),
    }
}
