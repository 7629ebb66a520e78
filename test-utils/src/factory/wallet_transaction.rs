//! Wallet transaction factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a transaction row without touching the member's balance.
pub async fn create_transaction(
    db: &DatabaseConnection,
    discord_id: u64,
    amount: i64,
    kind: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::wallet_transaction::Model, DbErr> {
    entity::wallet_transaction::ActiveModel {
        discord_id: ActiveValue::Set(discord_id.to_string()),
        amount: ActiveValue::Set(amount),
        kind: ActiveValue::Set(kind.to_string()),
        note: ActiveValue::Set(None),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
