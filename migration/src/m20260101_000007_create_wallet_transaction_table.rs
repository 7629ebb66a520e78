use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WalletTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(WalletTransaction::Id))
                    .col(string(WalletTransaction::DiscordId))
                    .col(big_integer(WalletTransaction::Amount))
                    .col(string(WalletTransaction::Kind))
                    .col(string_null(WalletTransaction::Note))
                    .col(
                        timestamp_with_time_zone(WalletTransaction::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_wallet_transaction_discord_id")
                    .table(WalletTransaction::Table)
                    .col(WalletTransaction::DiscordId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WalletTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WalletTransaction {
    Table,
    Id,
    DiscordId,
    Amount,
    Kind,
    Note,
    CreatedAt,
}
