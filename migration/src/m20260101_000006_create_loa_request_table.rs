use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoaRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(LoaRequest::Id))
                    .col(string(LoaRequest::DiscordId))
                    .col(integer(LoaRequest::Days))
                    .col(text(LoaRequest::Reason))
                    .col(string(LoaRequest::Status).default("pending"))
                    .col(string_null(LoaRequest::ReviewedBy))
                    .col(
                        timestamp_with_time_zone(LoaRequest::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(LoaRequest::ReviewedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoaRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LoaRequest {
    Table,
    Id,
    DiscordId,
    Days,
    Reason,
    Status,
    ReviewedBy,
    CreatedAt,
    ReviewedAt,
}
