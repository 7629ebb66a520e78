use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000004_create_action_log_table::ActionLog;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appeal::Table)
                    .if_not_exists()
                    .col(pk_auto(Appeal::Id))
                    .col(string(Appeal::DiscordId))
                    .col(integer_uniq(Appeal::ActionLogId))
                    .col(text(Appeal::Text))
                    .col(string(Appeal::Status).default("pending"))
                    .col(string_null(Appeal::ReviewedBy))
                    .col(
                        timestamp_with_time_zone(Appeal::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Appeal::ReviewedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appeal_action_log_id")
                            .from(Appeal::Table, Appeal::ActionLogId)
                            .to(ActionLog::Table, ActionLog::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appeal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appeal {
    Table,
    Id,
    DiscordId,
    ActionLogId,
    Text,
    Status,
    ReviewedBy,
    CreatedAt,
    ReviewedAt,
}
