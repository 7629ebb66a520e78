use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActionLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ActionLog::Id))
                    .col(string(ActionLog::TargetId))
                    .col(string(ActionLog::AdminId))
                    .col(string(ActionLog::Action))
                    .col(text(ActionLog::Reason))
                    .col(string_null(ActionLog::Detail))
                    .col(integer_null(ActionLog::WarnLevel))
                    .col(
                        timestamp_with_time_zone(ActionLog::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_action_log_target_id")
                    .table(ActionLog::Table)
                    .col(ActionLog::TargetId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActionLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActionLog {
    Table,
    Id,
    TargetId,
    AdminId,
    Action,
    Reason,
    Detail,
    WarnLevel,
    CreatedAt,
}
