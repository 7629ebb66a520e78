use sea_orm_migration::{prelude::*, schema::*};

/// Starting wallet balance for every staff member.
const DEFAULT_BALANCE: i64 = 5000;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StaffMember::Table)
                    .if_not_exists()
                    .col(string(StaffMember::DiscordId).primary_key())
                    .col(string(StaffMember::Username))
                    .col(string(StaffMember::DisplayName))
                    .col(string_null(StaffMember::Avatar))
                    .col(boolean(StaffMember::Active).default(true))
                    .col(string_null(StaffMember::MinecraftNick))
                    .col(string_null(StaffMember::BannerUrl))
                    .col(integer(StaffMember::WarnCount).default(0))
                    .col(big_integer(StaffMember::Balance).default(DEFAULT_BALANCE))
                    .col(timestamp_with_time_zone_null(StaffMember::LastWithdrawAt))
                    .col(timestamp_with_time_zone_null(StaffMember::LoaUntil))
                    .col(text_null(StaffMember::LoaReason))
                    .col(
                        timestamp_with_time_zone(StaffMember::SyncedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StaffMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StaffMember {
    Table,
    DiscordId,
    Username,
    DisplayName,
    Avatar,
    Active,
    MinecraftNick,
    BannerUrl,
    WarnCount,
    Balance,
    LastWithdrawAt,
    LoaUntil,
    LoaReason,
    SyncedAt,
}
