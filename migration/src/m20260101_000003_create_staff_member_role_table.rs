use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_staff_member_table::StaffMember;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StaffMemberRole::Table)
                    .if_not_exists()
                    .col(string(StaffMemberRole::DiscordId))
                    .col(string(StaffMemberRole::RoleId))
                    .primary_key(
                        Index::create()
                            .col(StaffMemberRole::DiscordId)
                            .col(StaffMemberRole::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_member_role_discord_id")
                            .from(StaffMemberRole::Table, StaffMemberRole::DiscordId)
                            .to(StaffMember::Table, StaffMember::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StaffMemberRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StaffMemberRole {
    Table,
    DiscordId,
    RoleId,
}
