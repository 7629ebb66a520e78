pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_staff_member_table;
mod m20260101_000003_create_staff_member_role_table;
mod m20260101_000004_create_action_log_table;
mod m20260101_000005_create_appeal_table;
mod m20260101_000006_create_loa_request_table;
mod m20260101_000007_create_wallet_transaction_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_staff_member_table::Migration),
            Box::new(m20260101_000003_create_staff_member_role_table::Migration),
            Box::new(m20260101_000004_create_action_log_table::Migration),
            Box::new(m20260101_000005_create_appeal_table::Migration),
            Box::new(m20260101_000006_create_loa_request_table::Migration),
            Box::new(m20260101_000007_create_wallet_transaction_table::Migration),
        ]
    }
}
