use crate::server::{
    data::staff::StaffRepository,
    error::AppError,
    model::{
        staff::{SyncStaffMemberParam, UpdateProfileParam},
        wallet::STARTING_BALANCE,
    },
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory::staff_member::StaffMemberFactory};

mod add_warn_count;
mod clear_expired_loa;
mod deactivate;
mod get_active;
mod sync_member;
mod update_profile;

fn sync_param(discord_id: u64, display_name: &str, roles: Vec<u64>) -> SyncStaffMemberParam {
    SyncStaffMemberParam {
        discord_id,
        username: display_name.to_lowercase(),
        display_name: display_name.to_string(),
        avatar: None,
        roles,
    }
}
