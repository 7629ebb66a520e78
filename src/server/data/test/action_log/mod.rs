use crate::server::{
    data::action_log::ActionLogRepository,
    error::AppError,
    model::action_log::{CreateActionLogParam, LogAction},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory::action_log::ActionLogFactory};

mod create;
mod get_by_target;
