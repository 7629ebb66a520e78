use crate::server::{
    data::appeal::AppealRepository,
    error::AppError,
    model::{appeal::CreateAppealParam, request::RequestStatus},
};
use chrono::{Duration, Utc};
use test_utils::{
    builder::TestBuilder,
    factory::{action_log::ActionLogFactory, appeal::AppealFactory, create_warning},
};

mod create;
mod get_pending;
mod review;

fn builder() -> TestBuilder {
    TestBuilder::new()
        .with_table(entity::prelude::ActionLog)
        .with_table(entity::prelude::Appeal)
}
