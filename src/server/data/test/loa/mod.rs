use crate::server::{
    data::loa::LoaRequestRepository,
    error::AppError,
    model::{loa::CreateLoaRequestParam, request::RequestStatus},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory::loa_request::LoaRequestFactory};

mod create;
mod get_pending;
mod review;
