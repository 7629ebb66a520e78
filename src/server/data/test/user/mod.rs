use crate::server::{data::user::UserRepository, error::AppError, model::user::UpsertUserParam};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod find_by_discord_id;
mod upsert;
