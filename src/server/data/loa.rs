//! Leave of absence request repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        loa::{CreateLoaRequestParam, LoaRequest},
        request::RequestStatus,
    },
};

pub struct LoaRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoaRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a new pending request.
    pub async fn create(&self, param: CreateLoaRequestParam) -> Result<LoaRequest, AppError> {
        let entity = entity::loa_request::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            days: ActiveValue::Set(param.days),
            reason: ActiveValue::Set(param.reason),
            status: ActiveValue::Set(RequestStatus::Pending.as_str().to_string()),
            reviewed_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            reviewed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        LoaRequest::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<LoaRequest>, AppError> {
        entity::prelude::LoaRequest::find_by_id(id)
            .one(self.db)
            .await?
            .map(LoaRequest::from_entity)
            .transpose()
    }

    /// The member's pending request, if any.
    pub async fn find_pending_by_member(
        &self,
        discord_id: u64,
    ) -> Result<Option<LoaRequest>, AppError> {
        entity::prelude::LoaRequest::find()
            .filter(entity::loa_request::Column::DiscordId.eq(discord_id.to_string()))
            .filter(entity::loa_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .one(self.db)
            .await?
            .map(LoaRequest::from_entity)
            .transpose()
    }

    /// All pending requests, oldest first.
    pub async fn get_pending(&self) -> Result<Vec<LoaRequest>, AppError> {
        entity::prelude::LoaRequest::find()
            .filter(entity::loa_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .order_by_asc(entity::loa_request::Column::CreatedAt)
            .order_by_asc(entity::loa_request::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(LoaRequest::from_entity)
            .collect()
    }

    pub async fn count_pending(&self) -> Result<u64, AppError> {
        Ok(entity::prelude::LoaRequest::find()
            .filter(entity::loa_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .count(self.db)
            .await?)
    }

    /// Moves a pending request to `status`.
    ///
    /// The update is conditional on the request still being pending, so two admins
    /// reviewing the same request cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(true)` - Request was pending and has been updated
    /// - `Ok(false)` - Request does not exist or was already reviewed
    pub async fn review(
        &self,
        id: i32,
        status: RequestStatus,
        reviewer_id: u64,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::LoaRequest::update_many()
            .col_expr(
                entity::loa_request::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(
                entity::loa_request::Column::ReviewedBy,
                Expr::value(reviewer_id.to_string()),
            )
            .col_expr(
                entity::loa_request::Column::ReviewedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::loa_request::Column::Id.eq(id))
            .filter(entity::loa_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Cancels every pending request of a member.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of requests cancelled
    pub async fn cancel_pending(&self, discord_id: u64) -> Result<u64, AppError> {
        let result = entity::prelude::LoaRequest::update_many()
            .col_expr(
                entity::loa_request::Column::Status,
                Expr::value(RequestStatus::Cancelled.as_str()),
            )
            .filter(entity::loa_request::Column::DiscordId.eq(discord_id.to_string()))
            .filter(entity::loa_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
