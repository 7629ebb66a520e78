//! Appeal repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select, SqlErr,
};

use crate::server::{
    error::AppError,
    model::{
        action_log::ActionLog,
        appeal::{Appeal, AppealWithWarning, CreateAppealParam},
        request::RequestStatus,
    },
};

pub struct AppealRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppealRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a pending appeal.
    ///
    /// # Returns
    /// - `Ok(Appeal)` - The stored appeal
    /// - `Err(AppError::Conflict)` - The warning already has an appeal
    pub async fn create(&self, param: CreateAppealParam) -> Result<Appeal, AppError> {
        let entity = entity::appeal::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            action_log_id: ActiveValue::Set(param.action_log_id),
            text: ActiveValue::Set(param.text),
            status: ActiveValue::Set(RequestStatus::Pending.as_str().to_string()),
            reviewed_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            reviewed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict("This warning has already been appealed".to_string())
            }
            _ => err.into(),
        })?;

        Appeal::from_entity(entity)
    }

    /// Finds an appeal together with the warning it contests.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<AppealWithWarning>, AppError> {
        let appeals = self
            .with_warning(entity::prelude::Appeal::find_by_id(id))
            .await?;

        Ok(appeals.into_iter().next())
    }

    /// Whether the warning already has an appeal, whatever its status.
    pub async fn exists_for_action_log(&self, action_log_id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Appeal::find()
            .filter(entity::appeal::Column::ActionLogId.eq(action_log_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Pending appeals, oldest first.
    pub async fn get_pending(&self) -> Result<Vec<AppealWithWarning>, AppError> {
        self.with_warning(
            entity::prelude::Appeal::find()
                .filter(entity::appeal::Column::Status.eq(RequestStatus::Pending.as_str()))
                .order_by_asc(entity::appeal::Column::CreatedAt)
                .order_by_asc(entity::appeal::Column::Id),
        )
        .await
    }

    /// Every appeal filed by a member, newest first.
    pub async fn get_by_member(&self, discord_id: u64) -> Result<Vec<AppealWithWarning>, AppError> {
        self.with_warning(
            entity::prelude::Appeal::find()
                .filter(entity::appeal::Column::DiscordId.eq(discord_id.to_string()))
                .order_by_desc(entity::appeal::Column::CreatedAt)
                .order_by_desc(entity::appeal::Column::Id),
        )
        .await
    }

    pub async fn count_pending(&self) -> Result<u64, AppError> {
        Ok(entity::prelude::Appeal::find()
            .filter(entity::appeal::Column::Status.eq(RequestStatus::Pending.as_str()))
            .count(self.db)
            .await?)
    }

    /// Moves a pending appeal to `status`.
    ///
    /// # Returns
    /// - `Ok(true)` - Appeal was pending and has been updated
    /// - `Ok(false)` - Appeal does not exist or was already reviewed
    pub async fn review(
        &self,
        id: i32,
        status: RequestStatus,
        reviewer_id: u64,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Appeal::update_many()
            .col_expr(entity::appeal::Column::Status, Expr::value(status.as_str()))
            .col_expr(
                entity::appeal::Column::ReviewedBy,
                Expr::value(reviewer_id.to_string()),
            )
            .col_expr(entity::appeal::Column::ReviewedAt, Expr::value(Utc::now()))
            .filter(entity::appeal::Column::Id.eq(id))
            .filter(entity::appeal::Column::Status.eq(RequestStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_warning(
        &self,
        query: Select<entity::prelude::Appeal>,
    ) -> Result<Vec<AppealWithWarning>, AppError> {
        let rows = query
            .find_also_related(entity::prelude::ActionLog)
            .all(self.db)
            .await?;

        let mut appeals = Vec::with_capacity(rows.len());
        for (appeal, warning) in rows {
            // The foreign key cascades, so a missing warning means the row is mid-delete.
            let Some(warning) = warning else {
                continue;
            };

            appeals.push(AppealWithWarning {
                appeal: Appeal::from_entity(appeal)?,
                warning: ActionLog::from_entity(warning)?,
            });
        }

        Ok(appeals)
    }
}
