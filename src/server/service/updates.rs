use sea_orm::DatabaseConnection;

use crate::{
    model::updates::UpdateCountsDto,
    server::{
        data::{action_log::ActionLogRepository, appeal::AppealRepository, loa::LoaRequestRepository},
        error::AppError,
    },
};

pub struct UpdatesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UpdatesService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Current values of the counters the dashboard polls.
    pub async fn counts(&self) -> Result<UpdateCountsDto, AppError> {
        Ok(UpdateCountsDto {
            logs_count: ActionLogRepository::new(self.db).count().await?,
            appeals_count: AppealRepository::new(self.db).count_pending().await?,
            loa_requests_count: LoaRequestRepository::new(self.db).count_pending().await?,
        })
    }
}
