//! Appeals against warnings.
//!
//! A warned member explains themselves once per warning, from the dashboard or from
//! the DM the bot sent with the warning. Approving an appeal takes the warning's level
//! back off the member's warning count.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{action_log::ActionLogRepository, appeal::AppealRepository, staff::StaffRepository},
    error::{auth::AuthError, AppError},
    model::{
        action_log::{ActionLog, CreateActionLogParam, LogAction},
        appeal::{normalize_appeal_text, Appeal, AppealWithWarning, CreateAppealParam},
        request::{RequestStatus, ReviewDecision},
    },
};

pub struct AppealService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppealService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files an appeal against a warning.
    ///
    /// # Returns
    /// - `Ok(Appeal)` - The pending appeal
    /// - `Err(AppError::NotFound)` - No log entry with `action_log_id`
    /// - `Err(AuthError::AccessDenied)` - Caller is not the warned member
    /// - `Err(AppError::BadRequest)` - Entry is not a warning, or the text is invalid
    /// - `Err(AppError::Conflict)` - The warning was already appealed
    pub async fn create(
        &self,
        discord_id: u64,
        action_log_id: i32,
        text: &str,
    ) -> Result<Appeal, AppError> {
        let appeal_repo = AppealRepository::new(self.db);

        let warning = ActionLogRepository::new(self.db)
            .find_by_id(action_log_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Log entry {} not found", action_log_id)))?;

        if warning.target_id != discord_id {
            return Err(AuthError::AccessDenied(
                discord_id,
                format!("attempted to appeal log entry {} of another member", warning.id),
            )
            .into());
        }
        if !warning.is_warning() {
            return Err(AppError::BadRequest(
                "Only warnings can be appealed".to_string(),
            ));
        }

        let text = normalize_appeal_text(text)?;

        if appeal_repo.exists_for_action_log(action_log_id).await? {
            return Err(AppError::Conflict(
                "This warning has already been appealed".to_string(),
            ));
        }

        appeal_repo
            .create(CreateAppealParam {
                discord_id,
                action_log_id,
                text,
            })
            .await
    }

    /// Pending appeals, oldest first, with the appellant's roster name.
    pub async fn get_pending(&self) -> Result<Vec<(AppealWithWarning, Option<String>)>, AppError> {
        let appeals = AppealRepository::new(self.db).get_pending().await?;
        let names = StaffRepository::new(self.db).get_display_names().await?;

        Ok(appeals
            .into_iter()
            .map(|appeal| {
                let name = names.get(&appeal.appeal.discord_id).cloned();
                (appeal, name)
            })
            .collect())
    }

    /// Every appeal filed by a member, newest first.
    pub async fn get_by_member(&self, discord_id: u64) -> Result<Vec<AppealWithWarning>, AppError> {
        AppealRepository::new(self.db).get_by_member(discord_id).await
    }

    /// Approves or rejects a pending appeal.
    ///
    /// # Returns
    /// - `Ok(ActionLog)` - The review's log entry
    /// - `Err(AppError::NotFound)` - No appeal with `id`
    /// - `Err(AppError::Conflict)` - Appeal was already reviewed
    pub async fn review(
        &self,
        id: i32,
        decision: ReviewDecision,
        reviewer_id: u64,
    ) -> Result<ActionLog, AppError> {
        let appeal_repo = AppealRepository::new(self.db);
        let staff_repo = StaffRepository::new(self.db);

        let AppealWithWarning { appeal, warning } = appeal_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appeal {} not found", id)))?;

        if appeal.status != RequestStatus::Pending
            || !appeal_repo.review(id, decision.status(), reviewer_id).await?
        {
            return Err(AppError::Conflict(format!(
                "Appeal {} has already been reviewed",
                id
            )));
        }

        let action = match decision {
            ReviewDecision::Approve => {
                let level = warning.warn_level.unwrap_or(1);
                staff_repo.add_warn_count(appeal.discord_id, -level).await?;
                LogAction::AppealApproved
            }
            ReviewDecision::Reject => LogAction::AppealRejected,
        };

        ActionLogRepository::new(self.db)
            .create(CreateActionLogParam {
                target_id: appeal.discord_id,
                admin_id: reviewer_id,
                action,
                reason: warning.reason,
                detail: Some(format!("Appeal of log #{}", warning.id)),
                warn_level: None,
            })
            .await
    }
}
