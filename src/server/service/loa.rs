//! Leave of absence workflow.
//!
//! Staff file a request from the dashboard; an admin approves or rejects it. Approval
//! starts the leave immediately, the scheduler clears it once it expires.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{action_log::ActionLogRepository, loa::LoaRequestRepository, staff::StaffRepository},
    error::AppError,
    model::{
        action::NO_REASON,
        action_log::{ActionLog, CreateActionLogParam, LogAction},
        loa::{resolve_loa_days, CreateLoaRequestParam, LoaRequest},
        request::{RequestStatus, ReviewDecision},
    },
};

pub struct LoaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts or ends the caller's leave of absence.
    ///
    /// Activating files a pending request; deactivating ends the current leave right
    /// away and withdraws any pending request.
    ///
    /// # Returns
    /// - `Ok(Some(LoaRequest))` - A request was filed
    /// - `Ok(None)` - Leave ended
    /// - `Err(AppError::NotFound)` - Caller is not on staff
    /// - `Err(AppError::Conflict)` - A request is already pending
    /// - `Err(AppError::BadRequest)` - Duration out of range
    pub async fn toggle(
        &self,
        discord_id: u64,
        active: bool,
        days: Option<u32>,
        reason: Option<String>,
    ) -> Result<Option<LoaRequest>, AppError> {
        let staff_repo = StaffRepository::new(self.db);
        let loa_repo = LoaRequestRepository::new(self.db);

        if staff_repo.find_active_by_id(discord_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Staff member {} not found",
                discord_id
            )));
        }

        if !active {
            staff_repo.set_loa(discord_id, None, None).await?;
            let cancelled = loa_repo.cancel_pending(discord_id).await?;
            tracing::debug!(
                "{} ended their leave, {} pending request(s) cancelled",
                discord_id,
                cancelled
            );
            return Ok(None);
        }

        if loa_repo.find_pending_by_member(discord_id).await?.is_some() {
            return Err(AppError::Conflict(
                "A leave of absence request is already pending".to_string(),
            ));
        }

        let days = resolve_loa_days(days)?;
        let reason = reason
            .map(|reason| reason.trim().to_string())
            .filter(|reason| !reason.is_empty())
            .unwrap_or_else(|| NO_REASON.to_string());

        let request = loa_repo
            .create(CreateLoaRequestParam {
                discord_id,
                days,
                reason,
            })
            .await?;

        Ok(Some(request))
    }

    /// Pending requests, oldest first, with the requester's roster name.
    pub async fn get_pending(&self) -> Result<Vec<(LoaRequest, Option<String>)>, AppError> {
        let requests = LoaRequestRepository::new(self.db).get_pending().await?;
        let names = StaffRepository::new(self.db).get_display_names().await?;

        Ok(with_names(requests, &names))
    }

    /// Approves or rejects a pending request.
    ///
    /// # Returns
    /// - `Ok(ActionLog)` - The review's log entry
    /// - `Err(AppError::NotFound)` - No request with `id`
    /// - `Err(AppError::Conflict)` - Request was already reviewed or cancelled
    pub async fn review(
        &self,
        id: i32,
        decision: ReviewDecision,
        reviewer_id: u64,
    ) -> Result<ActionLog, AppError> {
        let loa_repo = LoaRequestRepository::new(self.db);

        let request = loa_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("LOA request {} not found", id)))?;

        if request.status != RequestStatus::Pending
            || !loa_repo.review(id, decision.status(), reviewer_id).await?
        {
            return Err(AppError::Conflict(format!(
                "LOA request {} has already been reviewed",
                id
            )));
        }

        let action = match decision {
            ReviewDecision::Approve => {
                let until = Utc::now() + Duration::days(request.days as i64);
                StaffRepository::new(self.db)
                    .set_loa(request.discord_id, Some(until), Some(request.reason.clone()))
                    .await?;
                LogAction::LoaApproved
            }
            ReviewDecision::Reject => LogAction::LoaRejected,
        };

        ActionLogRepository::new(self.db)
            .create(CreateActionLogParam {
                target_id: request.discord_id,
                admin_id: reviewer_id,
                action,
                reason: request.reason,
                detail: Some(format!("{} days", request.days)),
                warn_level: None,
            })
            .await
    }

    /// Ends every leave whose end date has passed.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of members returned from leave
    pub async fn expire(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let expired = StaffRepository::new(self.db).clear_expired_loa(now).await?;

        if expired > 0 {
            tracing::info!("{} leaves of absence expired", expired);
        }

        Ok(expired)
    }
}

fn with_names(
    requests: Vec<LoaRequest>,
    names: &HashMap<u64, String>,
) -> Vec<(LoaRequest, Option<String>)> {
    requests
        .into_iter()
        .map(|request| {
            let name = names.get(&request.discord_id).cloned();
            (request, name)
        })
        .collect()
}
