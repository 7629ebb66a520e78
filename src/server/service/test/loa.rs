use super::*;
use crate::server::{
    data::{loa::LoaRequestRepository, staff::StaffRepository},
    model::request::{RequestStatus, ReviewDecision},
    service::loa::LoaService,
};
use chrono::{Duration, Utc};
use test_utils::{
    builder::TestBuilder,
    factory::{loa_request::LoaRequestFactory, staff_member::StaffMemberFactory},
};

fn builder() -> TestBuilder {
    TestBuilder::new()
        .with_staff_tables()
        .with_table(entity::prelude::ActionLog)
        .with_table(entity::prelude::LoaRequest)
}

/// Tests filing a request with defaults.
///
/// Expected: Ok(Some) with 7 days and the placeholder reason
#[tokio::test]
async fn toggle_on_files_pending_request() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db).discord_id(1).build().await?;

    let request = LoaService::new(db)
        .toggle(1, true, None, Some("   ".to_string()))
        .await?
        .unwrap();

    assert_eq!(request.days, 7);
    assert_eq!(request.reason, "No reason provided");
    assert_eq!(request.status, RequestStatus::Pending);

    Ok(())
}

/// Tests filing a second request while one is pending.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn toggle_on_twice_conflicts() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db).discord_id(1).build().await?;

    let service = LoaService::new(db);
    service
        .toggle(1, true, Some(3), Some("Exams".to_string()))
        .await?;
    let result = service.toggle(1, true, Some(3), None).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests the allowed duration range.
///
/// Expected: Err(AppError::BadRequest) for 61 days
#[tokio::test]
async fn toggle_on_rejects_long_leave() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db).discord_id(1).build().await?;

    let result = LoaService::new(db).toggle(1, true, Some(61), None).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests ending a leave.
///
/// Verifies that the active leave is cleared and pending requests are cancelled.
///
/// Expected: Ok(None), no leave stored and no pending requests
#[tokio::test]
async fn toggle_off_ends_leave_and_cancels_requests() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .loa(Utc::now() + Duration::days(2), "Holiday")
        .build()
        .await?;
    LoaRequestFactory::new(db).discord_id(1).build().await?;

    let result = LoaService::new(db).toggle(1, false, None, None).await?;

    assert!(result.is_none());
    let member = StaffRepository::new(db).find_by_id(1).await?.unwrap();
    assert!(member.loa_until.is_none());
    assert_eq!(LoaRequestRepository::new(db).count_pending().await?, 0);

    Ok(())
}

/// Tests toggling for someone not on staff.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn toggle_requires_active_staff() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert_not_found(LoaService::new(db).toggle(1, true, None, None).await);

    Ok(())
}

/// Tests approving a request.
///
/// Verifies that the leave starts now for the requested number of days and the review
/// is logged.
///
/// Expected: Ok with loa_until about 5 days ahead and a `loa_approved` log
#[tokio::test]
async fn approve_starts_leave() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db).discord_id(1).build().await?;
    let request = LoaRequestFactory::new(db)
        .discord_id(1)
        .days(5)
        .reason("Moving house")
        .build()
        .await?;

    let log = LoaService::new(db)
        .review(request.id, ReviewDecision::Approve, 900)
        .await?;

    assert_eq!(log.action, "loa_approved");
    assert_eq!(log.detail.as_deref(), Some("5 days"));
    assert_eq!(log.admin_id, 900);

    let member = StaffRepository::new(db).find_by_id(1).await?.unwrap();
    let until = member.loa_until.unwrap();
    assert!(until > Utc::now() + Duration::days(4));
    assert!(until <= Utc::now() + Duration::days(5));
    assert_eq!(member.loa_reason.as_deref(), Some("Moving house"));

    Ok(())
}

/// Tests rejecting a request and reviewing it again.
///
/// Expected: Ok for the rejection, then Err(AppError::Conflict)
#[tokio::test]
async fn second_review_conflicts() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db).discord_id(1).build().await?;
    let request = LoaRequestFactory::new(db).discord_id(1).build().await?;

    let service = LoaService::new(db);
    let log = service
        .review(request.id, ReviewDecision::Reject, 900)
        .await?;
    assert_eq!(log.action, "loa_rejected");

    let again = service
        .review(request.id, ReviewDecision::Approve, 900)
        .await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    let member = StaffRepository::new(db).find_by_id(1).await?.unwrap();
    assert!(member.loa_until.is_none());

    Ok(())
}

/// Tests the pending queue.
///
/// Expected: Ok with the requester's display name attached
#[tokio::test]
async fn pending_queue_includes_names() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .display_name("Alice")
        .build()
        .await?;
    LoaRequestFactory::new(db).discord_id(1).build().await?;
    LoaRequestFactory::new(db).discord_id(2).build().await?;

    let pending = LoaService::new(db).get_pending().await?;

    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].1.as_deref(), Some("Alice"));
    assert_eq!(pending[1].1, None);

    Ok(())
}

/// Tests expiring leaves of absence.
///
/// Expected: Ok(1), only the elapsed leave is cleared
#[tokio::test]
async fn expire_clears_elapsed_leave() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    StaffMemberFactory::new(db)
        .discord_id(1)
        .loa(now - Duration::minutes(1), "Exams")
        .build()
        .await?;
    StaffMemberFactory::new(db)
        .discord_id(2)
        .loa(now + Duration::days(2), "Holiday")
        .build()
        .await?;

    let expired = LoaService::new(db).expire(now).await?;
    assert_eq!(expired, 1);

    let repo = StaffRepository::new(db);
    let returned = repo.find_by_id(1).await?.unwrap();
    assert!(returned.loa_until.is_none());
    assert!(returned.loa_reason.is_none());

    let away = repo.find_by_id(2).await?.unwrap();
    assert_eq!(away.loa_reason.as_deref(), Some("Holiday"));

    Ok(())
}
