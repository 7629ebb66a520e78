use super::*;

/// Tests a withdrawal.
///
/// Verifies that the balance drops, the cooldown timestamp is stamped and the
/// transaction is stored with a negative amount.
///
/// Expected: Ok(Some) with the transaction
#[tokio::test]
async fn withdraws_and_starts_cooldown() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .balance(5000)
        .build()
        .await?;

    let now = Utc::now();
    let repo = WalletRepository::new(db);
    let transaction = repo.apply(withdraw(1, 1500), now).await?.unwrap();

    assert_eq!(transaction.amount, -1500);
    assert_eq!(transaction.kind, "withdraw");

    let wallet = repo.find_by_member(1).await?.unwrap();
    assert_eq!(wallet.balance, 3500);
    assert!(wallet.last_withdraw_at.is_some());
    assert_eq!(wallet.transactions.len(), 1);

    Ok(())
}

/// Tests a withdrawal during the cooldown.
///
/// Verifies that nothing is written when the previous withdrawal was less than a
/// day ago.
///
/// Expected: Err(WalletErr(Cooldown)) with the balance unchanged
#[tokio::test]
async fn rejects_withdraw_during_cooldown() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    StaffMemberFactory::new(db)
        .discord_id(1)
        .balance(5000)
        .last_withdraw_at(now - Duration::hours(2))
        .build()
        .await?;

    let repo = WalletRepository::new(db);
    let result = repo.apply(withdraw(1, 100), now).await;

    assert!(matches!(
        result,
        Err(AppError::WalletErr(WalletError::Cooldown { .. }))
    ));

    let wallet = repo.find_by_member(1).await?.unwrap();
    assert_eq!(wallet.balance, 5000);
    assert!(wallet.transactions.is_empty());

    Ok(())
}

/// Tests withdrawing more than the balance.
///
/// Expected: Err(WalletErr(InsufficientBalance))
#[tokio::test]
async fn rejects_withdraw_above_balance() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .balance(100)
        .build()
        .await?;

    let repo = WalletRepository::new(db);
    let result = repo.apply(withdraw(1, 101), Utc::now()).await;

    assert!(matches!(
        result,
        Err(AppError::WalletErr(WalletError::InsufficientBalance { .. }))
    ));

    Ok(())
}

/// Tests an admin adjustment.
///
/// Verifies that adjustments change the balance without touching the cooldown.
///
/// Expected: Ok(Some) with a positive transaction
#[tokio::test]
async fn adjusts_without_cooldown() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .balance(100)
        .build()
        .await?;

    let repo = WalletRepository::new(db);
    let transaction = repo.apply(adjust(1, 250), Utc::now()).await?.unwrap();

    assert_eq!(transaction.amount, 250);
    assert_eq!(transaction.note.as_deref(), Some("Event reward"));

    let wallet = repo.find_by_member(1).await?.unwrap();
    assert_eq!(wallet.balance, 350);
    assert!(wallet.last_withdraw_at.is_none());

    Ok(())
}

/// Tests a negative adjustment that would overdraw the wallet.
///
/// Expected: Err(WalletErr(InsufficientBalance))
#[tokio::test]
async fn rejects_adjust_below_zero() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .balance(100)
        .build()
        .await?;

    let repo = WalletRepository::new(db);
    let result = repo.apply(adjust(1, -200), Utc::now()).await;

    assert!(matches!(
        result,
        Err(AppError::WalletErr(WalletError::InsufficientBalance { .. }))
    ));

    Ok(())
}

/// Tests a transaction for an unknown member.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_member() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WalletRepository::new(db);
    assert!(repo.apply(adjust(1, 10), Utc::now()).await?.is_none());

    Ok(())
}

/// Tests a credit that would push the balance past the largest storable value.
///
/// Verifies that the adjustment is rejected without touching the balance or
/// writing a transaction row.
///
/// Expected: Err(WalletErr(BalanceOverflow)) with the balance unchanged
#[tokio::test]
async fn rejects_adjust_past_max_balance() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StaffMemberFactory::new(db)
        .discord_id(1)
        .balance(i64::MAX - 10)
        .build()
        .await?;

    let repo = WalletRepository::new(db);
    let result = repo.apply(adjust(1, 100), Utc::now()).await;

    assert!(matches!(
        result,
        Err(AppError::WalletErr(WalletError::BalanceOverflow { .. }))
    ));

    let wallet = repo.find_by_member(1).await?.unwrap();
    assert_eq!(wallet.balance, i64::MAX - 10);
    assert!(wallet.transactions.is_empty());

    let transaction = repo.apply(adjust(1, 10), Utc::now()).await?.unwrap();
    assert_eq!(transaction.amount, 10);
    assert_eq!(repo.find_by_member(1).await?.unwrap().balance, i64::MAX);

    Ok(())
}
