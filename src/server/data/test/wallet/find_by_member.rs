use super::*;

/// Tests reading a wallet with history.
///
/// Expected: Ok(Some) with balance and transactions newest first
#[tokio::test]
async fn returns_balance_and_history() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    StaffMemberFactory::new(db)
        .discord_id(1)
        .balance(4000)
        .build()
        .await?;
    create_transaction(db, 1, -500, "withdraw", now - Duration::days(3)).await?;
    create_transaction(db, 1, -500, "withdraw", now - Duration::days(1)).await?;
    create_transaction(db, 2, 100, "adjust", now).await?;

    let repo = WalletRepository::new(db);
    let wallet = repo.find_by_member(1).await?.unwrap();

    assert_eq!(wallet.balance, 4000);
    assert_eq!(wallet.transactions.len(), 2);
    assert!(wallet.transactions[0].created_at > wallet.transactions[1].created_at);

    Ok(())
}

/// Tests reading the wallet of an unknown member.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_member() -> Result<(), AppError> {
    let test = builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WalletRepository::new(db);
    assert!(repo.find_by_member(1).await?.is_none());

    Ok(())
}
