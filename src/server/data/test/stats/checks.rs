use super::*;

/// Tests counting checks and reading playtime.
///
/// Expected: Ok with the moderator's check count and playtime
#[tokio::test]
async fn reads_checks_and_playtime() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    create_plugin_tables(db).await?;

    db.execute_unprepared(
        "INSERT INTO checks (moderator, target) VALUES \
         ('alice_mc', 'x'), ('alice_mc', 'y'), ('bob_mc', 'z')",
    )
    .await?;
    db.execute_unprepared("INSERT INTO playtime (nick, seconds) VALUES ('alice_mc', 7200)")
        .await?;

    let repo = ChecksRepository::new(db);

    assert_eq!(repo.count_checks("alice_mc").await?, 2);
    assert_eq!(repo.playtime_seconds("alice_mc").await?, 7200);

    Ok(())
}

/// Tests a player with no recorded activity.
///
/// Expected: Ok with zero checks and zero playtime
#[tokio::test]
async fn returns_zero_for_unknown_player() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    create_plugin_tables(db).await?;

    let repo = ChecksRepository::new(db);

    assert_eq!(repo.count_checks("nobody").await?, 0);
    assert_eq!(repo.playtime_seconds("nobody").await?, 0);

    Ok(())
}
