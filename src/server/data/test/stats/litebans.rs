use super::*;

/// Tests counting punishments issued by a moderator.
///
/// Verifies that only rows issued by the given moderator are counted per table.
///
/// Expected: Ok with 2 bans and 1 mute
#[tokio::test]
async fn counts_issued_punishments() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    create_plugin_tables(db).await?;

    db.execute_unprepared(
        "INSERT INTO litebans_bans (uuid, reason, banned_by_name, time) VALUES \
         ('a', 'Cheating', 'alice_mc', 1000), \
         ('b', 'Griefing', 'alice_mc', 2000), \
         ('c', 'Spam', 'bob_mc', 3000)",
    )
    .await?;
    db.execute_unprepared(
        "INSERT INTO litebans_mutes (uuid, reason, banned_by_name, time) VALUES \
         ('d', 'Toxicity', 'alice_mc', 1500)",
    )
    .await?;

    let repo = LiteBansRepository::new(db, "litebans_");

    assert_eq!(repo.count_issued(PunishmentKind::Ban, "alice_mc").await?, 2);
    assert_eq!(repo.count_issued(PunishmentKind::Mute, "alice_mc").await?, 1);
    assert_eq!(repo.count_issued(PunishmentKind::Mute, "nobody").await?, 0);

    Ok(())
}

/// Tests reading the most recent punishments.
///
/// Expected: Ok with the newest rows first, limited
#[tokio::test]
async fn returns_recent_punishments_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    create_plugin_tables(db).await?;

    db.execute_unprepared(
        "INSERT INTO litebans_bans (uuid, reason, banned_by_name, time) VALUES \
         ('a', 'Cheating', 'alice_mc', 1000), \
         ('b', NULL, 'alice_mc', 3000), \
         ('c', 'Griefing', 'alice_mc', 2000)",
    )
    .await?;

    let repo = LiteBansRepository::new(db, "litebans_");
    let recent = repo
        .recent_issued(PunishmentKind::Ban, "alice_mc", 2)
        .await?;

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].target, "b");
    assert!(recent[0].reason.is_none());
    assert_eq!(recent[1].time, 2000);
    assert_eq!(recent[1].kind, PunishmentKind::Ban);

    Ok(())
}

/// Tests querying a database without the LiteBans tables.
///
/// Expected: Err from the database
#[tokio::test]
async fn fails_without_tables() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LiteBansRepository::new(db, "litebans_");
    let result = repo.count_issued(PunishmentKind::Ban, "alice_mc").await;

    assert!(result.is_err());

    Ok(())
}
