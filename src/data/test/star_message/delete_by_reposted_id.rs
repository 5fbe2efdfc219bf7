use super::*;

/// Tests removing the record that points at a repost.
///
/// Expected: Ok(1) and the record is gone
#[tokio::test]
async fn deletes_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::star_message::StarMessageFactory::new(db)
        .original_id(111)
        .reposted_id(222)
        .build()
        .await?;

    let repo = StarMessageRepository::new(db);
    let deleted = repo.delete_by_reposted_id(222).await?;

    assert_eq!(deleted, 1);
    assert!(repo.get_by_original_id(111).await?.is_none());

    Ok(())
}

/// Tests that deleting twice is a no-op the second time.
///
/// Expected: Ok(1) then Ok(0)
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::star_message::StarMessageFactory::new(db)
        .original_id(111)
        .reposted_id(222)
        .build()
        .await?;

    let repo = StarMessageRepository::new(db);

    assert_eq!(repo.delete_by_reposted_id(222).await?, 1);
    assert_eq!(repo.delete_by_reposted_id(222).await?, 0);

    Ok(())
}

/// Tests that deletion matches the reposted id, not the original id.
///
/// Expected: Ok(0) when passing an original id, records preserved
#[tokio::test]
async fn only_matches_reposted_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::star_message::StarMessageFactory::new(db)
        .original_id(111)
        .reposted_id(222)
        .build()
        .await?;
    factory::create_star_message(db).await?;

    let repo = StarMessageRepository::new(db);
    let deleted = repo.delete_by_reposted_id(111).await?;

    assert_eq!(deleted, 0);
    let count = entity::prelude::StarMessage::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
