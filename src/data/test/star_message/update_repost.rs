use super::*;

/// Tests pointing an existing record at a new repost.
///
/// Expected: Ok(1) with reposted_id replaced
#[tokio::test]
async fn replaces_reposted_id() -> Result<(), AppError> {
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
    let updated = repo.update_repost(111, 333).await?;

    assert_eq!(updated, 1);
    let record = repo.get_by_original_id(111).await?.unwrap();
    assert_eq!(record.reposted_id, 333);

    let count = entity::prelude::StarMessage::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests updating a record that does not exist.
///
/// Expected: Ok(0) and no record created
#[tokio::test]
async fn succeeds_without_effect_for_unknown_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StarMessageRepository::new(db);
    let updated = repo.update_repost(111, 333).await?;

    assert_eq!(updated, 0);
    let count = entity::prelude::StarMessage::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that updating one record leaves others untouched.
///
/// Expected: Ok with only the targeted record changed
#[tokio::test]
async fn leaves_other_records_untouched() -> Result<(), AppError> {
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
    factory::star_message::StarMessageFactory::new(db)
        .original_id(444)
        .reposted_id(555)
        .build()
        .await?;

    let repo = StarMessageRepository::new(db);
    repo.update_repost(111, 333).await?;

    let other = repo.get_by_original_id(444).await?.unwrap();
    assert_eq!(other.reposted_id, 555);

    Ok(())
}
