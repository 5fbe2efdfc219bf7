use super::*;

/// Tests retrieving a record by original message id.
///
/// Expected: Ok(Some(record))
#[tokio::test]
async fn returns_record() -> Result<(), AppError> {
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
    let result = repo.get_by_original_id(111).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap(),
        Some(StarMessage {
            original_id: 111,
            reposted_id: 222,
        })
    );

    Ok(())
}

/// Tests retrieving a record for a message that was never reposted.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_star_message(db).await?;

    let repo = StarMessageRepository::new(db);
    let result = repo.get_by_original_id(999999999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}

/// Tests that lookup matches the original id, not the reposted id.
///
/// Expected: Ok(None) when querying with a repost's id
#[tokio::test]
async fn does_not_match_reposted_id() -> Result<(), AppError> {
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
    let result = repo.get_by_original_id(222).await?;

    assert!(result.is_none());

    Ok(())
}
