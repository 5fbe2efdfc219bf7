use super::*;

/// Tests recording a new repost.
///
/// Verifies that the repository stores both ids as text and returns the parsed record.
///
/// Expected: Ok with record created
#[tokio::test]
async fn creates_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StarMessageRepository::new(db);
    let result = repo.insert(123456789, 987654321).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap(),
        StarMessage {
            original_id: 123456789,
            reposted_id: 987654321,
        }
    );

    let stored = entity::prelude::StarMessage::find_by_id("123456789".to_string())
        .one(db)
        .await?;

    assert!(stored.is_some());
    assert_eq!(stored.unwrap().reposted_id, "987654321");

    Ok(())
}

/// Tests that snowflakes above the signed 64-bit range survive storage.
///
/// Expected: Ok with the exact ids read back
#[tokio::test]
async fn preserves_ids_above_i64_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original_id = u64::MAX - 1;
    let reposted_id = (i64::MAX as u64) + 1;

    let repo = StarMessageRepository::new(db);
    repo.insert(original_id, reposted_id).await?;

    let record = repo.get_by_original_id(original_id).await?.unwrap();
    assert_eq!(record.original_id, original_id);
    assert_eq!(record.reposted_id, reposted_id);

    Ok(())
}

/// Tests that a second record for the same original message is rejected.
///
/// Expected: Err(LedgerError::Database) and a single stored row
#[tokio::test]
async fn rejects_duplicate_original_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_star_message(db).await?;
    let original_id: u64 = existing.original_id.parse().unwrap();

    let repo = StarMessageRepository::new(db);
    let result = repo.insert(original_id, 42).await;

    assert!(matches!(
        result,
        Err(crate::error::ledger::LedgerError::Database(_))
    ));

    let count = entity::prelude::StarMessage::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
