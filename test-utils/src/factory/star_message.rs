//! Star message factory for creating ledger records.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating ledger records with customizable ids.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::star_message::StarMessageFactory;
///
/// let record = StarMessageFactory::new(&db)
///     .original_id(123456789)
///     .build()
///     .await?;
/// ```
pub struct StarMessageFactory<'a> {
    db: &'a DatabaseConnection,
    original_id: u64,
    reposted_id: u64,
}

impl<'a> StarMessageFactory<'a> {
    /// Creates a new factory with freshly generated original and reposted ids.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            original_id: next_id(),
            reposted_id: next_id(),
        }
    }

    /// Sets the original message id.
    pub fn original_id(mut self, original_id: u64) -> Self {
        self.original_id = original_id;
        self
    }

    /// Sets the reposted message id.
    pub fn reposted_id(mut self, reposted_id: u64) -> Self {
        self.reposted_id = reposted_id;
        self
    }

    /// Builds and inserts the record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::star_message::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::star_message::Model, DbErr> {
        entity::star_message::ActiveModel {
            original_id: ActiveValue::Set(self.original_id.to_string()),
            reposted_id: ActiveValue::Set(self.reposted_id.to_string()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ledger record with generated ids.
///
/// Shorthand for `StarMessageFactory::new(db).build().await`.
pub async fn create_star_message(
    db: &DatabaseConnection,
) -> Result<entity::star_message::Model, DbErr> {
    StarMessageFactory::new(db).build().await
}
