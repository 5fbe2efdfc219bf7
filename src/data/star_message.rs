//! Repost ledger repository.
//!
//! This module provides the `StarMessageRepository` for the `star_message` table, which maps
//! each starred message to its repost in the starboard channel. Every operation runs under
//! `LEDGER_DEADLINE`; an operation still pending when the deadline fires is cancelled and
//! reported as `LedgerError::Timeout`.

use std::future::Future;
use std::time::Duration;

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

use crate::error::ledger::LedgerError;
use crate::model::star_message::StarMessage;
use crate::util::deadline::{with_deadline, DeadlineError};

/// Deadline applied to every ledger operation.
pub const LEDGER_DEADLINE: Duration = Duration::from_secs(5);

/// Repository providing the four ledger operations.
pub struct StarMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarMessageRepository<'a> {
    /// Creates a new StarMessageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new repost for an original message.
    ///
    /// Fails if a record for `original_id` already exists (primary key violation); the
    /// cause is not distinguished from other storage errors.
    ///
    /// # Arguments
    /// - `original_id` - Discord message ID of the starred message
    /// - `reposted_id` - Discord message ID of the repost
    ///
    /// # Returns
    /// - `Ok(StarMessage)` - The created record
    /// - `Err(LedgerError::Timeout)` - Insert did not finish within the deadline
    /// - `Err(LedgerError::Database)` - Storage error, including duplicate keys
    pub async fn insert(
        &self,
        original_id: u64,
        reposted_id: u64,
    ) -> Result<StarMessage, LedgerError> {
        let entity = bounded(
            "insert",
            entity::star_message::ActiveModel {
                original_id: ActiveValue::Set(original_id.to_string()),
                reposted_id: ActiveValue::Set(reposted_id.to_string()),
            }
            .insert(self.db),
        )
        .await?;

        StarMessage::from_entity(entity)
    }

    /// Gets the record for an original message.
    ///
    /// # Returns
    /// - `Ok(Some(StarMessage))` - The message has a repost on record
    /// - `Ok(None)` - No record exists for this message
    /// - `Err(LedgerError)` - Deadline expired, storage error or corrupt id
    pub async fn get_by_original_id(
        &self,
        original_id: u64,
    ) -> Result<Option<StarMessage>, LedgerError> {
        let entity = bounded(
            "lookup",
            entity::prelude::StarMessage::find_by_id(original_id.to_string()).one(self.db),
        )
        .await?;

        entity.map(StarMessage::from_entity).transpose()
    }

    /// Points an existing record at a new repost.
    ///
    /// Silently succeeds when no record exists for `original_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records updated (0 or 1)
    /// - `Err(LedgerError)` - Deadline expired or storage error
    pub async fn update_repost(
        &self,
        original_id: u64,
        reposted_id: u64,
    ) -> Result<u64, LedgerError> {
        let result = bounded(
            "update",
            entity::prelude::StarMessage::update_many()
                .col_expr(
                    entity::star_message::Column::RepostedId,
                    Expr::value(reposted_id.to_string()),
                )
                .filter(entity::star_message::Column::OriginalId.eq(original_id.to_string()))
                .exec(self.db),
        )
        .await?;

        Ok(result.rows_affected)
    }

    /// Removes the record pointing at a repost.
    ///
    /// Silently succeeds when no record references `reposted_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records deleted
    /// - `Err(LedgerError)` - Deadline expired or storage error
    pub async fn delete_by_reposted_id(&self, reposted_id: u64) -> Result<u64, LedgerError> {
        let result = bounded(
            "delete",
            entity::prelude::StarMessage::delete_many()
                .filter(entity::star_message::Column::RepostedId.eq(reposted_id.to_string()))
                .exec(self.db),
        )
        .await?;

        Ok(result.rows_affected)
    }
}

/// Runs a ledger query under `LEDGER_DEADLINE`, cancelling it when the deadline fires.
pub(crate) async fn bounded<T, F>(operation: &'static str, query: F) -> Result<T, LedgerError>
where
    F: Future<Output = Result<T, DbErr>>,
{
    with_deadline(LEDGER_DEADLINE, query)
        .await
        .map_err(|err| match err {
            DeadlineError::Elapsed(after) => LedgerError::Timeout { operation, after },
            DeadlineError::Failed(err) => LedgerError::Database(err),
        })
}
