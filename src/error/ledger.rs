use std::num::ParseIntError;
use std::time::Duration;

use thiserror::Error;

/// Failures of the repost ledger.
///
/// A deadline expiry is reported separately from a storage failure: on `Timeout` the
/// underlying query was cancelled and its effect on the table is unknown.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The operation did not complete before its deadline and was cancelled.
    #[error("Ledger {operation} did not complete within {after:?}")]
    Timeout {
        /// Name of the ledger operation
        operation: &'static str,
        /// The deadline that elapsed
        after: Duration,
    },

    /// The storage layer reported an error.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// A stored id is not a valid snowflake.
    #[error("Failed to parse ID from String '{value}': {source}")]
    InvalidId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
