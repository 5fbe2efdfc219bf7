//! Deadline wrapper for fallible async operations.
//!
//! `with_deadline` drives an operation under a timer. When the timer fires first the
//! operation's future is dropped, which cancels the in-flight work, and the caller gets
//! `DeadlineError::Elapsed` instead of the operation's own error type.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// Outcome of an operation that did not succeed within its deadline.
#[derive(Error, Debug)]
pub enum DeadlineError<E> {
    /// The deadline elapsed and the operation was cancelled.
    #[error("operation did not complete within {0:?}")]
    Elapsed(Duration),

    /// The operation completed in time but failed.
    #[error(transparent)]
    Failed(E),
}

/// Runs `operation` and cancels it if it has not completed after `deadline`.
///
/// # Arguments
/// - `deadline` - Maximum time the operation may take
/// - `operation` - Future resolving to the operation's result
///
/// # Returns
/// - `Ok(T)` - The operation succeeded in time
/// - `Err(DeadlineError::Elapsed)` - The deadline fired first; the operation was dropped
/// - `Err(DeadlineError::Failed)` - The operation returned an error in time
pub async fn with_deadline<T, E, F>(deadline: Duration, operation: F) -> Result<T, DeadlineError<E>>
where
    F: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(deadline, operation).await {
        Ok(result) => result.map_err(DeadlineError::Failed),
        Err(_) => Err(DeadlineError::Elapsed(deadline)),
    }
}
