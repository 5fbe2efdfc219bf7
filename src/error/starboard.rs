use thiserror::Error;

use crate::error::{ledger::LedgerError, platform::PlatformError};

/// Failure of a single reconciliation; the event is logged and dropped.
#[derive(Error, Debug)]
pub enum StarboardError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}
