//! Error types for the starboard bot.
//!
//! Each concern owns a `thiserror` enum: configuration, startup, the repost ledger, the chat
//! platform adapter and the reconciliation handler. `AppError` aggregates the ones process
//! startup can raise, where any failure is fatal. Per-event failures stop at `StarboardError` and are
//! logged by the event handler.

pub mod config;
pub mod ledger;
pub mod platform;
pub mod starboard;
pub mod startup;

use thiserror::Error;

use crate::error::{config::ConfigError, ledger::LedgerError, startup::StartupError};

/// Top-level application error type.
///
/// Returned from `main`; most variants use `#[from]` for automatic conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Bootstrap failure such as a misconfigured starboard channel.
    #[error(transparent)]
    StartupErr(#[from] StartupError),

    /// Repost ledger failure.
    #[error(transparent)]
    LedgerErr(#[from] LedgerError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Boxes the error to keep `AppError` small, as serenity::Error is very large.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
