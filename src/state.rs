//! Shared state for the bot's event handlers.
//!
//! Built once during startup and cloned into the event handler. Everything inside is either
//! read-only after startup or internally synchronised.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::model::starboard::{GuildChannelMap, StarboardSettings};
use crate::service::starboard::lock::MessageLocks;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool backing the repost ledger.
    pub db: DatabaseConnection,

    /// Starboard channel per guild, resolved and validated during startup.
    pub channels: Arc<GuildChannelMap>,

    /// Threshold settings.
    pub settings: StarboardSettings,

    /// Per-message locks serialising reconciliations of the same message.
    pub locks: MessageLocks,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `channels` - Starboard channel per guild
    /// - `settings` - Threshold settings
    pub fn new(
        db: DatabaseConnection,
        channels: GuildChannelMap,
        settings: StarboardSettings,
    ) -> Self {
        Self {
            db,
            channels: Arc::new(channels),
            settings,
            locks: MessageLocks::new(),
        }
    }
}
