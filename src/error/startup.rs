use std::time::Duration;

use thiserror::Error;

/// Fatal errors raised while bootstrapping the bot.
#[derive(Error, Debug)]
pub enum StartupError {
    /// Configured starboard channel cannot receive text messages.
    #[error("Starboard channel {channel_id} for guild {guild_id} is not a text channel")]
    ChannelNotText { guild_id: u64, channel_id: u64 },

    /// Configured starboard channel belongs to a different guild.
    #[error("Starboard channel {channel_id} belongs to guild {actual}, not guild {expected}")]
    ChannelGuildMismatch {
        channel_id: u64,
        expected: u64,
        actual: u64,
    },

    /// Opening the database did not finish in time.
    #[error("Database connection was not established within {0:?}")]
    DatabaseTimeout(Duration),
}
