//! Chat platform capability consumed by the reconciliation handler.

use serenity::async_trait;

use crate::error::platform::PlatformError;
use crate::model::starboard::OriginalMessage;

/// Operations the starboard needs from the chat platform.
///
/// Implementations must report a missing target message as
/// `PlatformError::MessageNotFound`; every other failure is treated as fatal for the
/// current event.
#[async_trait]
pub trait StarboardPlatform: Send + Sync {
    /// User id of the bot itself.
    fn bot_user_id(&self) -> u64;

    /// Authoritative count of `emoji` reactions on a message.
    async fn reaction_count(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &str,
    ) -> Result<u64, PlatformError>;

    /// Fetches the current content and attachments of a guild message.
    async fn fetch_message(
        &self,
        guild_id: u64,
        channel_id: u64,
        message_id: u64,
    ) -> Result<OriginalMessage, PlatformError>;

    /// Sends a message and returns its id.
    async fn send_message(&self, channel_id: u64, content: String) -> Result<u64, PlatformError>;

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        content: String,
    ) -> Result<(), PlatformError>;

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), PlatformError>;
}
