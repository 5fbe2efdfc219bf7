//! Serenity implementation of the starboard's chat platform.

use std::sync::Arc;

use serenity::{
    all::{ChannelId, Context, CreateAllowedMentions, CreateMessage, EditMessage, MessageId},
    async_trait,
    http::{Http, HttpError},
};

use crate::{
    error::platform::PlatformError,
    model::starboard::{self, OriginalMessage},
    service::starboard::platform::StarboardPlatform,
};

/// JSON error code Discord returns for a message that does not exist.
const UNKNOWN_MESSAGE_CODE: isize = 10008;

/// Chat platform backed by Discord's HTTP API.
pub struct SerenityPlatform {
    /// Discord HTTP client shared with the gateway client
    http: Arc<Http>,
    bot_user_id: u64,
}

impl SerenityPlatform {
    pub fn new(http: Arc<Http>, bot_user_id: u64) -> Self {
        Self { http, bot_user_id }
    }

    /// Builds a platform from an event context, reading the bot's own id from the cache.
    pub fn from_context(ctx: &Context) -> Self {
        let bot_user_id = ctx.cache.current_user().id.get();
        Self::new(ctx.http.clone(), bot_user_id)
    }
}

/// Reposts never ping the users or roles mentioned in the original message.
fn no_mentions() -> CreateAllowedMentions {
    CreateAllowedMentions::new()
}

/// Maps a Serenity error for an operation on one message.
///
/// Discord's "Unknown Message" response becomes `MessageNotFound`; everything else is kept
/// as an opaque Discord failure.
fn map_message_error(err: serenity::Error, channel_id: u64, message_id: u64) -> PlatformError {
    match &err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
            if response.error.code == UNKNOWN_MESSAGE_CODE =>
        {
            PlatformError::MessageNotFound {
                channel_id,
                message_id,
            }
        }
        _ => PlatformError::from(err),
    }
}

#[async_trait]
impl StarboardPlatform for SerenityPlatform {
    fn bot_user_id(&self) -> u64 {
        self.bot_user_id
    }

    async fn reaction_count(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &str,
    ) -> Result<u64, PlatformError> {
        let message = self
            .http
            .get_message(ChannelId::new(channel_id), MessageId::new(message_id))
            .await
            .map_err(|e| map_message_error(e, channel_id, message_id))?;

        Ok(starboard::reaction_count(&message, emoji))
    }

    async fn fetch_message(
        &self,
        guild_id: u64,
        channel_id: u64,
        message_id: u64,
    ) -> Result<OriginalMessage, PlatformError> {
        let message = self
            .http
            .get_message(ChannelId::new(channel_id), MessageId::new(message_id))
            .await
            .map_err(|e| map_message_error(e, channel_id, message_id))?;

        Ok(OriginalMessage::from_message(guild_id, &message))
    }

    async fn send_message(&self, channel_id: u64, content: String) -> Result<u64, PlatformError> {
        let message = CreateMessage::new()
            .content(content)
            .allowed_mentions(no_mentions());

        let sent = ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(sent.id.get())
    }

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        content: String,
    ) -> Result<(), PlatformError> {
        let edit_message = EditMessage::new()
            .content(content)
            .allowed_mentions(no_mentions());

        self.http
            .edit_message(
                ChannelId::new(channel_id),
                MessageId::new(message_id),
                &edit_message,
                vec![],
            )
            .await
            .map_err(|e| map_message_error(e, channel_id, message_id))?;

        Ok(())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), PlatformError> {
        self.http
            .delete_message(ChannelId::new(channel_id), MessageId::new(message_id), None)
            .await
            .map_err(|e| map_message_error(e, channel_id, message_id))
    }
}
