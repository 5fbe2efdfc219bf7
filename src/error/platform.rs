use thiserror::Error;

/// Failures reported by the chat platform.
///
/// The adapter translates Discord's "Unknown Message" response into `MessageNotFound` so
/// the reconciliation handler never inspects raw API error codes.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The referenced message no longer exists.
    #[error("Message {message_id} no longer exists in channel {channel_id}")]
    MessageNotFound { channel_id: u64, message_id: u64 },

    /// Any other Discord API failure.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for PlatformError {
    fn from(err: serenity::Error) -> Self {
        PlatformError::Discord(Box::new(err))
    }
}
