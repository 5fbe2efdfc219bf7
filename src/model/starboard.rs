//! Domain models for reaction reconciliation.
//!
//! Serenity types are converted into these models at the bot boundary so the
//! reconciliation handler and the formatter stay independent of the gateway client.

use std::collections::HashMap;

use serenity::all::{Message, Reaction, ReactionType};

/// The only emoji that counts towards the starboard.
pub const STAR_EMOJI: &str = "\u{2B50}";

/// Read-only mapping from guild id to its starboard channel id.
///
/// Built once during startup and shared with every event handler invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildChannelMap {
    channels: HashMap<u64, u64>,
}

impl GuildChannelMap {
    /// Returns the starboard channel registered for a guild.
    pub fn channel_for(&self, guild_id: u64) -> Option<u64> {
        self.channels.get(&guild_id).copied()
    }

    /// Number of guilds with a starboard.
    pub fn len(&self) -> usize {
        self.channels.len()
    }
}

impl FromIterator<(u64, u64)> for GuildChannelMap {
    fn from_iter<I: IntoIterator<Item = (u64, u64)>>(iter: I) -> Self {
        Self {
            channels: iter.into_iter().collect(),
        }
    }
}

/// Threshold settings for the starboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarboardSettings {
    /// Minimum reaction count for a message to be reposted and kept on the starboard.
    pub min_reaction_count: u64,
}

/// Emoji carried by a reaction event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionEmoji {
    /// Standard unicode emoji, identified by its literal.
    Unicode(String),
    /// Guild custom emoji, identified by its id.
    Custom(u64),
    /// Emoji kind this bot does not understand.
    Other,
}

impl ReactionEmoji {
    /// Converts Serenity's reaction type.
    pub fn from_reaction_type(reaction_type: &ReactionType) -> Self {
        match reaction_type {
            ReactionType::Unicode(name) => Self::Unicode(name.clone()),
            ReactionType::Custom { id, .. } => Self::Custom(id.get()),
            _ => Self::Other,
        }
    }

    /// Custom emoji never match, even when their name is a star.
    pub fn is_star(&self) -> bool {
        matches!(self, Self::Unicode(name) if name == STAR_EMOJI)
    }
}

/// A reaction being added to or removed from a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEvent {
    /// Guild the message lives in, `None` for direct messages.
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    pub message_id: u64,
    pub emoji: ReactionEmoji,
}

impl ReactionEvent {
    /// Converts a gateway reaction into a reaction event.
    pub fn from_reaction(reaction: &Reaction) -> Self {
        Self {
            guild_id: reaction.guild_id.map(|id| id.get()),
            channel_id: reaction.channel_id.get(),
            message_id: reaction.message_id.get(),
            emoji: ReactionEmoji::from_reaction_type(&reaction.emoji),
        }
    }
}

/// Message snapshot used to build a repost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalMessage {
    pub id: u64,
    pub channel_id: u64,
    pub guild_id: u64,
    pub author_id: u64,
    pub content: String,
    /// Attachment URLs in the order Discord returned them.
    pub attachment_urls: Vec<String>,
}

impl OriginalMessage {
    /// Converts a fetched Serenity message.
    ///
    /// Messages fetched over HTTP do not carry a guild id, so it is supplied by the caller.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the message was fetched from
    /// - `message` - The fetched message
    pub fn from_message(guild_id: u64, message: &Message) -> Self {
        Self {
            id: message.id.get(),
            channel_id: message.channel_id.get(),
            guild_id,
            author_id: message.author.id.get(),
            content: message.content.clone(),
            attachment_urls: message
                .attachments
                .iter()
                .map(|attachment| attachment.url.clone())
                .collect(),
        }
    }

    /// Deep link to the message in the Discord client.
    pub fn link(&self) -> String {
        format!(
            "https://discord.com/channels/{}/{}/{}",
            self.guild_id, self.channel_id, self.id
        )
    }
}

/// Live count of a unicode emoji on a fetched message, zero when nobody reacted with it.
pub fn reaction_count(message: &Message, emoji: &str) -> u64 {
    message
        .reactions
        .iter()
        .find(|reaction| matches!(&reaction.reaction_type, ReactionType::Unicode(name) if name == emoji))
        .map(|reaction| reaction.count)
        .unwrap_or(0)
}

/// Terminal state of one reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Wrong emoji, unregistered guild, self-guard hit, or below threshold with no repost.
    Ignored,
    /// A new repost was sent and recorded.
    Reposted,
    /// The existing repost was edited in place.
    Updated,
    /// The recorded repost was gone, so a fresh one was sent and the record overwritten.
    Repaired,
    /// The repost was deleted and its record removed.
    Removed,
}
