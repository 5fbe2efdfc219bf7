//! Discord bot runtime for the starboard.
//!
//! The bot listens for reactions being added to or removed from guild messages and hands
//! each one to the reconciliation service. Events are dispatched by Serenity on their own
//! tasks; a failing event is logged and dropped without affecting the others.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Resolve guild channels
//! - `GUILD_MESSAGES` - Access guild messages
//! - `GUILD_MESSAGE_REACTIONS` - Receive reaction add and remove events
//! - `MESSAGE_CONTENT` - Read the text of starred messages (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled in the
//! Discord Developer Portal, otherwise reposts are sent without the quoted text.

pub mod handler;
pub mod platform;
pub mod start;
