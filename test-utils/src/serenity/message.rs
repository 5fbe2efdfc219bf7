//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

/// Attachment on a test message.
pub struct TestAttachment<'a> {
    pub filename: &'a str,
    pub url: &'a str,
}

/// Reaction tally on a test message, keyed by unicode emoji.
pub struct TestReaction<'a> {
    pub emoji: &'a str,
    pub count: u64,
}

/// Fields of a test message that matter to the starboard.
pub struct TestMessage<'a> {
    pub id: u64,
    pub channel_id: u64,
    pub guild_id: Option<u64>,
    pub author_id: u64,
    pub content: &'a str,
    pub attachments: Vec<TestAttachment<'a>>,
    pub reactions: Vec<TestReaction<'a>>,
}

/// Creates a Serenity `Message` from the provided fields.
///
/// All other fields are set to the defaults of a plain text message sent by a
/// regular user.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::message::{create_test_message, TestMessage};
///
/// let message = create_test_message(TestMessage {
///     id: 3,
///     channel_id: 2,
///     guild_id: Some(1),
///     author_id: 4,
///     content: "hello",
///     attachments: vec![],
///     reactions: vec![],
/// });
/// ```
pub fn create_test_message(message: TestMessage<'_>) -> Message {
    let attachments: Vec<serde_json::Value> = message
        .attachments
        .iter()
        .enumerate()
        .map(|(index, attachment)| {
            serde_json::json!({
                "id": (message.id + index as u64 + 1).to_string(),
                "filename": attachment.filename,
                "size": 1024,
                "url": attachment.url,
                "proxy_url": attachment.url,
            })
        })
        .collect();

    let reactions: Vec<serde_json::Value> = message
        .reactions
        .iter()
        .map(|reaction| {
            serde_json::json!({
                "count": reaction.count,
                "count_details": { "burst": 0, "normal": reaction.count },
                "me": false,
                "me_burst": false,
                "burst_colors": [],
                "emoji": { "id": null, "name": reaction.emoji },
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": message.id.to_string(),
        "channel_id": message.channel_id.to_string(),
        "guild_id": message.guild_id.map(|id| id.to_string()),
        "author": {
            "id": message.author_id.to_string(),
            "username": "test_user",
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "content": message.content,
        "timestamp": "2025-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": attachments,
        "embeds": [],
        "reactions": reactions,
        "components": [],
        "sticker_items": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
    }))
    .expect("Failed to create test message from JSON")
}
