//! Repost text formatting.
//!
//! A repost is laid out as:
//!
//! ```text
//! ⭐ **5** https://discord.com/channels/<guild>/<channel>/<message>
//! > quoted content
//! > spanning lines
//! https://cdn.discordapp.com/attachments/...
//! ```
//!
//! Discord rejects messages over `MESSAGE_CHAR_LIMIT` characters. The header line and the
//! attachment URLs are always kept whole; the quoted content gets whatever room is left.

use url::Url;

use crate::model::starboard::{OriginalMessage, STAR_EMOJI};

/// Maximum length of a Discord message, in characters.
pub const MESSAGE_CHAR_LIMIT: usize = 2000;

/// Glyph used once a message reaches twice the threshold.
pub const GLOWING_STAR_EMOJI: &str = "\u{1F31F}";

/// Hosts serving attachments through expiring signed URLs.
const CDN_HOSTS: [&str; 2] = ["cdn.discordapp.com", "media.discordapp.net"];

/// Query parameters carrying the signature and expiry of a CDN URL.
const SIGNED_URL_PARAMS: [&str; 3] = ["ex", "is", "hm"];

/// Builds the starboard text for a message.
///
/// # Arguments
/// - `reaction_count` - Live number of star reactions on the message
/// - `min_reaction_count` - Configured threshold; twice this switches to the glowing star
/// - `message` - The starred message
///
/// # Returns
/// - `String` - Repost text, never longer than `MESSAGE_CHAR_LIMIT` characters
pub fn format_star_message(
    reaction_count: u64,
    min_reaction_count: u64,
    message: &OriginalMessage,
) -> String {
    let glyph = if reaction_count >= min_reaction_count.saturating_mul(2) {
        GLOWING_STAR_EMOJI
    } else {
        STAR_EMOJI
    };

    let mut text = format!("{} **{}** {}\n", glyph, reaction_count, message.link());

    let urls: String = message
        .attachment_urls
        .iter()
        .map(|url| format!("{}\n", strip_signed_params(url)))
        .collect();

    // One character is reserved for the newline between the quote and the URLs
    let quote_budget =
        (MESSAGE_CHAR_LIMIT - 1).saturating_sub(text.chars().count() + urls.chars().count());

    text.extend(quote(&message.content).chars().take(quote_budget));
    text.push('\n');
    text.push_str(&urls);

    truncate_chars(text, MESSAGE_CHAR_LIMIT)
}

/// Prefixes every line of `content` with a blockquote marker.
fn quote(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    format!("> {}", content.replace('\n', "\n> "))
}

/// Drops the expiring signature from Discord CDN URLs so reposted links stay stable.
///
/// URLs on other hosts, and strings that do not parse as URLs, are returned unchanged.
pub fn strip_signed_params(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return raw.to_string();
    };

    let on_cdn = url
        .host_str()
        .is_some_and(|host| CDN_HOSTS.contains(&host));
    if !on_cdn || url.query().is_none() {
        return raw.to_string();
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !SIGNED_URL_PARAMS.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(&kept);
    }

    url.to_string()
}

fn truncate_chars(mut text: String, limit: usize) -> String {
    if let Some((index, _)) = text.char_indices().nth(limit) {
        text.truncate(index);
    }
    text
}
