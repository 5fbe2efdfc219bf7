//! Ready event handler.
//!
//! Fired once per gateway session after the initial handshake.

use serenity::all::{Context, Ready};

/// Logs the connected bot user and the number of guilds it can see.
///
/// # Arguments
/// - `ctx` - Discord context (unused)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );
}
