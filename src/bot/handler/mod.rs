use serenity::all::{Context, EventHandler, Reaction, Ready};
use serenity::async_trait;

use crate::state::AppState;

pub mod reaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

// `reaction_remove_all` and `reaction_remove_emoji` are not handled: bulk clears are
// usually accidental and must not wipe starboard history.
#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a user reacts to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction(&self.state, ctx, add_reaction).await;
    }

    /// Called when a user removes their reaction from a message
    async fn reaction_remove(&self, ctx: Context, removed_reaction: Reaction) {
        reaction::handle_reaction(&self.state, ctx, removed_reaction).await;
    }
}
