use serenity::all::{Context, Reaction};

use crate::{
    bot::platform::SerenityPlatform,
    model::starboard::{ReactionEvent, ReconcileOutcome},
    service::starboard::StarboardService,
    state::AppState,
};

/// Handles a reaction being added to or removed from a message.
///
/// Both directions run the same reconciliation, since it always re-reads the live reaction
/// count. Failures are logged and the event is dropped; the next reaction on the message
/// retries from scratch.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context providing the HTTP client and cache
/// - `reaction` - The reaction that changed
pub async fn handle_reaction(state: &AppState, ctx: Context, reaction: Reaction) {
    let event = ReactionEvent::from_reaction(&reaction);

    if !event.emoji.is_star() {
        return;
    }

    let platform = SerenityPlatform::from_context(&ctx);
    let service = StarboardService::new(state, &platform);

    match service.reconcile(&event).await {
        Ok(ReconcileOutcome::Ignored) => {}
        Ok(outcome) => {
            tracing::debug!(
                "Reconciled message {} in channel {}: {:?}",
                event.message_id,
                event.channel_id,
                outcome
            );
        }
        Err(e) => {
            tracing::error!(
                "Failed to reconcile starboard for message {} in channel {}: {}",
                event.message_id,
                event.channel_id,
                e
            );
        }
    }
}
