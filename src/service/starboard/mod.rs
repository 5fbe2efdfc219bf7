//! Reaction-to-repost reconciliation.
//!
//! Every reaction change on a star re-derives the desired state from scratch: the live
//! reaction count, the current message content and the ledger record are fetched, and the
//! starboard channel is brought in line with them. Nothing about earlier events is kept in
//! memory.
//!
//! | count vs threshold | ledger record | action                          | outcome    |
//! |--------------------|---------------|---------------------------------|------------|
//! | at/above           | none          | send repost, insert record      | `Reposted` |
//! | at/above           | present       | edit repost                     | `Updated`  |
//! | at/above           | present, gone | send repost, update record      | `Repaired` |
//! | below              | none          | nothing                         | `Ignored`  |
//! | below              | present       | delete repost, delete record    | `Removed`  |

pub mod format;
pub mod lock;
pub mod platform;

#[cfg(test)]
mod test;

use crate::{
    data::star_message::StarMessageRepository,
    error::{platform::PlatformError, starboard::StarboardError},
    model::{
        star_message::StarMessage,
        starboard::{OriginalMessage, ReactionEvent, ReconcileOutcome, STAR_EMOJI},
    },
    state::AppState,
};

use self::{format::format_star_message, platform::StarboardPlatform};

/// Service reconciling the starboard channel with reaction events.
pub struct StarboardService<'a, P: StarboardPlatform> {
    state: &'a AppState,
    platform: &'a P,
}

impl<'a, P: StarboardPlatform> StarboardService<'a, P> {
    /// Creates a new StarboardService instance.
    ///
    /// # Arguments
    /// - `state` - Shared state holding the ledger connection, channel map and threshold
    /// - `platform` - Chat platform used to read and write messages
    pub fn new(state: &'a AppState, platform: &'a P) -> Self {
        Self { state, platform }
    }

    /// Brings the starboard in line with the current reactions on a message.
    ///
    /// # Arguments
    /// - `event` - The reaction that was added or removed
    ///
    /// # Returns
    /// - `Ok(ReconcileOutcome)` - The action taken
    /// - `Err(StarboardError::Ledger)` - A ledger operation failed or timed out
    /// - `Err(StarboardError::Platform)` - A Discord call failed for a reason other than
    ///   the repost already being gone
    pub async fn reconcile(
        &self,
        event: &ReactionEvent,
    ) -> Result<ReconcileOutcome, StarboardError> {
        if !event.emoji.is_star() {
            return Ok(ReconcileOutcome::Ignored);
        }

        let Some(guild_id) = event.guild_id else {
            return Ok(ReconcileOutcome::Ignored);
        };
        let Some(star_channel_id) = self.state.channels.channel_for(guild_id) else {
            return Ok(ReconcileOutcome::Ignored);
        };

        let _guard = self.state.locks.lock(event.message_id).await;

        let repo = StarMessageRepository::new(&self.state.db);

        let (reaction_count, message, record) = tokio::try_join!(
            async {
                self.platform
                    .reaction_count(event.channel_id, event.message_id, STAR_EMOJI)
                    .await
                    .map_err(StarboardError::from)
            },
            async {
                self.platform
                    .fetch_message(guild_id, event.channel_id, event.message_id)
                    .await
                    .map_err(StarboardError::from)
            },
            async {
                repo.get_by_original_id(event.message_id)
                    .await
                    .map_err(StarboardError::from)
            },
        )?;

        // Never star the starboard itself or the bot's own messages
        if message.channel_id == star_channel_id
            || message.author_id == self.platform.bot_user_id()
        {
            return Ok(ReconcileOutcome::Ignored);
        }

        let min_reaction_count = self.state.settings.min_reaction_count;

        if reaction_count >= min_reaction_count {
            let content = format_star_message(reaction_count, min_reaction_count, &message);

            match record {
                None => self.repost(&repo, star_channel_id, &message, content).await,
                Some(record) => {
                    self.update(&repo, star_channel_id, &message, record, content)
                        .await
                }
            }
        } else {
            match record {
                None => Ok(ReconcileOutcome::Ignored),
                Some(record) => self.remove(&repo, star_channel_id, record).await,
            }
        }
    }

    async fn repost(
        &self,
        repo: &StarMessageRepository<'_>,
        star_channel_id: u64,
        message: &OriginalMessage,
        content: String,
    ) -> Result<ReconcileOutcome, StarboardError> {
        let reposted_id = self.platform.send_message(star_channel_id, content).await?;
        repo.insert(message.id, reposted_id).await?;

        tracing::info!(
            "Reposted message {} to starboard channel {} as {}",
            message.id,
            star_channel_id,
            reposted_id
        );

        Ok(ReconcileOutcome::Reposted)
    }

    async fn update(
        &self,
        repo: &StarMessageRepository<'_>,
        star_channel_id: u64,
        message: &OriginalMessage,
        record: StarMessage,
        content: String,
    ) -> Result<ReconcileOutcome, StarboardError> {
        match self
            .platform
            .edit_message(star_channel_id, record.reposted_id, content.clone())
            .await
        {
            Ok(()) => {
                tracing::debug!(
                    "Updated repost {} of message {}",
                    record.reposted_id,
                    message.id
                );
                Ok(ReconcileOutcome::Updated)
            }
            Err(PlatformError::MessageNotFound { .. }) => {
                tracing::warn!(
                    "Repost {} of message {} was deleted from the starboard or the ledger is stale, reposting",
                    record.reposted_id,
                    message.id
                );

                let reposted_id = self.platform.send_message(star_channel_id, content).await?;
                repo.update_repost(message.id, reposted_id).await?;

                tracing::info!(
                    "Repaired repost of message {}: {} replaced by {}",
                    message.id,
                    record.reposted_id,
                    reposted_id
                );

                Ok(ReconcileOutcome::Repaired)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn remove(
        &self,
        repo: &StarMessageRepository<'_>,
        star_channel_id: u64,
        record: StarMessage,
    ) -> Result<ReconcileOutcome, StarboardError> {
        // On any other failure the record stays, so the next reaction retries the delete
        match self
            .platform
            .delete_message(star_channel_id, record.reposted_id)
            .await
        {
            Ok(()) => {}
            Err(PlatformError::MessageNotFound { .. }) => {
                tracing::warn!(
                    "Repost {} of message {} was already gone from the starboard",
                    record.reposted_id,
                    record.original_id
                );
            }
            Err(err) => return Err(err.into()),
        }

        repo.delete_by_reposted_id(record.reposted_id).await?;

        tracing::info!(
            "Removed repost {} of message {} from the starboard",
            record.reposted_id,
            record.original_id
        );

        Ok(ReconcileOutcome::Removed)
    }
}
