//! Reconciliation tests against an in-memory ledger and a recording fake platform.

use std::collections::HashMap;
use std::sync::Mutex;

use sea_orm::{ConnectionTrait, DatabaseConnection};
use serenity::async_trait;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::{
    data::star_message::StarMessageRepository,
    error::{ledger::LedgerError, platform::PlatformError, starboard::StarboardError},
    model::{
        star_message::StarMessage,
        starboard::{
            GuildChannelMap, OriginalMessage, ReactionEmoji, ReactionEvent, ReconcileOutcome,
            StarboardSettings, STAR_EMOJI,
        },
    },
    service::starboard::{format::format_star_message, platform::StarboardPlatform, StarboardService},
    state::AppState,
};


const GUILD_ID: u64 = 100;
const CHANNEL_ID: u64 = 200;
const STARBOARD_CHANNEL_ID: u64 = 900;
const AUTHOR_ID: u64 = 400;
const BOT_USER_ID: u64 = 1;
const THRESHOLD: u64 = 3;

/// Message posted in the starboard channel by the fake platform.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Post {
    channel_id: u64,
    content: String,
}

#[derive(Default)]
struct FakeState {
    messages: HashMap<u64, OriginalMessage>,
    stars: HashMap<u64, u64>,
    posts: HashMap<u64, Post>,
    next_post_id: u64,
    sends: usize,
    fetches: usize,
    edit_outage: bool,
    delete_outage: bool,
    /// Ledger whose table is dropped right after the next send succeeds
    break_ledger_on_send: Option<DatabaseConnection>,
}

/// In-memory chat platform recording every starboard post.
struct FakePlatform {
    state: Mutex<FakeState>,
}

impl FakePlatform {
    fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                next_post_id: 5000,
                ..Default::default()
            }),
        }
    }

    fn add_message(&self, message: OriginalMessage, stars: u64) {
        let mut state = self.state.lock().unwrap();
        state.stars.insert(message.id, stars);
        state.messages.insert(message.id, message);
    }

    fn set_stars(&self, message_id: u64, stars: u64) {
        self.state.lock().unwrap().stars.insert(message_id, stars);
    }

    fn seed_post(&self, post_id: u64, content: &str) {
        self.state.lock().unwrap().posts.insert(
            post_id,
            Post {
                channel_id: STARBOARD_CHANNEL_ID,
                content: content.to_string(),
            },
        );
    }

    /// Deletes a post behind the bot's back.
    fn delete_post_out_of_band(&self, post_id: u64) {
        self.state.lock().unwrap().posts.remove(&post_id);
    }

    fn fail_edits(&self) {
        self.state.lock().unwrap().edit_outage = true;
    }

    fn fail_deletes(&self) {
        self.state.lock().unwrap().delete_outage = true;
    }

    /// Makes the ledger unusable once the next repost has been sent.
    fn break_ledger_after_send(&self, db: &DatabaseConnection) {
        self.state.lock().unwrap().break_ledger_on_send = Some(db.clone());
    }

    fn posts(&self) -> HashMap<u64, Post> {
        self.state.lock().unwrap().posts.clone()
    }

    fn sends(&self) -> usize {
        self.state.lock().unwrap().sends
    }

    fn fetches(&self) -> usize {
        self.state.lock().unwrap().fetches
    }
}

fn outage() -> PlatformError {
    PlatformError::from(serenity::Error::Other("Discord is down"))
}

#[async_trait]
impl StarboardPlatform for FakePlatform {
    fn bot_user_id(&self) -> u64 {
        BOT_USER_ID
    }

    async fn reaction_count(
        &self,
        _channel_id: u64,
        message_id: u64,
        emoji: &str,
    ) -> Result<u64, PlatformError> {
        assert_eq!(emoji, STAR_EMOJI);
        let state = self.state.lock().unwrap();
        Ok(state.stars.get(&message_id).copied().unwrap_or(0))
    }

    async fn fetch_message(
        &self,
        _guild_id: u64,
        channel_id: u64,
        message_id: u64,
    ) -> Result<OriginalMessage, PlatformError> {
        let mut state = self.state.lock().unwrap();
        state.fetches += 1;
        state
            .messages
            .get(&message_id)
            .cloned()
            .ok_or(PlatformError::MessageNotFound {
                channel_id,
                message_id,
            })
    }

    async fn send_message(&self, channel_id: u64, content: String) -> Result<u64, PlatformError> {
        tokio::task::yield_now().await;

        let (post_id, ledger) = {
            let mut state = self.state.lock().unwrap();
            state.next_post_id += 1;
            state.sends += 1;
            let post_id = state.next_post_id;
            state.posts.insert(
                post_id,
                Post {
                    channel_id,
                    content,
                },
            );
            (post_id, state.break_ledger_on_send.take())
        };

        if let Some(db) = ledger {
            drop_ledger(&db).await;
        }

        Ok(post_id)
    }

    async fn edit_message(
        &self,
        channel_id: u64,
        message_id: u64,
        content: String,
    ) -> Result<(), PlatformError> {
        let mut state = self.state.lock().unwrap();
        if state.edit_outage {
            return Err(outage());
        }
        match state.posts.get_mut(&message_id) {
            Some(post) => {
                post.content = content;
                Ok(())
            }
            None => Err(PlatformError::MessageNotFound {
                channel_id,
                message_id,
            }),
        }
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), PlatformError> {
        let mut state = self.state.lock().unwrap();
        if state.delete_outage {
            return Err(outage());
        }
        match state.posts.remove(&message_id) {
            Some(_) => Ok(()),
            None => Err(PlatformError::MessageNotFound {
                channel_id,
                message_id,
            }),
        }
    }
}

/// Builds an in-memory ledger and state with one registered guild.
async fn setup() -> (TestContext, AppState) {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();

    let channels: GuildChannelMap = [(GUILD_ID, STARBOARD_CHANNEL_ID)].into_iter().collect();
    let state = AppState::new(
        test.db.clone().unwrap(),
        channels,
        StarboardSettings {
            min_reaction_count: THRESHOLD,
        },
    );

    (test, state)
}

fn original_message(id: u64, content: &str) -> OriginalMessage {
    OriginalMessage {
        id,
        channel_id: CHANNEL_ID,
        guild_id: GUILD_ID,
        author_id: AUTHOR_ID,
        content: content.to_string(),
        attachment_urls: vec![],
    }
}

fn star_event(message_id: u64) -> ReactionEvent {
    ReactionEvent {
        guild_id: Some(GUILD_ID),
        channel_id: CHANNEL_ID,
        message_id,
        emoji: ReactionEmoji::Unicode(STAR_EMOJI.to_string()),
    }
}

/// Current ledger record for an original message.
async fn ledger_record(state: &AppState, original_id: u64) -> Option<StarMessage> {
    StarMessageRepository::new(&state.db)
        .get_by_original_id(original_id)
        .await
        .unwrap()
}

async fn drop_ledger(db: &DatabaseConnection) {
    db.execute_unprepared("DROP TABLE star_message")
        .await
        .unwrap();
}
