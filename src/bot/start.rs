use serenity::all::{Client, GatewayIntents, Http};

use crate::{
    config::Config,
    error::AppError,
    model::starboard::StarboardSettings,
    startup,
    state::AppState,
};

use super::handler::Handler;

/// Initializes the Discord bot client.
///
/// Resolves the configured starboard channels over Discord's HTTP API before the gateway
/// connection is opened, so a misconfigured channel fails startup instead of the first
/// starred message.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection backing the repost ledger
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - A starboard channel is invalid or the client could not be built
pub async fn init_bot(config: &Config, db: sea_orm::DatabaseConnection) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT;

    let http = Http::new(&config.discord_bot_token);
    let channels = startup::load_star_channels(&http, config).await?;

    let state = AppState::new(
        db,
        channels,
        StarboardSettings {
            min_reaction_count: config.min_reaction_count,
        },
    );

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Starts the Discord bot and blocks until the gateway connection shuts down.
///
/// # Arguments
/// - `client` - Client returned by `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot shuts down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
