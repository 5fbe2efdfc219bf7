use std::time::Duration;

use serenity::all::{Channel, ChannelId, ChannelType, Http};

use crate::{
    config::Config,
    error::{startup::StartupError, AppError},
    model::starboard::GuildChannelMap,
    util::deadline::{with_deadline, DeadlineError},
};

const DATABASE_CONNECT_DEADLINE: Duration = Duration::from_secs(1);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the `star_message` table exists
/// before the bot receives its first event.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::StartupErr)` - Connecting took longer than the connect deadline
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false)
        .connect_timeout(DATABASE_CONNECT_DEADLINE);

    let db = with_deadline(DATABASE_CONNECT_DEADLINE, Database::connect(opt))
        .await
        .map_err(|e| match e {
            DeadlineError::Elapsed(after) => AppError::from(StartupError::DatabaseTimeout(after)),
            DeadlineError::Failed(err) => AppError::from(err),
        })?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Resolves and validates the configured starboard channel of every guild.
///
/// Each channel is fetched once from Discord. A channel that does not exist, cannot hold
/// text messages, or lives in another guild than the one it was configured for aborts
/// startup.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `config` - Application configuration listing the starboard channels
///
/// # Returns
/// - `Ok(GuildChannelMap)` - Starboard channel per guild
/// - `Err(AppError::StartupErr)` - A channel is not a guild text channel of its guild
/// - `Err(AppError::DiscordErr)` - A channel could not be fetched
pub async fn load_star_channels(http: &Http, config: &Config) -> Result<GuildChannelMap, AppError> {
    let mut channels = Vec::with_capacity(config.star_channels.len());

    for star_channel in &config.star_channels {
        let channel = http
            .get_channel(ChannelId::new(star_channel.channel_id))
            .await?;

        let Channel::Guild(channel) = channel else {
            return Err(StartupError::ChannelNotText {
                guild_id: star_channel.guild_id,
                channel_id: star_channel.channel_id,
            }
            .into());
        };

        if channel.guild_id.get() != star_channel.guild_id {
            return Err(StartupError::ChannelGuildMismatch {
                channel_id: star_channel.channel_id,
                expected: star_channel.guild_id,
                actual: channel.guild_id.get(),
            }
            .into());
        }

        if !is_postable(channel.kind) {
            return Err(StartupError::ChannelNotText {
                guild_id: star_channel.guild_id,
                channel_id: star_channel.channel_id,
            }
            .into());
        }

        tracing::info!(
            "Starboard channel for guild {} is #{} ({})",
            star_channel.guild_id,
            channel.name,
            star_channel.channel_id
        );

        channels.push((star_channel.guild_id, star_channel.channel_id));
    }

    let channels: GuildChannelMap = channels.into_iter().collect();
    tracing::info!("Loaded starboard channels for {} guild(s)", channels.len());

    Ok(channels)
}

/// Whether the bot can post plain text messages into a guild channel of this kind.
///
/// Threads and the text chat of voice and stage channels accept messages too; categories,
/// forums and directories do not.
fn is_postable(kind: ChannelType) -> bool {
    matches!(
        kind,
        ChannelType::Text
            | ChannelType::News
            | ChannelType::PublicThread
            | ChannelType::PrivateThread
            | ChannelType::NewsThread
            | ChannelType::Voice
            | ChannelType::Stage
    )
}
