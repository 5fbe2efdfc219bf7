use crate::error::{config::ConfigError, AppError};

const DEFAULT_MIN_REACTION_COUNT: u64 = 3;

/// Starboard channel configured for one guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarChannel {
    pub guild_id: u64,
    pub channel_id: u64,
}

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    pub star_channels: Vec<StarChannel>,
    pub min_reaction_count: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let star_channels = require("STARBOARD_CHANNELS")?;
        let min_reaction_count = std::env::var("STARBOARD_MIN_REACTIONS").ok();

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            star_channels: parse_star_channels(&star_channels)?,
            min_reaction_count: parse_min_reaction_count(min_reaction_count.as_deref())?,
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn invalid(name: &str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Parses `guild_id:channel_id` pairs separated by commas.
///
/// Whitespace around entries is ignored, empty entries are skipped. A guild may appear only
/// once.
pub fn parse_star_channels(raw: &str) -> Result<Vec<StarChannel>, ConfigError> {
    const NAME: &str = "STARBOARD_CHANNELS";

    let mut channels: Vec<StarChannel> = Vec::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let Some((guild, channel)) = entry.split_once(':') else {
            return Err(invalid(NAME, raw, format!("'{entry}' is not guild_id:channel_id")));
        };

        let guild_id = parse_snowflake(guild.trim())
            .ok_or_else(|| invalid(NAME, raw, format!("'{guild}' is not a valid guild id")))?;
        let channel_id = parse_snowflake(channel.trim())
            .ok_or_else(|| invalid(NAME, raw, format!("'{channel}' is not a valid channel id")))?;

        if channels.iter().any(|c| c.guild_id == guild_id) {
            return Err(invalid(
                NAME,
                raw,
                format!("guild {guild_id} is configured more than once"),
            ));
        }

        channels.push(StarChannel {
            guild_id,
            channel_id,
        });
    }

    if channels.is_empty() {
        return Err(invalid(NAME, raw, "at least one starboard channel is required"));
    }

    Ok(channels)
}

/// Parses the reaction threshold, defaulting when the variable is unset.
pub fn parse_min_reaction_count(raw: Option<&str>) -> Result<u64, ConfigError> {
    const NAME: &str = "STARBOARD_MIN_REACTIONS";

    let Some(raw) = raw else {
        return Ok(DEFAULT_MIN_REACTION_COUNT);
    };

    match raw.trim().parse::<u64>() {
        Ok(0) => Err(invalid(NAME, raw, "must be at least 1")),
        Ok(count) => Ok(count),
        Err(e) => Err(invalid(NAME, raw, e.to_string())),
    }
}

fn parse_snowflake(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok().filter(|id| *id != 0)
}
