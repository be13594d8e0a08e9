use std::path::PathBuf;

use serenity::all::{ChannelId, GuildId, RoleId};

use crate::error::config::ConfigError;

const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_BANS_FILE: &str = "globalbans.json";

pub struct Config {
    pub discord_token: String,

    /// Channel receiving a copy of every moderation report.
    pub log_channel_id: ChannelId,
    /// Role whose holders may issue global bans and unbans.
    pub staff_role_id: RoleId,

    pub command_prefix: String,
    /// When set, slash commands are registered in this guild only.
    pub test_guild_id: Option<GuildId>,

    pub bans_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require = |name: &str| {
            get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            discord_token: require("DISCORD_TOKEN")?,
            log_channel_id: ChannelId::new(parse_snowflake(
                "LOG_CHANNEL_ID",
                &require("LOG_CHANNEL_ID")?,
            )?),
            staff_role_id: RoleId::new(parse_snowflake(
                "STAFF_ROLE_ID",
                &require("STAFF_ROLE_ID")?,
            )?),
            command_prefix: get("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            test_guild_id: get("TEST_GUILD_ID")
                .map(|value| parse_snowflake("TEST_GUILD_ID", &value))
                .transpose()?
                .map(GuildId::new),
            bans_file: get("BANS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BANS_FILE)),
        })
    }
}

/// Parses a Discord ID, rejecting zero which serenity's ID types cannot hold.
fn parse_snowflake(name: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
