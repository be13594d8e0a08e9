//! Guild summaries and the result of applying an action to every guild.

use serenity::all::{GuildId, UserId};

use crate::error::platform::PlatformError;

/// Guild the bot is currently a member of.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSummary {
    pub id: GuildId,
    pub name: String,
    /// Approximate member count, unknown for guilds missing from the cache.
    pub member_count: Option<u64>,
}

/// Action applied to each guild during a fan-out.
#[derive(Debug, Clone, PartialEq)]
pub enum GuildAction {
    Ban { user_id: UserId, reason: String },
    Unban { user_id: UserId },
}

impl GuildAction {
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Ban { .. } => "ban",
            Self::Unban { .. } => "unban",
        }
    }
}

/// Guild where the action failed, with the error Discord reported.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildFailure {
    pub guild_name: String,
    pub error: PlatformError,
}

impl GuildFailure {
    /// `name (Category)` form listed in reports.
    pub fn display(&self) -> String {
        format!("{} ({})", self.guild_name, self.error.category())
    }
}

/// Per-guild outcome of one fan-out, in guild enumeration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FanOutOutcome {
    pub succeeded: Vec<String>,
    pub failed: Vec<GuildFailure>,
}

impl FanOutOutcome {
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}
