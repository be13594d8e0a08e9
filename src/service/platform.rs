//! Discord capability used by the services.

use std::sync::Arc;

use serenity::{
    all::{Cache, ChannelId, CreateMessage, GuildId, UserId},
    async_trait,
    http::Http,
};

use crate::{
    error::{platform::PlatformError, AppError},
    model::{guild::GuildSummary, report::ModerationReport},
};

/// Prefix added to the audit log reason of every global ban.
pub const BAN_REASON_PREFIX: &str = "[GlobalBan] ";

/// Longest reason Discord accepts for an audit log entry.
const AUDIT_LOG_REASON_LIMIT: usize = 512;

/// Prefixes a ban reason for the guild audit log, capped at the audit log limit.
fn audit_log_reason(reason: &str) -> String {
    format!("{}{}", BAN_REASON_PREFIX, reason)
        .chars()
        .take(AUDIT_LOG_REASON_LIMIT)
        .collect()
}

/// Live view of the guilds the bot is in plus the per-guild actions it can take.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Guilds the bot currently belongs to, in enumeration order.
    async fn guilds(&self) -> Vec<GuildSummary>;

    async fn ban(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        reason: &str,
    ) -> Result<(), PlatformError>;

    async fn unban(&self, guild_id: GuildId, user_id: UserId) -> Result<(), PlatformError>;

    /// Posts a report to a channel by ID.
    async fn send_report(
        &self,
        channel_id: ChannelId,
        report: &ModerationReport,
    ) -> Result<(), PlatformError>;
}

/// Destination of a command's reply, i.e. wherever the command was invoked.
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn send_report(&self, report: &ModerationReport) -> Result<(), AppError>;

    /// Sends a plain text reply.
    async fn send_notice(&self, text: &str) -> Result<(), AppError>;
}

/// `Platform` backed by the Serenity cache and HTTP client.
pub struct SerenityPlatform {
    cache: Arc<Cache>,
    http: Arc<Http>,
}

impl SerenityPlatform {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>) -> Self {
        Self { cache, http }
    }
}

#[async_trait]
impl Platform for SerenityPlatform {
    async fn guilds(&self) -> Vec<GuildSummary> {
        self.cache
            .guilds()
            .into_iter()
            .map(|guild_id| match self.cache.guild(guild_id) {
                Some(guild) => GuildSummary {
                    id: guild_id,
                    name: guild.name.clone(),
                    member_count: Some(guild.member_count),
                },
                // Guild is still unavailable after connecting
                None => GuildSummary {
                    id: guild_id,
                    name: guild_id.to_string(),
                    member_count: None,
                },
            })
            .collect()
    }

    async fn ban(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        reason: &str,
    ) -> Result<(), PlatformError> {
        guild_id
            .ban_with_reason(&*self.http, user_id, 0, audit_log_reason(reason))
            .await
            .map_err(PlatformError::from)
    }

    async fn unban(&self, guild_id: GuildId, user_id: UserId) -> Result<(), PlatformError> {
        guild_id
            .unban(&*self.http, user_id)
            .await
            .map_err(PlatformError::from)
    }

    async fn send_report(
        &self,
        channel_id: ChannelId,
        report: &ModerationReport,
    ) -> Result<(), PlatformError> {
        if let Err(e) = channel_id.to_channel((&self.cache, &*self.http)).await {
            tracing::debug!("Failed to resolve channel {}: {}", channel_id, e);
            return Err(PlatformError::ChannelNotFound(channel_id));
        }

        let message = CreateMessage::new().embed(report.to_embed());
        channel_id.send_message(&*self.http, message).await?;

        Ok(())
    }
}
