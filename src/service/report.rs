//! Report builders for command replies and the audit channel.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::model::{
    actor::UserSummary,
    guild::{FanOutOutcome, GuildSummary},
    report::{
        truncate_list, truncate_value, ModerationReport, COLOR_BLURPLE, COLOR_GREEN,
        COLOR_PURPLE, COLOR_RED,
    },
};

/// Number of guilds listed by the servers report.
pub const SERVER_LIST_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationKind {
    Ban,
    Unban,
}

/// Builds the report for a completed global ban or unban.
///
/// Guild lists are only included when non-empty. The reason and both guild lists
/// are capped to the embed field limit. Failed guilds are listed as `name (Category)`.
///
/// # Arguments
/// - `kind` - Whether a ban or an unban was issued
/// - `target` - User who was banned or unbanned
/// - `actor` - Staff member who issued the command
/// - `reason` - Ban reason, only shown for bans
/// - `outcome` - Per-guild results of the fan-out
/// - `timestamp` - Time of the action
pub fn build_moderation_report(
    kind: ModerationKind,
    target: &UserSummary,
    actor: &UserSummary,
    reason: Option<&str>,
    outcome: &FanOutOutcome,
    timestamp: DateTime<Utc>,
) -> ModerationReport {
    let (title, color, verb, actor_field, success_field) = match kind {
        ModerationKind::Ban => (
            "🌐 Global Ban Issued",
            COLOR_RED,
            "banned",
            "🛡️ Banned By",
            "✅ Banned In",
        ),
        ModerationKind::Unban => (
            "✅ Global Unban Issued",
            COLOR_GREEN,
            "unbanned",
            "🛡️ Unbanned By",
            "✅ Unbanned In",
        ),
    };

    let mut report = ModerationReport::new(title, color)
        .description(format!("{} has been globally {}.", target.mention(), verb))
        .timestamp(timestamp)
        .thumbnail(target.avatar_url.clone())
        .field("👤 User", format!("{} (`{}`)", target.tag, target.id), false);

    if let Some(reason) = reason {
        report = report.field("📄 Reason", truncate_value(reason), false);
    }

    report = report.field(actor_field, actor.mention(), false);

    if !outcome.succeeded.is_empty() {
        report = report.field(success_field, truncate_list(&outcome.succeeded), false);
    }
    if !outcome.failed.is_empty() {
        let failed: Vec<String> = outcome.failed.iter().map(|f| f.display()).collect();
        report = report.field("⚠️ Failed", truncate_list(&failed), false);
    }

    report.footer(format!("Action by {}", actor.tag), Some(actor.avatar_url.clone()))
}

/// Builds the list of guilds the bot is connected to.
///
/// Only the first `SERVER_LIST_LIMIT` guilds are listed; the footer notes how
/// many were left out.
pub fn build_servers_report(
    guilds: &[GuildSummary],
    requester: &UserSummary,
    timestamp: DateTime<Utc>,
) -> ModerationReport {
    let total = guilds.len();

    let listed: Vec<String> = guilds
        .iter()
        .take(SERVER_LIST_LIMIT)
        .map(|guild| {
            let members = guild
                .member_count
                .map(|count| count.to_string())
                .unwrap_or_else(|| "?".to_string());
            format!("**{}** (`{}`) – 👥 {}", guild.name, guild.id, members)
        })
        .collect();

    let value = if listed.is_empty() {
        "No servers found.".to_string()
    } else {
        truncate_list(&listed)
    };

    let report = ModerationReport::new("📜 Connected Servers", COLOR_BLURPLE)
        .description(format!("The bot is currently in **{}** servers.", total))
        .timestamp(timestamp)
        .field("Servers", value, false);

    if total > SERVER_LIST_LIMIT {
        report.footer(
            format!("...and {} more servers", total - SERVER_LIST_LIMIT),
            None,
        )
    } else {
        report.footer(
            format!("Requested by {}", requester.tag),
            Some(requester.avatar_url.clone()),
        )
    }
}

/// Builds the uptime reply.
pub fn build_uptime_report(uptime: Duration) -> ModerationReport {
    ModerationReport::new("⏱ Bot Uptime", COLOR_PURPLE).field(
        "Uptime",
        format_uptime(uptime),
        true,
    )
}

/// Formats a duration as `{hours}h {minutes}m {seconds}s`, dropping sub-second precision.
pub fn format_uptime(uptime: Duration) -> String {
    let total_seconds = uptime.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {}m {}s", hours, minutes, seconds)
}
