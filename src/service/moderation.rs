//! Global ban and unban orchestration.
//!
//! Both commands follow the same flow: check the staff role, update the ban list,
//! apply the action to every guild, then report the per-guild results to the
//! invoking channel and the audit channel.

use chrono::{DateTime, Utc};
use serenity::all::ChannelId;

use crate::{
    data::BanStore,
    error::AppError,
    model::{
        actor::{Actor, UserSummary},
        ban::BanRecord,
        guild::{FanOutOutcome, GuildAction},
        report::ModerationReport,
    },
    service::{
        fan_out::FanOutService,
        notifier::AuditNotifier,
        permission::{PermissionGuard, PERMISSION_DENIED_MESSAGE},
        platform::{Platform, ReportSink},
        report::{build_moderation_report, ModerationKind},
    },
};

/// Result of a global moderation command.
#[derive(Debug, Clone, PartialEq)]
pub enum ModerationOutcome {
    /// The actor lacks the staff role; nothing was changed.
    Denied,
    /// The ban list was updated and every guild was attempted.
    Completed {
        report: ModerationReport,
        outcome: FanOutOutcome,
    },
}

pub struct ModerationService<'a> {
    platform: &'a dyn Platform,
    store: &'a BanStore,
    guard: PermissionGuard,
    audit_channel_id: ChannelId,
}

impl<'a> ModerationService<'a> {
    pub fn new(
        platform: &'a dyn Platform,
        store: &'a BanStore,
        guard: PermissionGuard,
        audit_channel_id: ChannelId,
    ) -> Self {
        Self {
            platform,
            store,
            guard,
            audit_channel_id,
        }
    }

    /// Bans a user from every guild the bot is in.
    ///
    /// The ban is recorded before any guild is contacted, replacing an earlier
    /// record for the same user.
    ///
    /// # Arguments
    /// - `actor` - User who invoked the command
    /// - `target` - User to ban
    /// - `reason` - Reason stored in the ban list and sent to Discord
    /// - `reply` - Channel the command was invoked from
    ///
    /// # Returns
    /// - `Ok(ModerationOutcome::Denied)` - Actor is not staff, denial sent
    /// - `Ok(ModerationOutcome::Completed)` - Ban recorded, guilds attempted, report sent
    /// - `Err(AppError::IoErr)` - Ban list could not be written
    /// - `Err(AppError::DiscordErr)` - Reply could not be sent
    pub async fn global_ban(
        &self,
        actor: &Actor,
        target: &UserSummary,
        reason: &str,
        reply: &dyn ReportSink,
    ) -> Result<ModerationOutcome, AppError> {
        if !self.authorize(actor, target, ModerationKind::Ban, reply).await? {
            return Ok(ModerationOutcome::Denied);
        }

        let now = Utc::now();
        let record = BanRecord::new(reason, actor.user().display_with_id(), now);
        self.store
            .update(|bans| {
                bans.insert(target.id.to_string(), record);
            })
            .await?;

        let action = GuildAction::Ban {
            user_id: target.id,
            reason: reason.to_string(),
        };

        self.fan_out_and_report(actor, target, &action, now, reply).await
    }

    /// Lifts a global ban in every guild the bot is in.
    ///
    /// Unbanning a user with no ban record is not an error; every guild is still
    /// attempted.
    ///
    /// # Arguments
    /// - `actor` - User who invoked the command
    /// - `target` - User to unban
    /// - `reply` - Channel the command was invoked from
    ///
    /// # Returns
    /// - `Ok(ModerationOutcome::Denied)` - Actor is not staff, denial sent
    /// - `Ok(ModerationOutcome::Completed)` - Record removed, guilds attempted, report sent
    /// - `Err(AppError::IoErr)` - Ban list could not be written
    /// - `Err(AppError::DiscordErr)` - Reply could not be sent
    pub async fn global_unban(
        &self,
        actor: &Actor,
        target: &UserSummary,
        reply: &dyn ReportSink,
    ) -> Result<ModerationOutcome, AppError> {
        if !self.authorize(actor, target, ModerationKind::Unban, reply).await? {
            return Ok(ModerationOutcome::Denied);
        }

        let now = Utc::now();
        let removed = self
            .store
            .update(|bans| bans.shift_remove(&target.id.to_string()))
            .await?;

        if removed.is_none() {
            tracing::debug!("User {} had no global ban record", target.id);
        }

        let action = GuildAction::Unban { user_id: target.id };

        self.fan_out_and_report(actor, target, &action, now, reply).await
    }

    /// Checks the staff role and sends the denial message when it is missing.
    async fn authorize(
        &self,
        actor: &Actor,
        target: &UserSummary,
        kind: ModerationKind,
        reply: &dyn ReportSink,
    ) -> Result<bool, AppError> {
        if self.guard.is_authorized(actor) {
            return Ok(true);
        }

        tracing::debug!(
            "User {} lacks the staff role for {:?} of user {}",
            actor.user().id,
            kind,
            target.id
        );
        reply.send_notice(PERMISSION_DENIED_MESSAGE).await?;

        Ok(false)
    }

    async fn fan_out_and_report(
        &self,
        actor: &Actor,
        target: &UserSummary,
        action: &GuildAction,
        timestamp: DateTime<Utc>,
        reply: &dyn ReportSink,
    ) -> Result<ModerationOutcome, AppError> {
        let guilds = self.platform.guilds().await;
        let outcome = FanOutService::new(self.platform).execute(&guilds, action).await;

        tracing::info!(
            "{} issued global {} for {} ({}): {}/{} guilds succeeded",
            actor.user().tag,
            action.verb(),
            target.tag,
            target.id,
            outcome.succeeded.len(),
            outcome.attempted()
        );

        let (kind, reason) = match action {
            GuildAction::Ban { reason, .. } => (ModerationKind::Ban, Some(reason.as_str())),
            GuildAction::Unban { .. } => (ModerationKind::Unban, None),
        };
        let report =
            build_moderation_report(kind, target, actor.user(), reason, &outcome, timestamp);

        AuditNotifier::new(self.platform, self.audit_channel_id)
            .deliver(&report, reply)
            .await?;

        Ok(ModerationOutcome::Completed { report, outcome })
    }
}
