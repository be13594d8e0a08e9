use std::{collections::HashMap, sync::Mutex};

use serenity::{
    all::{ChannelId, GuildId, UserId},
    async_trait,
};
use test_utils::serenity::{create_test_member, create_test_user};

use crate::{
    error::{platform::PlatformError, AppError},
    model::{
        actor::{Actor, UserSummary},
        guild::GuildSummary,
        report::ModerationReport,
    },
    service::platform::{Platform, ReportSink},
};


const STAFF_ROLE_ID: u64 = 4242;
const AUDIT_CHANNEL_ID: u64 = 5555;

/// Call made against the mock platform.
#[derive(Debug, Clone, PartialEq)]
enum PlatformCall {
    Ban {
        guild_id: GuildId,
        user_id: UserId,
        reason: String,
    },
    Unban {
        guild_id: GuildId,
        user_id: UserId,
    },
}

/// In-memory platform recording every call.
///
/// Guilds listed in `failures` fail both bans and unbans with the configured
/// error. Reports sent to any channel other than the reachable ones fail with
/// `ChannelNotFound`.
struct MockPlatform {
    guilds: Vec<GuildSummary>,
    failures: HashMap<GuildId, PlatformError>,
    reachable_channels: Vec<ChannelId>,
    calls: Mutex<Vec<PlatformCall>>,
    sent_reports: Mutex<Vec<(ChannelId, ModerationReport)>>,
}

impl MockPlatform {
    fn new(guilds: Vec<GuildSummary>) -> Self {
        Self {
            guilds,
            failures: HashMap::new(),
            reachable_channels: vec![ChannelId::new(AUDIT_CHANNEL_ID)],
            calls: Mutex::new(Vec::new()),
            sent_reports: Mutex::new(Vec::new()),
        }
    }

    fn failing(mut self, guild_id: u64, error: PlatformError) -> Self {
        self.failures.insert(GuildId::new(guild_id), error);
        self
    }

    fn without_audit_channel(mut self) -> Self {
        self.reachable_channels.clear();
        self
    }

    fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    fn sent_reports(&self) -> Vec<(ChannelId, ModerationReport)> {
        self.sent_reports.lock().unwrap().clone()
    }

    fn result_for(&self, guild_id: GuildId) -> Result<(), PlatformError> {
        match self.failures.get(&guild_id) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Platform for MockPlatform {
    async fn guilds(&self) -> Vec<GuildSummary> {
        self.guilds.clone()
    }

    async fn ban(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        reason: &str,
    ) -> Result<(), PlatformError> {
        self.calls.lock().unwrap().push(PlatformCall::Ban {
            guild_id,
            user_id,
            reason: reason.to_string(),
        });
        self.result_for(guild_id)
    }

    async fn unban(&self, guild_id: GuildId, user_id: UserId) -> Result<(), PlatformError> {
        self.calls
            .lock()
            .unwrap()
            .push(PlatformCall::Unban { guild_id, user_id });
        self.result_for(guild_id)
    }

    async fn send_report(
        &self,
        channel_id: ChannelId,
        report: &ModerationReport,
    ) -> Result<(), PlatformError> {
        if !self.reachable_channels.contains(&channel_id) {
            return Err(PlatformError::ChannelNotFound(channel_id));
        }

        self.sent_reports
            .lock()
            .unwrap()
            .push((channel_id, report.clone()));
        Ok(())
    }
}

/// Reply destination capturing everything sent to the invoking user.
#[derive(Default)]
struct RecordingSink {
    reports: Mutex<Vec<ModerationReport>>,
    notices: Mutex<Vec<String>>,
}

impl RecordingSink {
    fn reports(&self) -> Vec<ModerationReport> {
        self.reports.lock().unwrap().clone()
    }

    fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportSink for RecordingSink {
    async fn send_report(&self, report: &ModerationReport) -> Result<(), AppError> {
        self.reports.lock().unwrap().push(report.clone());
        Ok(())
    }

    async fn send_notice(&self, text: &str) -> Result<(), AppError> {
        self.notices.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn guild(id: u64, name: &str) -> GuildSummary {
    GuildSummary {
        id: GuildId::new(id),
        name: name.to_string(),
        member_count: Some(100),
    }
}

fn forbidden() -> PlatformError {
    PlatformError::Forbidden("Missing Permissions".to_string())
}

fn staff_actor() -> Actor {
    Actor::from(&create_test_member(1001, "moderator", &[STAFF_ROLE_ID]))
}

fn target_user() -> UserSummary {
    UserSummary::from(&create_test_user(123, "spammer"))
}
