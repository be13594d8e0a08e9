use serenity::all::ChannelId;

use crate::{
    error::AppError,
    model::report::ModerationReport,
    service::platform::{Platform, ReportSink},
};

/// Delivers moderation reports to the invoking channel and the audit channel.
pub struct AuditNotifier<'a> {
    platform: &'a dyn Platform,
    audit_channel_id: ChannelId,
}

impl<'a> AuditNotifier<'a> {
    pub fn new(platform: &'a dyn Platform, audit_channel_id: ChannelId) -> Self {
        Self {
            platform,
            audit_channel_id,
        }
    }

    /// Replies with the report, then copies it to the audit channel.
    ///
    /// Audit delivery is best effort: failures are logged and never reach the
    /// user who ran the command.
    ///
    /// # Arguments
    /// - `report` - Report to send
    /// - `primary` - Where the command was invoked
    ///
    /// # Returns
    /// - `Ok(())` - Reply sent, audit copy attempted
    /// - `Err(AppError)` - The reply itself could not be sent
    pub async fn deliver(
        &self,
        report: &ModerationReport,
        primary: &dyn ReportSink,
    ) -> Result<(), AppError> {
        primary.send_report(report).await?;

        if let Err(e) = self
            .platform
            .send_report(self.audit_channel_id, report)
            .await
        {
            tracing::warn!(
                "Could not send report to audit channel {}: {}",
                self.audit_channel_id,
                e
            );
        }

        Ok(())
    }
}
