//! Bot commands and the reply channel they report to.

pub mod info;
pub mod moderation;

use poise::CreateReply;
use serenity::async_trait;

use crate::{
    bot::{BotState, Context},
    error::AppError,
    model::report::ModerationReport,
    service::platform::ReportSink,
};

/// Every command registered with the framework.
pub fn all() -> Vec<poise::Command<BotState, AppError>> {
    vec![
        moderation::globalban(),
        moderation::globalunban(),
        info::servers(),
        info::uptime(),
    ]
}

/// Replies in the channel or interaction a command was invoked from.
pub struct ReplySink<'a> {
    ctx: Context<'a>,
}

impl<'a> ReplySink<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ReportSink for ReplySink<'_> {
    async fn send_report(&self, report: &ModerationReport) -> Result<(), AppError> {
        self.ctx
            .send(CreateReply::default().embed(report.to_embed()))
            .await?;

        Ok(())
    }

    async fn send_notice(&self, text: &str) -> Result<(), AppError> {
        self.ctx.say(text).await?;

        Ok(())
    }
}
