use chrono::Utc;

use crate::{
    bot::{command::ReplySink, Context},
    error::AppError,
    model::actor::UserSummary,
    service::{
        platform::{Platform, ReportSink},
        report::{build_servers_report, build_uptime_report},
    },
};

/// List the servers the bot is in
#[poise::command(prefix_command)]
pub async fn servers(ctx: Context<'_>) -> Result<(), AppError> {
    let guilds = ctx.data().platform.guilds().await;
    let report = build_servers_report(&guilds, &UserSummary::from(ctx.author()), Utc::now());

    ReplySink::new(ctx).send_report(&report).await
}

/// Show how long the bot has been running
#[poise::command(prefix_command)]
pub async fn uptime(ctx: Context<'_>) -> Result<(), AppError> {
    let report = build_uptime_report(ctx.data().started_at.elapsed());

    ReplySink::new(ctx).send_report(&report).await
}
