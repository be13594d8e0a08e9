use serenity::all::User;

use crate::{
    bot::{command::ReplySink, Context},
    error::AppError,
    model::{
        actor::{Actor, UserSummary},
        ban::DEFAULT_BAN_REASON,
    },
    service::{moderation::ModerationService, permission::PermissionGuard},
};

/// Globally ban a user from all servers
#[poise::command(prefix_command, slash_command)]
pub async fn globalban(
    ctx: Context<'_>,
    #[description = "User to ban"] user: User,
    #[description = "Reason for the ban"]
    #[rest]
    reason: Option<String>,
) -> Result<(), AppError> {
    let reason = reason.unwrap_or_else(|| DEFAULT_BAN_REASON.to_string());
    let actor = resolve_actor(ctx).await;

    // Banning across many guilds can outlast the interaction response window
    ctx.defer().await?;

    moderation_service(ctx)
        .global_ban(&actor, &UserSummary::from(&user), &reason, &ReplySink::new(ctx))
        .await?;

    Ok(())
}

/// Globally unban a user from all servers
#[poise::command(prefix_command, slash_command)]
pub async fn globalunban(
    ctx: Context<'_>,
    #[description = "User to unban"] user: User,
) -> Result<(), AppError> {
    let actor = resolve_actor(ctx).await;

    ctx.defer().await?;

    moderation_service(ctx)
        .global_unban(&actor, &UserSummary::from(&user), &ReplySink::new(ctx))
        .await?;

    Ok(())
}

fn moderation_service<'a>(ctx: Context<'a>) -> ModerationService<'a> {
    let data = ctx.data();

    ModerationService::new(
        &data.platform,
        &data.store,
        PermissionGuard::new(data.config.staff_role_id),
        data.config.log_channel_id,
    )
}

/// Resolves the invoking user together with their roles when invoked in a guild.
async fn resolve_actor(ctx: Context<'_>) -> Actor {
    match ctx.author_member().await {
        Some(member) => Actor::from(&*member),
        None => {
            if ctx.guild_id().is_some() {
                tracing::debug!(
                    "Could not resolve member {} in guild, treating as plain user",
                    ctx.author().id
                );
            }
            Actor::from(ctx.author())
        }
    }
}
