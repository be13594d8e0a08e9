use crate::{
    model::guild::{FanOutOutcome, GuildAction, GuildFailure, GuildSummary},
    service::platform::Platform,
};

/// Applies a ban or unban to each guild in turn.
pub struct FanOutService<'a> {
    platform: &'a dyn Platform,
}

impl<'a> FanOutService<'a> {
    pub fn new(platform: &'a dyn Platform) -> Self {
        Self { platform }
    }

    /// Runs `action` against every guild, one request at a time.
    ///
    /// A failing guild is recorded and skipped; it never stops the remaining
    /// guilds from being attempted. Nothing is retried.
    ///
    /// # Arguments
    /// - `guilds` - Guilds to act on, in the order they should be attempted
    /// - `action` - Ban or unban to apply
    ///
    /// # Returns
    /// - `FanOutOutcome` - Names of guilds that succeeded and guilds that failed with their error
    pub async fn execute(&self, guilds: &[GuildSummary], action: &GuildAction) -> FanOutOutcome {
        let mut outcome = FanOutOutcome::default();

        for guild in guilds {
            let result = match action {
                GuildAction::Ban { user_id, reason } => {
                    self.platform.ban(guild.id, *user_id, reason).await
                }
                GuildAction::Unban { user_id } => self.platform.unban(guild.id, *user_id).await,
            };

            match result {
                Ok(()) => outcome.succeeded.push(guild.name.clone()),
                Err(error) => {
                    tracing::warn!(
                        "Failed to {} user in guild {} ({}): {}",
                        action.verb(),
                        guild.name,
                        guild.id,
                        error
                    );
                    outcome.failed.push(GuildFailure {
                        guild_name: guild.name.clone(),
                        error,
                    });
                }
            }
        }

        outcome
    }
}
