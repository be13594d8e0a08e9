//! Discord bot built on poise.
//!
//! The bot connects with the guilds, guild members, guild messages and message
//! content intents. Commands only translate between Discord and the services in
//! `crate::service`.

pub mod command;
pub mod start;

use std::time::Instant;

use crate::{config::Config, data::BanStore, error::AppError, service::platform::SerenityPlatform};

/// State shared by every command invocation.
pub struct BotState {
    pub config: Config,
    pub store: BanStore,
    pub platform: SerenityPlatform,
    /// Moment the process started, used by `uptime`.
    pub started_at: Instant,
}

pub type Context<'a> = poise::Context<'a, BotState, AppError>;
