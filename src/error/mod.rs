//! Error types for the bot.
//!
//! `AppError` is the top-level error returned from commands and startup. Failures
//! reported by Discord for a single guild or channel are kept apart in
//! `PlatformError` so they can be collected into moderation reports instead of
//! aborting a command.

pub mod config;
pub mod platform;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Returned from every command so poise can route it to its error handler. Storage
/// corruption never shows up here since the ban store repairs itself; a failed
/// write to the ban file does.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error while writing the ban list file.
    #[error("Ban list I/O error: {0}")]
    IoErr(#[from] std::io::Error),

    /// Ban list could not be serialized.
    #[error("Ban list serialization error: {0}")]
    JsonErr(#[from] serde_json::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
