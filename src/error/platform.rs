use serenity::all::ChannelId;
use thiserror::Error;

/// Failure of a single call against Discord.
///
/// Per-guild ban and unban failures are never fatal to a command; they are tagged
/// with `category()` and listed in the moderation report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    /// The bot lacks permission in the guild (HTTP 403).
    #[error("Missing permissions: {0}")]
    Forbidden(String),

    /// The user, ban or guild is unknown to Discord (HTTP 404).
    #[error("Unknown resource: {0}")]
    NotFound(String),

    /// Discord rejected the request due to rate limiting (HTTP 429).
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Any other unsuccessful HTTP response.
    #[error("Discord returned HTTP {status}: {message}")]
    Http {
        /// HTTP status code returned by Discord
        status: u16,
        /// Error body as reported by serenity
        message: String,
    },

    /// Destination channel is neither cached nor fetchable.
    #[error("Channel {0} could not be resolved")]
    ChannelNotFound(ChannelId),

    /// Transport, gateway or model error raised before Discord answered.
    #[error("{0}")]
    Client(String),
}

impl PlatformError {
    /// Short category name shown next to a guild in the failure list.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Forbidden(_) => "Forbidden",
            Self::NotFound(_) => "NotFound",
            Self::RateLimited(_) => "RateLimited",
            Self::Http { .. } => "HTTPException",
            Self::ChannelNotFound(_) => "ChannelNotFound",
            Self::Client(_) => "ClientError",
        }
    }
}

impl From<serenity::Error> for PlatformError {
    fn from(err: serenity::Error) -> Self {
        match &err {
            serenity::Error::Http(http_err) => {
                let message = http_err.to_string();
                match http_err.status_code().map(|status| status.as_u16()) {
                    Some(403) => Self::Forbidden(message),
                    Some(404) => Self::NotFound(message),
                    Some(429) => Self::RateLimited(message),
                    Some(status) => Self::Http { status, message },
                    None => Self::Client(message),
                }
            }
            _ => Self::Client(err.to_string()),
        }
    }
}
