//! Business logic for global moderation.
//!
//! Services talk to Discord only through the `Platform` capability so they can be
//! exercised without a gateway connection:
//!
//! - `platform` - Discord capability trait and its Serenity implementation
//! - `permission` - Staff role check for the invoking user
//! - `fan_out` - Applies a ban or unban to every guild, collecting failures
//! - `report` - Builds moderation, server list and uptime reports
//! - `notifier` - Delivers reports to the invoking channel and the audit channel
//! - `moderation` - Orchestrates a global ban or unban end to end

pub mod fan_out;
pub mod moderation;
pub mod notifier;
pub mod permission;
pub mod platform;
pub mod report;

#[cfg(test)]
mod test;
