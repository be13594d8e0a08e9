//! Domain models shared by the data, service and bot layers.
//!
//! - `ban` - Persisted ban records
//! - `actor` - Invoking users and moderation targets
//! - `guild` - Guild summaries and per-guild fan-out results
//! - `report` - Platform-neutral report messages

pub mod actor;
pub mod ban;
pub mod guild;
pub mod report;
