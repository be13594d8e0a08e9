//! Global Ban Test Utils
//!
//! Provides shared testing utilities for the global ban bot.
//!
//! # Overview
//!
//! - **serenity**: Factories building Serenity `User` and `Member` objects from JSON
//! - **fixture**: Temporary ban list files seeded with arbitrary contents
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{fixture::TempBansFile, serenity::create_test_member};
//!
//! #[tokio::test]
//! async fn test_ban_flow() {
//!     let bans_file = TempBansFile::with_contents("{ not json");
//!     let staff = create_test_member(1, "moderator", &[42]);
//!
//!     // Point a BanStore at bans_file.path() and issue commands as `staff`...
//! }
//! ```

pub mod fixture;
pub mod serenity;
