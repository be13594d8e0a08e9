//! Test fixtures providing on-disk test data.
//!
//! - `bans_file::TempBansFile` - Ban list file inside a throwaway directory

pub mod bans_file;

pub use bans_file::TempBansFile;
