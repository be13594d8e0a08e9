//! Persistence for the global ban list.
//!
//! The ban list lives in a single pretty-printed JSON file. `BanStore` is the only
//! component that touches the file; callers always read a fresh copy and never
//! cache the list across commands.

pub mod ban_store;

pub use ban_store::BanStore;
