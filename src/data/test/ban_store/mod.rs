use crate::{
    data::ban_store::BanStore,
    model::ban::{BanList, BanRecord},
};
use chrono::{TimeZone, Utc};
use test_utils::fixture::TempBansFile;

mod load;
mod update;

fn record(reason: &str) -> BanRecord {
    BanRecord::new(
        reason,
        "moderator (100)",
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    )
}
