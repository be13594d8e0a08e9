//! Domain models for the persisted global ban list.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Global ban list keyed by the banned user's ID in string form.
///
/// Presence of a key means the user is currently globally banned. Entries keep
/// the order they were first added in.
pub type BanList = IndexMap<String, BanRecord>;

/// Reason used when a ban is issued without one.
pub const DEFAULT_BAN_REASON: &str = "No reason provided";

/// Latest global ban issued against a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BanRecord {
    /// Free-text reason given by the issuing staff member.
    pub reason: String,
    /// Display string of the issuing staff member, `name (id)`.
    pub banned_by: String,
    /// Moment the ban was recorded.
    #[serde(rename = "time")]
    pub timestamp: BanTime,
}

impl BanRecord {
    pub fn new(
        reason: impl Into<String>,
        banned_by: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            reason: reason.into(),
            banned_by: banned_by.into(),
            timestamp: BanTime::new(timestamp),
        }
    }
}

/// Time a ban was recorded, together with the text it is stored as.
///
/// New times are written as RFC 3339. Older lists stored naive UTC ISO-8601
/// strings without an offset; those are accepted on read and written back
/// exactly as they were found.
#[derive(Debug, Clone)]
pub struct BanTime {
    at: DateTime<Utc>,
    raw: String,
}

impl BanTime {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            at,
            raw: at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }

    /// Parses a stored time, with or without a UTC offset.
    pub fn parse(raw: &str) -> Result<Self, chrono::ParseError> {
        let at = match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => parsed.with_timezone(&Utc),
            Err(_) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")?.and_utc(),
        };

        Ok(Self {
            at,
            raw: raw.to_string(),
        })
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Equal when both denote the same instant, however they are written.
impl PartialEq for BanTime {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

impl Serialize for BanTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for BanTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        BanTime::parse(&raw).map_err(serde::de::Error::custom)
    }
}
