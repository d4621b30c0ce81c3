//! Record timestamps travel as ISO-8601 text, both on the wire and in storage.
//!
//! Reads also accept naive ISO-8601 text (taken as UTC) and native BSON
//! datetimes, so documents written by other tools still decode.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use mongodb::bson;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// Current UTC time at the precision the text form keeps.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(naive.and_utc());
        }
    }
    Err(format!("Invalid ISO-8601 timestamp: {raw}"))
}

pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(ts))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Text(String),
        Native(bson::DateTime),
    }

    match Stored::deserialize(deserializer)? {
        Stored::Text(raw) => parse(&raw).map_err(D::Error::custom),
        Stored::Native(dt) => DateTime::from_timestamp_millis(dt.timestamp_millis())
            .ok_or_else(|| D::Error::custom("BSON datetime out of range")),
    }
}
