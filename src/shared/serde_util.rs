//! Custom serde helpers for the price feed wire format.

/// Deserializes a feed timestamp into `DateTime<Utc>`.
///
/// The feed mostly sends RFC 3339 strings (`2023-08-29T07:10:40.000Z`), but
/// hand-maintained feeds also carry naive date-times and bare dates. Naive
/// values are read as UTC, bare dates as midnight UTC.
pub mod feed_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("Invalid date: {}", raw)))
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

}
