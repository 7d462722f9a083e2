use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date, the latter
/// read as midnight UTC.
pub fn deserialize_date_or_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid date `{}`, expected YYYY-MM-DD or an RFC 3339 timestamp",
                raw
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Deserialize)]
    struct Dated {
        #[serde(deserialize_with = "deserialize_date_or_datetime")]
        date: DateTime<Utc>,
    }

    fn parse(json: &str) -> Result<DateTime<Utc>, serde_json::Error> {
        serde_json::from_str::<Dated>(json).map(|d| d.date)
    }

    #[test]
    fn test_plain_date_is_midnight_utc() {
        let date = parse(r#"{"date":"2025-04-09"}"#).unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2025, 4, 9, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_rfc3339_with_offset() {
        let date = parse(r#"{"date":"2025-04-25T10:30:00+02:00"}"#).unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2025, 4, 25, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(parse(r#"{"date":"next tuesday"}"#).is_err());
        assert!(parse(r#"{"date":"2025-13-01"}"#).is_err());
        assert!(parse(r#"{"date":12}"#).is_err());
    }
}
