//! Timestamp utilities

use chrono::{DateTime, SecondsFormat, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Format a timestamp the way it is stored and sent over the wire
pub fn to_wire(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 timestamp into UTC
pub fn parse_wire(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_now_returns_valid_timestamp() {
        let timestamp = now();
        // Should be a reasonable timestamp (after year 2000)
        assert!(timestamp.timestamp() > 946_684_800);
    }

    #[test]
    fn test_wire_format_round_trips_with_millis() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 0).unwrap();
        let wire = to_wire(&ts);
        assert_eq!(wire, "2024-05-17T08:30:00.000Z");
        assert_eq!(parse_wire(&wire), Some(ts));
    }

    #[test]
    fn test_parse_wire_accepts_offsets() {
        let parsed = parse_wire("2024-05-17T10:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_wire_rejects_garbage() {
        assert!(parse_wire("yesterday").is_none());
        assert!(parse_wire("").is_none());
    }
}
