//! Display formatting for counts, engagement scores and timestamps.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Compact count formatting: 1.2B / 3.4M / 5.6K, plain below a thousand.
pub fn format_count(n: u64) -> String {
    let n = n as f64;
    if n >= 1e9 {
        format!("{:.1}B", n / 1e9)
    } else if n >= 1e6 {
        format!("{:.1}M", n / 1e6)
    } else if n >= 1e3 {
        format!("{:.1}K", n / 1e3)
    } else {
        format!("{}", n as u64)
    }
}

/// Engagement score as a percentage with two decimals; missing scores
/// render as a dash.
pub fn format_engagement(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{:.2}%", s * 100.0),
        None => "—".to_string(),
    }
}

/// Parse a publish timestamp. The backend emits either RFC 3339 (straight
/// from the video API) or pandas' `YYYY-MM-DD HH:MM:SS[.frac][+tz]` string
/// form, so both are accepted. Naive values are taken as UTC.
pub fn parse_publish_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Human-readable publish time. Unparseable values display verbatim;
/// missing values display as a dash.
pub fn format_publish_time(raw: Option<&str>) -> String {
    match raw {
        Some(s) => match parse_publish_time(s) {
            Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            None => s.to_string(),
        },
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_scales() {
        assert_eq!(format_count(100), "100");
        assert_eq!(format_count(2500), "2.5K");
        assert_eq!(format_count(5_000_000), "5.0M");
        assert_eq!(format_count(1_200_000_000), "1.2B");
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn engagement_percentage() {
        assert_eq!(format_engagement(Some(0.057)), "5.70%");
        assert_eq!(format_engagement(Some(0.0)), "0.00%");
        assert_eq!(format_engagement(None), "—");
    }

    #[test]
    fn parses_rfc3339_and_pandas_forms() {
        assert!(parse_publish_time("2024-03-01T10:00:00Z").is_some());
        assert!(parse_publish_time("2024-03-01 10:00:00+00:00").is_some());
        assert!(parse_publish_time("2024-03-01 10:00:00.123456").is_some());
        assert!(parse_publish_time("not a date").is_none());
        assert!(parse_publish_time("").is_none());
    }

    #[test]
    fn publish_time_display_falls_back_to_raw() {
        assert_eq!(
            format_publish_time(Some("2024-03-01T10:30:00Z")),
            "2024-03-01 10:30"
        );
        assert_eq!(format_publish_time(Some("garbled")), "garbled");
        assert_eq!(format_publish_time(None), "—");
    }
}
