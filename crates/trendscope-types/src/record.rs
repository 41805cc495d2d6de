use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single trending-video record as served by the backend.
///
/// The upstream pipeline writes CSV and re-serializes it as JSON, so field
/// types are not reliable: counts arrive as integers, floats or strings,
/// and any field may be missing entirely. Every field is therefore optional
/// and wrong-typed values degrade to `None` instead of failing the whole
/// payload. Each consumer applies its own documented default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendRecord {
    #[serde(default)]
    pub video_id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_count")]
    pub views: Option<u64>,

    #[serde(default, deserialize_with = "lenient_count")]
    pub likes: Option<u64>,

    #[serde(default, deserialize_with = "lenient_count")]
    pub comment_count: Option<u64>,

    /// Kept verbatim; parsed on demand so malformed values can fail open
    /// in range filters and still display as-is.
    #[serde(default)]
    pub publish_time: Option<String>,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    /// The backend emits this as either a number or a string.
    #[serde(default, deserialize_with = "lenient_code")]
    pub category_id: Option<String>,

    /// Normalized fraction in [0, 1]; displayed as a percentage.
    #[serde(default, deserialize_with = "lenient_score")]
    pub engagement_score: Option<f64>,

    /// Upstream top-quartile flag, encoded as 0/1.
    #[serde(default, deserialize_with = "lenient_flag")]
    pub viral: Option<i64>,
}

impl TrendRecord {
    /// Title for display; missing or empty titles render as "Untitled".
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "Untitled",
        }
    }

    pub fn views_or_zero(&self) -> u64 {
        self.views.unwrap_or(0)
    }

    pub fn likes_or_zero(&self) -> u64 {
        self.likes.unwrap_or(0)
    }

    pub fn comments_or_zero(&self) -> u64 {
        self.comment_count.unwrap_or(0)
    }

    /// Engagement score with the percentile-computation default of 0.
    pub fn engagement_or_zero(&self) -> f64 {
        self.engagement_score.unwrap_or(0.0)
    }

    pub fn is_viral(&self) -> bool {
        self.viral == Some(1)
    }

    /// Region code normalized for comparison: uppercased and trimmed,
    /// empty string when absent.
    pub fn region_code(&self) -> String {
        self.region
            .as_deref()
            .map(|r| r.trim().to_uppercase())
            .unwrap_or_default()
    }

    /// Language code normalized for comparison: lowercased and trimmed,
    /// "unknown" when absent or empty.
    pub fn language_code(&self) -> String {
        match self.language.as_deref().map(str::trim) {
            Some(l) if !l.is_empty() => l.to_lowercase(),
            _ => "unknown".to_string(),
        }
    }

    /// Category id trimmed for exact-match filtering; `None` when absent
    /// or empty, which matches no category filter.
    pub fn category_code(&self) -> Option<String> {
        self.category_id
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
    }

    /// Parsed publish time, if the raw string is parseable at all.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.publish_time
            .as_deref()
            .and_then(crate::format::parse_publish_time)
    }

    /// Deep link to the source video; absent id means no link.
    pub fn watch_url(&self) -> Option<String> {
        self.video_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| format!("https://www.youtube.com/watch?v={}", urlencoding::encode(id)))
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_count))
}

fn coerce_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u64)
            })
        }
        _ => None,
    }
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }))
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::Bool(b) => Some(if *b { 1 } else { 0 }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }))
}

fn lenient_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_well_typed_record() {
        let json = r#"{
            "video_id": "abc123",
            "title": "Hello",
            "views": 1000,
            "likes": 50,
            "comment_count": 7,
            "publish_time": "2024-03-01T10:00:00Z",
            "region": "US",
            "language": "en",
            "category_id": 10,
            "engagement_score": 0.057,
            "viral": 1
        }"#;
        let record: TrendRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.views, Some(1000));
        assert_eq!(record.category_id.as_deref(), Some("10"));
        assert!(record.is_viral());
        assert!(record.published_at().is_some());
    }

    #[test]
    fn wrong_typed_fields_degrade_to_none() {
        let json = r#"{
            "title": "Odd",
            "views": "not a number",
            "likes": null,
            "comment_count": [1, 2],
            "engagement_score": "nope",
            "viral": {"x": 1}
        }"#;
        let record: TrendRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.views, None);
        assert_eq!(record.likes, None);
        assert_eq!(record.comment_count, None);
        assert_eq!(record.engagement_score, None);
        assert_eq!(record.viral, None);
        assert_eq!(record.views_or_zero(), 0);
        assert!(!record.is_viral());
    }

    #[test]
    fn numeric_strings_and_floats_coerce() {
        let json = r#"{"views": "2500", "likes": 12.9, "viral": "0"}"#;
        let record: TrendRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.views, Some(2500));
        assert_eq!(record.likes, Some(12));
        assert_eq!(record.viral, Some(0));
    }

    #[test]
    fn empty_title_displays_as_untitled() {
        let record = TrendRecord {
            title: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(record.display_title(), "Untitled");
        assert_eq!(TrendRecord::default().display_title(), "Untitled");
    }

    #[test]
    fn normalized_codes() {
        let record = TrendRecord {
            region: Some(" in ".to_string()),
            language: Some(" EN ".to_string()),
            category_id: Some(" 10 ".to_string()),
            ..Default::default()
        };
        assert_eq!(record.region_code(), "IN");
        assert_eq!(record.language_code(), "en");
        assert_eq!(record.category_code().as_deref(), Some("10"));

        let empty = TrendRecord::default();
        assert_eq!(empty.region_code(), "");
        assert_eq!(empty.language_code(), "unknown");
        assert_eq!(empty.category_code(), None);
    }

    #[test]
    fn watch_url_encodes_id() {
        let record = TrendRecord {
            video_id: Some("a b&c".to_string()),
            ..Default::default()
        };
        assert_eq!(
            record.watch_url().unwrap(),
            "https://www.youtube.com/watch?v=a%20b%26c"
        );
        assert_eq!(TrendRecord::default().watch_url(), None);
    }
}
