use crate::types::{OutputFormat, SortArg, TierArg, ViralArg};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use trendscope_engine::Criteria;
use trendscope_types::format::parse_publish_time;

#[derive(Parser)]
#[command(name = "trendscope")]
#[command(about = "Filter, sort and summarize trending-video data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base URL (overrides TRENDSCOPE_API_BASE and the config file)
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Region code, e.g. US (case-insensitive exact match)
    #[arg(long)]
    pub country: Option<String>,

    /// Language code, e.g. en or zh-cn; "unknown" matches untagged records
    #[arg(long)]
    pub language: Option<String>,

    /// Category id, e.g. 10
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long, default_value = "all")]
    pub viral: ViralArg,

    /// Engagement tier relative to the filtered set
    #[arg(long, default_value = "all")]
    pub tier: TierArg,

    /// Inclusive lower publish-time bound (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// Inclusive upper publish-time bound (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    #[arg(long, default_value = "views")]
    pub sort: SortArg,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> Result<Criteria> {
        let mut criteria = Criteria::new().sort(self.sort.into());
        criteria.country = self.country.clone();
        criteria.language = self.language.clone();
        criteria.category = self.category.as_deref().map(|c| c.trim().to_string());
        criteria.viral = self.viral.into();
        criteria.tier = self.tier.into();

        if let Some(since) = &self.since {
            criteria.time_from =
                Some(parse_time_bound(since).with_context(|| format!("invalid --since {:?}", since))?);
        }
        if let Some(until) = &self.until {
            criteria.time_to =
                Some(parse_time_bound(until).with_context(|| format!("invalid --until {:?}", until))?);
        }

        Ok(criteria)
    }
}

/// Bound values accept full timestamps or a bare date (taken as midnight UTC).
fn parse_time_bound(raw: &str) -> Result<DateTime<Utc>> {
    if let Some(ts) = parse_publish_time(raw) {
        return Ok(ts);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    bail!("not a recognized timestamp: {}", raw)
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filtered, sorted, paginated record listing
    List {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, default_value = "1")]
        page: usize,

        #[arg(long, default_value = "20")]
        page_size: i64,
    },

    /// Summary statistics over the filtered set
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Filter choices available in the current data set
    Facets,

    /// Detail view for a single record
    Show { video_id: String },

    /// Ask the backend to re-run its pipeline and report the result
    Refresh,

    /// Interactive dashboard
    Dash {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, default_value = "20")]
        page_size: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_date_bound_is_midnight_utc() {
        let ts = parse_time_bound("2024-03-01").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }

    #[test]
    fn full_timestamp_bound_parses() {
        assert!(parse_time_bound("2024-03-01T10:00:00Z").is_ok());
        assert!(parse_time_bound("gibberish").is_err());
    }

    #[test]
    fn filter_args_build_criteria() {
        let args = FilterArgs {
            country: Some("us".into()),
            language: None,
            category: Some(" 10 ".into()),
            viral: ViralArg::Viral,
            tier: TierArg::High,
            since: Some("2024-01-01".into()),
            until: None,
            sort: SortArg::Likes,
        };
        let criteria = args.to_criteria().unwrap();
        assert_eq!(criteria.country.as_deref(), Some("us"));
        assert_eq!(criteria.category.as_deref(), Some("10"));
        assert!(criteria.time_from.is_some());
        assert!(criteria.time_to.is_none());
    }
}
