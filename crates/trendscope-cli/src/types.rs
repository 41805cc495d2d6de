use clap::ValueEnum;
use std::fmt;

use trendscope_engine::{SortKey, TierFilter, ViralFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ViralArg {
    All,
    Viral,
    NotViral,
}

impl From<ViralArg> for ViralFilter {
    fn from(arg: ViralArg) -> Self {
        match arg {
            ViralArg::All => ViralFilter::All,
            ViralArg::Viral => ViralFilter::ViralOnly,
            ViralArg::NotViral => ViralFilter::NotViral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TierArg {
    All,
    Low,
    Mid,
    High,
}

impl From<TierArg> for TierFilter {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::All => TierFilter::All,
            TierArg::Low => TierFilter::Low,
            TierArg::Mid => TierFilter::Mid,
            TierArg::High => TierFilter::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SortArg {
    Title,
    Views,
    Likes,
    Comments,
    Published,
    Engagement,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Title => SortKey::Title,
            SortArg::Views => SortKey::Views,
            SortArg::Likes => SortKey::Likes,
            SortArg::Comments => SortKey::CommentCount,
            SortArg::Published => SortKey::PublishTime,
            SortArg::Engagement => SortKey::EngagementScore,
        }
    }
}
