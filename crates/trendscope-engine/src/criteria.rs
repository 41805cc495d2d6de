use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Viral-flag filter. Records without a flag match neither side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViralFilter {
    #[default]
    All,
    ViralOnly,
    NotViral,
}

/// Engagement-tier filter, evaluated against thresholds computed over the
/// set that survived all preceding filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TierFilter {
    #[default]
    All,
    Low,
    Mid,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    Title,
    #[default]
    Views,
    Likes,
    CommentCount,
    PublishTime,
    EngagementScore,
}

/// The full set of filter/sort parameters for one render pass. Built once
/// per pass and handed to [`crate::pipeline::apply`] by value, so widget or
/// flag representation stays decoupled from the filtering logic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Criteria {
    /// Region code to match exactly (case-insensitive); `None` means all.
    pub country: Option<String>,
    /// Language code to match exactly (case-insensitive); `None` means all.
    pub language: Option<String>,
    /// Category id to match exactly; `None` means all.
    pub category: Option<String>,
    pub viral: ViralFilter,
    pub tier: TierFilter,
    /// Inclusive lower bound on publish time.
    pub time_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on publish time.
    pub time_to: Option<DateTime<Utc>>,
    pub sort: SortKey,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(mut self, code: impl Into<String>) -> Self {
        self.country = Some(code.into());
        self
    }

    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    pub fn category(mut self, id: impl Into<String>) -> Self {
        self.category = Some(id.into());
        self
    }

    pub fn viral(mut self, filter: ViralFilter) -> Self {
        self.viral = filter;
        self
    }

    pub fn tier(mut self, filter: TierFilter) -> Self {
        self.tier = filter;
        self
    }

    pub fn since(mut self, from: DateTime<Utc>) -> Self {
        self.time_from = Some(from);
        self
    }

    pub fn until(mut self, to: DateTime<Utc>) -> Self {
        self.time_to = Some(to);
        self
    }

    pub fn sort(mut self, key: SortKey) -> Self {
        self.sort = key;
        self
    }
}
