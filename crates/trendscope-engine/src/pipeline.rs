//! The filter -> sort pipeline.
//!
//! `apply` is a pure function of the record set and the criteria: it never
//! invents records and re-running it with the same inputs yields the same
//! output.

use std::cmp::Ordering;

use trendscope_types::TrendRecord;

use crate::criteria::{Criteria, SortKey, TierFilter, ViralFilter};
use crate::tier::Thresholds;

/// Apply the criteria to the full record set and return the ordered,
/// filtered list.
///
/// Filters run in a fixed order: country, language, category, viral,
/// engagement tier, time-from, time-to. The order only matters for the
/// tier step, whose thresholds are recomputed over the output of all
/// prior filters.
pub fn apply(records: &[TrendRecord], criteria: &Criteria) -> Vec<TrendRecord> {
    let mut list: Vec<TrendRecord> = records.to_vec();

    if let Some(country) = &criteria.country {
        let wanted = country.trim().to_uppercase();
        list.retain(|r| r.region_code() == wanted);
    }

    if let Some(language) = &criteria.language {
        let wanted = language.trim().to_lowercase();
        list.retain(|r| r.language_code() == wanted);
    }

    if let Some(category) = &criteria.category {
        list.retain(|r| r.category_code().as_deref() == Some(category.as_str()));
    }

    match criteria.viral {
        ViralFilter::All => {}
        ViralFilter::ViralOnly => list.retain(|r| r.viral == Some(1)),
        ViralFilter::NotViral => list.retain(|r| r.viral == Some(0)),
    }

    if criteria.tier != TierFilter::All {
        let scores: Vec<f64> = list.iter().map(|r| r.engagement_or_zero()).collect();
        let thresholds = Thresholds::compute(&scores);
        list.retain(|r| thresholds.matches(criteria.tier, r.engagement_or_zero()));
    }

    // Time bounds fail open: a record whose publish time cannot be parsed
    // is never excluded by a range filter.
    if let Some(from) = criteria.time_from {
        list.retain(|r| match r.published_at() {
            Some(ts) => ts >= from,
            None => true,
        });
    }

    if let Some(to) = criteria.time_to {
        list.retain(|r| match r.published_at() {
            Some(ts) => ts <= to,
            None => true,
        });
    }

    sort_records(&mut list, criteria.sort);
    list
}

/// Sort in place. Title sorts lexicographically ascending; every other key
/// sorts numerically descending. A pair where either side's key value is
/// absent compares Equal, and the stable sort then keeps the pair's input
/// order — deliberately a partial order under malformed data.
fn sort_records(list: &mut [TrendRecord], key: SortKey) {
    if key == SortKey::Title {
        list.sort_by(|a, b| {
            a.title
                .as_deref()
                .unwrap_or("")
                .cmp(b.title.as_deref().unwrap_or(""))
        });
        return;
    }

    list.sort_by(|a, b| match (sort_value(a, key), sort_value(b, key)) {
        (Some(va), Some(vb)) => vb.partial_cmp(&va).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    });
}

fn sort_value(record: &TrendRecord, key: SortKey) -> Option<f64> {
    match key {
        SortKey::Views => record.views.map(|v| v as f64),
        SortKey::Likes => record.likes.map(|v| v as f64),
        SortKey::CommentCount => record.comment_count.map(|v| v as f64),
        SortKey::EngagementScore => record.engagement_score,
        SortKey::PublishTime => record.published_at().map(|ts| ts.timestamp_millis() as f64),
        SortKey::Title => None,
    }
}
