use serde::{Deserialize, Serialize};
use trendscope_types::TrendRecord;

/// Summary statistics over a record list, computed on the filtered set
/// (pre-slice), not the global set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_views: u64,
    pub videos: usize,
    pub viral: usize,
}

/// Purely additive; missing or malformed numeric fields contribute 0, so
/// this is total over well-typed and malformed input alike.
pub fn summarize(records: &[TrendRecord]) -> Summary {
    let mut total_views = 0u64;
    let mut viral = 0usize;

    for record in records {
        total_views = total_views.saturating_add(record.views_or_zero());
        if record.is_viral() {
            viral += 1;
        }
    }

    Summary {
        total_views,
        videos: records.len(),
        viral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_views_and_counts_viral() {
        let records = vec![
            TrendRecord {
                views: Some(100),
                viral: Some(1),
                ..Default::default()
            },
            TrendRecord {
                views: Some(2500),
                viral: Some(0),
                ..Default::default()
            },
            TrendRecord {
                views: None,
                viral: None,
                ..Default::default()
            },
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total_views, 2600);
        assert_eq!(summary.videos, 3);
        assert_eq!(summary.viral, 1);
    }

    #[test]
    fn empty_input_summarizes_to_zeros() {
        let summary = summarize(&[]);
        assert_eq!(
            summary,
            Summary {
                total_views: 0,
                videos: 0,
                viral: 0
            }
        );
    }
}
