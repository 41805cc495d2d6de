//! Distinct filter choices derived from the loaded record set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use trendscope_types::TrendRecord;

/// The non-"all" choices offered for each coded filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub regions: Vec<String>,
    pub languages: Vec<String>,
    pub categories: Vec<String>,
}

impl Facets {
    /// Collect distinct codes from the records. Data sets produced before
    /// the region/language columns existed have neither, so the region
    /// list falls back to `["IN"]` and languages to `["unknown"]`.
    pub fn from_records(records: &[TrendRecord]) -> Self {
        let mut regions: BTreeSet<String> = BTreeSet::new();
        let mut languages: BTreeSet<String> = BTreeSet::new();
        let mut categories: BTreeSet<String> = BTreeSet::new();

        for record in records {
            if let Some(region) = record.region.as_deref() {
                let region = region.trim();
                if !region.is_empty() {
                    regions.insert(region.to_string());
                }
            }
            languages.insert(record.language_code());
            if let Some(category) = record.category_code() {
                categories.insert(category);
            }
        }

        let regions: Vec<String> = if regions.is_empty() {
            vec!["IN".to_string()]
        } else {
            regions.into_iter().collect()
        };

        let languages: Vec<String> = if records.is_empty() {
            vec!["unknown".to_string()]
        } else {
            languages.into_iter().collect()
        };

        let mut categories: Vec<String> = categories.into_iter().collect();
        categories.sort_by_key(|c| c.parse::<i64>().unwrap_or(i64::MAX));

        Self {
            regions,
            languages,
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_distinct_sorted_codes() {
        let records = vec![
            TrendRecord {
                region: Some("US".into()),
                language: Some("en".into()),
                category_id: Some("24".into()),
                ..Default::default()
            },
            TrendRecord {
                region: Some("IN".into()),
                language: Some("hi".into()),
                category_id: Some("2".into()),
                ..Default::default()
            },
            TrendRecord {
                region: Some("US".into()),
                language: Some("en".into()),
                category_id: Some("10".into()),
                ..Default::default()
            },
        ];
        let facets = Facets::from_records(&records);
        assert_eq!(facets.regions, vec!["IN", "US"]);
        assert_eq!(facets.languages, vec!["en", "hi"]);
        // Numeric sort, not lexicographic.
        assert_eq!(facets.categories, vec!["2", "10", "24"]);
    }

    #[test]
    fn region_fallback_when_no_record_has_one() {
        let records = vec![TrendRecord::default(), TrendRecord::default()];
        let facets = Facets::from_records(&records);
        assert_eq!(facets.regions, vec!["IN"]);
        // Missing languages normalize to "unknown", not an empty list.
        assert_eq!(facets.languages, vec!["unknown"]);
        assert!(facets.categories.is_empty());
    }

    #[test]
    fn empty_record_set_offers_the_fallbacks() {
        let facets = Facets::from_records(&[]);
        assert_eq!(facets.regions, vec!["IN"]);
        assert_eq!(facets.languages, vec!["unknown"]);
    }
}
