//! Pagination over an already-filtered record list.

use serde::{Deserialize, Serialize};
use trendscope_types::TrendRecord;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Clamp an incoming page-size value to something usable; non-positive
/// values reset to the default.
pub fn normalize_page_size(requested: i64) -> usize {
    if requested > 0 {
        requested as usize
    } else {
        DEFAULT_PAGE_SIZE
    }
}

/// One visible page of a filtered list.
///
/// An empty list produces the distinct `Empty` variant rather than a real
/// slice, so callers render a "no data" message instead of an empty table.
/// `total_pages` is still 1 in that case for a stable display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PageView {
    Empty,
    Page {
        items: Vec<TrendRecord>,
        /// 1-based page number after clamping into `[1, total_pages]`.
        number: usize,
        total_pages: usize,
        total: usize,
        /// e.g. "Showing 1–20 of 143".
        label: String,
    },
}

impl PageView {
    pub fn total_pages(&self) -> usize {
        match self {
            PageView::Empty => 1,
            PageView::Page { total_pages, .. } => *total_pages,
        }
    }

    pub fn items(&self) -> &[TrendRecord] {
        match self {
            PageView::Empty => &[],
            PageView::Page { items, .. } => items,
        }
    }
}

/// Slice one page out of the filtered list. The requested page is clamped
/// into range first, so stepping past the last page is a no-op rather than
/// an error.
pub fn paginate(list: &[TrendRecord], page_size: usize, page: usize) -> PageView {
    let total = list.len();
    if total == 0 {
        return PageView::Empty;
    }

    let page_size = page_size.max(1);
    let total_pages = total.div_ceil(page_size);
    let number = page.clamp(1, total_pages);

    let start = (number - 1) * page_size;
    let end = (start + page_size).min(total);
    let items = list[start..end].to_vec();
    let label = format!("Showing {}–{} of {}", start + 1, end, total);

    PageView::Page {
        items,
        number,
        total_pages,
        total,
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(n: usize) -> Vec<TrendRecord> {
        (0..n)
            .map(|i| TrendRecord {
                title: Some(format!("t{}", i)),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn empty_list_yields_the_empty_state() {
        let view = paginate(&[], 20, 1);
        assert!(matches!(view, PageView::Empty));
        assert_eq!(view.total_pages(), 1);
        assert!(view.items().is_empty());
    }

    #[test]
    fn total_pages_is_ceil_of_total_over_size() {
        assert_eq!(paginate(&list(143), 20, 1).total_pages(), 8);
        assert_eq!(paginate(&list(40), 20, 1).total_pages(), 2);
        assert_eq!(paginate(&list(1), 20, 1).total_pages(), 1);
    }

    #[test]
    fn range_label_covers_the_slice() {
        match paginate(&list(143), 20, 1) {
            PageView::Page { label, .. } => assert_eq!(label, "Showing 1–20 of 143"),
            PageView::Empty => panic!("expected a page"),
        }
        match paginate(&list(143), 20, 8) {
            PageView::Page { label, .. } => assert_eq!(label, "Showing 141–143 of 143"),
            PageView::Empty => panic!("expected a page"),
        }
    }

    #[test]
    fn overflowing_page_clamps_to_the_last_page() {
        match paginate(&list(45), 20, 99) {
            PageView::Page { number, items, .. } => {
                assert_eq!(number, 3);
                assert_eq!(items.len(), 5);
            }
            PageView::Empty => panic!("expected a page"),
        }
        // Page 0 clamps up to 1.
        match paginate(&list(45), 20, 0) {
            PageView::Page { number, .. } => assert_eq!(number, 1),
            PageView::Empty => panic!("expected a page"),
        }
    }

    #[test]
    fn concatenated_pages_reconstruct_the_list() {
        let input = list(43);
        let mut seen = Vec::new();
        let total_pages = paginate(&input, 10, 1).total_pages();
        for page in 1..=total_pages {
            seen.extend(paginate(&input, 10, page).items().to_vec());
        }
        let titles = |l: &[TrendRecord]| -> Vec<String> {
            l.iter().map(|r| r.display_title().to_string()).collect()
        };
        assert_eq!(titles(&seen), titles(&input));
    }

    #[test]
    fn page_size_normalization() {
        assert_eq!(normalize_page_size(50), 50);
        assert_eq!(normalize_page_size(0), DEFAULT_PAGE_SIZE);
        assert_eq!(normalize_page_size(-3), DEFAULT_PAGE_SIZE);
    }
}
