//! Dashboard state machine.
//!
//! One value owns everything the dashboard shows: the loaded record set,
//! the active criteria, page bookkeeping, the load phase and the detail
//! selection. Transitions are explicit methods; the record set is only
//! ever replaced wholesale, never mutated per record.

use trendscope_engine::{
    apply, normalize_page_size, paginate, summarize, Criteria, Facets, PageView, Summary,
    DEFAULT_PAGE_SIZE,
};
use trendscope_types::TrendRecord;

/// Load phase of the dashboard. `NoData` is a successful fetch with zero
/// records — an informational state, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    NoData,
    Failed(String),
}

/// Everything needed for one render pass, recomputed in full on demand.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub page: PageView,
    pub summary: Summary,
}

#[derive(Debug, Clone)]
pub struct DashState {
    records: Vec<TrendRecord>,
    pub criteria: Criteria,
    pub page: usize,
    pub page_size: usize,
    pub phase: Phase,
    /// Open detail view, orthogonal to the load phase.
    pub detail: Option<TrendRecord>,
    /// Transient refresh-failure banner; existing records stay visible.
    pub banner: Option<String>,
    /// Cooperative single-in-flight guard for the refresh action.
    pub refreshing: bool,
}

impl Default for DashState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashState {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            criteria: Criteria::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            phase: Phase::Loading,
            detail: None,
            banner: None,
            refreshing: false,
        }
    }

    pub fn records(&self) -> &[TrendRecord] {
        &self.records
    }

    /// Enter the loading phase for an initial load or retry.
    pub fn begin_load(&mut self) {
        self.phase = Phase::Loading;
        self.banner = None;
    }

    /// Complete an initial load or retry. A failure here clears the list;
    /// an empty result is the distinct no-data state.
    pub fn finish_load(&mut self, result: Result<Vec<TrendRecord>, String>) {
        match result {
            Ok(records) => self.replace_records(records),
            Err(message) => {
                self.records.clear();
                self.phase = Phase::Failed(message);
                self.page = 1;
            }
        }
    }

    pub fn begin_refresh(&mut self) {
        self.refreshing = true;
        self.banner = None;
    }

    /// Complete a refresh. Unlike an initial load, a refresh failure keeps
    /// the previously loaded records on screen and only raises a banner.
    pub fn finish_refresh(&mut self, result: Result<Vec<TrendRecord>, String>) {
        self.refreshing = false;
        match result {
            Ok(records) => self.replace_records(records),
            Err(message) => self.banner = Some(message),
        }
    }

    fn replace_records(&mut self, records: Vec<TrendRecord>) {
        self.phase = if records.is_empty() {
            Phase::NoData
        } else {
            Phase::Ready
        };
        self.records = records;
        self.page = 1;
    }

    /// Change any filter or sort criterion. Always resets to page 1.
    pub fn set_criteria(&mut self, criteria: Criteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    /// Mutate the criteria in place (widget-style updates). Resets to
    /// page 1 like any criteria change.
    pub fn update_criteria(&mut self, f: impl FnOnce(&mut Criteria)) {
        f(&mut self.criteria);
        self.page = 1;
    }

    /// Change the page size. The current page is clamped against the new
    /// page count, not reset — distinct from a criteria change.
    pub fn set_page_size(&mut self, requested: i64) {
        self.page_size = normalize_page_size(requested);
        self.clamp_page();
    }

    /// Step forward; overshoot is clamped back, so stepping past the last
    /// page is a no-op.
    pub fn next_page(&mut self) {
        self.page += 1;
        self.clamp_page();
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    fn clamp_page(&mut self) {
        let filtered = apply(&self.records, &self.criteria);
        let total_pages = paginate(&filtered, self.page_size, self.page).total_pages();
        self.page = self.page.clamp(1, total_pages);
    }

    pub fn open_detail(&mut self, record: TrendRecord) {
        self.detail = Some(record);
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Filter choices derived from the full loaded set (not the filtered
    /// subset, so narrowing one filter never empties the others).
    pub fn facets(&self) -> Facets {
        Facets::from_records(&self.records)
    }

    /// Run the full pipeline and pagination for the current criteria.
    /// Summary statistics cover the whole filtered set, pre-slice.
    pub fn snapshot(&self) -> Snapshot {
        let filtered = apply(&self.records, &self.criteria);
        let summary = summarize(&filtered);
        let page = paginate(&filtered, self.page_size, self.page);
        Snapshot { page, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendscope_engine::SortKey;

    fn records(n: usize) -> Vec<TrendRecord> {
        (0..n)
            .map(|i| TrendRecord {
                title: Some(format!("t{}", i)),
                views: Some(i as u64),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn load_success_reaches_ready() {
        let mut state = DashState::new();
        assert_eq!(state.phase, Phase::Loading);
        state.finish_load(Ok(records(3)));
        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.records().len(), 3);
    }

    #[test]
    fn empty_load_is_no_data_not_failure() {
        let mut state = DashState::new();
        state.finish_load(Ok(Vec::new()));
        assert_eq!(state.phase, Phase::NoData);
    }

    #[test]
    fn load_failure_clears_the_list() {
        let mut state = DashState::new();
        state.finish_load(Ok(records(3)));
        state.begin_load();
        state.finish_load(Err("HTTP 500: Internal Server Error".to_string()));
        assert_eq!(
            state.phase,
            Phase::Failed("HTTP 500: Internal Server Error".to_string())
        );
        assert!(state.records().is_empty());
    }

    #[test]
    fn refresh_failure_keeps_records_and_raises_banner() {
        let mut state = DashState::new();
        state.finish_load(Ok(records(5)));
        state.begin_refresh();
        assert!(state.refreshing);
        state.finish_refresh(Err("db unavailable".to_string()));
        assert!(!state.refreshing);
        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.records().len(), 5);
        assert_eq!(state.banner.as_deref(), Some("db unavailable"));
    }

    #[test]
    fn refresh_success_replaces_wholesale_and_clears_banner() {
        let mut state = DashState::new();
        state.finish_load(Ok(records(5)));
        state.banner = Some("stale".to_string());
        state.begin_refresh();
        state.finish_refresh(Ok(records(2)));
        assert_eq!(state.records().len(), 2);
        assert_eq!(state.banner, None);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn criteria_change_resets_page() {
        let mut state = DashState::new();
        state.finish_load(Ok(records(100)));
        state.next_page();
        state.next_page();
        assert_eq!(state.page, 3);
        state.update_criteria(|c| c.sort = SortKey::Likes);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn page_size_change_clamps_instead_of_resetting() {
        let mut state = DashState::new();
        state.finish_load(Ok(records(100)));
        state.page = 3; // pages of 20 -> 5 pages
        state.set_page_size(50); // now 2 pages
        assert_eq!(state.page, 2);
        assert_eq!(state.page_size, 50);

        // Shrinking further while already in range keeps the page.
        state.page = 1;
        state.set_page_size(10);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn invalid_page_size_resets_to_default() {
        let mut state = DashState::new();
        state.finish_load(Ok(records(10)));
        state.set_page_size(0);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn next_past_the_end_is_a_no_op() {
        let mut state = DashState::new();
        state.finish_load(Ok(records(25)));
        state.next_page();
        assert_eq!(state.page, 2);
        state.next_page();
        assert_eq!(state.page, 2); // 25 records / 20 per page -> 2 pages
        state.prev_page();
        assert_eq!(state.page, 1);
        state.prev_page();
        assert_eq!(state.page, 1);
    }

    #[test]
    fn detail_is_orthogonal_to_phase() {
        let mut state = DashState::new();
        state.finish_load(Ok(records(3)));
        state.open_detail(state.records()[0].clone());
        assert_eq!(state.phase, Phase::Ready);
        assert!(state.detail.is_some());
        state.close_detail();
        assert!(state.detail.is_none());
        assert_eq!(state.phase, Phase::Ready);
    }

    #[test]
    fn snapshot_summary_covers_the_filtered_set_not_the_page() {
        let mut state = DashState::new();
        state.finish_load(Ok(records(30)));
        let snapshot = state.snapshot();
        assert_eq!(snapshot.summary.videos, 30);
        assert_eq!(snapshot.page.items().len(), 20);
    }
}
