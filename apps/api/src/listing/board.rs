//! Listing session state: the full record list, the filter state and the
//! pagination window of one mounted job-browsing page.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::listing::filter::{apply_filters, FilterState, PostedWithin};
use crate::listing::hydrator::{hydrate_filters, resolve_detail, QueryParams};
use crate::listing::pagination::PaginationWindow;
use crate::listing::saved;
use crate::models::job::JobRecord;

/// Partial filter change. Absent fields are left alone. For the salary
/// bounds, an explicit `null` clears the bound.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterUpdate {
    pub search_term: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub posted_within: Option<PostedWithin>,
    #[serde(default, deserialize_with = "present")]
    pub min_salary: Option<Option<u64>>,
    #[serde(default, deserialize_with = "present")]
    pub max_salary: Option<Option<u64>>,
    pub only_saved: Option<bool>,
}

/// Distinguishes `"field": null` (Some(None)) from a missing field (None).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl FilterUpdate {
    pub fn apply_to(self, current: &FilterState) -> FilterState {
        let mut next = current.clone();
        if let Some(search_term) = self.search_term {
            next.search_term = search_term;
        }
        if let Some(location) = self.location {
            next.location = location;
        }
        if let Some(job_type) = self.job_type {
            next.job_type = job_type;
        }
        if let Some(posted_within) = self.posted_within {
            next.more_filters.posted_within = posted_within;
        }
        if let Some(min_salary) = self.min_salary {
            next.more_filters.min_salary = min_salary;
        }
        if let Some(max_salary) = self.max_salary {
            next.more_filters.max_salary = max_salary;
        }
        if let Some(only_saved) = self.only_saved {
            next.more_filters.only_saved = only_saved;
        }
        next
    }
}

/// One rendered page of a listing.
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub jobs: Vec<JobRecord>,
    pub total_matches: usize,
    pub total_records: usize,
    pub visible_count: usize,
    pub can_load_more: bool,
    pub filters: FilterState,
    /// False when nothing is filtered; lets the client hide "clear filters".
    pub filters_active: bool,
    pub detail: Option<JobRecord>,
}

#[derive(Debug, Clone)]
pub struct JobBoard {
    records: Vec<JobRecord>,
    filters: FilterState,
    window: PaginationWindow,
    detail_id: Option<String>,
}

impl JobBoard {
    pub fn new(records: Vec<JobRecord>) -> Self {
        Self {
            records,
            filters: FilterState::default(),
            window: PaginationWindow::new(),
            detail_id: None,
        }
    }

    /// Creates a board and seeds it from query parameters, opening the detail
    /// view when `jobId` names a known record.
    pub fn mount(records: Vec<JobRecord>, params: &QueryParams) -> Self {
        let mut board = Self::new(records);
        board.hydrate(params);
        board
    }

    /// Applies query parameters on top of the current filters. Always resets
    /// the pagination window.
    pub fn hydrate(&mut self, params: &QueryParams) -> Option<&JobRecord> {
        self.filters = hydrate_filters(params, &self.filters);
        self.window.reset();
        if let Some(record) = resolve_detail(params, &self.records) {
            self.detail_id = Some(record.id.clone());
        }
        debug!(filters = ?self.filters, detail = ?self.detail_id, "Hydrated listing filters");
        self.detail()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Applies a partial update. Returns whether any field changed; only a
    /// real change resets the pagination window.
    pub fn update_filters(&mut self, update: FilterUpdate) -> bool {
        let next = update.apply_to(&self.filters);
        self.replace_filters(next)
    }

    pub fn clear_filters(&mut self) -> bool {
        self.replace_filters(FilterState::default())
    }

    fn replace_filters(&mut self, next: FilterState) -> bool {
        if next == self.filters {
            return false;
        }
        debug!(filters = ?next, "Filters changed, resetting pagination");
        self.filters = next;
        self.window.reset();
        true
    }

    pub fn filtered(&self) -> Vec<&JobRecord> {
        apply_filters(&self.records, &self.filters)
    }

    pub fn can_load_more(&self) -> bool {
        self.window.can_load_more(self.filtered().len())
    }

    pub fn load_more(&mut self) -> usize {
        let total = self.filtered().len();
        self.window.load_more(total)
    }

    /// Toggles `saved` on a record of the full list, visible or not.
    /// The filters and window are left as they are.
    pub fn toggle_saved(&mut self, id: &str) -> Option<bool> {
        saved::toggle_saved(&mut self.records, id)
    }

    pub fn find(&self, id: &str) -> Option<&JobRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn detail(&self) -> Option<&JobRecord> {
        self.detail_id.as_deref().and_then(|id| self.find(id))
    }

    pub fn close_detail(&mut self) {
        self.detail_id = None;
    }

    pub fn page(&self) -> ListingPage {
        let filtered = self.filtered();
        let total_matches = filtered.len();
        ListingPage {
            jobs: self.window.slice(&filtered).iter().map(|r| (*r).clone()).collect(),
            total_matches,
            total_records: self.records.len(),
            visible_count: self.window.visible_count(total_matches),
            can_load_more: self.window.can_load_more(total_matches),
            filters: self.filters.clone(),
            filters_active: self.filters.has_active_filters(),
            detail: self.detail().cloned(),
        }
    }
}
