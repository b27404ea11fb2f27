//! Stateful listing controller bound to one view.
//!
//! Every mutation recomputes the filtered and sorted sequence synchronously,
//! so [`ListingController::snapshot`] always reflects a single consistent
//! state of (source, criteria, sort, page).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::filter::FilterCriteria;
use super::paginate::{clamp_page, paginate, total_pages, Page};
use super::predicate::Listing;
use super::sort::{comparator_for, sort_stable, SortSpec};
use crate::models::UserId;

// ---------------------------------------------------------------------------
// ListingParams
// ---------------------------------------------------------------------------

/// One-shot listing request: criteria, sort order and page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingParams {
    pub criteria: FilterCriteria,
    pub sort: SortSpec,
    pub page: usize,
    /// Overrides the view's page size when set.
    pub page_size: Option<usize>,
}

impl Default for ListingParams {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
            page: 1,
            page_size: None,
        }
    }
}

impl ListingParams {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Run the pipeline over `records`, falling back to `view_page_size`.
    pub fn run<'a, T: Listing>(
        &self,
        records: &'a [T],
        viewer: Option<UserId>,
        view_page_size: usize,
    ) -> Page<&'a T> {
        run_pipeline(
            records,
            &self.criteria,
            viewer,
            self.sort,
            self.page,
            self.page_size.unwrap_or(view_page_size),
        )
    }
}

// ---------------------------------------------------------------------------
// Stateless pipeline
// ---------------------------------------------------------------------------

/// Filter, stable-sort and paginate `records` in one pass.
pub fn run_pipeline<'a, T: Listing>(
    records: &'a [T],
    criteria: &FilterCriteria,
    viewer: Option<UserId>,
    sort: SortSpec,
    page: usize,
    page_size: usize,
) -> Page<&'a T> {
    let mut filtered: Vec<&T> = records
        .iter()
        .filter(|r| r.matches(criteria, viewer))
        .collect();
    sort_stable(&mut filtered, sort);
    paginate(&filtered, page_size, page)
}

// ---------------------------------------------------------------------------
// ListingSnapshot
// ---------------------------------------------------------------------------

/// What the presentation layer renders after a recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSnapshot<'a, T> {
    pub filtered_count: usize,
    pub total_count: usize,
    pub current_page_items: Vec<&'a T>,
    pub total_pages: usize,
    pub page: usize,
}

// ---------------------------------------------------------------------------
// ListingController
// ---------------------------------------------------------------------------

/// Owns the state of one listing view.
///
/// The page resets to 1 whenever the filter revision changes (new criteria,
/// new source collection or new viewer). A sort change keeps the current
/// page. The revision counter is exposed so callers can observe exactly
/// when a reset happened.
#[derive(Debug, Clone)]
pub struct ListingController<T: Listing> {
    source: Vec<T>,
    criteria: FilterCriteria,
    sort: SortSpec,
    page: usize,
    page_size: usize,
    viewer: Option<UserId>,
    filter_revision: u64,
    // Indices into `source`, filtered then stable-sorted.
    ordered: Vec<usize>,
}

impl<T: Listing> ListingController<T> {
    /// Create a controller over `source` with default criteria and sort.
    pub fn new(source: Vec<T>, page_size: usize) -> Self {
        let mut controller = Self {
            source,
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
            page: 1,
            page_size: page_size.max(1),
            viewer: None,
            filter_revision: 0,
            ordered: Vec::new(),
        };
        controller.recompute();
        controller
    }

    pub fn with_viewer(mut self, viewer: Option<UserId>) -> Self {
        self.set_viewer(viewer);
        self
    }

    // -- Accessors ---------------------------------------------------------

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn viewer(&self) -> Option<UserId> {
        self.viewer
    }

    pub fn filter_revision(&self) -> u64 {
        self.filter_revision
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.ordered.len(), self.page_size)
    }

    /// The whole filtered and sorted sequence, across all pages.
    pub fn filtered(&self) -> Vec<&T> {
        self.ordered.iter().map(|&i| &self.source[i]).collect()
    }

    // -- Mutations ---------------------------------------------------------

    /// Replace the source collection. Resets to the first page.
    pub fn set_source(&mut self, source: Vec<T>) {
        self.source = source;
        self.bump_revision();
        self.recompute();
    }

    /// Replace the filter criteria. Resets to the first page unless the new
    /// criteria equal the current ones.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria == self.criteria {
            return;
        }
        self.criteria = criteria;
        self.bump_revision();
        self.recompute();
    }

    /// Edit the current criteria in place.
    pub fn update_criteria<F: FnOnce(&mut FilterCriteria)>(&mut self, edit: F) {
        let mut criteria = self.criteria.clone();
        edit(&mut criteria);
        self.set_criteria(criteria);
    }

    pub fn reset_filters(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    pub fn set_viewer(&mut self, viewer: Option<UserId>) {
        if viewer == self.viewer {
            return;
        }
        self.viewer = viewer;
        self.bump_revision();
        self.recompute();
    }

    /// Change the sort order. The current page is kept, clamped into range.
    pub fn set_sort(&mut self, sort: SortSpec) {
        if sort == self.sort {
            return;
        }
        self.sort = sort;
        self.recompute();
    }

    /// Jump to `page`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    // -- Output ------------------------------------------------------------

    pub fn snapshot(&self) -> ListingSnapshot<'_, T> {
        let window = paginate(&self.ordered, self.page_size, self.page);
        ListingSnapshot {
            filtered_count: self.ordered.len(),
            total_count: self.source.len(),
            current_page_items: window.items.iter().map(|&i| &self.source[i]).collect(),
            total_pages: window.total_pages,
            page: window.page,
        }
    }

    // -- Internals ---------------------------------------------------------

    fn bump_revision(&mut self) {
        self.filter_revision += 1;
        self.page = 1;
    }

    fn recompute(&mut self) {
        let criteria = &self.criteria;
        let viewer = self.viewer;
        let source = &self.source;
        let kind = T::KIND;

        let mut ordered: Vec<usize> = source
            .iter()
            .enumerate()
            .filter(|(_, r)| r.matches(criteria, viewer))
            .map(|(i, _)| i)
            .collect();

        let cmp = comparator_for::<T>(self.sort);
        ordered.sort_by(|&a, &b| cmp(&source[a], &source[b]));

        self.page = clamp_page(self.page, total_pages(ordered.len(), self.page_size));
        debug!(
            kind = %kind,
            total = source.len(),
            filtered = ordered.len(),
            revision = self.filter_revision,
            sort = %self.sort,
            page = self.page,
            "recomputed listing"
        );
        self.ordered = ordered;
    }
}
