//! View controller: owns the snapshot, the view parameters and the cached
//! derivations between them.
//!
//! Data flow is store -> filter -> order -> page, with stats and histogram
//! hanging off the store directly. Each cached stage remembers the inputs it
//! was computed from and only reruns when those change:
//!
//! | stage     | inputs                         |
//! |-----------|--------------------------------|
//! | filtered  | store generation, search term  |
//! | ordered   | filtered generation, sort      |
//! | stats     | store generation               |
//! | histogram | store generation               |
//!
//! Paging is a slice of `ordered` and is rebuilt on every view.

use crate::debounce::{Clock, DebounceHandle, Debouncer, SystemClock};
use crate::store::RecordStore;
use crate::Result;
use nodescope_engine::{FeeBucket, NodeStats, PageInfo, aggregate, filter, paginate, sort};
use nodescope_types::{NodeRecord, PageSize, SortConfig, SortKey, ViewState};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub initial: ViewState,
    pub debounce: Duration,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            initial: ViewState::default(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedView<'a> {
    pub rows: Vec<&'a NodeRecord>,
    pub page: PageInfo,
    pub state: ViewState,
    /// Search term typed but not yet applied
    pub pending_search: Option<String>,
    pub stats: NodeStats,
    pub histogram: &'a [FeeBucket],
}

#[derive(Debug)]
struct Memo<K, V> {
    key: Option<K>,
    value: V,
    generation: u64,
}

impl<K: PartialEq, V: Default> Memo<K, V> {
    fn new() -> Self {
        Self {
            key: None,
            value: V::default(),
            generation: 0,
        }
    }

    /// Recompute when `key` differs from the last one. Returns whether it ran.
    fn refresh(&mut self, key: K, compute: impl FnOnce() -> V) -> bool {
        if self.key.as_ref() == Some(&key) {
            return false;
        }
        self.value = compute();
        self.key = Some(key);
        self.generation += 1;
        true
    }
}

pub struct ViewController<C: Clock = SystemClock> {
    store: RecordStore,
    state: ViewState,
    search: Debouncer<String>,
    clock: C,
    filtered: Memo<(u64, String), Vec<usize>>,
    ordered: Memo<(u64, SortConfig), Vec<usize>>,
    stats: Memo<u64, NodeStats>,
    histogram: Memo<u64, Vec<FeeBucket>>,
}

impl Default for ViewController<SystemClock> {
    fn default() -> Self {
        Self::new(ViewOptions::default())
    }
}

impl ViewController<SystemClock> {
    pub fn new(options: ViewOptions) -> Self {
        Self::with_clock(SystemClock, options)
    }
}

impl<C: Clock> ViewController<C> {
    pub fn with_clock(clock: C, options: ViewOptions) -> Self {
        let mut controller = Self {
            store: RecordStore::new(),
            state: options.initial,
            search: Debouncer::new(options.debounce),
            clock,
            filtered: Memo::new(),
            ordered: Memo::new(),
            stats: Memo::new(),
            histogram: Memo::new(),
        };
        controller.recompute();
        controller
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Install the fetched snapshot and rebuild every stage.
    pub fn load(&mut self, records: Vec<NodeRecord>) -> Result<DerivedView<'_>> {
        self.store.load(records)?;
        self.recompute();
        Ok(self.view())
    }

    // Search (debounced)

    /// Record a new search term; it is applied once input has been quiet for
    /// the debounce window. Any earlier pending term is discarded.
    pub fn request_search(&mut self, term: impl Into<String>) -> DebounceHandle {
        let term = term.into();
        debug!(term = %term, "search scheduled");
        self.search.schedule(term, self.clock.now())
    }

    pub fn pending_search(&self) -> Option<&str> {
        self.search.pending().map(String::as_str)
    }

    /// When the pending search becomes due, for event loops that sleep
    pub fn next_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Apply the pending search if its window has elapsed.
    pub fn tick(&mut self) -> Option<DerivedView<'_>> {
        let term = self.search.poll(self.clock.now())?;
        debug!(term = %term, "search fired");
        self.transition(self.state.with_search_term(term));
        Some(self.view())
    }

    /// Apply the pending search now, e.g. when the user presses Enter.
    pub fn flush_search(&mut self) -> DerivedView<'_> {
        if let Some(term) = self.search.flush() {
            self.transition(self.state.with_search_term(term));
        }
        self.view()
    }

    pub fn cancel_search(&mut self) -> bool {
        self.search.cancel().is_some()
    }

    /// Cancel a specific scheduled search; false if it was already superseded
    pub fn cancel_search_handle(&mut self, handle: DebounceHandle) -> bool {
        self.search.cancel_handle(handle)
    }

    // Synchronous transitions

    /// Sort by `key`, flipping direction when it is already the active key.
    pub fn sort_by(&mut self, key: SortKey) -> DerivedView<'_> {
        self.transition(self.state.with_sort_toggled(key));
        self.view()
    }

    /// [`ViewController::sort_by`] for a raw token from the presentation layer.
    pub fn sort_by_token(&mut self, token: &str) -> Result<DerivedView<'_>> {
        let key: SortKey = token.parse()?;
        Ok(self.sort_by(key))
    }

    /// Set key and direction explicitly, without toggling.
    pub fn set_sort(&mut self, sort: SortConfig) -> DerivedView<'_> {
        self.transition(self.state.with_sort(sort));
        self.view()
    }

    pub fn set_page(&mut self, page: usize) -> DerivedView<'_> {
        self.transition(self.state.with_page(page));
        self.view()
    }

    pub fn next_page(&mut self) -> DerivedView<'_> {
        self.set_page(self.state.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> DerivedView<'_> {
        self.set_page(self.state.page.saturating_sub(1))
    }

    pub fn set_page_size(&mut self, page_size: PageSize) -> DerivedView<'_> {
        self.transition(self.state.with_page_size(page_size));
        self.view()
    }

    /// [`ViewController::set_page_size`] for a raw number; rejects sizes
    /// outside 50/100/200.
    pub fn set_page_size_value(&mut self, page_size: usize) -> Result<DerivedView<'_>> {
        let page_size = PageSize::try_from(page_size)?;
        Ok(self.set_page_size(page_size))
    }

    /// Current view without changing any parameter.
    pub fn view(&self) -> DerivedView<'_> {
        let records = self.store.get_all();
        let page = paginate::page_info(
            self.ordered.value.len(),
            self.state.page,
            self.state.page_size,
        );
        let rows = self.ordered.value[page.start_index..page.end_index]
            .iter()
            .map(|&i| &records[i])
            .collect();

        DerivedView {
            rows,
            page,
            state: self.state.clone(),
            pending_search: self.search.pending().cloned(),
            stats: self.stats.value,
            histogram: &self.histogram.value,
        }
    }

    fn transition(&mut self, next: ViewState) {
        self.state = next;
        self.recompute();
    }

    fn recompute(&mut self) {
        let records = self.store.get_all();
        let store_generation = self.store.generation();

        let term = self.state.search_term.clone();
        if self.filtered.refresh((store_generation, term), || {
            filter::matching_indices(records, &self.state.search_term)
        }) {
            debug!(
                rows = self.filtered.value.len(),
                term = %self.state.search_term,
                "filter recomputed"
            );
        }

        let filtered = &self.filtered.value;
        if self
            .ordered
            .refresh((self.filtered.generation, self.state.sort), || {
                let mut order = filtered.clone();
                sort::sort_indices(records, &mut order, self.state.sort);
                order
            })
        {
            debug!(
                key = %self.state.sort.key,
                direction = %self.state.sort.direction,
                "order recomputed"
            );
        }

        if self
            .stats
            .refresh(store_generation, || aggregate::compute_stats(records))
        {
            debug!(generation = store_generation, "stats recomputed");
        }
        self.histogram.refresh(store_generation, || {
            aggregate::compute_fee_histogram(records)
        });

        let total_pages = paginate::total_pages(self.ordered.value.len(), self.state.page_size);
        if self.state.page > total_pages {
            debug!(
                requested = self.state.page,
                total_pages, "page clamped"
            );
        }
        self.state = self.state.clamped(total_pages);
    }
}
