use anyhow::{bail, Error, Result};
use std::sync::Arc;

use crate::client::{Artwork, ArtworkSource};
use crate::selection::SelectionStore;

pub const PAGE_SIZE_OPTIONS: [u32; 3] = [12, 24, 48];
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Result of a bulk selection request. A fetch failure mid-loop does
/// not roll back what was already gathered; the error rides along so
/// the caller can report it.
#[derive(Debug)]
pub struct BulkSelectOutcome {
    pub selected: usize,
    pub fetch_error: Option<Error>,
}

/// Coordinates the selection store, the pagination cursor and the
/// currently loaded page window against a page-based artwork source.
///
/// At most one fetch is outstanding at a time: page loads and the
/// bulk-selection loop run sequentially on the control task, and the
/// `busy` flag lets callers gate navigation and further bulk requests
/// while a slow-path selection walks the collection.
pub struct CollectionBrowser {
    source: Arc<dyn ArtworkSource>,
    store: SelectionStore,
    current_page: u32,
    page_size: u32,
    page_window: Vec<Artwork>,
    total: u64,
    busy: bool,
}

impl CollectionBrowser {
    pub fn new(source: Arc<dyn ArtworkSource>, page_size: u32) -> Self {
        Self {
            source,
            store: SelectionStore::new(),
            current_page: 1,
            page_size: page_size.max(1),
            page_window: Vec::new(),
            total: 0,
            busy: false,
        }
    }

    /// Fetch one page and replace the page window with it. The window
    /// is a view only; it never carries selection state.
    pub async fn load_page(&mut self, page: u32, size: u32) -> Result<()> {
        if self.busy {
            bail!("A selection is still in progress");
        }

        self.busy = true;
        let result = self.source.fetch_page(page, size).await;
        self.busy = false;

        let fetched = result?;
        self.current_page = page;
        self.page_size = size;
        self.total = fetched.total;
        self.page_window = fetched.artworks;
        Ok(())
    }

    /// Select the first `target` records of the collection, counted
    /// from the top of the current page.
    ///
    /// Fast path: the target fits on the loaded page, so its prefix is
    /// added directly with no fetch. Slow path: fetch page by page from
    /// the current page onward, taking from the front of each page in
    /// fetch order, until the target is met or an empty page signals
    /// exhaustion. Everything gathered is added in one batch at the
    /// end; a failed fetch aborts the loop but keeps the batch.
    pub async fn request_bulk_select(&mut self, target: usize) -> Result<BulkSelectOutcome> {
        if target == 0 {
            bail!("Row count must be at least 1");
        }
        if self.busy {
            bail!("A selection is already in progress");
        }

        if target <= self.page_window.len() {
            self.store.add(&self.page_window[..target]);
            return Ok(BulkSelectOutcome {
                selected: target,
                fetch_error: None,
            });
        }

        self.busy = true;
        let mut gathered: Vec<Artwork> = Vec::with_capacity(target);
        let mut remaining = target;
        let mut page = self.current_page;
        let mut fetch_error = None;

        while remaining > 0 {
            match self.source.fetch_page(page, self.page_size).await {
                Ok(fetched) => {
                    if fetched.artworks.is_empty() {
                        // Collection exhausted before the target; not an error.
                        log::info!("Collection exhausted after {} records", gathered.len());
                        break;
                    }
                    let take = remaining.min(fetched.artworks.len());
                    gathered.extend(fetched.artworks.into_iter().take(take));
                    remaining -= take;
                    page += 1;
                }
                Err(e) => {
                    log::error!("Bulk selection aborted on page {page}: {e}");
                    fetch_error = Some(e);
                    break;
                }
            }
        }

        let selected = gathered.len();
        self.store.add(&gathered);
        self.busy = false;

        Ok(BulkSelectOutcome {
            selected,
            fetch_error,
        })
    }

    /// Apply the page-level multi-select control's report of checked
    /// rows. The control only ever reports the visible page's current
    /// state, so the whole page is removed first and the checked rows
    /// added back; other pages' selections are untouched.
    pub fn reconcile_page_selection(&mut self, checked: &[Artwork]) {
        let page_ids: Vec<i64> = self.page_window.iter().map(|a| a.id).collect();
        self.store.remove(&page_ids);
        if !checked.is_empty() {
            self.store.add(checked);
        }
    }

    pub fn clear_selection(&mut self) {
        self.store.clear();
    }

    /// Hand over the full selection in a stable order.
    pub fn submit_selection(&self) -> Vec<Artwork> {
        self.store.selected()
    }

    /// The currently visible rows that are selected, in page order.
    pub fn page_selection(&self) -> Vec<Artwork> {
        self.page_window
            .iter()
            .filter(|a| self.store.is_selected(a.id))
            .cloned()
            .collect()
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.store.is_selected(id)
    }

    pub fn selected_count(&self) -> usize {
        self.store.count()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn page_window(&self) -> &[Artwork] {
        &self.page_window
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u32 {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.page_size as u64) as u32
        }
    }

    /// 1-based index of the first visible record, for the paginator.
    pub fn window_offset(&self) -> u64 {
        (self.current_page as u64 - 1) * self.page_size as u64
    }

    #[cfg(test)]
    fn force_busy(&mut self) {
        self.busy = true;
    }
}

pub fn next_page_size(current: u32) -> u32 {
    let position = PAGE_SIZE_OPTIONS.iter().position(|&s| s == current);
    match position {
        Some(i) => PAGE_SIZE_OPTIONS[(i + 1) % PAGE_SIZE_OPTIONS.len()],
        None => PAGE_SIZE_OPTIONS[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ArtworkPage;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    /// In-memory source over a fixed collection that records every
    /// requested page number and can fail on one chosen page.
    struct ScriptedSource {
        artworks: Vec<Artwork>,
        fail_on_page: Option<u32>,
        fetched_pages: Mutex<Vec<u32>>,
    }

    impl ScriptedSource {
        fn with_records(count: i64) -> Self {
            let artworks = (1..=count)
                .map(|id| Artwork {
                    id,
                    title: Some(format!("Artwork {id}")),
                    artist_display: None,
                    place_of_origin: None,
                    inscriptions: None,
                    date_start: None,
                    date_end: None,
                })
                .collect();
            Self {
                artworks,
                fail_on_page: None,
                fetched_pages: Mutex::new(Vec::new()),
            }
        }

        fn failing_on(mut self, page: u32) -> Self {
            self.fail_on_page = Some(page);
            self
        }

        fn fetched_pages(&self) -> Vec<u32> {
            self.fetched_pages.lock().clone()
        }
    }

    #[async_trait]
    impl ArtworkSource for ScriptedSource {
        async fn fetch_page(&self, page: u32, limit: u32) -> Result<ArtworkPage> {
            self.fetched_pages.lock().push(page);
            if self.fail_on_page == Some(page) {
                bail!("simulated fetch failure on page {page}");
            }
            let start = ((page - 1) * limit) as usize;
            let end = (start + limit as usize).min(self.artworks.len());
            let artworks = if start < self.artworks.len() {
                self.artworks[start..end].to_vec()
            } else {
                Vec::new()
            };
            Ok(ArtworkPage {
                artworks,
                total: self.artworks.len() as u64,
            })
        }
    }

    fn browser_over(source: ScriptedSource) -> (Arc<ScriptedSource>, CollectionBrowser) {
        let source = Arc::new(source);
        let browser = CollectionBrowser::new(source.clone(), DEFAULT_PAGE_SIZE);
        (source, browser)
    }

    fn selected_ids(browser: &CollectionBrowser) -> Vec<i64> {
        browser.submit_selection().iter().map(|a| a.id).collect()
    }

    #[tokio::test]
    async fn fast_path_selects_page_prefix_without_fetching() {
        let (source, mut browser) = browser_over(ScriptedSource::with_records(30));
        browser.load_page(1, 12).await.unwrap();

        let outcome = browser.request_bulk_select(5).await.unwrap();

        assert_eq!(outcome.selected, 5);
        assert!(outcome.fetch_error.is_none());
        assert_eq!(selected_ids(&browser), vec![1, 2, 3, 4, 5]);
        // Only the initial page load hit the source.
        assert_eq!(source.fetched_pages(), vec![1]);
    }

    #[tokio::test]
    async fn slow_path_walks_pages_in_order() {
        let (source, mut browser) = browser_over(ScriptedSource::with_records(30));
        browser.load_page(1, 12).await.unwrap();

        let outcome = browser.request_bulk_select(25).await.unwrap();

        assert_eq!(outcome.selected, 25);
        assert!(outcome.fetch_error.is_none());
        assert_eq!(selected_ids(&browser), (1..=25).collect::<Vec<i64>>());
        assert_eq!(source.fetched_pages(), vec![1, 1, 2, 3]);
    }

    #[tokio::test]
    async fn exhaustion_terminates_on_empty_page() {
        let (source, mut browser) = browser_over(ScriptedSource::with_records(30));
        browser.load_page(1, 12).await.unwrap();

        let outcome = browser.request_bulk_select(1000).await.unwrap();

        assert_eq!(outcome.selected, 30);
        assert!(outcome.fetch_error.is_none());
        assert_eq!(browser.selected_count(), 30);
        // Pages 1..3 hold records, page 4 comes back empty and stops the loop.
        assert_eq!(source.fetched_pages(), vec![1, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn partial_failure_keeps_gathered_records_and_reports_error() {
        let (source, mut browser) =
            browser_over(ScriptedSource::with_records(30).failing_on(2));
        browser.load_page(1, 12).await.unwrap();

        let outcome = browser.request_bulk_select(25).await.unwrap();

        assert_eq!(outcome.selected, 12);
        assert!(outcome.fetch_error.is_some());
        assert_eq!(selected_ids(&browser), (1..=12).collect::<Vec<i64>>());
        assert_eq!(source.fetched_pages(), vec![1, 1, 2]);
        assert!(!browser.is_busy());
    }

    #[tokio::test]
    async fn zero_target_is_rejected_before_any_fetch() {
        let (source, mut browser) = browser_over(ScriptedSource::with_records(30));
        browser.load_page(1, 12).await.unwrap();

        assert!(browser.request_bulk_select(0).await.is_err());
        assert_eq!(source.fetched_pages(), vec![1]);
    }

    #[tokio::test]
    async fn busy_browser_rejects_bulk_select_and_navigation() {
        let (_, mut browser) = browser_over(ScriptedSource::with_records(30));
        browser.load_page(1, 12).await.unwrap();
        browser.force_busy();

        assert!(browser.request_bulk_select(5).await.is_err());
        assert!(browser.load_page(2, 12).await.is_err());
    }

    #[tokio::test]
    async fn reconciliation_touches_only_the_visible_page() {
        let (_, mut browser) = browser_over(ScriptedSource::with_records(30));

        // Check all 12 rows on page 1.
        browser.load_page(1, 12).await.unwrap();
        let page_one = browser.page_window().to_vec();
        browser.reconcile_page_selection(&page_one);
        assert_eq!(browser.selected_count(), 12);

        // Visit page 2 without touching anything.
        browser.load_page(2, 12).await.unwrap();
        assert_eq!(browser.selected_count(), 12);

        // Back on page 1, uncheck three specific rows.
        browser.load_page(1, 12).await.unwrap();
        let still_checked: Vec<Artwork> = page_one
            .iter()
            .filter(|a| a.id != 2 && a.id != 5 && a.id != 11)
            .cloned()
            .collect();
        browser.reconcile_page_selection(&still_checked);

        assert_eq!(browser.selected_count(), 9);
        for id in [2, 5, 11] {
            assert!(!browser.is_selected(id));
        }
        for artwork in &still_checked {
            assert!(browser.is_selected(artwork.id));
        }
    }

    #[tokio::test]
    async fn reconciliation_preserves_other_pages_selections() {
        let (_, mut browser) = browser_over(ScriptedSource::with_records(30));

        browser.load_page(2, 12).await.unwrap();
        let page_two_pick = vec![browser.page_window()[0].clone()]; // id 13
        browser.reconcile_page_selection(&page_two_pick);

        browser.load_page(1, 12).await.unwrap();
        let page_one_pick: Vec<Artwork> = browser.page_window()[..4].to_vec();
        browser.reconcile_page_selection(&page_one_pick);

        assert_eq!(browser.selected_count(), 5);
        assert!(browser.is_selected(13));
    }

    #[tokio::test]
    async fn clear_and_submit_round_out_the_surface() {
        let (_, mut browser) = browser_over(ScriptedSource::with_records(30));
        browser.load_page(1, 12).await.unwrap();
        browser.request_bulk_select(7).await.unwrap();

        assert_eq!(browser.submit_selection().len(), 7);
        assert_eq!(browser.page_selection().len(), 7);

        browser.clear_selection();
        assert_eq!(browser.selected_count(), 0);
        assert!(browser.submit_selection().is_empty());
    }

    #[tokio::test]
    async fn paginator_math_tracks_totals() {
        let (_, mut browser) = browser_over(ScriptedSource::with_records(30));
        browser.load_page(1, 12).await.unwrap();

        assert_eq!(browser.total(), 30);
        assert_eq!(browser.total_pages(), 3);
        assert_eq!(browser.window_offset(), 0);

        browser.load_page(3, 12).await.unwrap();
        assert_eq!(browser.page_window().len(), 6);
        assert_eq!(browser.window_offset(), 24);
    }

    #[test]
    fn page_size_cycles_through_options() {
        assert_eq!(next_page_size(12), 24);
        assert_eq!(next_page_size(24), 48);
        assert_eq!(next_page_size(48), 12);
        assert_eq!(next_page_size(7), 12);
    }
}
