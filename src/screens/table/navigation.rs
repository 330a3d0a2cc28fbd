use crate::selector::next_page_size;

impl super::TableScreen {
    pub async fn next_page(&mut self) {
        let page = self.browser.current_page();
        if page < self.browser.total_pages() {
            let size = self.browser.page_size();
            self.load_and_report(page + 1, size).await;
        }
    }

    pub async fn prev_page(&mut self) {
        let page = self.browser.current_page();
        if page > 1 {
            let size = self.browser.page_size();
            self.load_and_report(page - 1, size).await;
        }
    }

    pub async fn first_page(&mut self) {
        let size = self.browser.page_size();
        self.load_and_report(1, size).await;
    }

    pub async fn last_page(&mut self) {
        let size = self.browser.page_size();
        let last = self.browser.total_pages();
        self.load_and_report(last, size).await;
    }

    /// Cycle 12 -> 24 -> 48 rows per page, returning to the first page
    /// so the window stays aligned to page boundaries.
    pub async fn cycle_page_size(&mut self) {
        let size = next_page_size(self.browser.page_size());
        self.load_and_report(1, size).await;
    }

    pub(super) async fn load_and_report(&mut self, page: u32, size: u32) {
        if self.browser.is_busy() {
            self.statusbar
                .info("Selection in progress, navigation is locked");
            return;
        }

        match self.browser.load_page(page, size).await {
            Ok(()) => {
                self.clamp_highlight();
            }
            Err(e) => {
                log::error!("Failed to load page {page}: {e}");
                self.statusbar
                    .error("Failed to load artworks. Please try again.");
            }
        }
    }

    pub(super) fn clamp_highlight(&mut self) {
        let rows = self.browser.page_window().len();
        if rows == 0 {
            self.highlighted_row = 0;
        } else if self.highlighted_row >= rows {
            self.highlighted_row = rows - 1;
        }
    }

    pub(super) fn highlight_up(&mut self) {
        self.highlighted_row = self.highlighted_row.saturating_sub(1);
    }

    pub(super) fn highlight_down(&mut self) {
        let rows = self.browser.page_window().len();
        if rows > 0 && self.highlighted_row < rows - 1 {
            self.highlighted_row += 1;
        }
    }
}
