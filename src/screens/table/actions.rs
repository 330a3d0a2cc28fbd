impl super::TableScreen {
    /// Toggle the checkbox of one visible row. The page's checked
    /// state is rebuilt and reconciled as a whole, so selections on
    /// other pages are never disturbed.
    pub fn toggle_row(&mut self, index: usize) {
        let window = self.browser.page_window();
        let Some(target) = window.get(index).cloned() else {
            return;
        };

        let mut checked = self.browser.page_selection();
        if self.browser.is_selected(target.id) {
            checked.retain(|a| a.id != target.id);
        } else {
            checked.push(target);
        }
        self.browser.reconcile_page_selection(&checked);
    }

    /// Header-checkbox behavior: check the whole visible page, or
    /// uncheck it if every row is already checked.
    pub fn toggle_page(&mut self) {
        let window = self.browser.page_window().to_vec();
        if window.is_empty() {
            return;
        }

        let all_checked = window.iter().all(|a| self.browser.is_selected(a.id));
        if all_checked {
            self.browser.reconcile_page_selection(&[]);
        } else {
            self.browser.reconcile_page_selection(&window);
        }
    }

    pub fn clear_selection(&mut self) {
        self.browser.clear_selection();
        self.statusbar.info("Selection cleared");
    }

    /// Hand the selection to the log; the panel's Submit action.
    pub fn submit_selection(&mut self) {
        let selected = self.browser.submit_selection();
        if selected.is_empty() {
            self.statusbar.info("Nothing selected");
            return;
        }

        for artwork in &selected {
            log::info!(
                "Selected artwork {}: {} ({})",
                artwork.id,
                artwork.title_text(),
                artwork.date_text()
            );
        }
        self.statusbar
            .success(format!("Submitted {} artworks to the log", selected.len()));
    }

    /// Run a staged bulk selection. Called from the app loop after a
    /// frame showing the busy state has been drawn.
    pub async fn run_bulk_select(&mut self, target: usize) {
        match self.browser.request_bulk_select(target).await {
            Ok(outcome) => match outcome.fetch_error {
                None => {
                    self.statusbar
                        .success(format!("Selected {} artworks", outcome.selected));
                }
                Some(e) => {
                    log::error!("Bulk selection failed: {e}");
                    self.statusbar.error(format!(
                        "Failed to select rows; kept the {} already gathered",
                        outcome.selected
                    ));
                }
            },
            Err(e) => {
                self.statusbar.error(format!("{e}"));
            }
        }
    }
}
