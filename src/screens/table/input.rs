use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};
use tui_logger::TuiWidgetEvent;

impl super::TableScreen {
    pub async fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        if self.log_view_open {
            self.handle_log_view_key(key);
            return Ok(());
        }

        if self.select_dialog_open {
            self.handle_dialog_key(key, modifiers);
            return Ok(());
        }

        // Panel hotkeys (Alt+S submit, Alt+C clear) work from anywhere
        // while the panel is visible.
        if self.panel_visible() {
            if let Some(action) = self.panel_buttons.handle_key(key, modifiers) {
                self.handle_panel_action(action);
                return Ok(());
            }
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit_requested = true;
            }
            KeyCode::Up => self.highlight_up(),
            KeyCode::Down => self.highlight_down(),
            KeyCode::Left | KeyCode::PageUp => self.prev_page().await,
            KeyCode::Right | KeyCode::PageDown => self.next_page().await,
            KeyCode::Home => self.first_page().await,
            KeyCode::End => self.last_page().await,
            KeyCode::Char('z') => self.cycle_page_size().await,
            KeyCode::Char(' ') => {
                self.toggle_row(self.highlighted_row);
            }
            KeyCode::Char('a') => self.toggle_page(),
            KeyCode::Char('s') => self.open_select_dialog(),
            KeyCode::Char('c') => self.clear_selection(),
            KeyCode::Enter => self.submit_selection(),
            KeyCode::F(12) => {
                self.log_view_open = true;
            }
            _ => {}
        }

        Ok(())
    }

    fn handle_log_view_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(12) => {
                self.log_view_open = false;
            }
            KeyCode::Up => self.log_state.transition(TuiWidgetEvent::UpKey),
            KeyCode::Down => self.log_state.transition(TuiWidgetEvent::DownKey),
            KeyCode::PageUp => self.log_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.log_state.transition(TuiWidgetEvent::NextPageKey),
            _ => {}
        }
    }

    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_left_click(mouse.column, mouse.row).await;
            }
            MouseEventKind::ScrollUp => self.highlight_up(),
            MouseEventKind::ScrollDown => self.highlight_down(),
            _ => {}
        }
        Ok(())
    }

    async fn handle_left_click(&mut self, column: u16, row: u16) {
        if self.select_dialog_open {
            // Re-route through the key path so validation is shared.
            if self.dialog_buttons.handle_click(column, row) == Some(super::BUTTON_DIALOG_SUBMIT) {
                self.handle_dialog_key(KeyCode::Enter, KeyModifiers::NONE);
            }
            return;
        }

        if self.panel_visible() {
            if let Some(action) = self.panel_buttons.handle_click(column, row) {
                self.handle_panel_action(action);
                return;
            }
        }

        if let Some(index) = self.row_at(column, row) {
            if self.is_double_click(column, row, Instant::now()) {
                self.highlighted_row = index;
                self.toggle_row(index);
            } else {
                self.highlighted_row = index;
            }
        }
    }

    /// Map a click inside the table body onto a row index. The first
    /// two lines of the table area are the border and the header.
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.table_area?;
        let inside = column > area.x
            && column < area.x + area.width - 1
            && row >= area.y + 2
            && row < area.y + area.height - 1;
        if !inside {
            return None;
        }

        let index = (row - area.y - 2) as usize;
        if index < self.browser.page_window().len() {
            Some(index)
        } else {
            None
        }
    }

    fn is_double_click(&mut self, x: u16, y: u16, now: Instant) -> bool {
        const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(500);
        const DOUBLE_CLICK_DISTANCE: u16 = 2;

        if let (Some(last_time), Some(last_pos)) = (self.last_click_time, self.last_click_position)
        {
            let distance = x.abs_diff(last_pos.0) + y.abs_diff(last_pos.1);
            if now.duration_since(last_time) <= DOUBLE_CLICK_THRESHOLD
                && distance <= DOUBLE_CLICK_DISTANCE
            {
                self.last_click_time = None;
                self.last_click_position = None;
                return true;
            }
        }

        self.last_click_time = Some(now);
        self.last_click_position = Some((x, y));
        false
    }
}
