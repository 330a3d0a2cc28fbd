use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_input::backend::crossterm::EventHandler;

impl super::TableScreen {
    pub fn open_select_dialog(&mut self) {
        if self.browser.is_busy() {
            self.statusbar.info("Selection already in progress");
            return;
        }
        self.select_dialog_open = true;
        self.select_input = tui_input::Input::default();
    }

    pub fn close_select_dialog(&mut self) {
        self.select_dialog_open = false;
    }

    pub(super) fn handle_dialog_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Esc => self.close_select_dialog(),
            KeyCode::Enter => self.submit_dialog(),
            _ => {
                if self.dialog_buttons.handle_key(key, modifiers).is_some() {
                    self.submit_dialog();
                    return;
                }
                self.select_input
                    .handle_event(&crossterm::event::Event::Key(
                        crossterm::event::KeyEvent::new(key, modifiers),
                    ));
            }
        }
    }

    /// Validate the entered count; anything other than a positive
    /// number is rejected here, before a single fetch happens.
    fn submit_dialog(&mut self) {
        let raw = self.select_input.value().trim().to_string();
        match raw.parse::<usize>() {
            Ok(count) if count > 0 => {
                self.close_select_dialog();
                self.pending_bulk = Some(count);
            }
            _ => {
                self.statusbar.error("Enter a row count of at least 1");
            }
        }
    }

    pub(super) fn render_select_dialog(&mut self, f: &mut Frame, area: Rect) {
        let dialog_area = centered_rect(36, 8, area);
        f.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(" Select rows... ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        f.render_widget(block, dialog_area);

        let inner = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Input field
                Constraint::Length(3), // Submit button
            ])
            .split(dialog_area);

        let input = Paragraph::new(self.select_input.value())
            .block(Block::default().borders(Borders::ALL).title("Number of rows"));
        f.render_widget(input, inner[0]);
        f.set_cursor_position((
            inner[0].x + self.select_input.visual_cursor() as u16 + 1,
            inner[0].y + 1,
        ));

        let button_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(12),
                Constraint::Min(0),
            ])
            .split(inner[1]);
        self.dialog_buttons.render(f, &[button_area[1]]);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
