use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{BUTTON_CLEAR, BUTTON_SUBMIT};

impl super::TableScreen {
    /// The floating panel is only shown while something is selected,
    /// mirroring its disappearance when the set goes empty.
    pub(super) fn panel_visible(&self) -> bool {
        self.browser.selected_count() > 0
    }

    pub(super) fn render_panel(&mut self, f: &mut Frame, area: Rect) {
        let count = self.browser.selected_count();

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" Selected Artworks "),
                Span::styled(
                    format!("[{count}] "),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(10),    // Preview of the selection
                Constraint::Length(20), // Submit button
                Constraint::Length(11), // Clear button
            ])
            .split(inner);

        let preview = self.selection_preview();
        let summary = Paragraph::new(preview).style(Style::default().fg(Color::Gray));
        f.render_widget(summary, chunks[0]);

        self.panel_buttons.render(f, &chunks[1..3]);
    }

    fn selection_preview(&self) -> String {
        let selected = self.browser.submit_selection();
        let mut titles: Vec<&str> = selected.iter().take(2).map(|a| a.title_text()).collect();
        if selected.len() > titles.len() {
            titles.push("...");
        }
        titles.join(", ")
    }

    pub(super) fn handle_panel_action(&mut self, action: &str) {
        match action {
            BUTTON_SUBMIT => self.submit_selection(),
            BUTTON_CLEAR => self.clear_selection(),
            _ => {}
        }
    }
}
