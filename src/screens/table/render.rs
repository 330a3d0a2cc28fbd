use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};
use tui_logger::TuiLoggerWidget;

use crate::statusbar::StatusSummary;

impl super::TableScreen {
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let panel_height = if self.panel_visible() { 5 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),                // Artwork table
                Constraint::Length(panel_height),  // Selected rows panel
                Constraint::Length(1),             // Status bar
            ])
            .split(area);

        self.render_table(f, chunks[0]);
        if self.panel_visible() {
            self.render_panel(f, chunks[1]);
        }

        let summary = self.status_summary();
        self.statusbar.render(f, chunks[2], &summary);

        if self.select_dialog_open {
            self.render_select_dialog(f, area);
        }
        if self.log_view_open {
            self.render_log_view(f, area);
        }
        // A staged bulk request gets one frame with the overlay before
        // the fetch loop starts running.
        if self.pending_bulk.is_some() || self.browser.is_busy() {
            self.render_busy_overlay(f, chunks[0]);
        }
    }

    fn render_table(&mut self, f: &mut Frame, area: Rect) {
        self.table_area = Some(area);

        let header = Row::new(vec![
            Cell::from(" "),
            Cell::from("Title"),
            Cell::from("Artist"),
            Cell::from("Origin"),
            Cell::from("Inscriptions"),
            Cell::from("Date"),
        ])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .browser
            .page_window()
            .iter()
            .enumerate()
            .map(|(idx, artwork)| {
                let checkbox = if self.browser.is_selected(artwork.id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                // Artist display is multi-line on the wire; the table
                // shows the first line only.
                let artist = artwork.artist_text().lines().next().unwrap_or("");

                let mut row = Row::new(vec![
                    Cell::from(checkbox),
                    Cell::from(artwork.title_text().to_string()),
                    Cell::from(artist.to_string()),
                    Cell::from(artwork.origin_text().to_string()),
                    Cell::from(artwork.inscriptions_text().to_string()),
                    Cell::from(artwork.date_text()),
                ]);
                if idx == self.highlighted_row {
                    row = row.style(Style::default().bg(Color::DarkGray));
                } else if self.browser.is_selected(artwork.id) {
                    row = row.style(Style::default().fg(Color::Green));
                }
                row
            })
            .collect();

        let title = Line::from(vec![
            Span::styled(
                " Art Institute of Chicago Collection ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "(space: toggle, a: page, s: select N, c: clear, Enter: submit, z: page size, F12: log) ",
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Percentage(28),
                Constraint::Percentage(22),
                Constraint::Percentage(14),
                Constraint::Percentage(24),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));

        f.render_widget(table, area);

        if self.browser.page_window().is_empty() {
            let empty = Paragraph::new("No artworks found")
                .style(Style::default().fg(Color::DarkGray))
                .centered();
            let inner = Rect {
                x: area.x + 1,
                y: area.y + area.height / 2,
                width: area.width.saturating_sub(2),
                height: 1,
            };
            f.render_widget(empty, inner);
        }
    }

    fn render_busy_overlay(&self, f: &mut Frame, area: Rect) {
        let width = 40.min(area.width);
        let overlay = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height / 2,
            width,
            height: 3,
        };
        f.render_widget(Clear, overlay);
        let message = Paragraph::new("Selecting rows across pages...")
            .style(Style::default().fg(Color::Yellow))
            .centered()
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(message, overlay);
    }

    fn render_log_view(&mut self, f: &mut Frame, area: Rect) {
        let margin = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([Constraint::Min(0)])
            .split(area);
        f.render_widget(Clear, margin[0]);

        let log = TuiLoggerWidget::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Log (Esc to close) "),
            )
            .style_error(Style::default().fg(Color::Red))
            .style_warn(Style::default().fg(Color::Yellow))
            .style_info(Style::default().fg(Color::White))
            .style_debug(Style::default().fg(Color::DarkGray))
            .state(&self.log_state);
        f.render_widget(log, margin[0]);
    }

    fn status_summary(&self) -> StatusSummary {
        let shown = self.browser.page_window().len() as u64;
        let offset = self.browser.window_offset();
        StatusSummary {
            first: if shown == 0 { 0 } else { offset + 1 },
            last: offset + shown,
            total: self.browser.total(),
            page: self.browser.current_page(),
            total_pages: self.browser.total_pages(),
            selected_count: self.browser.selected_count(),
            busy: self.browser.is_busy() || self.pending_bulk.is_some(),
        }
    }
}
