use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

use crate::logging;
use crate::screens::table::TableScreen;
use crate::selector::CollectionBrowser;

pub struct App {
    screen: TableScreen,
}

impl App {
    pub fn new(browser: CollectionBrowser) -> Self {
        Self {
            screen: TableScreen::new(browser),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        enable_raw_mode()?;
        execute!(terminal.backend_mut(), EnterAlternateScreen)?;
        execute!(terminal.backend_mut(), crossterm::event::EnableMouseCapture)?;
        logging::enter_tui_mode();

        let result = self.run_app(&mut terminal).await;

        logging::leave_tui_mode();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), crossterm::event::DisableMouseCapture)?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

        result
    }

    async fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        self.screen.init().await;

        let mut last_tick = Instant::now();
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|f| self.screen.render(f, f.area()))?;

            // A bulk selection staged by the dialog runs here, after
            // the busy overlay has been drawn once. The fetch loop is
            // awaited to completion; one outstanding request at a time.
            if let Some(target) = self.screen.take_pending_bulk() {
                self.screen.run_bulk_select(target).await;
                continue;
            }

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        self.screen.handle_key(key.code, key.modifiers).await?;
                    }
                    Event::Mouse(mouse) => {
                        self.screen.handle_mouse(mouse).await?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.screen.statusbar.tick();
                last_tick = Instant::now();
            }

            if self.screen.quit_requested {
                break;
            }
        }

        Ok(())
    }
}
