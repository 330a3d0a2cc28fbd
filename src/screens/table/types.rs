use ratatui::layout::Rect;
use std::time::Instant;
use tui_input::Input;
use tui_logger::TuiWidgetState;

use crate::components::button::{Button, ButtonRow};
use crate::selector::CollectionBrowser;
use crate::statusbar::StatusBar;

pub const BUTTON_SUBMIT: &str = "submit";
pub const BUTTON_CLEAR: &str = "clear";
pub const BUTTON_DIALOG_SUBMIT: &str = "dialog_submit";

pub struct TableScreen {
    pub browser: CollectionBrowser,
    pub statusbar: StatusBar,

    // Table state
    pub highlighted_row: usize,
    pub table_area: Option<Rect>,

    // "Select rows..." dialog
    pub select_dialog_open: bool,
    pub select_input: Input,
    pub dialog_buttons: ButtonRow,
    // A bulk request staged by the dialog; the app loop draws one
    // frame (so the busy state is visible) and then runs it.
    pub pending_bulk: Option<usize>,

    // Selected rows panel
    pub panel_buttons: ButtonRow,

    // Log view overlay
    pub log_view_open: bool,
    pub log_state: TuiWidgetState,

    // Mouse state for double-click detection
    pub last_click_time: Option<Instant>,
    pub last_click_position: Option<(u16, u16)>,

    pub quit_requested: bool,
}

impl TableScreen {
    pub fn new(browser: CollectionBrowser) -> Self {
        let mut panel_buttons = ButtonRow::new();
        panel_buttons.push(Button::new(BUTTON_SUBMIT, "Submit Selection").with_hotkey('s'));
        panel_buttons.push(Button::new(BUTTON_CLEAR, "Clear").with_hotkey('c'));

        let mut dialog_buttons = ButtonRow::new();
        dialog_buttons.push(Button::new(BUTTON_DIALOG_SUBMIT, "Submit"));

        Self {
            browser,
            statusbar: StatusBar::new(),
            highlighted_row: 0,
            table_area: None,
            select_dialog_open: false,
            select_input: Input::default(),
            dialog_buttons,
            pending_bulk: None,
            panel_buttons,
            log_view_open: false,
            log_state: TuiWidgetState::new().set_default_display_level(log::LevelFilter::Debug),
            last_click_time: None,
            last_click_position: None,
            quit_requested: false,
        }
    }

    /// Load the first page before the event loop starts.
    pub async fn init(&mut self) {
        let size = self.browser.page_size();
        self.load_and_report(1, size).await;
    }

    pub fn take_pending_bulk(&mut self) -> Option<usize> {
        self.pending_bulk.take()
    }
}
