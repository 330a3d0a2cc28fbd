use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct Button {
    pub id: &'static str,
    pub label: String,
    pub hotkey: Option<char>,
    pub enabled: bool,
    // Filled in during rendering so mouse clicks can be hit-tested.
    area: Option<Rect>,
}

impl Button {
    pub fn new(id: &'static str, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            hotkey: None,
            enabled: true,
            area: None,
        }
    }

    pub fn with_hotkey(mut self, key: char) -> Self {
        self.hotkey = Some(key);
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn matches_hotkey(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if !self.enabled {
            return false;
        }
        match (key, self.hotkey) {
            (KeyCode::Char(c), Some(hotkey)) => {
                modifiers.contains(KeyModifiers::ALT) && c.eq_ignore_ascii_case(&hotkey)
            }
            _ => false,
        }
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        self.area.is_some_and(|area| {
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        })
    }

    fn render(&mut self, f: &mut Frame, area: Rect, focused: bool) {
        self.area = Some(area);

        let style = if !self.enabled {
            Style::default().fg(Color::DarkGray)
        } else if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = Vec::new();
        if let Some(hotkey) = self.hotkey {
            // Highlight the first occurrence of the hotkey character.
            let mut highlighted = false;
            for ch in self.label.chars() {
                if !highlighted && ch.eq_ignore_ascii_case(&hotkey) && self.enabled {
                    spans.push(Span::styled(ch.to_string(), style.fg(Color::Red)));
                    highlighted = true;
                } else {
                    spans.push(Span::styled(ch.to_string(), style));
                }
            }
        } else {
            spans.push(Span::styled(self.label.clone(), style));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).border_style(style))
            .centered();
        f.render_widget(paragraph, area);
    }
}

/// A horizontal row of buttons with Tab focus cycling, Alt+hotkey
/// activation and mouse hit testing.
#[derive(Debug, Default)]
pub struct ButtonRow {
    buttons: Vec<Button>,
    focused: Option<usize>,
}

impl ButtonRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, button: Button) {
        self.buttons.push(button);
    }

    pub fn set_enabled(&mut self, id: &str, enabled: bool) {
        if let Some(button) = self.buttons.iter_mut().find(|b| b.id == id) {
            button.set_enabled(enabled);
        }
    }

    /// Returns the id of the activated button, if any.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Option<&'static str> {
        if key == KeyCode::Tab && !self.buttons.is_empty() {
            self.focus_next();
            return None;
        }

        if key == KeyCode::Enter {
            if let Some(idx) = self.focused {
                let button = &self.buttons[idx];
                if button.enabled {
                    return Some(button.id);
                }
            }
        }

        self.buttons
            .iter()
            .find(|b| b.matches_hotkey(key, modifiers))
            .map(|b| b.id)
    }

    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<&'static str> {
        for (idx, button) in self.buttons.iter().enumerate() {
            if button.enabled && button.contains(column, row) {
                self.focused = Some(idx);
                return Some(button.id);
            }
        }
        None
    }

    pub fn render(&mut self, f: &mut Frame, areas: &[Rect]) {
        for (idx, area) in areas.iter().enumerate() {
            if let Some(button) = self.buttons.get_mut(idx) {
                let focused = self.focused == Some(idx);
                button.render(f, *area, focused);
            }
        }
    }

    fn focus_next(&mut self) {
        let enabled: Vec<usize> = self
            .buttons
            .iter()
            .enumerate()
            .filter(|(_, b)| b.enabled)
            .map(|(i, _)| i)
            .collect();
        if enabled.is_empty() {
            self.focused = None;
            return;
        }

        self.focused = match self.focused {
            None => Some(enabled[0]),
            Some(current) => {
                let pos = enabled.iter().position(|&i| i == current);
                match pos {
                    Some(p) => Some(enabled[(p + 1) % enabled.len()]),
                    None => Some(enabled[0]),
                }
            }
        };
    }
}
