use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::{Duration, Instant};

/// How long a toast stays visible before reverting to the plain
/// status line.
const TOAST_LIFE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastSeverity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    severity: ToastSeverity,
    message: String,
    shown_at: Instant,
}

/// Everything the status line needs to describe the paginator state.
pub struct StatusSummary {
    pub first: u64,
    pub last: u64,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
    pub selected_count: usize,
    pub busy: bool,
}

pub struct StatusBar {
    toast: Option<Toast>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self { toast: None }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(ToastSeverity::Info, message.into());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(ToastSeverity::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(ToastSeverity::Error, message.into());
    }

    fn show(&mut self, severity: ToastSeverity, message: String) {
        match severity {
            ToastSeverity::Error => log::error!("{message}"),
            _ => log::info!("{message}"),
        }
        self.toast = Some(Toast {
            severity,
            message,
            shown_at: Instant::now(),
        });
    }

    /// Drop the toast once its life expires. Called from the app tick.
    pub fn tick(&mut self) {
        if let Some(toast) = &self.toast {
            if toast.shown_at.elapsed() >= TOAST_LIFE {
                self.toast = None;
            }
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, summary: &StatusSummary) {
        let (message, message_style) = match &self.toast {
            Some(toast) => {
                let color = match toast.severity {
                    ToastSeverity::Info => Color::White,
                    ToastSeverity::Success => Color::Green,
                    ToastSeverity::Error => Color::Red,
                };
                (
                    toast.message.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )
            }
            None if summary.busy => (
                "Working...".to_string(),
                Style::default().fg(Color::Yellow),
            ),
            None => ("Ready".to_string(), Style::default().fg(Color::White)),
        };

        let range = if summary.total == 0 {
            "No artworks".to_string()
        } else {
            format!(
                "Showing {} to {} of {} artworks",
                summary.first, summary.last, summary.total
            )
        };

        let line = Line::from(vec![
            Span::styled(format!(" {message}"), message_style),
            Span::raw(" | "),
            Span::raw(range),
            Span::raw(" | "),
            Span::raw(format!("Page {}/{}", summary.page, summary.total_pages)),
            Span::raw(" | "),
            Span::styled(
                format!("{} selected", summary.selected_count),
                Style::default().fg(Color::Magenta),
            ),
        ]);

        let status = Paragraph::new(line).style(Style::default().bg(Color::Blue).fg(Color::White));
        f.render_widget(status, area);
    }
}
