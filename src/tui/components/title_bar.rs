//! # TitleBar Component
//!
//! One-line header: application title, the endpoint being asked, and a
//! spinner while an answer is on its way.
//!
//! Purely presentational. Every field is a prop set by the parent each frame:
//!
//! - `title`: from config (`ui.title`)
//! - `endpoint`: the resolved answer-service URL
//! - `pending`: `Session::is_pending()`
//! - `spinner_frame`: advanced by the event loop while pending
//!
//! Two forms:
//!
//! 1. Idle: `"System Safety AI Assistant | http://..."`
//! 2. Pending: `"System Safety AI Assistant | http://... | ⠋ Waiting for answer"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    pub title: String,
    pub endpoint: String,
    pub pending: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(title: String, endpoint: String, pending: bool, spinner_frame: usize) -> Self {
        Self {
            title,
            endpoint,
            pending,
            spinner_frame,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let mut spans = vec![
            Span::styled(
                self.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" | ", dim),
            Span::styled(self.endpoint.as_str(), dim),
        ];

        if self.pending {
            let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
            spans.push(Span::styled(" | ", dim));
            spans.push(Span::styled(
                format!("{glyph} Waiting for answer"),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
