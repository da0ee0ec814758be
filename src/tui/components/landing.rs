//! # Landing Component
//!
//! Shown in place of the transcript while the history is empty.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct LandingPage {
    pub title: String,
}

impl LandingPage {
    pub fn new(title: String) -> Self {
        Self { title }
    }

    fn lines(&self) -> Vec<Line<'_>> {
        vec![
            Line::from(Span::styled(
                self.title.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Ask a question below and press Enter.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "Shift+Enter or Ctrl+J for a new line, Esc to quit.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            centered,
        );
    }
}
