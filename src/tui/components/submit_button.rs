//! # SubmitButton Component
//!
//! The `[ Ask ]` control beside the input box. Clicking it (or Ctrl+S) is
//! the `SubmitControl` trigger for the submission gate.
//!
//! The button itself decides nothing. It only shows whether it is live;
//! hit testing happens in `ui::hit_test_button` against the layout.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub const LABEL: &str = "Ask";
/// Width of the button column, borders included.
pub const WIDTH: u16 = 9;

pub struct SubmitButton {
    /// False while a request is pending (Prop)
    pub enabled: bool,
}

impl SubmitButton {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.enabled {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style);

        let paragraph = Paragraph::new(LABEL)
            .style(style)
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(paragraph, area);
    }
}
