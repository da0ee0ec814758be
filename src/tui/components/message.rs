use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::action::ERROR_NOTICE;
use crate::core::message::{Message, Role};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// One transcript entry drawn as a bordered card titled with its role label.
///
/// Built fresh every frame by `MessageList` for the messages in view. It
/// holds nothing but a borrow of the message.
///
/// Questions are green, answers blue. The fixed failure notice is an
/// ordinary assistant message; it is only tinted yellow so it stands out.
#[derive(Clone, Copy)]
pub struct MessageCard<'a> {
    pub message: &'a Message,
}

impl<'a> MessageCard<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }

    /// Rows this card needs at `width`, without rendering it.
    ///
    /// Uses `textwrap` with the options that match `Paragraph`'s wrapping, so
    /// the list can lay out its scroll canvas up front.
    pub fn calculate_height(message: &Message, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }

        let content = message.content().trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .max(1)
            .saturating_add(VERTICAL_OVERHEAD)
    }

    fn style(&self) -> Style {
        match self.message.role() {
            Role::User => Style::default().fg(Color::Green),
            Role::Assistant if self.message.content() == ERROR_NOTICE => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
            Role::Assistant => Style::default().fg(Color::Blue),
        }
    }
}

impl<'a> Widget for MessageCard<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = self.style();
        let border_style = style.remove_modifier(Modifier::ITALIC);

        let block = Block::bordered()
            .title(format!(" {} ", self.message.role().label()))
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style.add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.message.content().trim())
            .style(style)
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
    }
}

impl<'a> Component for MessageCard<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
