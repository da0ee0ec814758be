//! # InputBox Component
//!
//! The question composer.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Show a placeholder when empty
//! - Dim while a request is in flight
//!
//! Enter is *not* handled here. Whether Enter submits or inserts a newline
//! is the submission gate's call; the event loop asks the gate and then
//! either submits or calls [`InputBox::insert_newline`].
//!
//! ## State Management
//!
//! The buffer is internal state and mirrors `Session::draft` through
//! `Action::DraftChanged`. Placeholder and `locked` are props.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary, prev_char_boundary,
    visual_rows,
};

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The text changed; carries nothing, read [`InputBox::text`].
    ContentChanged,
    /// Only the cursor moved.
    CursorMoved,
}

pub struct InputBox {
    buffer: String,
    cursor: CursorState,
    /// Shown in gray when the buffer is empty (Prop)
    pub placeholder: String,
    /// True while a request is pending: border dims and title says so (Prop)
    pub locked: bool,
}

impl InputBox {
    pub fn new(placeholder: String) -> Self {
        Self {
            buffer: String::new(),
            cursor: CursorState::new(),
            placeholder,
            locked: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Empty the buffer, e.g. after the session accepted the draft.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor.reset();
    }

    /// Insert `\n` at the cursor. Used when the gate lets a modified Enter through.
    pub fn insert_newline(&mut self) -> InputEvent {
        self.insert_str("\n")
    }

    fn insert_str(&mut self, text: &str) -> InputEvent {
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
        InputEvent::ContentChanged
    }

    /// Height needed for the current buffer, clamped to
    /// `[1 + VERTICAL_OVERHEAD, MAX_VISIBLE_LINES + VERTICAL_OVERHEAD]`.
    pub fn calculate_height(&self, area_width: u16) -> u16 {
        let rows = visual_rows(&self.buffer, inner_width(area_width)).len();
        u16::try_from(rows)
            .unwrap_or(MAX_VISIBLE_LINES)
            .clamp(1, MAX_VISIBLE_LINES)
            + VERTICAL_OVERHEAD
    }

    fn visible_lines(&self, area_width: u16) -> Vec<Line<'_>> {
        let start = self.cursor.scroll_offset as usize;
        visual_rows(&self.buffer, inner_width(area_width))
            .into_iter()
            .skip(start)
            .take(MAX_VISIBLE_LINES as usize)
            .map(|range| Line::raw(&self.buffer[range]))
            .collect()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_area_width = area.width;
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let (title, border_style) = if self.locked {
            (
                " Question (waiting for answer) ",
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (" Question ", Style::default().fg(Color::Green))
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .title(title);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str()).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(self.visible_lines(area.width)).style(Style::default().fg(Color::Green))
        };

        frame.render_widget(paragraph.block(block), area);

        let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                Some(self.insert_str(c.encode_utf8(&mut tmp)))
            }
            TuiEvent::Paste(text) => Some(self.insert_str(text)),
            TuiEvent::Backspace => (self.cursor.pos > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor.pos < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1, self.cursor.last_area_width)
                .then_some(InputEvent::CursorMoved),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1, self.cursor.last_area_width)
                .then_some(InputEvent::CursorMoved),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(input: &mut InputBox, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new("Ask".into());
        assert!(input.text().is_empty());
        assert!(!input.locked);
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new(String::new());

        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('a')),
            Some(InputEvent::ContentChanged)
        );
        input.handle_event(&TuiEvent::InputChar('é'));
        assert_eq!(input.text(), "aé");

        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(InputEvent::ContentChanged)
        );
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn test_backspace_on_empty_is_none() {
        let mut input = InputBox::new(String::new());
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_enter_is_not_handled_here() {
        let mut input = InputBox::new(String::new());
        input.handle_event(&TuiEvent::Paste("hello".into()));
        assert_eq!(input.handle_event(&TuiEvent::Enter { modifier: false }), None);
        assert_eq!(input.text(), "hello");
    }

    #[test]
    fn test_insert_newline_at_cursor() {
        let mut input = InputBox::new(String::new());
        input.handle_event(&TuiEvent::Paste("ab".into()));
        input.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(input.insert_newline(), InputEvent::ContentChanged);
        assert_eq!(input.text(), "a\nb");
    }

    #[test]
    fn test_cursor_moves_do_not_change_content() {
        let mut input = InputBox::new(String::new());
        input.handle_event(&TuiEvent::Paste("one\ntwo".into()));
        assert_eq!(
            input.handle_event(&TuiEvent::CursorHome),
            Some(InputEvent::CursorMoved)
        );
        assert_eq!(input.handle_event(&TuiEvent::CursorHome), None);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.text(), "one\nwo");
    }

    #[test]
    fn test_clear_resets_buffer() {
        let mut input = InputBox::new(String::new());
        input.handle_event(&TuiEvent::Paste("draft".into()));
        input.clear();
        assert!(input.text().is_empty());
        input.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(input.text(), "x");
    }

    #[test]
    fn test_height_grows_then_caps() {
        let mut input = InputBox::new(String::new());
        assert_eq!(input.calculate_height(40), 1 + VERTICAL_OVERHEAD);
        input.handle_event(&TuiEvent::Paste("a\nb\nc".into()));
        assert_eq!(input.calculate_height(40), 3 + VERTICAL_OVERHEAD);
        input.handle_event(&TuiEvent::Paste("\nd\ne\nf\ng".into()));
        assert_eq!(
            input.calculate_height(40),
            MAX_VISIBLE_LINES + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn test_wide_chars_wrap_by_cell_width() {
        // 6 inner cells hold three ideographs per row
        let mut input = InputBox::new(String::new());
        input.handle_event(&TuiEvent::Paste("日本語日本語".into()));
        assert_eq!(input.calculate_height(10), 2 + VERTICAL_OVERHEAD);

        let text = render_text(&mut input, 10, 2 + VERTICAL_OVERHEAD);
        assert_eq!(text.matches('日').count(), 2, "{text:?}");
        assert_eq!(text.matches('本').count(), 2, "{text:?}");
        assert_eq!(text.matches('語').count(), 2, "{text:?}");
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let mut input = InputBox::new("Type your question here...".into());
        let text = render_text(&mut input, 40, 3);
        assert!(text.contains("Type your question here..."));
        assert!(text.contains("Question"));
    }

    #[test]
    fn test_render_locked_title() {
        let mut input = InputBox::new(String::new());
        input.locked = true;
        let text = render_text(&mut input, 50, 3);
        assert!(text.contains("waiting for answer"));
    }

    #[test]
    fn test_render_wraps_long_draft() {
        let mut input = InputBox::new(String::new());
        input.handle_event(&TuiEvent::Paste("abcdefgh".into()));
        // width 8 → 4 content columns → two rows
        let text = render_text(&mut input, 8, 4);
        assert!(text.contains("abcd"));
        assert!(text.contains("efgh"));
    }
}
