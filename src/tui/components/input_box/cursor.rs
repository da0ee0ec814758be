//! Cursor position tracking and navigation for the InputBox.
//!
//! `CursorState` owns the cursor byte offset and the internal scroll
//! offset. The text itself belongs to `InputBox` and is passed in, so every
//! method works against the buffer it is given. Positions are computed from
//! `visual_rows`, the same layout the box renders. Columns are screen
//! cells, so a wide char moves the cursor two columns.

use ratatui::layout::Rect;

use super::text_wrap::{
    CONTENT_OFFSET_X, CONTENT_OFFSET_Y, MAX_VISIBLE_LINES, byte_at_column, display_width,
    inner_width, row_of, visual_rows,
};

pub(super) struct CursorState {
    /// Byte offset into the buffer (0..=buffer.len()), always on a char boundary
    pub pos: usize,
    /// First visible row when the content is taller than the box
    pub scroll_offset: u16,
    /// Area width from the last render, used for vertical movement between frames
    pub last_area_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_area_width: Self::DEFAULT_WIDTH,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// (row, column) of the cursor in visual rows, column counted in cells.
    pub fn row_col(&self, buffer: &str, area_width: u16) -> (usize, usize) {
        let rows = visual_rows(buffer, inner_width(area_width));
        let row = row_of(&rows, self.pos);
        let col = display_width(&buffer[rows[row].start..self.pos]);
        (row, col)
    }

    /// Move one visual row up (`direction < 0`) or down, keeping the column
    /// where the target row is long enough.
    ///
    /// Returns `true` if the cursor moved.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16, area_width: u16) -> bool {
        let rows = visual_rows(buffer, inner_width(area_width));
        let row = row_of(&rows, self.pos);
        let col = display_width(&buffer[rows[row].start..self.pos]);

        let target = if direction < 0 {
            match row.checked_sub(1) {
                Some(r) => r,
                None => return false,
            }
        } else if row + 1 < rows.len() {
            row + 1
        } else {
            return false;
        };

        self.pos = byte_at_column(buffer, rows[target].clone(), col);
        true
    }

    /// Keep the cursor row inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str, area_width: u16) {
        let total = visual_rows(buffer, inner_width(area_width)).len() as u16;
        if total <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let (row, _) = self.row_col(buffer, area_width);
        let row = row as u16;
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = row + 1 - MAX_VISIBLE_LINES;
        }
        self.scroll_offset = self.scroll_offset.min(total - MAX_VISIBLE_LINES);
    }

    /// Screen cell for the terminal cursor, as (column, row).
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        if inner_width(area.width) == 0 {
            return (area.x + CONTENT_OFFSET_X.min(area.width), area.y + CONTENT_OFFSET_Y);
        }
        let (row, col) = self.row_col(buffer, area.width);
        let visible_row = (row as u16).saturating_sub(self.scroll_offset);
        (
            area.x + CONTENT_OFFSET_X + col as u16,
            area.y + CONTENT_OFFSET_Y + visible_row,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Area width 8 → inner width 4
    const W: u16 = 8;

    fn at(pos: usize) -> CursorState {
        CursorState {
            pos,
            ..CursorState::new()
        }
    }

    #[test]
    fn row_col_on_wrapped_text() {
        let buf = "abcdefghij";
        assert_eq!(at(0).row_col(buf, W), (0, 0));
        assert_eq!(at(3).row_col(buf, W), (0, 3));
        assert_eq!(at(4).row_col(buf, W), (1, 0));
        assert_eq!(at(10).row_col(buf, W), (2, 2));
    }

    #[test]
    fn move_down_keeps_column() {
        let mut c = at(1);
        assert!(c.move_vertically("abcdefgh", 1, W));
        assert_eq!(c.pos, 5);
    }

    #[test]
    fn move_down_clamps_to_short_row() {
        let mut c = at(3);
        assert!(c.move_vertically("abcd\nx", 1, W));
        assert_eq!(c.pos, 6, "end of the one-char second row");
    }

    #[test]
    fn move_up_at_top_is_noop() {
        let mut c = at(2);
        assert!(!c.move_vertically("abc", -1, W));
        assert_eq!(c.pos, 2);
    }

    #[test]
    fn move_down_at_bottom_is_noop() {
        let mut c = at(1);
        assert!(!c.move_vertically("abc", 1, W));
    }

    #[test]
    fn move_up_across_newline() {
        let buf = "ab\ncd";
        let mut c = at(5);
        assert!(c.move_vertically(buf, -1, W));
        assert_eq!(c.pos, 2);
    }

    #[test]
    fn wide_chars_count_two_columns() {
        // "日本" fills the 4-cell row; "語" wraps
        let buf = "日本語";
        assert_eq!(at(3).row_col(buf, W), (0, 2));
        assert_eq!(at(6).row_col(buf, W), (1, 0));
        assert_eq!(at(9).row_col(buf, W), (1, 2));
    }

    #[test]
    fn move_down_from_ascii_into_wide_row_keeps_cell_column() {
        // row 0 "ab", row 1 "日本"; column 2 lands on 本
        let mut c = at(2);
        assert!(c.move_vertically("ab\n日本", 1, W));
        assert_eq!(c.pos, 3 + 3);
    }

    #[test]
    fn screen_pos_after_wide_char() {
        let area = Rect::new(0, 0, W, 4);
        assert_eq!(at(3).screen_pos("日x", area), (2 + 2, 1));
    }

    #[test]
    fn scroll_follows_cursor_down_and_up() {
        let buf = "1\n2\n3\n4\n5\n6\n7";
        let mut c = at(buf.len());
        c.update_scroll_offset(buf, W);
        assert_eq!(c.scroll_offset, 2, "row 6 visible as last of 5");

        c.pos = 0;
        c.update_scroll_offset(buf, W);
        assert_eq!(c.scroll_offset, 0);
    }

    #[test]
    fn screen_pos_accounts_for_border_and_padding() {
        let area = Rect::new(10, 20, W, 4);
        assert_eq!(at(0).screen_pos("abc", area), (12, 21));
        assert_eq!(at(5).screen_pos("abcdefgh", area), (13, 22));
    }
}
