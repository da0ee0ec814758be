//! Row layout and dimensional constants for the InputBox.
//!
//! The input box does its own hard wrapping instead of relying on
//! `Paragraph::wrap`, so the rows it draws and the rows the cursor math
//! walks are the same rows. Widths are terminal cells, not chars: a CJK
//! ideograph or an emoji takes two.

use std::ops::Range;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Border (2) + horizontal padding (2)
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible content rows before internal scrolling kicks in
pub(super) const MAX_VISIBLE_LINES: u16 = 5;
/// Column offset from area edge to the first content cell (border + padding)
pub(super) const CONTENT_OFFSET_X: u16 = 2;
/// Row offset from area edge to the first content row (border)
pub(super) const CONTENT_OFFSET_Y: u16 = 1;

/// Inner content width after borders and padding. 0 if the area is too narrow.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Cells a single char occupies. Control chars count as zero.
fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cells `text` occupies on screen.
pub(super) fn display_width(text: &str) -> usize {
    text.width()
}

/// Split `text` into visual rows of at most `width` cells, as byte ranges.
///
/// Each `\n` ends a row and is not part of any range. An empty logical line
/// (including a trailing one after a final `\n`) is one empty row. A char
/// wider than the whole row still gets a row of its own. Always returns at
/// least one row.
pub(super) fn visual_rows(text: &str, width: u16) -> Vec<Range<usize>> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    let mut line_start = 0;

    for line in text.split('\n') {
        let mut row_start = line_start;
        let mut cells_in_row = 0;
        for (i, c) in line.char_indices() {
            let w = char_width(c);
            if cells_in_row > 0 && cells_in_row + w > width {
                rows.push(row_start..line_start + i);
                row_start = line_start + i;
                cells_in_row = 0;
            }
            cells_in_row += w;
        }
        rows.push(row_start..line_start + line.len());
        line_start += line.len() + 1;
    }

    rows
}

/// Byte offset inside `row` at screen column `col`, clamped to the row end.
///
/// Lands on the start of a wide char rather than in its second cell.
pub(super) fn byte_at_column(text: &str, row: Range<usize>, col: usize) -> usize {
    let mut cells = 0;
    for (i, c) in text[row.clone()].char_indices() {
        let w = char_width(c);
        if cells + w > col {
            return row.start + i;
        }
        cells += w;
    }
    row.end
}

/// Index of the row the byte offset `pos` sits on.
///
/// At a soft-wrap boundary the cursor belongs to the following row, which
/// is where the next typed character will appear.
pub(super) fn row_of(rows: &[Range<usize>], pos: usize) -> usize {
    rows.partition_point(|r| r.start <= pos).saturating_sub(1)
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
