//! # MessageList Component
//!
//! Scrollable transcript of the conversation.
//!
//! ## Responsibilities
//!
//! - Lay out every message as a card, top to bottom, in history order
//! - Cache card heights so only new messages are measured
//! - Follow the history: whenever it changes, glide to the bottom
//! - Let the user scroll back with the wheel or PageUp/PageDown
//!
//! ## Following the history
//!
//! The list never diffs messages. It remembers the last `History::revision`
//! it reacted to; a different revision on the next render means the history
//! changed, and that fires exactly one scroll-to-bottom. The scroll itself is
//! eased over several frames (see [`ease_step`]) rather than jumping, and the
//! event loop keeps redrawing while [`MessageListState::is_animating`] holds.
//!
//! A manual scroll up unpins the view and cancels any glide in progress.
//! The next history change pins it again.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::message::History;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageCard;
use crate::tui::event::TuiEvent;

/// Fraction of the remaining distance covered per animation frame.
const EASE_DIVISOR: u16 = 3;

/// Next scroll offset on the way from `current` to `target`.
///
/// Moves a third of the remaining distance, at least one row, and never
/// overshoots. Returns `target` once there.
pub fn ease_step(current: u16, target: u16) -> u16 {
    if current < target {
        let step = ((target - current) / EASE_DIVISOR).max(1);
        current + step
    } else if current > target {
        let step = ((current - target) / EASE_DIVISOR).max(1);
        current - step
    } else {
        target
    }
}

/// Persistent scroll and layout state for the transcript.
/// Lives in `TuiState` across frames.
pub struct MessageListState {
    pub scroll_state: ScrollViewState,
    pub layout: LayoutCache,
    /// When true the view stays at the bottom as content grows or the terminal resizes
    pub stick_to_bottom: bool,
    /// Viewport height from the last render (for clamping between frames)
    pub viewport_height: u16,
    /// History revision the view last scrolled for
    seen_revision: u64,
    /// A glide to the bottom is in progress
    animating: bool,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            stick_to_bottom: true,
            viewport_height: 0,
            seen_revision: 0,
            animating: false,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Record `revision`. Returns true the first time a new revision is seen,
    /// false on every later call with the same value.
    pub fn observe(&mut self, revision: u64) -> bool {
        if revision == self.seen_revision {
            return false;
        }
        self.seen_revision = revision;
        true
    }

    fn max_offset(&self) -> u16 {
        self.layout
            .total_height()
            .saturating_sub(self.viewport_height)
    }

    /// Advance the scroll position by one frame.
    fn sync_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();

        let y = if self.animating {
            let next = ease_step(current.y.min(max_y), max_y);
            if next == max_y {
                self.animating = false;
            }
            next
        } else if self.stick_to_bottom {
            max_y
        } else {
            current.y.min(max_y)
        };

        self.scroll_state.set_offset(Position { x: current.x, y });
    }

    /// Re-engage auto-follow if a scroll down reached the bottom.
    fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    fn unpin(&mut self) {
        self.stick_to_bottom = false;
        self.animating = false;
    }
}

/// Transcript view. Created every frame around the persistent state.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub history: &'a History,
}

impl<'a> MessageList<'a> {
    pub fn new(state: &'a mut MessageListState, history: &'a History) -> Self {
        Self { state, history }
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // -1 leaves room for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let messages = self.history.snapshot();

        let layout = &mut self.state.layout;
        let reusable = layout.reusable_count(messages.len(), content_width);
        layout.heights.truncate(reusable);
        for message in messages.iter().skip(layout.heights.len()) {
            layout
                .heights
                .push(MessageCard::calculate_height(message, content_width));
        }
        layout.rebuild_prefix_heights();
        layout.update_metadata(messages.len(), content_width);

        self.state.viewport_height = area.height;
        if self.state.observe(self.history.revision()) {
            log::debug!(
                "History revision {} observed, scrolling to bottom",
                self.history.revision()
            );
            self.state.stick_to_bottom = true;
            self.state.animating = true;
        }
        self.state.sync_scroll();

        let total_height = self.state.layout.total_height();
        let scroll_offset = self.state.scroll_state.offset().y;
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset = self.state.layout.top_of(visible_range.start);
        for i in visible_range {
            let height = self.state.layout.heights[i];
            let card_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(MessageCard::new(&messages[i]), card_rect);
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Scroll input lands on the state, since `MessageList` only exists during a frame.
impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.unpin();
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.unpin();
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            _ => {}
        }
        None
    }
}

/// Cached card heights.
///
/// Messages never change once appended, so a height stays valid until the
/// width changes.
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    message_count: usize,
    content_width: u16,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            message_count: 0,
            content_width: 0,
        }
    }

    /// How many cached heights can be kept for a list of `message_count` at `content_width`.
    pub fn reusable_count(&self, message_count: usize, content_width: u16) -> usize {
        if self.content_width != content_width || message_count < self.message_count {
            return 0;
        }
        self.heights.len().min(message_count)
    }

    pub fn update_metadata(&mut self, message_count: usize, content_width: u16) {
        self.message_count = message_count;
        self.content_width = content_width;
    }

    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    /// Canvas row where card `index` starts.
    pub fn top_of(&self, index: usize) -> u16 {
        index
            .checked_sub(1)
            .and_then(|i| self.prefix_heights.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Cards that intersect the viewport, plus half a viewport of slack each way.
    pub fn visible_range(&self, scroll_offset: u16, viewport_height: u16) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }
}
