use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::core::state::Session;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{LandingPage, MessageList, SubmitButton, TitleBar, submit_button};

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub title: Rect,
    pub transcript: Rect,
    pub input: Rect,
    pub button: Rect,
}

/// Split the frame: title line on top, transcript in the middle, input box
/// and submit button side by side at the bottom.
pub fn layout_areas(area: Rect, input_height: u16) -> AppLayout {
    use Constraint::{Length, Min};

    let [title, transcript, bottom] =
        Layout::vertical([Length(1), Min(0), Length(input_height)]).areas(area);
    let [input, button] =
        Layout::horizontal([Min(0), Length(submit_button::WIDTH)]).areas(bottom);

    AppLayout {
        title,
        transcript,
        input,
        button,
    }
}

pub fn draw_ui(frame: &mut Frame, session: &Session, tui: &mut TuiState, spinner_frame: usize) {
    let input_height = tui.input_box.calculate_height(frame.area().width);
    let areas = layout_areas(frame.area(), input_height);

    TitleBar::new(
        tui.title.clone(),
        tui.endpoint.clone(),
        session.is_pending(),
        spinner_frame,
    )
    .render(frame, areas.title);

    if session.history().is_empty() {
        LandingPage::new(tui.title.clone()).render(frame, areas.transcript);
    } else {
        MessageList::new(&mut tui.message_list, session.history()).render(frame, areas.transcript);
    }

    tui.input_box.locked = session.is_pending();
    tui.input_box.render(frame, areas.input);

    SubmitButton::new(!session.is_pending()).render(frame, areas.button);
}

/// True if the screen cell (`column`, `row`) falls on the submit button.
pub fn hit_test_button(column: u16, row: u16, frame_area: Rect, input_height: u16) -> bool {
    layout_areas(frame_area, input_height)
        .button
        .contains(Position::new(column, row))
}
