use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the screen.
///
/// Components take their data as props (struct fields), may keep
/// presentation state of their own, and draw into the `Rect` they are given.
///
/// `render` takes `&mut self` so a component can refresh caches or scroll
/// offsets during the render pass, the same way a `StatefulWidget` does.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that reacts to terminal input.
pub trait EventHandler {
    /// What the component reports back to the event loop.
    type Event;

    /// Consume a `TuiEvent`. `None` means the event was not for this component
    /// or changed nothing.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
