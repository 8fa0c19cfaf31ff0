use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something the page layout can draw into a slot.
///
/// Props are plain fields set by `draw_ui` each frame (theme palette,
/// loading flag, the current answer). Components that scroll or edit keep
/// their own state and take it by `&mut`, which is why `render` borrows
/// mutably: the result view records its content height while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Components that consume input, e.g. the search bar turning keystrokes
/// into a submitted question.
pub trait EventHandler {
    /// What the component reports upward, if anything.
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
