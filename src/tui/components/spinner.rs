//! # LoadingSpinner Component
//!
//! Centered animated indicator shown while a search is in flight.
//! The frame index comes from the event loop's animation clock.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Palette;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingSpinner {
    pub frame_index: usize,
    pub palette: Palette,
}

impl LoadingSpinner {
    pub fn new(frame_index: usize, palette: Palette) -> Self {
        Self {
            frame_index,
            palette,
        }
    }

    fn glyph(&self) -> &'static str {
        FRAMES[self.frame_index % FRAMES.len()]
    }
}

impl Component for LoadingSpinner {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        let line = Line::from(vec![
            Span::styled(
                format!("{} ", self.glyph()),
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Loading...", self.palette.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_frames_cycle() {
        let palette = Palette::light();
        assert_eq!(LoadingSpinner::new(0, palette).glyph(), "⠋");
        assert_eq!(LoadingSpinner::new(FRAMES.len(), palette).glyph(), "⠋");
        assert_eq!(LoadingSpinner::new(1, palette).glyph(), "⠙");
    }

    #[test]
    fn test_render_label() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut spinner = LoadingSpinner::new(3, Palette::dark());
        terminal.draw(|f| spinner.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Loading..."));
    }
}
