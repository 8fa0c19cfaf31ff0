//! # ErrorBanner Component
//!
//! Red bordered box with `Error: {message}`. Shown until the next search.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct ErrorBanner<'a> {
    pub message: &'a str,
    pub palette: Palette,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str, palette: Palette) -> Self {
        Self { message, palette }
    }

    /// Rows needed at `width`, including borders.
    pub fn height(&self, width: u16) -> u16 {
        // line_count adds the block's top/bottom rows but not its side borders
        let lines = self.paragraph().line_count(width.saturating_sub(2));
        u16::try_from(lines).unwrap_or(u16::MAX)
    }

    fn paragraph(&self) -> Paragraph<'a> {
        let style = Style::default().fg(self.palette.error);
        let line = Line::from(vec![
            Span::styled("Error: ", style.add_modifier(Modifier::BOLD)),
            Span::styled(self.message, style),
        ]);
        Paragraph::new(line)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            )
            .wrap(Wrap { trim: true })
    }
}

impl Component for ErrorBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let height = self.height(area.width).min(area.height);
        frame.render_widget(self.paragraph(), Rect { height, ..area });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_prefixes_message() {
        let backend = TestBackend::new(60, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut banner = ErrorBanner::new("Please enter a question about Rails 8.", Palette::light());
        terminal.draw(|f| banner.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Error: Please enter a question about Rails 8."));
    }

    #[test]
    fn test_height_includes_borders() {
        let banner = ErrorBanner::new("short", Palette::light());
        assert_eq!(banner.height(60), 3);
    }
}
