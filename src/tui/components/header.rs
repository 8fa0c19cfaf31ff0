//! # Header Component
//!
//! Title, tagline, and the theme toggle hint in the top-right corner.
//! Stateless: all data arrives as props.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub const HEADER_HEIGHT: u16 = 3;

pub struct Header {
    pub theme: Theme,
    pub palette: Palette,
}

impl Header {
    pub fn new(theme: Theme, palette: Palette) -> Self {
        Self { theme, palette }
    }

    /// Label of the toggle, naming the mode it switches to.
    fn toggle_hint(&self) -> String {
        let icon = match self.theme {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        };
        format!("{icon} Ctrl+T: {} mode", self.theme.toggle())
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let p = &self.palette;

        let title = Line::from(vec![
            Span::styled(
                "Rails 8 ",
                Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Info Hub",
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            ),
        ]);
        let tagline = Line::from(Span::styled(
            "Your AI-powered source for the latest on Ruby on Rails 8.",
            p.muted_style(),
        ));

        frame.render_widget(
            Paragraph::new(vec![Line::default(), title, tagline]).alignment(Alignment::Center),
            area,
        );

        let hint = Paragraph::new(Line::from(Span::styled(self.toggle_hint(), p.muted_style())))
            .alignment(Alignment::Right);
        frame.render_widget(hint, Rect { height: 1, ..area });
    }
}
