//! # Footer Component
//!
//! Attribution, model name, docs link and key hints. Stateless.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub const FOOTER_HEIGHT: u16 = 3;
const DOCS_URL: &str = "https://ai.google.dev/gemini-api/docs";

pub struct Footer<'a> {
    pub model_name: &'a str,
    pub status_message: &'a str,
    pub palette: Palette,
}

impl<'a> Footer<'a> {
    pub fn new(model_name: &'a str, status_message: &'a str, palette: Palette) -> Self {
        Self {
            model_name,
            status_message,
            palette,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let muted = self.palette.muted_style();
        vec![
            Line::from(Span::styled(
                "Powered by Google Gemini API. Information is AI-generated and may require verification.",
                muted,
            )),
            Line::from(Span::styled(
                format!("Model: {} | Gemini API Docs: {}", self.model_name, DOCS_URL),
                muted,
            )),
            Line::from(Span::styled(
                format!("{} | Esc: quit | ↑/↓ PgUp/PgDn: scroll", self.status_message),
                muted,
            )),
        ]
    }
}

impl Component for Footer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Paragraph::new(self.lines()).alignment(Alignment::Center),
            area,
        );
    }
}
