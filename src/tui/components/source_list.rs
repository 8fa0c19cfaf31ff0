//! # SourceList Component
//!
//! "Sources" box listing the grounding citations in the order returned.
//! Each entry shows the title, or the URI when the title is missing.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::inference::Citation;
use crate::tui::theme::Palette;

const HORIZONTAL_OVERHEAD: u16 = 4;

pub struct SourceList<'a> {
    pub citations: &'a [Citation],
    pub palette: Palette,
}

impl<'a> SourceList<'a> {
    pub fn new(citations: &'a [Citation], palette: Palette) -> Self {
        Self { citations, palette }
    }

    /// Zero when there is nothing to list.
    pub fn calculate_height(&self, width: u16) -> u16 {
        if self.citations.is_empty() {
            return 0;
        }
        let lines = self
            .paragraph()
            .line_count(width.saturating_sub(HORIZONTAL_OVERHEAD));
        u16::try_from(lines).unwrap_or(u16::MAX)
    }

    fn paragraph(&self) -> Paragraph<'a> {
        let p = &self.palette;
        let lines: Vec<Line<'a>> = self
            .citations
            .iter()
            .map(|citation| {
                Line::from(vec![
                    Span::styled("➞ ", Style::default().fg(p.accent)),
                    Span::styled(
                        citation.label(),
                        Style::default()
                            .fg(p.link)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(p.border))
                    .title(Line::from(Span::styled(" Sources ", p.heading_style())))
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: false })
    }
}

impl Widget for SourceList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.citations.is_empty() {
            return;
        }
        self.paragraph().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn citations() -> Vec<Citation> {
        vec![
            Citation::new("https://rubyonrails.org/", Some("Rails 8.0: No PaaS Required".to_string())),
            Citation::new("https://example.com/untitled", None),
            Citation::new("https://example.com/blank", Some(String::new())),
        ]
    }

    #[test]
    fn test_empty_list_takes_no_space() {
        let list = SourceList::new(&[], Palette::light());
        assert_eq!(list.calculate_height(80), 0);
    }

    #[test]
    fn test_height_one_row_per_citation() {
        let citations = citations();
        let list = SourceList::new(&citations, Palette::light());
        assert_eq!(list.calculate_height(80), 5);
    }

    #[test]
    fn test_labels_fall_back_to_uri() {
        let citations = citations();
        let list = SourceList::new(&citations, Palette::light());
        let backend = TestBackend::new(80, list.calculate_height(80));
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| f.render_widget(list, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();

        assert!(text.contains("Sources"));
        assert!(text.contains("Rails 8.0: No PaaS Required"));
        assert!(text.contains("https://example.com/untitled"));
        assert!(text.contains("https://example.com/blank"));
        assert!(!text.contains("https://rubyonrails.org/"));
    }

    #[test]
    fn test_rows_keep_citation_order() {
        let citations = citations();
        let list = SourceList::new(&citations, Palette::light());
        let height = list.calculate_height(80);
        let backend = TestBackend::new(80, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| f.render_widget(list, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..height)
            .map(|y| (0..80).map(|x| buffer[(x, y)].symbol()).collect())
            .collect();

        assert!(rows[0].contains("Sources"));
        assert!(rows[1].contains("Rails 8.0: No PaaS Required"));
        assert!(rows[2].contains("https://example.com/untitled"));
        assert!(rows[3].contains("https://example.com/blank"));
    }
}
