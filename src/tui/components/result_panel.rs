//! # ResultPanel Component
//!
//! The "AI Analysis" box: formatted answer text with a copy affordance in
//! the top-right border. A transient widget, rendered inside the result
//! scroll view, so it exposes its height up front.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::tui::markdown;
use crate::tui::theme::Palette;

/// Left/right border plus one column of padding on each side.
const HORIZONTAL_OVERHEAD: u16 = 4;

pub struct ResultPanel<'a> {
    pub text: &'a str,
    /// True for 2.5 s after a successful copy
    pub copied: bool,
    pub palette: Palette,
}

impl<'a> ResultPanel<'a> {
    pub fn new(text: &'a str, copied: bool, palette: Palette) -> Self {
        Self {
            text,
            copied,
            palette,
        }
    }

    pub fn calculate_height(&self, width: u16) -> u16 {
        let lines = self
            .paragraph()
            .line_count(width.saturating_sub(HORIZONTAL_OVERHEAD));
        u16::try_from(lines).unwrap_or(u16::MAX)
    }

    fn paragraph(&self) -> Paragraph<'static> {
        let p = &self.palette;
        let copy_label = if self.copied {
            Span::styled(" ✓ Copied! ", Style::default().fg(p.success))
        } else {
            Span::styled(" Ctrl+Y: Copy ", p.muted_style())
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(p.border))
            .title(Line::from(Span::styled(" AI Analysis ", p.heading_style())))
            .title(Line::from(copy_label).right_aligned())
            .padding(Padding::horizontal(1));

        Paragraph::new(markdown::render(self.text, p))
            .block(block)
            .wrap(Wrap { trim: false })
    }
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.paragraph().render(area, buf);
    }
}
