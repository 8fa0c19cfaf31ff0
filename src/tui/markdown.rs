//! Formatted answer → ratatui `Text` renderer.
//!
//! Walks the blocks produced by [`crate::core::format::format_text`] and turns
//! them into styled `Line`/`Span` values: headings, bullet lists and
//! paragraphs, with bold and italic inline runs.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::core::format::{Block, Inline, format_text};
use crate::tui::theme::Palette;

/// Format answer text and render it with the given palette.
///
/// Returns owned text (`'static`) so callers aren't constrained by input lifetime.
pub fn render(content: &str, palette: &Palette) -> Text<'static> {
    let mut w = Writer::new(palette);
    for block in format_text(content) {
        w.block(&block);
    }
    w.text
}

// ── Writer ──────────────────────────────────────────────────────────────────

struct Writer<'p> {
    text: Text<'static>,
    palette: &'p Palette,
    /// Whether the next block element should be preceded by a blank line.
    needs_newline: bool,
}

impl<'p> Writer<'p> {
    fn new(palette: &'p Palette) -> Self {
        Self {
            text: Text::default(),
            palette,
            needs_newline: false,
        }
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline {
            self.text.lines.push(Line::default());
            self.needs_newline = false;
        }
    }

    fn block(&mut self, block: &Block) {
        self.blank_line_if_needed();
        match block {
            Block::Heading { level, content } => {
                let style = heading_style(self.palette, *level);
                self.text.lines.push(Line::from(inline_spans(content, style)));
            }
            Block::List(items) => {
                let base = self.palette.text_style();
                for item in items {
                    let mut spans = vec![Span::styled("• ", self.palette.muted_style())];
                    spans.extend(inline_spans(item, base));
                    self.text.lines.push(Line::from(spans));
                }
            }
            Block::Paragraph(content) => {
                let base = self.palette.text_style();
                self.text.lines.push(Line::from(inline_spans(content, base)));
            }
        }
        self.needs_newline = true;
    }
}

/// Inline runs as spans. Bold and italic patch the surrounding style.
fn inline_spans(inlines: &[Inline], base: Style) -> Vec<Span<'static>> {
    inlines
        .iter()
        .filter_map(|inline| {
            let (content, style) = match inline {
                Inline::Text(t) => (t, base),
                Inline::Strong(t) => (t, base.add_modifier(Modifier::BOLD)),
                Inline::Emphasis(t) => (t, base.add_modifier(Modifier::ITALIC)),
            };
            // ****  produces an empty strong run
            (!content.is_empty()).then(|| Span::styled(expand_tabs(content), style))
        })
        .collect()
}

fn heading_style(palette: &Palette, level: u8) -> Style {
    match level {
        2 => palette
            .text_style()
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        _ => palette.text_style().add_modifier(Modifier::BOLD),
    }
}

/// Terminals render `\t` inconsistently; expand to 4 spaces.
fn expand_tabs(s: &str) -> String {
    s.replace('\t', "    ")
}
