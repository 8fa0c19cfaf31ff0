//! # SearchBar Component
//!
//! Single-line question input, the "Ask" button label, and the row of
//! suggestion chips underneath.
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `disabled` is a prop mirrored
//! from `App::is_loading` every frame: while a search is in flight the bar
//! ignores all input and the button reads `Thinking...`.
//!
//! Submitting does not clear the buffer. The question stays visible above
//! its answer, and choosing a suggestion replaces the buffer with it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

const PLACEHOLDER: &str = "e.g., What is the release date for Rails 8?";
/// Bordered input line plus the chip row.
pub const SEARCH_BAR_HEIGHT: u16 = 4;

/// High-level events emitted by the SearchBar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Enter pressed or a suggestion chosen. May be blank; validation is the reducer's job.
    Submit(String),
    ContentChanged,
}

pub struct SearchBar {
    pub buffer: String,
    /// Byte offset of the cursor in `buffer`, always on a char boundary.
    cursor: usize,
    /// Prop: true while a search is in flight
    pub disabled: bool,
    /// Prop: suggestion chips, in display order
    pub suggestions: Vec<String>,
    /// Prop: current colours
    pub palette: Palette,
}

impl SearchBar {
    pub fn new(suggestions: Vec<String>, palette: Palette) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            disabled: false,
            suggestions,
            palette,
        }
    }

    /// Replace the buffer and move the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    /// First byte to draw so the cursor stays inside `width` columns,
    /// and the cursor's column relative to that byte.
    fn visible_window(&self, width: u16) -> (usize, u16) {
        let width = width.max(1) as usize;
        let mut start = 0;
        while self.buffer[start..self.cursor].width() >= width {
            start = next_char_boundary(&self.buffer, start);
        }
        (start, self.buffer[start..self.cursor].width() as u16)
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let p = &self.palette;
        let button = if self.disabled { " Thinking... " } else { " Ask ⏎ " };
        let button_style = if self.disabled {
            Style::default().fg(p.muted)
        } else {
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
        };
        let border_style = if self.disabled {
            Style::default().fg(p.border)
        } else {
            Style::default().fg(p.accent)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::from(Span::styled(" Search ", p.muted_style())))
            .title(Line::from(Span::styled(button, button_style)).right_aligned());

        let inner = block.inner(area);
        let (start, cursor_col) = self.visible_window(inner.width);

        let line = if self.buffer.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, p.muted_style()))
        } else {
            let text_style = if self.disabled {
                p.muted_style()
            } else {
                p.text_style()
            };
            Line::from(Span::styled(self.buffer[start..].to_string(), text_style))
        };

        frame.render_widget(Paragraph::new(line).block(block), area);

        if !self.disabled {
            frame.set_cursor_position((inner.x + cursor_col, inner.y));
        }
    }

    fn render_chips(&self, frame: &mut Frame, area: Rect) {
        let p = &self.palette;
        let chip_style = if self.disabled {
            Style::default().fg(p.muted).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(p.text).bg(p.chip)
        };

        let mut spans = vec![Span::styled("Try: ", p.muted_style())];
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            spans.push(Span::styled(format!("Alt+{} ", i + 1), p.muted_style()));
            spans.push(Span::styled(format!(" {suggestion} "), chip_style));
            spans.push(Span::raw("  "));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }),
            area,
        );
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, chips_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);
        self.render_input(frame, input_area);
        self.render_chips(frame, chips_area);
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.disabled {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line input: newlines become spaces
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                Some(SearchEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(SearchEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(SearchEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                SearchEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                SearchEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                SearchEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                SearchEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(SearchEvent::Submit(self.buffer.clone())),
            TuiEvent::Suggestion(index) => {
                let suggestion = self.suggestions.get(*index)?.clone();
                self.set_text(&suggestion);
                Some(SearchEvent::Submit(suggestion))
            }
            _ => None,
        }
    }
}

/// Byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
