//! # FeedbackBar Component
//!
//! One-line "Was this response helpful?" prompt under a result. After a
//! vote it reads "Thank you for your feedback!" until the next search.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::feedback::{FeedbackState, Vote};
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct FeedbackBar {
    pub state: FeedbackState,
    pub palette: Palette,
}

impl FeedbackBar {
    pub fn new(state: FeedbackState, palette: Palette) -> Self {
        Self { state, palette }
    }

    fn line(&self) -> Line<'static> {
        let p = &self.palette;
        match self.state {
            FeedbackState::Submitted => Line::from(Span::styled(
                "Thank you for your feedback!",
                p.muted_style(),
            )),
            FeedbackState::Prompt => {
                let mut spans = vec![Span::styled("Was this response helpful?  ", p.muted_style())];
                spans.extend(self.vote_button(Vote::Yes, "Alt+Y"));
                spans.push(Span::raw("  "));
                spans.extend(self.vote_button(Vote::No, "Alt+N"));
                Line::from(spans)
            }
        }
    }

    fn vote_button(&self, vote: Vote, shortcut: &'static str) -> [Span<'static>; 2] {
        let p = &self.palette;
        [
            Span::styled(
                format!(" {} ", vote.label()),
                Style::default().fg(p.text).bg(p.chip),
            ),
            Span::styled(
                format!(" {shortcut}"),
                p.muted_style().add_modifier(Modifier::DIM),
            ),
        ]
    }
}

impl Component for FeedbackBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Paragraph::new(self.line()).alignment(Alignment::Center),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(state: FeedbackState) -> String {
        FeedbackBar::new(state, Palette::light())
            .line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_prompt_offers_both_votes() {
        let t = text(FeedbackState::Prompt);
        assert!(t.starts_with("Was this response helpful?"));
        assert!(t.contains(" Yes "));
        assert!(t.contains(" No "));
    }

    #[test]
    fn test_buttons_pair_vote_with_shortcut() {
        let t = text(FeedbackState::Prompt);
        assert_eq!(
            t,
            "Was this response helpful?   Yes  Alt+Y   No  Alt+N"
        );
    }

    #[test]
    fn test_submitted_thanks() {
        assert_eq!(text(FeedbackState::Submitted), "Thank you for your feedback!");
    }
}
