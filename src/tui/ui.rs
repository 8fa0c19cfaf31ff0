use crate::core::state::{App, View};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::footer::FOOTER_HEIGHT;
use crate::tui::components::header::HEADER_HEIGHT;
use crate::tui::components::search_bar::SEARCH_BAR_HEIGHT;
use crate::tui::components::{
    ErrorBanner, FeedbackBar, Footer, Header, LoadingSpinner, ResultView,
};
use crate::tui::theme::Palette;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

const EMPTY_STATE: &str = "Ask a question about Ruby on Rails 8 to get started.";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let palette = Palette::for_theme(app.theme);
    let view = app.view();

    // Page background follows the theme
    frame.render_widget(Block::default().style(palette.text_style()), frame.area());

    let feedback_height = if view == View::Result { 1 } else { 0 };
    let layout = Layout::vertical([
        Length(HEADER_HEIGHT),
        Length(1),
        Length(SEARCH_BAR_HEIGHT),
        Length(1),
        Min(0),
        Length(feedback_height),
        Length(FOOTER_HEIGHT),
    ]);
    let [header_area, _, search_area, _, main_area, feedback_area, footer_area] =
        layout.areas(frame.area());

    Header::new(app.theme, palette).render(frame, header_area);

    // Sync SearchBar props with App state
    tui.search_bar.disabled = app.is_loading;
    tui.search_bar.palette = palette;
    tui.search_bar.render(frame, search_area);

    let copied = tui.is_copied();
    match view {
        View::Loading => LoadingSpinner::new(spinner_frame, palette).render(frame, main_area),
        View::Error => {
            let message = app
                .error
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            ErrorBanner::new(&message, palette).render(frame, main_area);
        }
        View::Result => {
            let text = app.result.as_deref().unwrap_or_default();
            ResultView::new(&mut tui.result_view, text, &app.citations, copied, palette)
                .render(frame, main_area);
            FeedbackBar::new(app.feedback, palette).render(frame, feedback_area);
        }
        View::Empty => draw_empty_state(frame, main_area, &palette),
    }

    Footer::new(app.model_name(), &app.status_message, palette).render(frame, footer_area);
}

fn draw_empty_state(frame: &mut Frame, area: Rect, palette: &Palette) {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(EMPTY_STATE, palette.muted_style())))
            .alignment(Alignment::Center),
        row,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::feedback::Vote;
    use crate::inference::{Answer, Citation, SearchError};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn tui_for(app: &App) -> TuiState {
        TuiState::new(app.suggestions.clone(), app.theme)
    }

    #[test]
    fn test_empty_state() {
        let app = test_app();
        let mut tui = tui_for(&app);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Rails 8 Info Hub"));
        assert!(text.contains(EMPTY_STATE));
        assert!(text.contains("Model: test-model"));
        assert!(!text.contains("Was this response helpful?"));
    }

    #[test]
    fn test_loading_state_disables_search() {
        let mut app = test_app();
        update(&mut app, Action::Search("Rails 8 release date".to_string()));
        let mut tui = tui_for(&app);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Loading..."));
        assert!(text.contains("Thinking..."));
        assert!(tui.search_bar.disabled);
        assert!(!text.contains(EMPTY_STATE));
    }

    #[test]
    fn test_error_state() {
        let mut app = test_app();
        update(&mut app, Action::Search("   ".to_string()));
        let mut tui = tui_for(&app);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Error: Please enter a question about Rails 8."));
        assert!(!text.contains(EMPTY_STATE));
    }

    #[test]
    fn test_result_state_with_sources_and_feedback() {
        let mut app = test_app();
        update(&mut app, Action::Search("q".to_string()));
        update(
            &mut app,
            Action::AnswerReady {
                generation: 1,
                outcome: Ok(Answer {
                    text: "## Highlights\n* **Kamal 2** deploys".to_string(),
                    citations: vec![Citation::new(
                        "https://rubyonrails.org/2024/11/7/rails-8-no-paas-required",
                        Some("Rails 8.0: No PaaS Required".to_string()),
                    )],
                }),
            },
        );
        let mut tui = tui_for(&app);

        let text = draw(&app, &mut tui);
        assert!(text.contains("AI Analysis"));
        assert!(text.contains("Highlights"));
        assert!(text.contains("• Kamal 2 deploys"));
        assert!(text.contains("Rails 8.0: No PaaS Required"));
        assert!(text.contains("Was this response helpful?"));

        update(&mut app, Action::Feedback(Vote::Yes));
        let text = draw(&app, &mut tui);
        assert!(text.contains("Thank you for your feedback!"));
    }

    #[test]
    fn test_error_hides_previous_empty_result() {
        let mut app = test_app();
        update(&mut app, Action::Search("q".to_string()));
        update(
            &mut app,
            Action::AnswerReady {
                generation: 1,
                outcome: Err(SearchError::Provider("HTTP 500: boom".to_string())),
            },
        );
        let mut tui = tui_for(&app);
        let text = draw(&app, &mut tui);
        assert!(text.contains("Failed to fetch information from Gemini API: HTTP 500: boom"));
    }
}
