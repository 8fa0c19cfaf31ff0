//! # Actions
//!
//! Everything that can happen in Rails Hub becomes an `Action`.
//! User presses Enter? That's `Action::Search(query)`.
//! Gemini responds? That's `Action::AnswerReady { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller should
//! perform. No side effects here. I/O happens in the TUI loop.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::feedback::{FeedbackState, Vote};
use crate::core::state::{App, View};
use crate::core::theme::Theme;
use crate::inference::{Answer, SearchError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit a question (typed or picked from a suggestion).
    Search(String),
    /// A search task finished. `generation` identifies which search it answers.
    AnswerReady {
        generation: u64,
        outcome: Result<Answer, SearchError>,
    },
    Feedback(Vote),
    ToggleTheme,
    CopyAnswer,
    Quit,
}

/// I/O requested by `update()`. Executed by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnSearch { query: String, generation: u64 },
    PersistFeedback { query: String, vote: Vote },
    PersistTheme(Theme),
    CopyToClipboard(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Search(query) => {
            if query.trim().is_empty() {
                debug!("Rejected blank query");
                app.error = Some(SearchError::Validation);
                return Effect::None;
            }

            info!("Search: {:?}", query);
            app.is_loading = true;
            app.error = None;
            app.result = None;
            app.citations.clear();
            app.query = query.clone();
            app.feedback_key += 1;
            app.feedback = FeedbackState::Prompt;
            app.generation += 1;
            app.status_message = String::from("Searching...");

            Effect::SpawnSearch {
                query,
                generation: app.generation,
            }
        }
        Action::AnswerReady {
            generation,
            outcome,
        } => {
            if app.discard_stale_responses && generation != app.generation {
                debug!(
                    "Dropping stale answer (generation {}, latest {})",
                    generation, app.generation
                );
                return Effect::None;
            }

            app.is_loading = false;
            match outcome {
                Ok(answer) => {
                    info!(
                        "Answer ready: {} chars, {} citations",
                        answer.text.len(),
                        answer.citations.len()
                    );
                    app.result = Some(answer.text);
                    app.citations = answer.citations;
                    app.status_message = String::from("Ready");
                }
                Err(e) => {
                    warn!("Search failed: {}", e);
                    app.error = Some(e);
                    app.status_message = String::from("Search failed");
                }
            }
            Effect::None
        }
        Action::Feedback(vote) => {
            // Only while the prompt is on screen
            if app.view() != View::Result || app.feedback != FeedbackState::Prompt {
                return Effect::None;
            }
            app.feedback = FeedbackState::Submitted;
            Effect::PersistFeedback {
                query: app.query.clone(),
                vote,
            }
        }
        Action::ToggleTheme => {
            app.theme = app.theme.toggle();
            debug!("Theme toggled to {}", app.theme);
            Effect::PersistTheme(app.theme)
        }
        Action::CopyAnswer => match &app.result {
            Some(text) => Effect::CopyToClipboard(text.clone()),
            None => Effect::None,
        },
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::View;
    use crate::inference::Citation;
    use crate::test_support::test_app;

    fn answer(text: &str) -> Answer {
        Answer {
            text: text.to_string(),
            citations: vec![Citation::new(
                "https://rubyonrails.org/",
                Some("Ruby on Rails".to_string()),
            )],
        }
    }

    fn ready(generation: u64, outcome: Result<Answer, SearchError>) -> Action {
        Action::AnswerReady {
            generation,
            outcome,
        }
    }

    #[test]
    fn test_search_resets_and_spawns() {
        let mut app = test_app();
        app.result = Some("old".to_string());
        app.citations = answer("old").citations;
        app.error = Some(SearchError::Unknown);
        app.feedback = FeedbackState::Submitted;

        let effect = update(&mut app, Action::Search("Rails 8 release date".to_string()));

        assert_eq!(
            effect,
            Effect::SpawnSearch {
                query: "Rails 8 release date".to_string(),
                generation: 1
            }
        );
        assert!(app.is_loading);
        assert!(app.result.is_none());
        assert!(app.citations.is_empty());
        assert!(app.error.is_none());
        assert_eq!(app.query, "Rails 8 release date");
        assert_eq!(app.feedback, FeedbackState::Prompt);
        assert_eq!(app.feedback_key, 1);
        assert_eq!(app.view(), View::Loading);
    }

    #[test]
    fn test_blank_search_is_validation_error() {
        let mut app = test_app();
        app.result = Some("keep me".to_string());

        let effect = update(&mut app, Action::Search("   ".to_string()));

        assert_eq!(effect, Effect::None);
        assert_eq!(app.error, Some(SearchError::Validation));
        assert!(!app.is_loading);
        assert_eq!(app.result.as_deref(), Some("keep me"));
        assert_eq!(app.generation, 0);
        assert_eq!(app.view(), View::Error);
    }

    #[test]
    fn test_answer_ready_success() {
        let mut app = test_app();
        update(&mut app, Action::Search("q".to_string()));
        update(&mut app, ready(1, Ok(answer("## Rails 8"))));

        assert!(!app.is_loading);
        assert_eq!(app.result.as_deref(), Some("## Rails 8"));
        assert_eq!(app.citations.len(), 1);
        assert_eq!(app.view(), View::Result);
    }

    #[test]
    fn test_answer_ready_error() {
        let mut app = test_app();
        update(&mut app, Action::Search("q".to_string()));
        update(&mut app, ready(1, Err(SearchError::EmptyResponse)));

        assert!(!app.is_loading);
        assert!(app.result.is_none());
        assert_eq!(app.error, Some(SearchError::EmptyResponse));
        assert_eq!(app.view(), View::Error);
    }

    #[test]
    fn test_next_search_clears_error() {
        let mut app = test_app();
        update(&mut app, Action::Search("".to_string()));
        assert!(app.error.is_some());

        update(&mut app, Action::Search("q".to_string()));
        assert!(app.error.is_none());
    }

    #[test]
    fn test_last_write_wins_by_default() {
        let mut app = test_app();
        update(&mut app, Action::Search("first".to_string()));
        update(&mut app, Action::Search("second".to_string()));

        // Second finishes first, then the slow first one lands on top.
        update(&mut app, ready(2, Ok(answer("second answer"))));
        update(&mut app, ready(1, Ok(answer("first answer"))));

        assert_eq!(app.result.as_deref(), Some("first answer"));
    }

    #[test]
    fn test_stale_answer_dropped_when_configured() {
        let mut app = test_app();
        app.discard_stale_responses = true;
        update(&mut app, Action::Search("first".to_string()));
        update(&mut app, Action::Search("second".to_string()));

        update(&mut app, ready(1, Ok(answer("first answer"))));
        assert!(app.is_loading);
        assert!(app.result.is_none());

        update(&mut app, ready(2, Ok(answer("second answer"))));
        assert!(!app.is_loading);
        assert_eq!(app.result.as_deref(), Some("second answer"));
    }

    #[test]
    fn test_feedback_once_per_result() {
        let mut app = test_app();
        update(&mut app, Action::Search("q".to_string()));
        update(&mut app, ready(1, Ok(answer("a"))));

        let effect = update(&mut app, Action::Feedback(Vote::Yes));
        assert_eq!(
            effect,
            Effect::PersistFeedback {
                query: "q".to_string(),
                vote: Vote::Yes
            }
        );
        assert_eq!(app.feedback, FeedbackState::Submitted);

        assert_eq!(update(&mut app, Action::Feedback(Vote::No)), Effect::None);
    }

    #[test]
    fn test_feedback_ignored_without_result() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Feedback(Vote::Yes)), Effect::None);
        assert_eq!(app.feedback, FeedbackState::Prompt);
    }

    #[test]
    fn test_feedback_ignored_while_error_hides_result() {
        let mut app = test_app();
        update(&mut app, Action::Search("q".to_string()));
        update(&mut app, ready(1, Ok(answer("a"))));
        update(&mut app, Action::Search("   ".to_string()));
        assert!(app.result.is_some());
        assert_eq!(app.view(), View::Error);

        assert_eq!(update(&mut app, Action::Feedback(Vote::Yes)), Effect::None);
        assert_eq!(app.feedback, FeedbackState::Prompt);
    }

    #[test]
    fn test_feedback_resets_on_new_search() {
        let mut app = test_app();
        update(&mut app, Action::Search("q".to_string()));
        update(&mut app, ready(1, Ok(answer("a"))));
        update(&mut app, Action::Feedback(Vote::No));

        update(&mut app, Action::Search("q2".to_string()));
        assert_eq!(app.feedback, FeedbackState::Prompt);
        assert_eq!(app.feedback_key, 2);
    }

    #[test]
    fn test_toggle_theme_persists() {
        let mut app = test_app();
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(
            update(&mut app, Action::ToggleTheme),
            Effect::PersistTheme(Theme::Dark)
        );
        assert_eq!(
            update(&mut app, Action::ToggleTheme),
            Effect::PersistTheme(Theme::Light)
        );
    }

    #[test]
    fn test_copy_requires_result() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::CopyAnswer), Effect::None);

        app.result = Some("text".to_string());
        assert_eq!(
            update(&mut app, Action::CopyAnswer),
            Effect::CopyToClipboard("text".to_string())
        );
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
