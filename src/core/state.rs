//! # Application State
//!
//! Core business state for Rails Hub. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn AnswerProvider>  // Gemini (or a test double)
//! ├── query: String                      // last submitted question
//! ├── result: Option<String>             // answer text
//! ├── citations: Vec<Citation>           // grounding sources
//! ├── is_loading: bool                   // waiting for API
//! ├── error: Option<SearchError>         // banner message
//! ├── feedback_key: u64                  // bumped per search
//! ├── feedback: FeedbackState            // prompt / submitted
//! ├── theme: Theme                       // light / dark
//! ├── generation: u64                    // id of the latest search
//! ├── discard_stale_responses: bool      // drop superseded answers
//! ├── suggestions: Vec<String>           // quick-pick chips
//! └── status_message: String             // footer text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::{DEFAULT_QUERY, DEFAULT_SUGGESTIONS, ResolvedConfig};
use crate::core::feedback::FeedbackState;
use crate::core::theme::Theme;
use crate::inference::{AnswerProvider, Citation, SearchError};
use std::sync::Arc;

/// Which of the mutually exclusive main views is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Loading,
    Error,
    Result,
    Empty,
}

pub struct App {
    pub provider: Arc<dyn AnswerProvider>,
    pub query: String,
    pub result: Option<String>,
    pub citations: Vec<Citation>,
    pub is_loading: bool,
    pub error: Option<SearchError>,
    /// Identity of the current result for the feedback widget.
    pub feedback_key: u64,
    pub feedback: FeedbackState,
    pub theme: Theme,
    pub generation: u64,
    pub discard_stale_responses: bool,
    pub default_query: String,
    pub suggestions: Vec<String>,
    pub status_message: String,
}

impl App {
    pub fn new(provider: Arc<dyn AnswerProvider>, theme: Theme) -> Self {
        Self {
            provider,
            query: String::new(),
            result: None,
            citations: Vec::new(),
            is_loading: false,
            error: None,
            feedback_key: 0,
            feedback: FeedbackState::default(),
            theme,
            generation: 0,
            discard_stale_responses: false,
            default_query: DEFAULT_QUERY.to_string(),
            suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            status_message: String::from("Welcome to Rails Hub!"),
        }
    }

    pub fn from_config(
        provider: Arc<dyn AnswerProvider>,
        theme: Theme,
        config: &ResolvedConfig,
    ) -> Self {
        let mut app = Self::new(provider, theme);
        app.discard_stale_responses = config.discard_stale_responses;
        app.default_query = config.default_query.clone();
        app.suggestions = config.suggestions.clone();
        app
    }

    pub fn model_name(&self) -> &str {
        self.provider.model()
    }

    /// Loading wins over error, error over result.
    pub fn view(&self) -> View {
        if self.is_loading {
            View::Loading
        } else if self.error.is_some() {
            View::Error
        } else if self.result.is_some() {
            View::Result
        } else {
            View::Empty
        }
    }
}
