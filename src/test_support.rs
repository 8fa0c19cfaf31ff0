//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::theme::Theme;
use crate::inference::{Answer, AnswerProvider, SearchError};

/// A no-op provider for tests that don't need real API calls.
pub struct NoopProvider;

#[async_trait]
impl AnswerProvider for NoopProvider {
    fn name(&self) -> &str {
        "noop"
    }

    fn model(&self) -> &str {
        "test-model"
    }

    async fn fetch_answer(&self, _query: &str) -> Result<Answer, SearchError> {
        Err(SearchError::EmptyResponse)
    }
}

/// Creates a test App with a NoopProvider and the light theme.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopProvider), Theme::Light)
}
