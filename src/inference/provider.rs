use async_trait::async_trait;
use thiserror::Error;

use super::types::Answer;

/// Why a search produced no answer.
/// Every variant is terminal for the current request; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Blank query. Raised by the controller before any request is made.
    #[error("Please enter a question about Rails 8.")]
    Validation,
    /// The call succeeded but carried no answer text.
    #[error("Received an empty response from the API.")]
    EmptyResponse,
    /// Network failure, non-success status, or an undecodable body.
    #[error("Failed to fetch information from Gemini API: {0}")]
    Provider(String),
    /// Anything else, e.g. the request task died before reporting back.
    #[error("An unknown error occurred while fetching data.")]
    Unknown,
}

#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Model identifier shown in the footer.
    fn model(&self) -> &str;

    /// Answers one query with search grounding. Single attempt.
    async fn fetch_answer(&self, query: &str) -> Result<Answer, SearchError>;
}

/// Rejects answers whose text is missing or empty.
pub fn require_text(answer: Answer) -> Result<Answer, SearchError> {
    if answer.text.is_empty() {
        Err(SearchError::EmptyResponse)
    } else {
        Ok(answer)
    }
}
