//! Gemini provider using the `generateContent` endpoint with Google Search grounding.
//!
//! This module uses Gemini REST terminology:
//! - "contents" / "parts" (not "messages")
//! - "candidates" (not "choices")
//! - "groundingMetadata.groundingChunks" for cited web sources

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::inference::provider::require_text;
use crate::inference::{Answer, AnswerProvider, Citation, SearchError, build_prompt};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_FRAMEWORK: &str = "Ruby on Rails";

// ============================================================================
// Gemini API Types
// ============================================================================

#[derive(Serialize, Debug)]
struct Part {
    text: String,
}

#[derive(Serialize, Debug)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

/// Empty marker object: `{"google_search": {}}` enables search grounding.
#[derive(Serialize, Debug)]
struct GoogleSearch {}

#[derive(Serialize, Debug)]
struct Tool {
    google_search: GoogleSearch,
}

/// The request body. Exactly one tool, no generation config.
#[derive(Serialize, Debug)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    tools: Vec<Tool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize, Debug, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug, Default)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize, Debug)]
struct GroundingChunk {
    web: Option<WebChunk>,
}

#[derive(Deserialize, Debug)]
struct WebChunk {
    uri: Option<String>,
    title: Option<String>,
}

/// Error envelope returned with non-success statuses.
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ApiErrorDetail {
    message: String,
}

// ============================================================================
// Translation Layer
// ============================================================================

fn build_request(prompt: String) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![Part { text: prompt }],
        }],
        tools: vec![Tool {
            google_search: GoogleSearch {},
        }],
    }
}

/// Pulls answer text and citations out of the first candidate.
///
/// Text is the concatenation of all text parts. Chunks without a `web`
/// entry, or whose `web` entry has no URI, are skipped.
fn response_to_answer(response: GenerateContentResponse) -> Answer {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return Answer {
            text: String::new(),
            citations: vec![],
        };
    };

    let text = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect::<String>())
        .unwrap_or_default();

    let citations = candidate
        .grounding_metadata
        .map(|m| {
            m.grounding_chunks
                .into_iter()
                .filter_map(|chunk| chunk.web)
                .filter_map(|web| Some(Citation::new(web.uri?, web.title)))
                .collect()
        })
        .unwrap_or_default();

    Answer { text, citations }
}

/// Prefer the API's own error message; fall back to the raw body.
fn error_detail(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => format!("HTTP {status}: {}", parsed.error.message),
        Err(_) if body.trim().is_empty() => format!("HTTP {status}"),
        Err(_) => format!("HTTP {status}: {}", body.trim()),
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Gemini API provider with Google Search grounding.
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    model: String,
    framework: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider.
    ///
    /// # Arguments
    /// * `api_key` - Gemini API key
    /// * `base_url` - Optional custom base URL (defaults to the public v1beta API)
    /// * `model` - Optional model name (defaults to `gemini-2.5-flash`)
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            framework: DEFAULT_FRAMEWORK.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Overrides the framework named in the prompt.
    pub fn with_framework(mut self, framework: impl Into<String>) -> Self {
        self.framework = framework.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Sends the request and decodes a successful body.
    async fn send_request(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, SearchError> {
        let json_body = serde_json::to_string(request)
            .map_err(|e| SearchError::Provider(format!("Request serialization failed: {e}")))?;
        debug!("Raw Gemini request: {}", json_body);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .body(json_body)
            .send()
            .await
            .map_err(|e| SearchError::Provider(e.to_string()))?;

        debug!("Gemini response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Gemini API error: {} - {}", status, err_body);
            return Err(SearchError::Provider(error_detail(status, &err_body)));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| SearchError::Provider(format!("invalid response body: {e}")))
    }
}

#[async_trait]
impl AnswerProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn fetch_answer(&self, query: &str) -> Result<Answer, SearchError> {
        let request = build_request(build_prompt(&self.framework, query));

        info!(
            "Gemini generateContent request: model={}, query_len={}",
            self.model,
            query.len()
        );

        let response = self.send_request(&request).await?;
        let answer = require_text(response_to_answer(response))?;

        info!(
            "Gemini answer received: {} bytes, {} citation(s)",
            answer.text.len(),
            answer.citations.len()
        );
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_has_single_search_tool_and_no_config() {
        let request = build_request("prompt".to_string());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["tools"], serde_json::json!([{ "google_search": {} }]));
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "prompt");
        assert!(json.get("generationConfig").is_none());
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_response_to_answer_extracts_text_and_citations() {
        let body = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Rails 8 "}, {"text": "is out."}]},
                "groundingMetadata": {
                    "webSearchQueries": ["rails 8"],
                    "groundingChunks": [
                        {"web": {"uri": "https://rubyonrails.org/2024/11/7/rails-8-no-paas-required", "title": "rubyonrails.org"}},
                        {"web": {"uri": "https://github.com/rails/rails"}}
                    ]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        let answer = response_to_answer(response);

        assert_eq!(answer.text, "Rails 8 is out.");
        assert_eq!(answer.citations.len(), 2);
        assert_eq!(answer.citations[0].title.as_deref(), Some("rubyonrails.org"));
        assert_eq!(answer.citations[1].uri, "https://github.com/rails/rails");
        assert_eq!(answer.citations[1].title, None);
    }

    #[test]
    fn test_response_without_grounding_has_no_citations() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "hi"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        let answer = response_to_answer(response);
        assert_eq!(answer.text, "hi");
        assert!(answer.citations.is_empty());
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        let answer = response_to_answer(response);
        assert!(answer.text.is_empty());
        assert_eq!(require_text(answer), Err(SearchError::EmptyResponse));
    }

    #[test]
    fn test_chunks_without_web_are_skipped() {
        let body = r#"{"candidates": [{
            "content": {"parts": [{"text": "x"}]},
            "groundingMetadata": {"groundingChunks": [{"retrievedContext": {}}, {"web": {"uri": "https://a.example"}}]}
        }]}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        let answer = response_to_answer(response);
        assert_eq!(answer.citations, vec![Citation::new("https://a.example", None)]);
    }

    #[test]
    fn test_web_chunk_without_uri_keeps_answer() {
        let body = r#"{"candidates": [{
            "content": {"parts": [{"text": "Rails 8 ships Solid Queue."}]},
            "groundingMetadata": {"groundingChunks": [
                {"web": {"uri": "https://rubyonrails.org/", "title": "rails"}},
                {"web": {"title": "vertexaisearch redirect"}}
            ]}
        }]}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        let answer = response_to_answer(response);
        assert_eq!(answer.text, "Rails 8 ships Solid Queue.");
        assert_eq!(
            answer.citations,
            vec![Citation::new("https://rubyonrails.org/", Some("rails".to_string()))]
        );
    }

    #[test]
    fn test_error_detail_prefers_api_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(error_detail(400, body), "HTTP 400: API key not valid.");
        assert_eq!(error_detail(502, "Bad Gateway"), "HTTP 502: Bad Gateway");
        assert_eq!(error_detail(500, "  "), "HTTP 500");
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let provider = GeminiProvider::new(
            "k".to_string(),
            Some("http://localhost:9000/".to_string()),
            Some("gemini-test".to_string()),
        );
        assert_eq!(
            provider.endpoint(),
            "http://localhost:9000/models/gemini-test:generateContent"
        );
    }
}
