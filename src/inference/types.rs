use serde::{Deserialize, Serialize};

/// A source the model cited while grounding its answer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Citation {
    pub fn new(uri: impl Into<String>, title: Option<String>) -> Self {
        Self {
            uri: uri.into(),
            title,
        }
    }

    /// Title when the provider sent a non-empty one, otherwise the URI.
    pub fn label(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.uri,
        }
    }
}

/// A grounded answer: markdown-subset text plus its citations, in the order returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub citations: Vec<Citation>,
}

/// Builds the prompt sent for a query. The query is embedded verbatim.
pub fn build_prompt(framework: &str, query: &str) -> String {
    format!(
        "In the context of {framework}, tell me about \"{query}\". \
         Provide a concise and up-to-date summary based on the latest available information. \
         Use your search tool to ground the answer."
    )
}
