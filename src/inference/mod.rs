pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{AnswerProvider, SearchError};
pub use providers::GeminiProvider;
pub use types::{Answer, Citation, build_prompt};
