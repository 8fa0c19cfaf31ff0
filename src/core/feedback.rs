//! # Feedback Log
//!
//! Write-only record of "was this helpful?" votes. Each vote appends one
//! entry to a JSON array stored under [`FEEDBACK_KEY`]. Nothing in the
//! application reads the log back; it exists for later offline inspection.
//!
//! The log grows without bound.

use chrono::Utc;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::storage::{Store, StoreError};

pub const FEEDBACK_KEY: &str = "rails8-info-hub-feedback.json";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Yes,
    No,
}

impl Vote {
    pub fn label(self) -> &'static str {
        match self {
            Vote::Yes => "Yes",
            Vote::No => "No",
        }
    }
}

/// One persisted vote. `timestamp` is milliseconds since the Unix epoch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub query: String,
    pub feedback: Vote,
    pub timestamp: i64,
}

/// Feedback widget state. Reset to `Prompt` on every new search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackState {
    #[default]
    Prompt,
    Submitted,
}

/// Existing entries, or an empty list if the key is absent or unparsable.
fn existing_entries(store: &Store) -> Result<Vec<FeedbackEntry>, StoreError> {
    let Some(raw) = store.get(FEEDBACK_KEY)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => Ok(entries),
        Err(e) => {
            warn!("Feedback log is unreadable, starting a new one: {}", e);
            Ok(Vec::new())
        }
    }
}

/// Append a vote stamped with the current time.
pub fn record_feedback(store: &Store, query: &str, vote: Vote) -> Result<(), StoreError> {
    append_entry(
        store,
        FeedbackEntry {
            query: query.to_string(),
            feedback: vote,
            timestamp: Utc::now().timestamp_millis(),
        },
    )
}

fn append_entry(store: &Store, entry: FeedbackEntry) -> Result<(), StoreError> {
    let mut entries = existing_entries(store)?;
    entries.push(entry);
    let json = serde_json::to_string(&entries)?;
    store.set(FEEDBACK_KEY, &json)?;
    debug!("Feedback log now holds {} entries", entries.len());
    Ok(())
}
