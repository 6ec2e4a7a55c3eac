//! To-do items.
//!
//! # Invariants
//! - `completed == completed_at.is_some()`.
//! - `completed_at`, when present, is not earlier than `created_at`.

use super::record::{require_positive_id, require_text, Record, RecordId, RecordValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub text: String,
    pub completed: bool,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds; set only while `completed` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

impl Task {
    pub fn new(id: RecordId, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at,
            completed_at: None,
        }
    }

    /// Flips completion, stamping or clearing `completed_at`.
    ///
    /// A clock that reads earlier than `created_at` stamps `created_at`
    /// instead so the task stays valid.
    pub fn toggle(&mut self, now_ms: i64) {
        if self.completed {
            self.completed = false;
            self.completed_at = None;
        } else {
            self.completed = true;
            self.completed_at = Some(now_ms.max(self.created_at));
        }
    }
}

impl Record for Task {
    const COLLECTION_KEY: &'static str = "tasks";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        require_positive_id(self.id)?;
        require_text("text", &self.text)?;
        match (self.completed, self.completed_at) {
            (true, Some(done_at)) if done_at < self.created_at => {
                Err(RecordValidationError::CompletedBeforeCreated)
            }
            (true, Some(_)) | (false, None) => Ok(()),
            _ => Err(RecordValidationError::CompletionMismatch),
        }
    }
}
