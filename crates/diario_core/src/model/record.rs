//! Shared record identity and validation.
//!
//! # Invariants
//! - `RecordId` is the creation instant in epoch milliseconds, bumped past
//!   the newest existing id when the clock would collide or run backwards.
//! - Newer records therefore always carry larger ids.

use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier unique within a single collection.
pub type RecordId = i64;

/// Validation failures for persisted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordValidationError {
    NonPositiveId(RecordId),
    /// A required text field is blank.
    EmptyField(&'static str),
    /// `completed` disagrees with the presence of `completedAt`.
    CompletionMismatch,
    CompletedBeforeCreated,
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId(id) => write!(f, "record id must be positive, got {id}"),
            Self::EmptyField(field) => write!(f, "`{field}` cannot be empty"),
            Self::CompletionMismatch => {
                write!(f, "`completed` must match presence of `completedAt`")
            }
            Self::CompletedBeforeCreated => {
                write!(f, "`completedAt` cannot be earlier than `createdAt`")
            }
        }
    }
}

impl Error for RecordValidationError {}

/// A record stored as one element of a collection array.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Storage key holding the serialized collection.
    const COLLECTION_KEY: &'static str;

    fn id(&self) -> RecordId;

    fn validate(&self) -> Result<(), RecordValidationError>;
}

/// Picks the id for a record created at `now_ms`.
///
/// Returns `None` when the newest stored id is already `RecordId::MAX`.
pub fn next_record_id(
    now_ms: i64,
    existing: impl IntoIterator<Item = RecordId>,
) -> Option<RecordId> {
    match existing.into_iter().max() {
        Some(newest) if newest >= now_ms => newest.checked_add(1),
        _ => Some(now_ms.max(1)),
    }
}

/// Day stamp shown next to entries, `DD/MM/YYYY`.
pub fn stamp_date(at: &DateTime<FixedOffset>) -> String {
    at.format("%d/%m/%Y").to_string()
}

/// Time stamp with seconds, `HH:MM:SS`.
pub fn stamp_time(at: &DateTime<FixedOffset>) -> String {
    at.format("%H:%M:%S").to_string()
}

/// Time stamp without seconds, `HH:MM`.
pub fn stamp_time_short(at: &DateTime<FixedOffset>) -> String {
    at.format("%H:%M").to_string()
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), RecordValidationError> {
    if value.trim().is_empty() {
        return Err(RecordValidationError::EmptyField(field));
    }
    Ok(())
}

pub(crate) fn require_positive_id(id: RecordId) -> Result<(), RecordValidationError> {
    if id <= 0 {
        return Err(RecordValidationError::NonPositiveId(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::next_record_id;

    #[test]
    fn uses_clock_when_ahead_of_collection() {
        assert_eq!(next_record_id(1_000, [900, 950]), Some(1_000));
        assert_eq!(next_record_id(1_000, []), Some(1_000));
    }

    #[test]
    fn bumps_past_newest_on_collision_or_clock_skew() {
        assert_eq!(next_record_id(1_000, [1_000]), Some(1_001));
        assert_eq!(next_record_id(500, [1_000, 20]), Some(1_001));
    }

    #[test]
    fn exhausted_id_space_yields_none() {
        assert_eq!(next_record_id(1_000, [i64::MAX]), None);
    }
}
