//! Voice-memo references.
//!
//! Recording and playback belong to the platform; only the file location
//! and timing metadata are kept here.

use super::record::{require_positive_id, require_text, Record, RecordId, RecordValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioNote {
    pub id: RecordId,
    /// Platform file location of the recording.
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    pub date: String,
    /// `HH:MM`.
    pub time: String,
}

impl AudioNote {
    /// `m:ss` label for the recording length, if known.
    pub fn duration_label(&self) -> Option<String> {
        self.duration_ms.map(format_playback_millis)
    }
}

impl Record for AudioNote {
    const COLLECTION_KEY: &'static str = "audioNotes";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        require_positive_id(self.id)?;
        require_text("uri", &self.uri)?;
        require_text("date", &self.date)?;
        require_text("time", &self.time)
    }
}

/// Formats a playback position as `m:ss`.
pub fn format_playback_millis(millis: u64) -> String {
    let total_seconds = millis / 1_000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::{format_playback_millis, AudioNote};

    #[test]
    fn playback_label_pads_seconds() {
        assert_eq!(format_playback_millis(0), "0:00");
        assert_eq!(format_playback_millis(5_400), "0:05");
        assert_eq!(format_playback_millis(59_999), "0:59");
        assert_eq!(format_playback_millis(61_000), "1:01");
        assert_eq!(format_playback_millis(3_600_000), "60:00");
    }

    #[test]
    fn duration_label_is_absent_without_duration() {
        let note = AudioNote {
            id: 1,
            uri: "file:///rec.m4a".to_string(),
            duration_ms: None,
            date: "01/05/2024".to_string(),
            time: "09:30".to_string(),
        };
        assert_eq!(note.duration_label(), None);
    }
}
