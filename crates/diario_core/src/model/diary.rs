//! Emotion log entries.

use super::record::{require_positive_id, require_text, Record, RecordId, RecordValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Feelings offered by the emotion picker.
///
/// Serialized as the snake_case key; entries stored with the emoji as the
/// value still decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    #[serde(alias = "😀")]
    Happy,
    #[serde(alias = "😊")]
    Content,
    #[serde(alias = "😐")]
    Neutral,
    #[serde(alias = "😔")]
    Sad,
    #[serde(alias = "😢")]
    VerySad,
    #[serde(alias = "😡")]
    Angry,
}

impl Emotion {
    /// Picker order, happiest first.
    pub const ALL: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Content,
        Emotion::Neutral,
        Emotion::Sad,
        Emotion::VerySad,
        Emotion::Angry,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Content => "content",
            Self::Neutral => "neutral",
            Self::Sad => "sad",
            Self::VerySad => "very_sad",
            Self::Angry => "angry",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😀",
            Self::Content => "😊",
            Self::Neutral => "😐",
            Self::Sad => "😔",
            Self::VerySad => "😢",
            Self::Angry => "😡",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Happy => "Feliz",
            Self::Content => "Satisfeito",
            Self::Neutral => "Neutro",
            Self::Sad => "Triste",
            Self::VerySad => "Muito Triste",
            Self::Angry => "Raiva",
        }
    }

    /// Accepts a storage key, an emoji, or a display name (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL.into_iter().find(|emotion| {
            emotion.emoji() == trimmed
                || emotion.key().eq_ignore_ascii_case(trimmed)
                || emotion.display_name().to_lowercase() == trimmed.to_lowercase()
        })
    }
}

impl Display for Emotion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.emoji(), self.display_name())
    }
}

/// One emotion check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: RecordId,
    pub emotion: Emotion,
    /// Absent when the user left the note blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub date: String,
    pub time: String,
}

impl DiaryEntry {
    /// Blank notes collapse to `None`.
    pub fn normalize_note(note: Option<String>) -> Option<String> {
        note.filter(|value| !value.trim().is_empty())
    }
}

impl Record for DiaryEntry {
    const COLLECTION_KEY: &'static str = "diario";

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        require_positive_id(self.id)?;
        require_text("date", &self.date)?;
        require_text("time", &self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::{DiaryEntry, Emotion};
    use crate::model::record::{Record, RecordValidationError};

    #[test]
    fn parse_accepts_key_emoji_and_name() {
        assert_eq!(Emotion::parse("very_sad"), Some(Emotion::VerySad));
        assert_eq!(Emotion::parse("😡"), Some(Emotion::Angry));
        assert_eq!(Emotion::parse(" muito triste "), Some(Emotion::VerySad));
        assert_eq!(Emotion::parse("SATISFEITO"), Some(Emotion::Content));
        assert_eq!(Emotion::parse("bored"), None);
    }

    #[test]
    fn emoji_valued_entries_decode_and_reencode_with_keys() {
        let stored = r#"{"id":1714566615000,"emotion":"😢","note":"","date":"01/05/2024","time":"09:30:15"}"#;

        let entry: DiaryEntry = serde_json::from_str(stored).unwrap();
        assert_eq!(entry.emotion, Emotion::VerySad);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["emotion"], "very_sad");
    }

    #[test]
    fn every_picker_emoji_decodes() {
        for emotion in Emotion::ALL {
            let decoded: Emotion =
                serde_json::from_value(serde_json::Value::from(emotion.emoji())).unwrap();
            assert_eq!(decoded, emotion);
        }
    }

    #[test]
    fn blank_note_normalizes_to_none() {
        assert_eq!(DiaryEntry::normalize_note(Some("  ".to_string())), None);
        assert_eq!(
            DiaryEntry::normalize_note(Some("dia bom".to_string())),
            Some("dia bom".to_string())
        );
    }

    #[test]
    fn validate_requires_stamps() {
        let entry = DiaryEntry {
            id: 10,
            emotion: Emotion::Neutral,
            note: None,
            date: String::new(),
            time: "09:00:00".to_string(),
        };
        assert_eq!(
            entry.validate(),
            Err(RecordValidationError::EmptyField("date"))
        );
    }
}
