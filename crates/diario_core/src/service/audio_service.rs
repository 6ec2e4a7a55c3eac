//! Voice-memo list use-cases.
//!
//! The platform records the audio file; this service only keeps the
//! reference once recording has stopped.

use crate::clock::Clock;
use crate::model::audio::AudioNote;
use crate::model::record::{stamp_date, stamp_time_short, RecordId};
use crate::repo::list_repo::ListRepository;
use crate::service::{non_blank, ServiceResult};
use crate::store::kv_store::KvStore;
use log::info;

pub struct AudioNoteService<S: KvStore, C: Clock> {
    repo: ListRepository<S, AudioNote>,
    clock: C,
}

impl<S: KvStore, C: Clock> AudioNoteService<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            repo: ListRepository::new(store),
            clock,
        }
    }

    /// Stores a finished recording located at `uri`.
    pub fn add_note(&self, uri: &str, duration_ms: Option<u64>) -> ServiceResult<Vec<AudioNote>> {
        let uri = non_blank("recording uri", uri)?;
        let now = self.clock.now();
        let notes = self.repo.prepend_new(now.timestamp_millis(), |id| AudioNote {
            id,
            uri,
            duration_ms,
            date: stamp_date(&now),
            time: stamp_time_short(&now),
        })?;
        info!(
            "event=audio_add module=service status=ok id={} duration_ms={} count={}",
            notes.first().map_or(0, |note| note.id),
            duration_ms.map_or_else(|| "unknown".to_string(), |ms| ms.to_string()),
            notes.len()
        );
        Ok(notes)
    }

    pub fn list_notes(&self) -> ServiceResult<Vec<AudioNote>> {
        Ok(self.repo.load()?)
    }

    /// Forgets the reference; the recording file itself is left to the caller.
    pub fn delete_note(&self, id: RecordId) -> ServiceResult<Vec<AudioNote>> {
        let notes = self.repo.remove(id)?;
        info!(
            "event=audio_delete module=service status=ok id={} count={}",
            id,
            notes.len()
        );
        Ok(notes)
    }
}
