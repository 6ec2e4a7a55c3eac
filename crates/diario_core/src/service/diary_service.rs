//! Emotion diary use-cases.

use crate::clock::Clock;
use crate::model::diary::{DiaryEntry, Emotion};
use crate::model::record::{stamp_date, stamp_time, RecordId};
use crate::repo::list_repo::ListRepository;
use crate::service::ServiceResult;
use crate::store::kv_store::KvStore;
use log::info;

pub struct DiaryService<S: KvStore, C: Clock> {
    repo: ListRepository<S, DiaryEntry>,
    clock: C,
}

impl<S: KvStore, C: Clock> DiaryService<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            repo: ListRepository::new(store),
            clock,
        }
    }

    /// Records how the user feels right now.
    ///
    /// The new entry is the first element of the returned list.
    pub fn add_entry(
        &self,
        emotion: Emotion,
        note: Option<String>,
    ) -> ServiceResult<Vec<DiaryEntry>> {
        let now = self.clock.now();
        let note = DiaryEntry::normalize_note(note.map(|value| value.trim().to_string()));
        let has_note = note.is_some();

        let entries = self.repo.prepend_new(now.timestamp_millis(), |id| DiaryEntry {
            id,
            emotion,
            note,
            date: stamp_date(&now),
            time: stamp_time(&now),
        })?;

        info!(
            "event=diary_add module=service status=ok id={} emotion={} has_note={} count={}",
            entries.first().map_or(0, |entry| entry.id),
            emotion.key(),
            has_note,
            entries.len()
        );
        Ok(entries)
    }

    /// History, newest first.
    pub fn list_entries(&self) -> ServiceResult<Vec<DiaryEntry>> {
        Ok(self.repo.load()?)
    }

    pub fn delete_entry(&self, id: RecordId) -> ServiceResult<Vec<DiaryEntry>> {
        let entries = self.repo.remove(id)?;
        info!(
            "event=diary_delete module=service status=ok id={} count={}",
            id,
            entries.len()
        );
        Ok(entries)
    }
}
