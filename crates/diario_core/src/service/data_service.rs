//! Whole-device data management: counts and wipes.

use crate::model::audio::AudioNote;
use crate::model::diary::DiaryEntry;
use crate::model::record::Record;
use crate::model::task::Task;
use crate::repo::list_repo::ListRepository;
use crate::service::ServiceResult;
use crate::store::kv_store::KvStore;
use log::info;

/// One of the three persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Diary,
    Tasks,
    AudioNotes,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Diary, Collection::Tasks, Collection::AudioNotes];

    pub fn key(self) -> &'static str {
        match self {
            Self::Diary => DiaryEntry::COLLECTION_KEY,
            Self::Tasks => Task::COLLECTION_KEY,
            Self::AudioNotes => AudioNote::COLLECTION_KEY,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "diary" | "diario" => Some(Self::Diary),
            "tasks" | "task" => Some(Self::Tasks),
            "audio" | "audionotes" | "audio_notes" => Some(Self::AudioNotes),
            _ => None,
        }
    }
}

/// Record counts per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataSummary {
    pub diary_entries: usize,
    pub tasks: usize,
    pub open_tasks: usize,
    pub audio_notes: usize,
}

pub struct DataService<S: KvStore + Copy> {
    store: S,
}

impl<S: KvStore + Copy> DataService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn summary(&self) -> ServiceResult<DataSummary> {
        let tasks = ListRepository::<S, Task>::new(self.store).load()?;
        Ok(DataSummary {
            diary_entries: ListRepository::<S, DiaryEntry>::new(self.store).load()?.len(),
            open_tasks: tasks.iter().filter(|task| !task.completed).count(),
            tasks: tasks.len(),
            audio_notes: ListRepository::<S, AudioNote>::new(self.store).load()?.len(),
        })
    }

    /// Deletes one collection; returns whether it held anything.
    pub fn clear(&self, collection: Collection) -> ServiceResult<bool> {
        let removed = match collection {
            Collection::Diary => ListRepository::<S, DiaryEntry>::new(self.store).clear()?,
            Collection::Tasks => ListRepository::<S, Task>::new(self.store).clear()?,
            Collection::AudioNotes => ListRepository::<S, AudioNote>::new(self.store).clear()?,
        };
        Ok(removed)
    }

    /// Deletes every collection stored on the device.
    pub fn clear_all(&self) -> ServiceResult<()> {
        for collection in Collection::ALL {
            self.clear(collection)?;
        }
        info!("event=data_clear_all module=service status=ok");
        Ok(())
    }
}
