//! Array-per-key persistence shared by every collection.
//!
//! A collection lives under `T::COLLECTION_KEY` as one JSON array, newest
//! record first. Each mutation rewrites the whole array.

use crate::model::record::{next_record_id, Record, RecordId, RecordValidationError};
use crate::store::kv_store::{KvStore, StoreError};
use log::{error, info};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Validation(RecordValidationError),
    Store(StoreError),
    NotFound {
        collection: &'static str,
        id: RecordId,
    },
    DuplicateId {
        collection: &'static str,
        id: RecordId,
    },
    /// The stored blob cannot be trusted.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::NotFound { collection, id } => {
                write!(f, "record {id} not found in `{collection}`")
            }
            Self::DuplicateId { collection, id } => {
                write!(f, "record {id} already exists in `{collection}`")
            }
            Self::InvalidData(message) => write!(f, "invalid stored collection: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::NotFound { .. } | Self::DuplicateId { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<RecordValidationError> for RepoError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Whole-array repository for one record type.
pub struct ListRepository<S: KvStore, T: Record> {
    store: S,
    _record: PhantomData<T>,
}

impl<S: KvStore, T: Record> ListRepository<S, T> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    pub fn collection_key(&self) -> &'static str {
        T::COLLECTION_KEY
    }

    /// Reads the stored array; a missing key is an empty collection.
    pub fn load(&self) -> RepoResult<Vec<T>> {
        let Some(blob) = self.store.get(T::COLLECTION_KEY)? else {
            return Ok(Vec::new());
        };

        let records: Vec<T> = serde_json::from_str(&blob).map_err(|err| {
            error!(
                "event=collection_load module=repo status=error collection={} error_code=decode_failed",
                T::COLLECTION_KEY
            );
            RepoError::InvalidData(format!("`{}` does not decode: {err}", T::COLLECTION_KEY))
        })?;

        check_collection(&records).map_err(|err| match err {
            RepoError::Validation(inner) => RepoError::InvalidData(format!(
                "`{}` holds an invalid record: {inner}",
                T::COLLECTION_KEY
            )),
            RepoError::DuplicateId { id, .. } => RepoError::InvalidData(format!(
                "`{}` holds id {id} more than once",
                T::COLLECTION_KEY
            )),
            other => other,
        })?;

        Ok(records)
    }

    /// Replaces the stored array with `records`.
    pub fn save(&self, records: &[T]) -> RepoResult<()> {
        check_collection(records)?;
        let blob = serde_json::to_string(records)
            .map_err(|err| RepoError::InvalidData(format!("encode failed: {err}")))?;
        self.store.set(T::COLLECTION_KEY, &blob)?;
        info!(
            "event=collection_save module=repo status=ok collection={} count={}",
            T::COLLECTION_KEY,
            records.len()
        );
        Ok(())
    }

    /// Inserts `record` at the front and returns the new array.
    pub fn prepend(&self, record: T) -> RepoResult<Vec<T>> {
        record.validate()?;
        let mut records = self.load()?;
        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(RepoError::DuplicateId {
                collection: T::COLLECTION_KEY,
                id: record.id(),
            });
        }
        records.insert(0, record);
        self.save(&records)?;
        Ok(records)
    }

    /// Builds a record with a fresh id for `now_ms` and prepends it.
    ///
    /// Ids come from [`next_record_id`], so the new record always sorts
    /// ahead of every stored one.
    pub fn prepend_new(
        &self,
        now_ms: i64,
        build: impl FnOnce(RecordId) -> T,
    ) -> RepoResult<Vec<T>> {
        let mut records = self.load()?;
        let id = next_record_id(now_ms, records.iter().map(Record::id)).ok_or_else(|| {
            error!(
                "event=collection_prepend module=repo status=error collection={} error_code=id_space_exhausted",
                T::COLLECTION_KEY
            );
            RepoError::InvalidData(format!("`{}` id space exhausted", T::COLLECTION_KEY))
        })?;
        let record = build(id);
        record.validate()?;
        if record.id() != id {
            return Err(RepoError::InvalidData(format!(
                "new record in `{}` ignored assigned id {id}",
                T::COLLECTION_KEY
            )));
        }
        records.insert(0, record);
        self.save(&records)?;
        Ok(records)
    }

    /// Applies `change` to the record with `id` and returns the new array.
    ///
    /// The record keeps its position and its id.
    pub fn update(&self, id: RecordId, change: impl FnOnce(&mut T)) -> RepoResult<Vec<T>> {
        let mut records = self.load()?;
        let Some(target) = records.iter_mut().find(|record| record.id() == id) else {
            return Err(self.not_found(id));
        };
        change(target);
        if target.id() != id {
            return Err(RepoError::InvalidData(format!(
                "update changed id {id} in `{}`",
                T::COLLECTION_KEY
            )));
        }
        self.save(&records)?;
        Ok(records)
    }

    /// Removes exactly the record with `id` and returns the new array.
    pub fn remove(&self, id: RecordId) -> RepoResult<Vec<T>> {
        let mut records = self.load()?;
        let Some(position) = records.iter().position(|record| record.id() == id) else {
            return Err(self.not_found(id));
        };
        records.remove(position);
        self.save(&records)?;
        Ok(records)
    }

    /// Drops the whole collection; returns whether anything was stored.
    pub fn clear(&self) -> RepoResult<bool> {
        let removed = self.store.remove(T::COLLECTION_KEY)?;
        info!(
            "event=collection_clear module=repo status=ok collection={} removed={}",
            T::COLLECTION_KEY,
            removed
        );
        Ok(removed)
    }

    fn not_found(&self, id: RecordId) -> RepoError {
        RepoError::NotFound {
            collection: T::COLLECTION_KEY,
            id,
        }
    }
}

fn check_collection<T: Record>(records: &[T]) -> RepoResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        record.validate()?;
        if !seen.insert(record.id()) {
            return Err(RepoError::DuplicateId {
                collection: T::COLLECTION_KEY,
                id: record.id(),
            });
        }
    }
    Ok(())
}
