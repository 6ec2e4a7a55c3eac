//! Core of the Diario personal diary: emotion log, task list and
//! voice-memo references persisted to on-device storage.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::resolve_db_path;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::audio::{format_playback_millis, AudioNote};
pub use model::diary::{DiaryEntry, Emotion};
pub use model::record::{Record, RecordId, RecordValidationError};
pub use model::task::Task;
pub use repo::list_repo::{ListRepository, RepoError, RepoResult};
pub use service::audio_service::AudioNoteService;
pub use service::data_service::{Collection, DataService, DataSummary};
pub use service::diary_service::DiaryService;
pub use service::task_service::TaskService;
pub use service::{ServiceError, ServiceResult};
pub use store::kv_store::{KvStore, SqliteKvStore, StoreError};

/// Health-check probe for front-end wiring.
pub fn ping() -> &'static str {
    "pong"
}

pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
