//! FFI use-case API for the diary screens.
//!
//! # Responsibility
//! - Expose one call per screen action to Dart via FRB.
//! - Map every core failure into a response envelope.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Every write runs in an immediate transaction, so concurrent callers
//!   cannot drop each other's records.

use diario_core::db::open_db;
use diario_core::{
    core_version as core_version_inner, format_playback_millis,
    init_logging as init_logging_inner, ping as ping_inner, resolve_db_path, AudioNote,
    AudioNoteService, DataService, DiaryEntry, DiaryService, Emotion, RecordId, ServiceResult,
    SqliteKvStore, SystemClock, Task, TaskService,
};
use log::warn;
use rusqlite::TransactionBehavior;
use std::path::PathBuf;
use std::sync::OnceLock;

static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Health-check probe.
///
/// # FFI contract
/// - Sync call, non-blocking. Never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Returns an empty string on success and the error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One choice in the emotion picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionOption {
    /// Stable key accepted by [`diary_add`].
    pub key: String,
    pub emoji: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryItem {
    pub id: i64,
    pub emotion_key: String,
    pub emoji: String,
    pub note: Option<String>,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    /// Epoch milliseconds.
    pub created_at: i64,
    pub completed_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioItem {
    pub id: i64,
    pub uri: String,
    pub date: String,
    pub time: String,
    /// `m:ss`, when the duration is known.
    pub duration_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryListResponse {
    pub ok: bool,
    pub items: Vec<DiaryItem>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    pub ok: bool,
    pub items: Vec<TaskItem>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioListResponse {
    pub ok: bool,
    pub items: Vec<AudioItem>,
    pub message: String,
}

/// Result of a single add/toggle/delete/clear action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Record touched by the action, when there is one.
    pub record_id: Option<i64>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, record_id: Option<RecordId>) -> Self {
        Self {
            ok: true,
            record_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }
}

/// Record counts shown on the About screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSummaryResponse {
    pub ok: bool,
    pub diary_entries: u32,
    pub tasks: u32,
    pub open_tasks: u32,
    pub audio_notes: u32,
    pub message: String,
}

#[flutter_rust_bridge::frb(sync)]
pub fn emotion_catalog() -> Vec<EmotionOption> {
    Emotion::ALL
        .into_iter()
        .map(|emotion| EmotionOption {
            key: emotion.key().to_string(),
            emoji: emotion.emoji().to_string(),
            name: emotion.display_name().to_string(),
        })
        .collect()
}

/// Diary history, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn diary_list() -> DiaryListResponse {
    match with_read(|store| DiaryService::new(store, SystemClock).list_entries()) {
        Ok(entries) => DiaryListResponse {
            ok: true,
            message: count_message(entries.len()),
            items: entries.into_iter().map(to_diary_item).collect(),
        },
        Err(err) => DiaryListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("diary_list failed: {err}"),
        },
    }
}

/// Saves an emotion check-in.
///
/// `emotion` accepts a key, emoji or display name from [`emotion_catalog`].
#[flutter_rust_bridge::frb(sync)]
pub fn diary_add(emotion: String, note: Option<String>) -> ActionResponse {
    let Some(emotion) = Emotion::parse(&emotion) else {
        return ActionResponse::failure(format!("diary_add failed: unknown emotion `{emotion}`"));
    };
    match with_write(|store| DiaryService::new(store, SystemClock).add_entry(emotion, note)) {
        Ok(entries) => ActionResponse::success("Entry saved.", entries.first().map(|e| e.id)),
        Err(err) => ActionResponse::failure(format!("diary_add failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn diary_delete(id: i64) -> ActionResponse {
    match with_write(|store| DiaryService::new(store, SystemClock).delete_entry(id)) {
        Ok(_) => ActionResponse::success("Entry deleted.", Some(id)),
        Err(err) => ActionResponse::failure(format!("diary_delete failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn task_list() -> TaskListResponse {
    match with_read(|store| TaskService::new(store, SystemClock).list_tasks()) {
        Ok(tasks) => TaskListResponse {
            ok: true,
            message: count_message(tasks.len()),
            items: tasks.into_iter().map(to_task_item).collect(),
        },
        Err(err) => TaskListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("task_list failed: {err}"),
        },
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn task_add(text: String) -> ActionResponse {
    match with_write(|store| TaskService::new(store, SystemClock).add_task(&text)) {
        Ok(tasks) => ActionResponse::success("Task added.", tasks.first().map(|t| t.id)),
        Err(err) => ActionResponse::failure(format!("task_add failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle(id: i64) -> ActionResponse {
    match with_write(|store| TaskService::new(store, SystemClock).toggle_task(id)) {
        Ok(tasks) => {
            let completed = tasks.iter().any(|task| task.id == id && task.completed);
            let message = if completed {
                "Task completed."
            } else {
                "Task reopened."
            };
            ActionResponse::success(message, Some(id))
        }
        Err(err) => ActionResponse::failure(format!("task_toggle failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(id: i64) -> ActionResponse {
    match with_write(|store| TaskService::new(store, SystemClock).delete_task(id)) {
        Ok(_) => ActionResponse::success("Task deleted.", Some(id)),
        Err(err) => ActionResponse::failure(format!("task_delete failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn audio_list() -> AudioListResponse {
    match with_read(|store| AudioNoteService::new(store, SystemClock).list_notes()) {
        Ok(notes) => AudioListResponse {
            ok: true,
            message: count_message(notes.len()),
            items: notes.into_iter().map(to_audio_item).collect(),
        },
        Err(err) => AudioListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("audio_list failed: {err}"),
        },
    }
}

/// Stores a finished recording.
///
/// Call after the platform recorder has stopped and produced `uri`.
#[flutter_rust_bridge::frb(sync)]
pub fn audio_add(uri: String, duration_ms: Option<u64>) -> ActionResponse {
    let saved = with_write(|store| {
        AudioNoteService::new(store, SystemClock).add_note(&uri, duration_ms)
    });
    match saved {
        Ok(notes) => ActionResponse::success("Recording saved.", notes.first().map(|n| n.id)),
        Err(err) => ActionResponse::failure(format!("audio_add failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn audio_delete(id: i64) -> ActionResponse {
    match with_write(|store| AudioNoteService::new(store, SystemClock).delete_note(id)) {
        Ok(_) => ActionResponse::success("Recording deleted.", Some(id)),
        Err(err) => ActionResponse::failure(format!("audio_delete failed: {err}")),
    }
}

/// Formats a playback position reported by the platform player.
#[flutter_rust_bridge::frb(sync)]
pub fn playback_label(position_ms: u64, duration_ms: u64) -> String {
    format!(
        "{} / {}",
        format_playback_millis(position_ms),
        format_playback_millis(duration_ms)
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn data_summary() -> DataSummaryResponse {
    match with_read(|store| DataService::new(store).summary()) {
        Ok(summary) => DataSummaryResponse {
            ok: true,
            diary_entries: saturating_u32(summary.diary_entries),
            tasks: saturating_u32(summary.tasks),
            open_tasks: saturating_u32(summary.open_tasks),
            audio_notes: saturating_u32(summary.audio_notes),
            message: String::new(),
        },
        Err(err) => DataSummaryResponse {
            ok: false,
            diary_entries: 0,
            tasks: 0,
            open_tasks: 0,
            audio_notes: 0,
            message: format!("data_summary failed: {err}"),
        },
    }
}

/// Deletes every diary entry, task and recording reference on the device.
#[flutter_rust_bridge::frb(sync)]
pub fn clear_all_data() -> ActionResponse {
    match with_write(|store| DataService::new(store).clear_all()) {
        Ok(()) => ActionResponse::success("All data deleted.", None),
        Err(err) => ActionResponse::failure(format!("clear_all_data failed: {err}")),
    }
}

fn resolve_ffi_db_path() -> PathBuf {
    DB_PATH.get_or_init(|| resolve_db_path(None)).clone()
}

fn with_read<T>(f: impl FnOnce(SqliteKvStore<'_>) -> ServiceResult<T>) -> Result<T, String> {
    let conn = open_db(resolve_ffi_db_path()).map_err(|err| format!("DB open failed: {err}"))?;
    f(SqliteKvStore::new(&conn)).map_err(|err| err.to_string())
}

fn with_write<T>(f: impl FnOnce(SqliteKvStore<'_>) -> ServiceResult<T>) -> Result<T, String> {
    let mut conn =
        open_db(resolve_ffi_db_path()).map_err(|err| format!("DB open failed: {err}"))?;
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|err| format!("DB write lock failed: {err}"))?;
    let value = f(SqliteKvStore::new(&tx)).map_err(|err| {
        warn!("event=ffi_write module=ffi status=error error={err}");
        err.to_string()
    })?;
    tx.commit().map_err(|err| format!("DB commit failed: {err}"))?;
    Ok(value)
}

fn count_message(count: usize) -> String {
    if count == 0 {
        "Nothing saved yet.".to_string()
    } else {
        format!("{count} item(s).")
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn to_diary_item(entry: DiaryEntry) -> DiaryItem {
    DiaryItem {
        id: entry.id,
        emotion_key: entry.emotion.key().to_string(),
        emoji: entry.emotion.emoji().to_string(),
        note: entry.note,
        date: entry.date,
        time: entry.time,
    }
}

fn to_task_item(task: Task) -> TaskItem {
    TaskItem {
        id: task.id,
        text: task.text,
        completed: task.completed,
        created_at: task.created_at,
        completed_at: task.completed_at,
    }
}

fn to_audio_item(note: AudioNote) -> AudioItem {
    AudioItem {
        duration_label: note.duration_label(),
        id: note.id,
        uri: note.uri,
        date: note.date,
        time: note.time,
    }
}
