use chrono::{FixedOffset, TimeZone};
use diario_core::db::open_db_in_memory;
use diario_core::{
    AudioNoteService, Collection, DataService, DataSummary, DiaryService, Emotion, FixedClock,
    KvStore, SqliteKvStore, TaskService,
};

fn clock() -> FixedClock {
    FixedClock::new(
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 2, 12, 0, 0)
            .unwrap(),
    )
}

#[test]
fn collections_are_independent() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKvStore::new(&conn);
    let clock = clock();

    let diary = DiaryService::new(store, &clock);
    let tasks = TaskService::new(store, &clock);
    let audio = AudioNoteService::new(store, &clock);

    diary.add_entry(Emotion::Neutral, None).unwrap();
    let task_id = tasks.add_task("escovar dentes").unwrap()[0].id;
    audio.add_note("file:///x.m4a", None).unwrap();

    tasks.delete_task(task_id).unwrap();

    assert_eq!(diary.list_entries().unwrap().len(), 1);
    assert_eq!(audio.list_notes().unwrap().len(), 1);
    assert_eq!(
        store.keys().unwrap(),
        vec!["audioNotes".to_string(), "diario".to_string(), "tasks".to_string()]
    );
}

#[test]
fn summary_counts_records_and_open_tasks() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKvStore::new(&conn);
    let clock = clock();
    let tasks = TaskService::new(store, &clock);

    tasks.add_task("a").unwrap();
    let done = tasks.add_task("b").unwrap()[0].id;
    tasks.toggle_task(done).unwrap();
    DiaryService::new(store, &clock)
        .add_entry(Emotion::Happy, None)
        .unwrap();

    let summary = DataService::new(store).summary().unwrap();
    assert_eq!(
        summary,
        DataSummary {
            diary_entries: 1,
            tasks: 2,
            open_tasks: 1,
            audio_notes: 0,
        }
    );
}

#[test]
fn clear_one_collection_leaves_the_others() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKvStore::new(&conn);
    let clock = clock();
    TaskService::new(store, &clock).add_task("a").unwrap();
    DiaryService::new(store, &clock)
        .add_entry(Emotion::Sad, None)
        .unwrap();

    let data = DataService::new(store);
    assert!(data.clear(Collection::Tasks).unwrap());
    assert!(!data.clear(Collection::Tasks).unwrap());

    let summary = data.summary().unwrap();
    assert_eq!(summary.tasks, 0);
    assert_eq!(summary.diary_entries, 1);
}

#[test]
fn clear_all_wipes_every_collection() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKvStore::new(&conn);
    let clock = clock();
    DiaryService::new(store, &clock)
        .add_entry(Emotion::Happy, None)
        .unwrap();
    AudioNoteService::new(store, &clock)
        .add_note("file:///y.m4a", Some(1_000))
        .unwrap();

    let data = DataService::new(store);
    data.clear_all().unwrap();

    assert_eq!(data.summary().unwrap(), DataSummary::default());
    assert!(store.keys().unwrap().is_empty());
}

#[test]
fn collection_names_parse_from_user_input() {
    assert_eq!(Collection::parse("Diario"), Some(Collection::Diary));
    assert_eq!(Collection::parse("audio"), Some(Collection::AudioNotes));
    assert_eq!(Collection::parse("tasks").map(Collection::key), Some("tasks"));
    assert_eq!(Collection::parse("photos"), None);
}
