use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use diario_core::db::open_db_in_memory;
use diario_core::{FixedClock, KvStore, ServiceError, SqliteKvStore, TaskService};

fn start() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 10, 8, 0, 0)
        .unwrap()
}

#[test]
fn add_task_trims_text_and_starts_open() {
    let conn = open_db_in_memory().unwrap();
    let clock = FixedClock::new(start());
    let service = TaskService::new(SqliteKvStore::new(&conn), &clock);

    let tasks = service.add_task("  tomar remédio  ").unwrap();

    let task = &tasks[0];
    assert_eq!(task.text, "tomar remédio");
    assert!(!task.completed);
    assert_eq!(task.created_at, start().timestamp_millis());
    assert_eq!(task.completed_at, None);
}

#[test]
fn blank_task_text_is_rejected_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let clock = FixedClock::new(start());
    let service = TaskService::new(SqliteKvStore::new(&conn), &clock);

    let err = service.add_task(" \t ").unwrap_err();

    assert!(matches!(err, ServiceError::EmptyInput(_)));
    assert_eq!(SqliteKvStore::new(&conn).get("tasks").unwrap(), None);
}

#[test]
fn toggle_sets_and_clears_completion_timestamp() {
    let conn = open_db_in_memory().unwrap();
    let clock = FixedClock::new(start());
    let service = TaskService::new(SqliteKvStore::new(&conn), &clock);
    let id = service.add_task("arrumar a cama").unwrap()[0].id;

    clock.advance(Duration::minutes(30));
    let done = service.toggle_task(id).unwrap();
    assert!(done[0].completed);
    assert_eq!(
        done[0].completed_at,
        Some((start() + Duration::minutes(30)).timestamp_millis())
    );

    clock.advance(Duration::minutes(30));
    let reopened = service.toggle_task(id).unwrap();
    assert!(!reopened[0].completed);
    assert_eq!(reopened[0].completed_at, None);
    assert_eq!(service.list_tasks().unwrap(), reopened);
}

#[test]
fn toggle_keeps_order_and_other_tasks_untouched() {
    let conn = open_db_in_memory().unwrap();
    let clock = FixedClock::new(start());
    let service = TaskService::new(SqliteKvStore::new(&conn), &clock);

    service.add_task("primeira").unwrap();
    clock.advance(Duration::seconds(1));
    let before = service.add_task("segunda").unwrap();

    let after = service.toggle_task(before[1].id).unwrap();

    assert_eq!(after[0], before[0]);
    assert_eq!(after[1].id, before[1].id);
    assert!(after[1].completed);
}

#[test]
fn toggle_and_delete_of_unknown_id_report_not_found() {
    let conn = open_db_in_memory().unwrap();
    let clock = FixedClock::new(start());
    let service = TaskService::new(SqliteKvStore::new(&conn), &clock);
    service.add_task("existe").unwrap();

    assert!(matches!(
        service.toggle_task(42),
        Err(ServiceError::NotFound { id: 42, .. })
    ));
    assert!(matches!(
        service.delete_task(42),
        Err(ServiceError::NotFound { id: 42, .. })
    ));
    assert_eq!(service.list_tasks().unwrap().len(), 1);
}

#[test]
fn delete_removes_only_the_target_task() {
    let conn = open_db_in_memory().unwrap();
    let clock = FixedClock::new(start());
    let service = TaskService::new(SqliteKvStore::new(&conn), &clock);

    let mut ids = Vec::new();
    for text in ["a", "b", "c"] {
        ids.push(service.add_task(text).unwrap()[0].id);
        clock.advance(Duration::seconds(1));
    }

    let remaining = service.delete_task(ids[0]).unwrap();

    let texts = remaining.iter().map(|t| t.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts, vec!["c", "b"]);
}

#[test]
fn stored_layout_uses_camel_case_fields() {
    let conn = open_db_in_memory().unwrap();
    let clock = FixedClock::new(start());
    let service = TaskService::new(SqliteKvStore::new(&conn), &clock);
    let id = service.add_task("regar plantas").unwrap()[0].id;
    service.toggle_task(id).unwrap();

    let blob = SqliteKvStore::new(&conn).get("tasks").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(json[0]["id"], id);
    assert_eq!(json[0]["completed"], true);
    assert_eq!(json[0]["completedAt"], start().timestamp_millis());
    assert_eq!(json[0]["createdAt"], start().timestamp_millis());
}

#[test]
fn add_task_after_max_id_reports_error_without_panicking() {
    let conn = open_db_in_memory().unwrap();
    SqliteKvStore::new(&conn)
        .set(
            "tasks",
            r#"[{"id":9223372036854775807,"text":"a","completed":false,"createdAt":1}]"#,
        )
        .unwrap();
    let clock = FixedClock::new(start());
    let service = TaskService::new(SqliteKvStore::new(&conn), &clock);

    let err = service.add_task("b").unwrap_err();

    assert!(matches!(err, ServiceError::Repo(_)));
    assert!(err.to_string().contains("exhausted"));
    assert_eq!(service.list_tasks().unwrap().len(), 1);
}
