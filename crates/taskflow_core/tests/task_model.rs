use taskflow_core::{Task, TaskFilter, TaskId, TaskValidationError};

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("  Buy milk  ").unwrap();

    assert!(!task.id().as_str().is_empty());
    assert_eq!(task.content(), "Buy milk");
    assert!(!task.is_completed());
    assert!(task.created_at_utc().is_some());
}

#[test]
fn task_new_generates_distinct_ids() {
    let first = Task::new("one").unwrap();
    let second = Task::new("two").unwrap();
    assert_ne!(first.id(), second.id());
}

#[test]
fn blank_content_is_rejected() {
    assert_eq!(Task::new("").unwrap_err(), TaskValidationError::EmptyContent);
    assert_eq!(
        Task::new(" \t\n").unwrap_err(),
        TaskValidationError::EmptyContent
    );
}

#[test]
fn with_id_rejects_blank_id() {
    let err = Task::with_id("  ", "valid").unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyId);
}

#[test]
fn toggle_flips_completion_both_ways() {
    let mut task = Task::new("flip").unwrap();
    task.toggle();
    assert!(task.is_completed());
    task.toggle();
    assert!(!task.is_completed());
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let task = Task::with_id("1700000000000", "ship it").unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "1700000000000");
    assert_eq!(json["content"], "ship it");
    assert_eq!(json["completed"], false);
    assert_eq!(json["createdAt"], task.created_at());
    assert_eq!(json.as_object().unwrap().len(), 4);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialization_keeps_legacy_timestamp_text_verbatim() {
    let raw = r#"{"id":"1","content":"x","completed":true,"createdAt":"2024-03-01T09:30:00.000Z"}"#;
    let task: Task = serde_json::from_str(raw).unwrap();

    assert_eq!(task.id(), &TaskId::from("1"));
    assert!(task.is_completed());
    assert_eq!(task.created_at(), "2024-03-01T09:30:00.000Z");
    assert_eq!(serde_json::to_string(&task).unwrap(), raw);
}

#[test]
fn deserialization_defaults_missing_completed_flag() {
    let task: Task =
        serde_json::from_str(r#"{"id":"7","content":"old","createdAt":"2024-03-01T09:30:00.000Z"}"#)
            .unwrap();
    assert!(!task.is_completed());
}

#[test]
fn created_at_utc_is_none_for_non_rfc3339_text() {
    let task: Task =
        serde_json::from_str(r#"{"id":"7","content":"old","createdAt":"yesterday"}"#).unwrap();
    assert!(task.created_at_utc().is_none());
}

#[test]
fn filter_matches_by_completion() {
    let open = Task::new("open").unwrap();
    let mut done = Task::new("done").unwrap();
    done.toggle();

    assert!(TaskFilter::All.matches(&open) && TaskFilter::All.matches(&done));
    assert!(TaskFilter::Active.matches(&open) && !TaskFilter::Active.matches(&done));
    assert!(!TaskFilter::Completed.matches(&open) && TaskFilter::Completed.matches(&done));
}

#[test]
fn filter_parsing_is_case_insensitive_and_strict() {
    assert_eq!("ACTIVE".parse::<TaskFilter>().unwrap(), TaskFilter::Active);
    assert_eq!(" all ".parse::<TaskFilter>().unwrap(), TaskFilter::All);
    let err = "done".parse::<TaskFilter>().unwrap_err();
    assert!(err.to_string().contains("all|active|completed"));
}
