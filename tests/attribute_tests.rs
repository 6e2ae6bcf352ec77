use chrono::TimeZone;
use chrono_tz::Tz;
use project_model::{
    EntityKind, Entity, FieldError, FieldType, FieldValue, Project, ProjectReader, ReadKind,
    ReaderConfig,
};
use serde_json::{Value, json};

fn project_with_task(task: Value, zone: Tz) -> Project {
    project_with_types(task, json!({}), zone)
}

fn project_with_types(task: Value, task_types: Value, zone: Tz) -> Project {
    let config = ReaderConfig::default().with_time_zone(zone);
    ProjectReader::new(config)
        .read_value(json!({
            "task_types": task_types,
            "tasks": [task],
            "resource_types": {},
            "resources": [],
            "assignment_types": {},
            "assignments": [],
        }))
        .unwrap()
}

#[test]
fn only_a_literal_true_reads_as_true() {
    let project = project_with_task(
        json!({
            "unique_id": 1,
            "milestone": true,
            "critical": "true",
            "summary": 1,
            "active": false,
        }),
        Tz::UTC,
    );
    let task = &project.tasks()[0];

    assert!(task.read_boolean("milestone"));
    assert!(!task.read_boolean("critical"));
    assert!(!task.read_boolean("summary"));
    assert!(!task.read_boolean("active"));
    assert!(!task.read_boolean("flag1"));
}

#[test]
fn absent_numbers_read_as_zero() {
    let project = project_with_task(json!({"unique_id": 1}), Tz::UTC);
    let task = &project.tasks()[0];

    assert_eq!(task.read_duration("duration"), 0.0);
    assert_eq!(task.read_float("cost"), 0.0);
    assert_eq!(task.read_integer("priority"), 0);
    assert_eq!(task.read_date("start"), Ok(None));
    assert_eq!(task.read_raw("notes"), None);
}

#[test]
fn present_values_decode_to_their_semantic_value() {
    let zone: Tz = "America/New_York".parse().unwrap();
    let project = project_with_task(
        json!({
            "unique_id": 1,
            "name": "Frame walls",
            "start": "2024-03-01T08:00:00",
            "finish": "2024-03-04T17:00:00-05:00",
            "duration": "2.5",
            "cost": 1250.75,
            "priority": "500",
            "guid": "7f1c0a2e-0000-4000-8000-000000000001",
        }),
        zone,
    );
    let task = &project.tasks()[0];

    let start = task.start().unwrap().unwrap();
    assert_eq!(Some(start), zone.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).single());
    let finish = task.finish().unwrap().unwrap();
    assert_eq!(Some(finish), zone.with_ymd_and_hms(2024, 3, 4, 17, 0, 0).single());
    assert_eq!(task.duration(), 2.5);
    assert_eq!(task.read_float("cost"), 1250.75);
    assert_eq!(task.read_integer("priority"), 500);
    assert_eq!(task.name(), Some("Frame walls"));
    assert_eq!(
        task.read_string("guid"),
        Some("7f1c0a2e-0000-4000-8000-000000000001")
    );
}

#[test]
fn malformed_numbers_are_coerced_not_rejected() {
    let project = project_with_task(
        json!({"unique_id": 1, "duration": "abc", "cost": "12.5 USD", "priority": "7.9"}),
        Tz::UTC,
    );
    let task = &project.tasks()[0];

    assert_eq!(task.read_duration("duration"), 0.0);
    assert_eq!(task.read_float("cost"), 12.5);
    assert_eq!(task.read_integer("priority"), 7);
}

#[test]
fn malformed_date_fails_only_its_own_field() {
    let project = project_with_task(
        json!({
            "unique_id": 3,
            "name": "Inspect",
            "start": "next tuesday",
            "finish": "2024-05-01T17:00:00",
        }),
        Tz::UTC,
    );
    let task = &project.tasks()[0];

    match task.start() {
        Err(FieldError::DateFormat { field, value, zone }) => {
            assert_eq!(field, "start");
            assert_eq!(value, "next tuesday");
            assert_eq!(zone, "UTC");
        }
        other => panic!("expected a date format error, got {other:?}"),
    }
    assert!(task.finish().unwrap().is_some());
    assert_eq!(task.name(), Some("Inspect"));

    let errors = project.date_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, EntityKind::Task);
    assert_eq!(errors[0].unique_id, Some(3));
}

#[test]
fn typed_getters_check_the_registered_type() {
    let project = project_with_task(
        json!({"unique_id": 1, "cost": 40.0, "start": "2024-01-01", "custom_score": "8"}),
        Tz::UTC,
    );
    let task = &project.tasks()[0];

    assert_eq!(task.get_float("cost"), Ok(40.0));
    assert_eq!(
        task.get_date("cost"),
        Err(FieldError::TypeMismatch {
            field: "cost".into(),
            expected: ReadKind::Date,
            actual: ReadKind::Float,
        })
    );
    assert!(task.get_date("start").unwrap().is_some());
    assert!(matches!(
        task.get_boolean("start"),
        Err(FieldError::TypeMismatch { .. })
    ));
    // fields the schema does not know are read leniently
    assert_eq!(task.get_integer("custom_score"), Ok(8));
    assert_eq!(task.field_type("custom_score"), None);
}

#[test]
fn generic_field_read_follows_the_schema() {
    let project = project_with_task(
        json!({"unique_id": 1, "name": "Survey", "work": 28800, "milestone": true, "extra": [1, 2]}),
        Tz::UTC,
    );
    let task = &project.tasks()[0];

    assert_eq!(task.field("work").unwrap(), FieldValue::Duration(28800.0));
    assert_eq!(task.field("milestone").unwrap(), FieldValue::Boolean(true));
    assert_eq!(task.field("unique_id").unwrap(), FieldValue::Integer(1));
    assert_eq!(task.field("name").unwrap().render(), "Survey");
    assert_eq!(task.field("extra").unwrap().kind(), ReadKind::Raw);
    assert_eq!(task.field("extra").unwrap().render(), "[1,2]");
}

#[test]
fn declared_types_override_the_registry() {
    let project = project_with_types(
        json!({"unique_id": 1, "text1": "2024-06-01T09:30:00", "start": "2024-06-03"}),
        json!({"text1": "date", "start": 19}),
        Tz::UTC,
    );
    let task = &project.tasks()[0];

    assert_eq!(task.field_type("text1").map(|t| t.read_kind()), Some(ReadKind::Date));
    assert!(matches!(task.field("text1").unwrap(), FieldValue::Date(Some(_))));
    // numeric codes never override a registered field
    assert_eq!(task.field_type("start").map(|t| t.read_kind()), Some(ReadKind::Date));
}

#[test]
fn numeric_type_codes_describe_unregistered_fields() {
    let project = project_with_types(
        json!({"unique_id": 1, "site_visit": "2024-06-01T09:30:00", "crew_size": "4"}),
        json!({"site_visit": 2, "crew_size": 27, "mystery": 4000}),
        Tz::UTC,
    );
    let task = &project.tasks()[0];

    assert_eq!(task.field_type("site_visit"), Some(FieldType::Date));
    assert!(matches!(task.field("site_visit").unwrap(), FieldValue::Date(Some(_))));
    assert_eq!(task.field_type("crew_size").map(|t| t.read_kind()), Some(ReadKind::Integer));
    assert_eq!(task.read_integer("crew_size"), 4);
    assert_eq!(task.field_type("mystery"), None);
}

#[test]
fn null_values_count_as_absent() {
    let project = project_with_task(
        json!({"unique_id": 1, "start": null, "cost": null, "milestone": null}),
        Tz::UTC,
    );
    let task = &project.tasks()[0];

    assert_eq!(task.start(), Ok(None));
    assert_eq!(task.read_float("cost"), 0.0);
    assert!(!task.read_boolean("milestone"));
    assert!(project.date_errors().is_empty());
}
