use chrono::NaiveDate;
use polars::prelude::*;
use project_model::{
    ConversionError, FieldError, JsonFileSource, ProjectError, ProjectReader, RecordSource,
    UnreadableDates, assignments_frame, resources_frame, tasks_frame, tasks_frame_with,
    write_assignments_csv, write_tasks_csv,
};
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

fn sample_record_set() -> Value {
    json!({
        "property_values": {"project_title": "Export Project"},
        "task_types": {},
        "tasks": [
            {
                "unique_id": 1,
                "id": 1,
                "name": "Design",
                "start": "2024-01-02T08:00:00",
                "duration": 8,
                "milestone": true
            },
            {"unique_id": 2, "id": 2, "name": "Build", "parent_task_unique_id": 1}
        ],
        "resource_types": {},
        "resources": [{"unique_id": 10, "name": "Ana", "standard_rate": 55.5}],
        "assignment_types": {},
        "assignments": [
            {"unique_id": 100, "task_unique_id": 1, "resource_unique_id": 10, "work": 480}
        ],
    })
}

#[test]
fn tasks_frame_types_columns_by_schema() {
    let project = ProjectReader::default().read_value(sample_record_set()).unwrap();
    let df = tasks_frame(
        &project,
        &["unique_id", "name", "start", "duration", "milestone"],
    )
    .unwrap();

    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 5);

    let uid = df.column("unique_id").unwrap().as_materialized_series();
    assert_eq!(uid.dtype(), &DataType::Int64);
    assert_eq!(uid.i64().unwrap().get(1), Some(2));

    let name = df.column("name").unwrap().as_materialized_series();
    assert_eq!(name.str().unwrap().get(0), Some("Design"));

    let start = df.column("start").unwrap().as_materialized_series();
    assert_eq!(
        start.dtype(),
        &DataType::Datetime(TimeUnit::Milliseconds, None)
    );
    assert_eq!(start.null_count(), 1);
    let millis = start.cast(&DataType::Int64).unwrap();
    let expected = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp_millis();
    assert_eq!(millis.i64().unwrap().get(0), Some(expected));

    let duration = df.column("duration").unwrap().as_materialized_series();
    assert_eq!(duration.dtype(), &DataType::Float64);
    assert_eq!(duration.f64().unwrap().get(0), Some(8.0));
    assert_eq!(duration.f64().unwrap().get(1), None);

    let milestone = df.column("milestone").unwrap().as_materialized_series();
    assert_eq!(milestone.bool().unwrap().get(0), Some(true));
    assert_eq!(milestone.bool().unwrap().get(1), Some(false));
}

#[test]
fn resource_and_assignment_frames() {
    let project = ProjectReader::default().read_value(sample_record_set()).unwrap();

    let resources = resources_frame(&project, &["unique_id", "name", "standard_rate"]).unwrap();
    assert_eq!(resources.height(), 1);
    let rate = resources
        .column("standard_rate")
        .unwrap()
        .as_materialized_series();
    assert_eq!(rate.null_count(), 0);

    let assignments = assignments_frame(
        &project,
        &["unique_id", "task_unique_id", "resource_unique_id", "work"],
    )
    .unwrap();
    assert_eq!(assignments.height(), 1);
    let work = assignments.column("work").unwrap().as_materialized_series();
    assert_eq!(work.f64().unwrap().get(0), Some(480.0));
}

#[test]
fn malformed_date_fails_the_frame() {
    let mut input = sample_record_set();
    input["tasks"][1]["start"] = json!("whenever");
    let project = ProjectReader::default().read_value(input).unwrap();

    let result = tasks_frame(&project, &["unique_id", "start"]);
    assert!(matches!(
        result,
        Err(ProjectError::Field(FieldError::DateFormat { .. }))
    ));
    // other columns are still readable
    assert!(tasks_frame(&project, &["unique_id", "name"]).is_ok());
}

#[test]
fn malformed_date_becomes_null_when_asked() {
    let mut input = sample_record_set();
    input["tasks"][1]["start"] = json!("whenever");
    let project = ProjectReader::default().read_value(input).unwrap();

    let df = tasks_frame_with(&project, &["unique_id", "start"], UnreadableDates::Null).unwrap();
    assert_eq!(df.height(), 2);
    let start = df.column("start").unwrap().as_materialized_series();
    assert_eq!(start.null_count(), 1);
    assert!(start.cast(&DataType::Int64).unwrap().i64().unwrap().get(0).is_some());
    assert_eq!(project.date_errors().len(), 1);
}

#[test]
fn tasks_csv_renders_typed_values() {
    let project = ProjectReader::default().read_value(sample_record_set()).unwrap();
    let mut out: Vec<u8> = Vec::new();
    write_tasks_csv(&project, &["unique_id", "name", "duration"], &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "unique_id,name,duration\n1,Design,8\n2,Build,0\n");
}

#[test]
fn assignments_csv_writes_header_even_when_empty() {
    let mut input = sample_record_set();
    input["assignments"] = json!([]);
    let project = ProjectReader::default().read_value(input).unwrap();
    let mut out: Vec<u8> = Vec::new();
    write_assignments_csv(&project, &["unique_id", "work"], &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "unique_id,work\n");
}

#[test]
fn read_path_loads_a_record_set_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", sample_record_set()).unwrap();

    let project = ProjectReader::default().read_path(file.path()).unwrap();
    assert_eq!(project.tasks().len(), 2);
    assert_eq!(project.properties().project_title(), Some("Export Project"));
    assert_eq!(project.root_task_count(), 1);
}

#[test]
fn json_file_source_feeds_the_reader() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", sample_record_set()).unwrap();

    let source = JsonFileSource::new(file.path());
    assert_eq!(source.path(), file.path());
    let project = ProjectReader::default().read_source(&source).unwrap();
    assert_eq!(project.resources().len(), 1);
    assert_eq!(project.assignments().len(), 1);
}

#[test]
fn invalid_json_is_a_json_error() {
    let result = ProjectReader::default().read_str("{\"tasks\": [");
    assert!(matches!(result, Err(ProjectError::Json(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ProjectReader::default().read_path(dir.path().join("absent.json"));
    assert!(matches!(result, Err(ProjectError::Io(_))));
}

struct LockedFile;

impl RecordSource for LockedFile {
    fn record_set(&self) -> std::result::Result<Value, ConversionError> {
        Err(ConversionError::classify(
            "Conversion Error: File is password protected",
        ))
    }
}

#[test]
fn converter_failure_is_reported_with_its_reason() {
    let result = ProjectReader::default().read_source(&LockedFile);
    assert!(matches!(
        result,
        Err(ProjectError::Conversion(ConversionError::PasswordProtected { .. }))
    ));
}
