use chrono::{NaiveDate, NaiveTime, Weekday};
use project_model::{DayType, Project, ProjectReader};
use serde_json::{Value, json};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn build(calendars: Value, tasks: Value, resources: Value) -> Project {
    ProjectReader::default()
        .read_value(json!({
            "calendars": calendars,
            "property_values": {"default_calendar_unique_id": 1},
            "task_types": {},
            "tasks": tasks,
            "resource_types": {},
            "resources": resources,
            "assignment_types": {},
            "assignments": [],
        }))
        .unwrap()
}

fn sample_project() -> Project {
    build(
        json!([
            {
                "id": 1,
                "name": "Standard",
                "days": [
                    {"name": "sunday", "type": "non_working"},
                    {
                        "name": "monday",
                        "type": "working",
                        "hours": [{"from": "08:00", "to": "12:00"}, {"from": "13:00", "to": "17:00"}]
                    }
                ],
                "exceptions": [
                    {"name": "Christmas", "from": "2024-12-25", "to": "2024-12-25", "type": "non_working"}
                ]
            },
            {
                "id": 2,
                "name": "Night Shift",
                "base_calendar_name": "Standard",
                "resource": "Nora",
                "days": [
                    {"name": "saturday", "type": "working", "hours": [{"from": "22:00", "to": "23:30"}]},
                    {"name": "monday", "type": "default"}
                ],
                "weeks": [
                    {
                        "name": "Summer",
                        "from": "2024-07-01",
                        "to": "2024-08-31",
                        "days": [{"name": "friday", "type": "non_working"}]
                    }
                ],
                "exceptions": [
                    {"from": "2024-12-28", "type": "working", "hours": [{"from": "10:00", "to": "14:00"}]}
                ]
            }
        ]),
        json!([
            {"unique_id": 1, "calendar_unique_id": 2},
            {"unique_id": 2, "calendar_unique_id": 99}
        ]),
        json!([
            {"unique_id": 1, "name": "Nora"},
            {"unique_id": 2, "name": "Sam", "calendar_unique_id": 1},
            {"unique_id": 3, "name": "Lee"}
        ]),
    )
}

#[test]
fn calendars_are_indexed_by_name_and_id() {
    let project = sample_project();
    assert_eq!(project.calendars().len(), 2);
    assert_eq!(project.calendar_by_id(2).map(|c| c.name()), Some("Night Shift"));
    assert_eq!(project.calendar_by_name("Standard").and_then(|c| c.id()), Some(1));
    assert_eq!(project.default_calendar().map(|c| c.name()), Some("Standard"));
}

#[test]
fn base_calendar_is_resolved_by_name() {
    let project = sample_project();
    let night = project.calendar_by_name("Night Shift").unwrap();
    assert!(night.is_derived());
    assert_eq!(night.base_calendar(&project).map(|c| c.name()), Some("Standard"));
    let standard = project.calendar_by_name("Standard").unwrap();
    assert!(standard.base_calendar(&project).is_none());
}

#[test]
fn days_are_indexed_by_weekday_name() {
    let project = sample_project();
    let standard = project.calendar_by_name("Standard").unwrap();
    assert_eq!(standard.day(Weekday::Sun).day_type(), DayType::NonWorking);
    assert_eq!(standard.day(Weekday::Mon).day_type(), DayType::Working);
    assert_eq!(standard.day(Weekday::Mon).hours().len(), 2);
    assert_eq!(standard.day(Weekday::Wed).day_type(), DayType::Default);
    assert_eq!(
        standard.day(Weekday::Mon).hours()[1].range().unwrap(),
        Some((t(13, 0), t(17, 0)))
    );
}

#[test]
fn weekday_rule_defers_to_the_base_calendar() {
    let project = sample_project();
    let standard = project.calendar_by_name("Standard").unwrap();
    let night = project.calendar_by_name("Night Shift").unwrap();

    // no base calendar: default days are Monday to Friday
    assert!(standard.is_working_day(&project, Weekday::Tue));
    assert!(!standard.is_working_day(&project, Weekday::Sat));
    assert!(!standard.is_working_day(&project, Weekday::Sun));

    assert!(night.is_working_day(&project, Weekday::Sat));
    assert!(!night.is_working_day(&project, Weekday::Sun));
    assert!(night.is_working_day(&project, Weekday::Mon));
}

#[test]
fn exceptions_fall_back_to_the_base_calendar() {
    let project = sample_project();
    let night = project.calendar_by_name("Night Shift").unwrap();

    let christmas = night.exception_for(&project, d(2024, 12, 25)).unwrap().unwrap();
    assert_eq!(christmas.name(), Some("Christmas"));
    assert!(!night.is_working_date(&project, d(2024, 12, 25)).unwrap());

    let saturday = night.exception_for(&project, d(2024, 12, 28)).unwrap().unwrap();
    assert!(saturday.is_working());
    assert_eq!(
        night.working_hours(&project, d(2024, 12, 28)).unwrap(),
        vec![(t(10, 0), t(14, 0))]
    );
    assert!(night.exception_for(&project, d(2024, 12, 27)).unwrap().is_none());
}

#[test]
fn working_hours_inherit_through_default_days() {
    let project = sample_project();
    let night = project.calendar_by_name("Night Shift").unwrap();

    // Monday 2024-12-23 is "default" on the night shift, so Standard's hours apply
    assert_eq!(
        night.working_hours(&project, d(2024, 12, 23)).unwrap(),
        vec![(t(8, 0), t(12, 0)), (t(13, 0), t(17, 0))]
    );
    assert_eq!(
        night.working_hours(&project, d(2024, 12, 21)).unwrap(),
        vec![(t(22, 0), t(23, 30))]
    );
    assert!(night.working_hours(&project, d(2024, 12, 22)).unwrap().is_empty());
}

#[test]
fn work_week_applies_inside_its_range() {
    let project = sample_project();
    let night = project.calendar_by_name("Night Shift").unwrap();

    assert_eq!(
        night.work_week_for(d(2024, 7, 5)).unwrap().and_then(|w| w.name()),
        Some("Summer")
    );
    // Friday inside the summer week is off, Thursday falls through to the weekday rule
    assert!(!night.is_working_date(&project, d(2024, 7, 5)).unwrap());
    assert!(night.is_working_date(&project, d(2024, 7, 4)).unwrap());
    // the same Friday weekday outside the range is a working day
    assert!(night.is_working_date(&project, d(2024, 9, 6)).unwrap());
}

#[test]
fn count_working_dates_skips_weekends_and_exceptions() {
    let project = sample_project();
    let standard = project.calendar_by_name("Standard").unwrap();
    let dates = standard
        .working_dates_in_range(&project, d(2024, 12, 23), d(2024, 12, 29))
        .unwrap();
    assert_eq!(
        dates,
        vec![d(2024, 12, 23), d(2024, 12, 24), d(2024, 12, 26), d(2024, 12, 27)]
    );
    assert_eq!(
        standard
            .count_working_dates(&project, d(2024, 12, 23), d(2024, 12, 29))
            .unwrap(),
        4
    );
}

#[test]
fn resource_and_task_calendars_resolve_lazily() {
    let project = sample_project();

    let nora = project.resource_by_unique_id(1).unwrap();
    assert_eq!(nora.calendar(&project).map(|c| c.name()), Some("Night Shift"));
    let sam = project.resource_by_unique_id(2).unwrap();
    assert_eq!(project.calendar_for_resource(sam).map(|c| c.name()), Some("Standard"));
    let lee = project.resource_by_unique_id(3).unwrap();
    assert!(lee.calendar(&project).is_none());

    let task = project.task_by_unique_id(1).unwrap();
    assert_eq!(task.calendar(&project).map(|c| c.name()), Some("Night Shift"));
    let dangling = project.task_by_unique_id(2).unwrap();
    assert!(dangling.calendar(&project).is_none());
}

#[test]
fn looping_base_calendars_do_not_hang() {
    let project = build(
        json!([
            {"id": 1, "name": "A", "base_calendar_name": "B"},
            {"id": 2, "name": "B", "base_calendar_name": "A"}
        ]),
        json!([]),
        json!([]),
    );
    let a = project.calendar_by_name("A").unwrap();
    assert!(a.is_working_day(&project, Weekday::Wed));
    assert!(!a.is_working_day(&project, Weekday::Sun));
    assert!(a.exception_for(&project, d(2024, 1, 1)).unwrap().is_none());
}

#[test]
fn malformed_exception_dates_surface_on_query() {
    let project = build(
        json!([{"id": 1, "name": "Broken", "exceptions": [{"from": "someday"}]}]),
        json!([]),
        json!([]),
    );
    let calendar = project.calendar_by_name("Broken").unwrap();
    assert!(calendar.exception_for(&project, d(2024, 1, 1)).is_err());
    assert!(calendar.is_working_day(&project, Weekday::Mon));
}

fn converter_shaped_project() -> Project {
    build(
        json!([
            {
                "unique_id": 1,
                "name": "Standard",
                "sunday": {"type": "non_working"},
                "monday": {"type": "working", "hours": [{"from": "07:00", "to": "11:00"}]},
                "tuesday": {"type": "working"},
                "saturday": {"type": "working"}
            },
            {
                "unique_id": 2,
                "name": "Derived",
                "parent_unique_id": 1,
                "working_weeks": [
                    {
                        "name": "Summer",
                        "effective_from": "2024-07-01",
                        "effective_to": "2024-08-31",
                        "friday": {"type": "non_working"}
                    }
                ],
                "exceptions": [
                    {
                        "name": "Planning day",
                        "type": "non_working",
                        "recurrence": {
                            "recurrence_type": "weekly",
                            "start_date": "2024-01-03",
                            "finish_date": "2024-01-31",
                            "frequency": 2,
                            "weekly_days": ["wednesday"]
                        }
                    }
                ]
            }
        ]),
        json!([]),
        json!([]),
    )
}

#[test]
fn weekday_keyed_days_are_read() {
    let project = converter_shaped_project();
    let standard = project.calendar_by_id(1).unwrap();

    assert_eq!(standard.day(Weekday::Mon).day_type(), DayType::Working);
    assert_eq!(standard.day(Weekday::Sun).day_type(), DayType::NonWorking);
    assert_eq!(standard.day(Weekday::Wed).day_type(), DayType::Default);
    assert!(standard.is_working_day(&project, Weekday::Sat));
    assert!(!standard.is_working_day(&project, Weekday::Sun));
    assert_eq!(
        standard.day_hours(&project, Weekday::Mon).unwrap(),
        vec![(t(7, 0), t(11, 0))]
    );
}

#[test]
fn parent_id_resolves_the_base_calendar() {
    let project = converter_shaped_project();
    let derived = project.calendar_by_name("Derived").unwrap();

    assert!(derived.is_derived());
    assert_eq!(derived.parent_unique_id(), Some(1));
    assert_eq!(derived.base_calendar_name(), None);
    assert_eq!(derived.base_calendar(&project).map(|c| c.name()), Some("Standard"));
    assert!(derived.is_working_day(&project, Weekday::Sat));
    assert_eq!(
        derived.working_hours(&project, d(2024, 1, 8)).unwrap(),
        vec![(t(7, 0), t(11, 0))]
    );
}

#[test]
fn working_weeks_use_effective_dates() {
    let project = converter_shaped_project();
    let derived = project.calendar_by_name("Derived").unwrap();

    assert_eq!(derived.weeks().len(), 1);
    let summer = &derived.weeks()[0];
    assert_eq!(summer.name(), Some("Summer"));
    assert_eq!(summer.from_date().unwrap(), Some(d(2024, 7, 1)));
    assert_eq!(summer.to_date().unwrap(), Some(d(2024, 8, 31)));
    assert!(!derived.is_working_date(&project, d(2024, 7, 5)).unwrap());
    assert!(derived.is_working_date(&project, d(2024, 9, 6)).unwrap());
}

#[test]
fn recurring_exceptions_apply_on_each_occurrence() {
    let project = converter_shaped_project();
    let derived = project.calendar_by_name("Derived").unwrap();

    let dates = derived
        .working_dates_in_range(&project, d(2024, 1, 1), d(2024, 1, 19))
        .unwrap();
    // Wednesdays 3 and 17 are planning days, Saturday 6 and 13 are worked
    assert_eq!(
        dates,
        vec![
            d(2024, 1, 1),
            d(2024, 1, 2),
            d(2024, 1, 4),
            d(2024, 1, 5),
            d(2024, 1, 6),
            d(2024, 1, 8),
            d(2024, 1, 9),
            d(2024, 1, 10),
            d(2024, 1, 11),
            d(2024, 1, 12),
            d(2024, 1, 13),
            d(2024, 1, 15),
            d(2024, 1, 16),
            d(2024, 1, 18),
            d(2024, 1, 19),
        ]
    );
    let exception = derived.exception_for(&project, d(2024, 1, 31)).unwrap();
    assert_eq!(exception.and_then(|e| e.name()), Some("Planning day"));
}

#[test]
fn counting_at_the_last_representable_date_terminates() {
    let project = sample_project();
    let standard = project.calendar_by_name("Standard").unwrap();

    let count = standard
        .count_working_dates(&project, NaiveDate::MAX, NaiveDate::MAX)
        .unwrap();
    assert!(count <= 1);
    let tail = standard
        .working_dates_in_range(&project, NaiveDate::MAX.pred_opt().unwrap(), NaiveDate::MAX)
        .unwrap();
    assert!(tail.len() <= 2);
}
