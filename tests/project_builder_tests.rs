use project_model::{
    Entity, Project, ProjectError, ProjectReader, ReaderConfig, RelationType, SchemaError, Task,
};
use serde_json::{Value, json};

fn record_set(tasks: Value, resources: Value, assignments: Value) -> Value {
    json!({
        "task_types": {},
        "tasks": tasks,
        "resource_types": {},
        "resources": resources,
        "assignment_types": {},
        "assignments": assignments,
    })
}

fn build(record_set: Value) -> Project {
    ProjectReader::default().read_value(record_set).unwrap()
}

fn uids<'a>(tasks: impl Iterator<Item = &'a Task>) -> Vec<i64> {
    tasks.map(Task::unique_id).collect()
}

#[test]
fn dangling_parent_makes_a_root_task() {
    let project = build(record_set(
        json!([{"unique_id": 5, "parent_task_unique_id": 1}]),
        json!([]),
        json!([]),
    ));

    assert_eq!(uids(project.root_tasks()), vec![5]);
    let task = project.task_by_unique_id(5).unwrap();
    assert!(task.parent(&project).is_none());
    assert!(task.is_root());
    assert_eq!(task.parent_task_unique_id(), Some(1));
}

#[test]
fn children_keep_input_order_and_appear_once() {
    let project = build(record_set(
        json!([
            {"unique_id": 1},
            {"unique_id": 2, "parent_task_unique_id": 1},
            {"unique_id": 3},
            {"unique_id": 4, "parent_task_unique_id": 1},
            {"unique_id": 5, "parent_task_unique_id": 3},
            {"unique_id": 6, "parent_task_unique_id": 1},
        ]),
        json!([]),
        json!([]),
    ));

    assert_eq!(uids(project.root_tasks()), vec![1, 3]);
    let parent = project.task_by_unique_id(1).unwrap();
    assert_eq!(uids(parent.child_tasks(&project)), vec![2, 4, 6]);
    let other = project.task_by_unique_id(3).unwrap();
    assert_eq!(uids(other.child_tasks(&project)), vec![5]);

    // every task is placed exactly once across the root list and child lists
    let mut placed: Vec<i64> = uids(project.root_tasks());
    for task in project.tasks() {
        placed.extend(uids(task.child_tasks(&project)));
    }
    placed.sort();
    assert_eq!(placed, vec![1, 2, 3, 4, 5, 6]);

    let child = project.task_by_unique_id(4).unwrap();
    assert_eq!(child.parent(&project).map(Task::unique_id), Some(1));
}

#[test]
fn parent_listed_after_child_still_resolves() {
    let project = build(record_set(
        json!([
            {"unique_id": 2, "parent_task_unique_id": 1},
            {"unique_id": 1},
        ]),
        json!([]),
        json!([]),
    ));

    assert_eq!(uids(project.root_tasks()), vec![1]);
    let parent = project.task_by_unique_id(1).unwrap();
    assert_eq!(uids(parent.child_tasks(&project)), vec![2]);
}

#[test]
fn assignment_with_missing_resource_links_only_its_task() {
    let project = build(record_set(
        json!([{"unique_id": 9, "name": "Pour"}]),
        json!([{"unique_id": 4, "name": "Crew"}]),
        json!([{"task_unique_id": 9, "resource_unique_id": 3}]),
    ));

    assert_eq!(project.assignments().len(), 1);
    let task = project.task_by_unique_id(9).unwrap();
    assert_eq!(task.assignments(&project).count(), 1);
    for resource in project.resources() {
        assert_eq!(resource.assignments(&project).count(), 0);
    }
    let assignment = &project.assignments()[0];
    assert!(assignment.resource(&project).is_none());
    assert_eq!(assignment.resource_unique_id(), Some(3));
    assert_eq!(assignment.task(&project).map(Task::unique_id), Some(9));
}

#[test]
fn assignment_with_missing_task_links_only_its_resource() {
    let project = build(record_set(
        json!([]),
        json!([{"unique_id": 3, "name": "Crane"}]),
        json!([{"task_unique_id": 42, "resource_unique_id": 3}]),
    ));

    let resource = project.resource_by_unique_id(3).unwrap();
    assert_eq!(resource.assignments(&project).count(), 1);
    let assignment = &project.assignments()[0];
    assert!(assignment.task(&project).is_none());
    assert_eq!(assignment.task_unique_id(), Some(42));
}

#[test]
fn assignments_are_listed_once_in_input_order() {
    let project = build(record_set(
        json!([{"unique_id": 1}, {"unique_id": 2}]),
        json!([{"unique_id": 10}, {"unique_id": 11}]),
        json!([
            {"unique_id": 100, "task_unique_id": 1, "resource_unique_id": 10},
            {"unique_id": 101, "task_unique_id": 2, "resource_unique_id": 10},
            {"unique_id": 102, "task_unique_id": 1, "resource_unique_id": 11},
        ]),
    ));

    let task = project.task_by_unique_id(1).unwrap();
    let on_task: Vec<Option<i64>> = task.assignments(&project).map(|a| a.unique_id()).collect();
    assert_eq!(on_task, vec![Some(100), Some(102)]);

    let resource = project.resource_by_unique_id(10).unwrap();
    let on_resource: Vec<Option<i64>> = resource
        .assignments(&project)
        .map(|a| a.unique_id())
        .collect();
    assert_eq!(on_resource, vec![Some(100), Some(101)]);

    let assignment = project.assignment_by_unique_id(102).unwrap();
    assert_eq!(
        assignment.resource(&project).map(|r| r.unique_id()),
        Some(11)
    );
}

#[test]
fn predecessor_record_becomes_a_relation() {
    let project = build(record_set(
        json!([
            {"unique_id": 2, "name": "Dig"},
            {
                "unique_id": 7,
                "name": "Pour",
                "predecessors": [{"predecessor_task_unique_id": 2, "lag": "3", "type": "FS"}]
            },
        ]),
        json!([]),
        json!([]),
    ));

    let task = project.task_by_unique_id(7).unwrap();
    assert_eq!(task.predecessors().len(), 1);
    let relation = &task.predecessors()[0];
    assert_eq!(relation.predecessor_task_unique_id(), 2);
    assert_eq!(relation.successor_task_unique_id(), 7);
    assert_eq!(relation.lag(), 3.0);
    assert_eq!(relation.relation_type().as_str(), "FS");
    assert_eq!(
        relation.predecessor_task(&project).and_then(Task::name),
        Some("Dig")
    );
}

#[test]
fn relations_to_unknown_tasks_are_kept_as_identifiers() {
    let project = build(record_set(
        json!([{
            "unique_id": 1,
            "successors": [
                {"successor_task_unique_id": 50, "type": "SS", "lag": 1.5},
                {"task_unique_id": 51, "type": "FF"}
            ]
        }]),
        json!([]),
        json!([]),
    ));

    let task = project.task_by_unique_id(1).unwrap();
    let successors = task.successors();
    assert_eq!(successors.len(), 2);
    assert_eq!(successors[0].successor_task_unique_id(), 50);
    assert_eq!(successors[0].relation_type(), RelationType::StartStart);
    assert_eq!(successors[0].lag(), 1.5);
    assert_eq!(successors[1].successor_task_unique_id(), 51);
    assert!(successors[1].successor_task(&project).is_none());
}

#[test]
fn missing_section_is_a_schema_error() {
    let result = ProjectReader::default().read_value(json!({
        "task_types": {},
        "tasks": [],
        "resource_types": {},
        "resources": [],
        "assignment_types": {},
    }));
    assert!(matches!(
        result,
        Err(ProjectError::Schema(SchemaError::MissingSection { section: "assignments" }))
    ));
}

#[test]
fn non_object_record_is_a_schema_error() {
    let result = ProjectReader::default().read_value(record_set(json!([1]), json!([]), json!([])));
    assert!(matches!(
        result,
        Err(ProjectError::Schema(SchemaError::MalformedRecord {
            section: "tasks",
            index: 0
        }))
    ));

    let result = ProjectReader::default().read_value(json!([]));
    assert!(matches!(
        result,
        Err(ProjectError::Schema(SchemaError::MalformedSection { .. }))
    ));
}

#[test]
fn parent_cycle_is_rejected_by_default() {
    let result = ProjectReader::default().read_value(record_set(
        json!([
            {"unique_id": 1, "parent_task_unique_id": 2},
            {"unique_id": 2, "parent_task_unique_id": 1},
        ]),
        json!([]),
        json!([]),
    ));
    match result {
        Err(ProjectError::ParentCycle { unique_id }) => assert!(unique_id == 1 || unique_id == 2),
        other => panic!("expected a parent cycle error, got {other:?}"),
    }
}

#[test]
fn lenient_config_breaks_parent_cycles() {
    let reader = ProjectReader::new(ReaderConfig::default().with_reject_parent_cycles(false));
    let project = reader
        .read_value(record_set(
            json!([
                {"unique_id": 1, "parent_task_unique_id": 2},
                {"unique_id": 2, "parent_task_unique_id": 1},
                {"unique_id": 3, "parent_task_unique_id": 3},
            ]),
            json!([]),
            json!([]),
        ))
        .unwrap();

    let roots = uids(project.root_tasks());
    assert_eq!(roots.len(), 2);
    assert!(roots.contains(&3));
    let children: usize = project
        .tasks()
        .iter()
        .map(|task| task.child_tasks(&project).count())
        .sum();
    assert_eq!(children, 1);
}

#[test]
fn duplicate_unique_id_resolves_to_the_later_record() {
    let project = build(record_set(
        json!([
            {"unique_id": 1, "id": 1, "name": "first"},
            {"unique_id": 1, "id": 2, "name": "second"},
        ]),
        json!([]),
        json!([]),
    ));

    assert_eq!(project.tasks().len(), 2);
    assert_eq!(project.task_by_unique_id(1).and_then(Task::name), Some("second"));
    assert_eq!(project.task_by_id(1).and_then(Task::name), Some("first"));
}

#[test]
fn display_ids_index_tasks_and_resources() {
    let project = build(record_set(
        json!([{"unique_id": 10, "id": 1, "name": "Kickoff"}]),
        json!([{"unique_id": 20, "id": 3, "name": "Ana"}]),
        json!([]),
    ));

    assert_eq!(project.task_by_id(1).map(Task::unique_id), Some(10));
    assert_eq!(project.resource_by_id(3).and_then(|r| r.name()), Some("Ana"));
    assert!(project.task_by_id(10).is_none());
}

#[test]
fn properties_and_custom_field_aliases() {
    let mut input = record_set(json!([]), json!([]), json!([]));
    input["property_types"] = json!({"project_title": "string", "start_date": "date"});
    input["property_values"] = json!({
        "project_title": "Apollo",
        "author": "Mission Control",
        "start_date": "2024-01-02T08:00:00",
    });
    input["custom_fields"] = json!([
        {"field_type_class": "task", "field_type": "text1", "field_alias": "Phase"},
        {"field_type_class": "resource", "field_type": "text1", "field_alias": "Team"},
        {"field_type": "broken"},
    ]);
    let project = build(input);

    let props = project.properties();
    assert_eq!(props.project_title(), Some("Apollo"));
    assert_eq!(props.author(), Some("Mission Control"));
    let start = props.start_date().unwrap().unwrap();
    assert_eq!(start.format("%Y-%m-%d %H:%M").to_string(), "2024-01-02 08:00");

    assert_eq!(project.custom_fields().len(), 2);
    assert_eq!(project.custom_field_alias("task", "text1"), Some("Phase"));
    assert_eq!(project.custom_field_alias("resource", "text1"), Some("Team"));
    assert_eq!(project.field_by_alias("task", "Phase"), Some("text1"));
    assert_eq!(project.field_by_alias("task", "Team"), None);
}

#[test]
fn properties_default_to_empty() {
    let project = build(record_set(json!([]), json!([]), json!([])));
    assert!(project.properties().attributes().is_empty());
    assert_eq!(project.properties().start_date().unwrap(), None);
    assert!(project.default_calendar().is_none());
}
