use project_model::{Project, ProjectReader, RelationType};
use serde_json::{Value, json};

fn project_with_tasks(tasks: Value) -> Project {
    ProjectReader::default()
        .read_value(json!({
            "task_types": {},
            "tasks": tasks,
            "resource_types": {},
            "resources": [],
            "assignment_types": {},
            "assignments": [],
        }))
        .unwrap()
}

fn pred(unique_id: i64) -> Value {
    json!({"predecessor_task_unique_id": unique_id, "type": "FS"})
}

#[test]
fn relation_graph_builds_edges_from_predecessors() {
    // 1 -> {2, 3}, 2 -> 3, 4 points at a task that does not exist
    let project = project_with_tasks(json!([
        {"unique_id": 1},
        {"unique_id": 2, "predecessors": [pred(1)]},
        {"unique_id": 3, "predecessors": [pred(1), pred(2)]},
        {"unique_id": 4, "predecessors": [pred(99)]},
    ]));
    let graph = project.relation_graph();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.successors_of(1), vec![2, 3]);
    assert_eq!(graph.predecessors_of(3), vec![1, 2]);
    assert!(graph.predecessors_of(4).is_empty());
    assert!(graph.successors_of(99).is_empty());
}

#[test]
fn topological_order_respects_every_edge() {
    let project = project_with_tasks(json!([
        {"unique_id": 3, "predecessors": [pred(1), pred(2)]},
        {"unique_id": 2, "predecessors": [pred(1)]},
        {"unique_id": 1},
    ]));
    let graph = project.relation_graph();

    let order = graph.topological_order().unwrap();
    assert_eq!(order.len(), 3);
    let position = |uid: i64| order.iter().position(|&id| id == uid).unwrap();
    assert!(position(1) < position(2));
    assert!(position(2) < position(3));
    assert!(!graph.has_cycle());
}

#[test]
fn looping_relations_are_reported_as_a_cycle() {
    let project = project_with_tasks(json!([
        {"unique_id": 1, "predecessors": [pred(2)]},
        {"unique_id": 2, "predecessors": [pred(1)]},
    ]));
    let graph = project.relation_graph();

    assert!(graph.has_cycle());
    assert!(graph.topological_order().is_none());
}

#[test]
fn edges_carry_the_relation() {
    let project = project_with_tasks(json!([
        {"unique_id": 1},
        {"unique_id": 2, "predecessors": [{"predecessor_task_unique_id": 1, "type": "SS", "lag": 2}]},
    ]));
    let graph = project.relation_graph();

    let edge = graph.graph.edge_weights().next().unwrap();
    assert_eq!(edge.relation_type(), RelationType::StartStart);
    assert_eq!(edge.lag(), 2.0);
    assert_eq!(edge.successor_task_unique_id(), 2);
}
