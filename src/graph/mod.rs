use crate::project::Project;
use crate::relation::Relation;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;

/// Predecessor to successor edges between the tasks of a project.
///
/// Nodes carry task unique ids. Edges come from each task's predecessor list;
/// relations naming a task the project does not contain are left out.
pub struct RelationGraph {
    pub graph: DiGraph<i64, Relation>,
    pub id_to_index: HashMap<i64, NodeIndex>,
}

impl RelationGraph {
    pub fn build(project: &Project) -> Self {
        let mut graph: DiGraph<i64, Relation> = DiGraph::new();
        let mut id_to_index: HashMap<i64, NodeIndex> = HashMap::new();

        for task in project.tasks() {
            let unique_id = task.unique_id();
            id_to_index
                .entry(unique_id)
                .or_insert_with(|| graph.add_node(unique_id));
        }

        for task in project.tasks() {
            for relation in task.predecessors() {
                if let (Some(&u), Some(&v)) = (
                    id_to_index.get(&relation.predecessor_task_unique_id()),
                    id_to_index.get(&relation.successor_task_unique_id()),
                ) {
                    graph.add_edge(u, v, relation.clone());
                }
            }
        }

        Self { graph, id_to_index }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn predecessors_of(&self, unique_id: i64) -> Vec<i64> {
        self.neighbors(unique_id, Direction::Incoming)
    }

    pub fn successors_of(&self, unique_id: i64) -> Vec<i64> {
        self.neighbors(unique_id, Direction::Outgoing)
    }

    fn neighbors(&self, unique_id: i64, direction: Direction) -> Vec<i64> {
        let Some(&node) = self.id_to_index.get(&unique_id) else {
            return Vec::new();
        };
        let mut ids: Vec<i64> = self
            .graph
            .neighbors_directed(node, direction)
            .map(|n| self.graph[n])
            .collect();
        // petgraph walks edges newest first
        ids.reverse();
        ids
    }

    /// Task unique ids in dependency order, or `None` if the relations loop.
    pub fn topological_order(&self) -> Option<Vec<i64>> {
        toposort(&self.graph, None)
            .ok()
            .map(|order| order.into_iter().map(|n| self.graph[n]).collect())
    }

    pub fn has_cycle(&self) -> bool {
        self.topological_order().is_none()
    }
}

impl Project {
    pub fn relation_graph(&self) -> RelationGraph {
        RelationGraph::build(self)
    }
}

/// Find a task whose parent chain loops back on itself.
///
/// `parents[i]` is the arena index of task `i`'s resolved parent. Returns the
/// index of one task on a cycle.
pub(crate) fn find_parent_cycle(parents: &[Option<usize>]) -> Option<usize> {
    let mut graph: DiGraph<usize, ()> = DiGraph::with_capacity(parents.len(), parents.len());
    let nodes: Vec<NodeIndex> = (0..parents.len()).map(|idx| graph.add_node(idx)).collect();
    for (child, parent) in parents.iter().enumerate() {
        if let Some(parent) = *parent {
            graph.add_edge(nodes[parent], nodes[child], ());
        }
    }
    toposort(&graph, None).err().map(|cycle| graph[cycle.node_id()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acyclic_hierarchy_has_no_cycle() {
        assert_eq!(find_parent_cycle(&[None, Some(0), Some(0), Some(2)]), None);
    }

    #[test]
    fn self_parent_is_a_cycle() {
        assert_eq!(find_parent_cycle(&[None, Some(1)]), Some(1));
    }

    #[test]
    fn two_task_loop_is_found() {
        let found = find_parent_cycle(&[Some(1), Some(0), None]);
        assert!(matches!(found, Some(0) | Some(1)));
    }
}
