use crate::assignment::Assignment;
use crate::attributes::Attributes;
use crate::calendar::Calendar;
use crate::entity::impl_entity;
use crate::error::FieldError;
use crate::project::Project;
use crate::relation::{Relation, RelationSide};
use crate::schema::Schema;
use chrono::DateTime;
use chrono_tz::Tz;
use serde_json::Value;
use std::sync::Arc;

/// A task record plus the links the project resolves for it.
///
/// Children and assignments are indices into the owning [`Project`]'s arenas;
/// the parent is only looked up on demand.
#[derive(Debug, Clone)]
pub struct Task {
    attributes: Attributes,
    schema: Arc<Schema>,
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
    pub(crate) predecessors: Vec<Relation>,
    pub(crate) successors: Vec<Relation>,
    pub(crate) assignments: Vec<usize>,
}

impl_entity!(Task);

impl Task {
    pub fn new(attributes: Attributes, schema: Arc<Schema>) -> Self {
        Self {
            attributes,
            schema,
            parent: None,
            children: Vec::new(),
            predecessors: Vec::new(),
            successors: Vec::new(),
            assignments: Vec::new(),
        }
    }

    pub fn unique_id(&self) -> i64 {
        self.attributes.read_integer("unique_id")
    }

    /// Display-only sequential id.
    pub fn id(&self) -> Option<i64> {
        self.attributes.read_optional_integer("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.read_string("name")
    }

    pub fn parent_task_unique_id(&self) -> Option<i64> {
        self.attributes.read_optional_integer("parent_task_unique_id")
    }

    pub fn outline_level(&self) -> i64 {
        self.attributes.read_integer("outline_level")
    }

    pub fn notes(&self) -> Option<&str> {
        self.attributes.read_string("notes")
    }

    pub fn start(&self) -> Result<Option<DateTime<Tz>>, FieldError> {
        self.attributes.read_date("start")
    }

    pub fn finish(&self) -> Result<Option<DateTime<Tz>>, FieldError> {
        self.attributes.read_date("finish")
    }

    pub fn duration(&self) -> f64 {
        self.attributes.read_duration("duration")
    }

    pub fn predecessors(&self) -> &[Relation] {
        &self.predecessors
    }

    pub fn successors(&self) -> &[Relation] {
        &self.successors
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn parent<'p>(&self, project: &'p Project) -> Option<&'p Task> {
        self.parent.and_then(|idx| project.tasks().get(idx))
    }

    pub fn child_tasks<'p>(&self, project: &'p Project) -> impl Iterator<Item = &'p Task> {
        self.children
            .iter()
            .filter_map(move |&idx| project.tasks().get(idx))
    }

    pub fn assignments<'p>(&self, project: &'p Project) -> impl Iterator<Item = &'p Assignment> {
        self.assignments
            .iter()
            .filter_map(move |&idx| project.assignments().get(idx))
    }

    /// The task's own calendar, if it names one the project knows.
    pub fn calendar<'p>(&self, project: &'p Project) -> Option<&'p Calendar> {
        self.attributes
            .read_optional_integer("calendar_unique_id")
            .and_then(|id| project.calendar_by_id(id))
    }

    /// Embedded relation records for one side, as stored.
    pub(crate) fn relation_records(&self, side: RelationSide) -> &[Value] {
        let name = match side {
            RelationSide::Predecessor => "predecessors",
            RelationSide::Successor => "successors",
        };
        self.attributes
            .read_raw(name)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
