//! The project aggregate: owns every entity and the indices used to navigate
//! between them.
//!
//! Construction runs in a fixed order (properties, calendars, resources, tasks,
//! hierarchy and relations, assignments) so every identifier a later phase
//! resolves has already been indexed by an earlier one.

use crate::assignment::Assignment;
use crate::attributes::Attributes;
use crate::calendar::Calendar;
use crate::entity::Entity;
use crate::error::{ProjectError, Result, SchemaError};
use crate::graph::find_parent_cycle;
use crate::properties::{CustomField, ProjectProperties};
use crate::reader::ReaderConfig;
use crate::relation::{Relation, RelationSide};
use crate::resource::Resource;
use crate::schema::{EntityKind, Schema};
use crate::task::Task;
use chrono_tz::Tz;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

type Record = Map<String, Value>;

#[derive(Debug, Clone)]
pub struct Project {
    zone: Tz,
    properties: ProjectProperties,
    custom_fields: Vec<CustomField>,
    schemas: HashMap<EntityKind, Arc<Schema>>,
    calendars: Vec<Calendar>,
    resources: Vec<Resource>,
    tasks: Vec<Task>,
    assignments: Vec<Assignment>,
    root_tasks: Vec<usize>,
    calendar_by_name: HashMap<String, usize>,
    calendar_by_id: HashMap<i64, usize>,
    resource_by_unique_id: HashMap<i64, usize>,
    resource_by_id: HashMap<i64, usize>,
    task_by_unique_id: HashMap<i64, usize>,
    task_by_id: HashMap<i64, usize>,
    assignment_by_unique_id: HashMap<i64, usize>,
}

impl Project {
    /// Build the model from a complete record set.
    pub fn from_record_set(record_set: Value, config: &ReaderConfig) -> Result<Self> {
        let Value::Object(mut root) = record_set else {
            return Err(SchemaError::MalformedSection {
                section: "record set",
                expected: "object",
            }
            .into());
        };
        let zone = config.time_zone;

        let mut project = Self {
            zone,
            properties: ProjectProperties::empty(zone),
            custom_fields: Vec::new(),
            schemas: HashMap::new(),
            calendars: Vec::new(),
            resources: Vec::new(),
            tasks: Vec::new(),
            assignments: Vec::new(),
            root_tasks: Vec::new(),
            calendar_by_name: HashMap::new(),
            calendar_by_id: HashMap::new(),
            resource_by_unique_id: HashMap::new(),
            resource_by_id: HashMap::new(),
            task_by_unique_id: HashMap::new(),
            task_by_id: HashMap::new(),
            assignment_by_unique_id: HashMap::new(),
        };

        project.read_properties(&mut root)?;
        project.read_custom_fields(&mut root)?;
        project.read_calendars(&mut root)?;

        // Required sections are all taken before any entity is built from them.
        let resource_records = take_entity_section(&mut root, EntityKind::Resource)?;
        let task_records = take_entity_section(&mut root, EntityKind::Task)?;
        let assignment_records = take_entity_section(&mut root, EntityKind::Assignment)?;

        project.read_resources(resource_records);
        project.read_tasks(task_records);
        project.resolve_hierarchy(config.reject_parent_cycles)?;
        project.resolve_relations();
        project.read_assignments(assignment_records);

        debug!(
            tasks = project.tasks.len(),
            root_tasks = project.root_tasks.len(),
            resources = project.resources.len(),
            assignments = project.assignments.len(),
            calendars = project.calendars.len(),
            "project model built"
        );
        Ok(project)
    }

    fn read_properties(&mut self, root: &mut Record) -> Result<()> {
        let types = take_optional_object(root, EntityKind::Property.types_section())?;
        let values = take_optional_object(root, EntityKind::Property.values_section())?;
        let schema = Arc::new(match &types {
            Some(types) => Schema::from_section(EntityKind::Property, types),
            None => Schema::new(EntityKind::Property),
        });
        self.schemas.insert(EntityKind::Property, Arc::clone(&schema));
        if let Some(values) = values {
            debug!(fields = values.len(), "decoded project properties");
            self.properties = ProjectProperties::new(Attributes::new(values, self.zone), schema);
        }
        Ok(())
    }

    fn read_custom_fields(&mut self, root: &mut Record) -> Result<()> {
        let Some(records) = take_optional_list(root, "custom_fields")? else {
            return Ok(());
        };
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<CustomField>(Value::Object(record)) {
                Ok(field) => self.custom_fields.push(field),
                Err(err) => warn!(index, %err, "skipping malformed custom field"),
            }
        }
        debug!(count = self.custom_fields.len(), "decoded custom fields");
        Ok(())
    }

    fn read_calendars(&mut self, root: &mut Record) -> Result<()> {
        let Some(records) = take_optional_list(root, "calendars")? else {
            return Ok(());
        };
        for record in records {
            let calendar = Calendar::from_record(&record, self.zone);
            let idx = self.calendars.len();
            if let Some(id) = calendar.id() {
                if self.calendar_by_id.insert(id, idx).is_some() {
                    warn!(id, "duplicate calendar id, later calendar wins");
                }
            }
            if !calendar.name().is_empty()
                && self
                    .calendar_by_name
                    .insert(calendar.name().to_string(), idx)
                    .is_some()
            {
                warn!(name = calendar.name(), "duplicate calendar name, later calendar wins");
            }
            self.calendars.push(calendar);
        }
        debug!(count = self.calendars.len(), "decoded calendars");
        Ok(())
    }

    fn read_resources(&mut self, (schema, records): (Arc<Schema>, Vec<Record>)) {
        self.schemas.insert(EntityKind::Resource, Arc::clone(&schema));
        for record in records {
            let resource = Resource::new(Attributes::new(record, self.zone), Arc::clone(&schema));
            let idx = self.resources.len();
            index_entity(
                &mut self.resource_by_unique_id,
                &mut self.resource_by_id,
                resource.attributes().read_optional_integer("unique_id"),
                resource.id(),
                idx,
                EntityKind::Resource,
            );
            self.resources.push(resource);
        }
        debug!(count = self.resources.len(), "decoded resources");
    }

    fn read_tasks(&mut self, (schema, records): (Arc<Schema>, Vec<Record>)) {
        self.schemas.insert(EntityKind::Task, Arc::clone(&schema));
        for record in records {
            let task = Task::new(Attributes::new(record, self.zone), Arc::clone(&schema));
            let idx = self.tasks.len();
            index_entity(
                &mut self.task_by_unique_id,
                &mut self.task_by_id,
                task.attributes().read_optional_integer("unique_id"),
                task.id(),
                idx,
                EntityKind::Task,
            );
            self.tasks.push(task);
        }
        debug!(count = self.tasks.len(), "decoded tasks");
    }

    /// Attach every task to its parent or to the root list, in input order.
    fn resolve_hierarchy(&mut self, reject_cycles: bool) -> Result<()> {
        let mut parents: Vec<Option<usize>> = Vec::with_capacity(self.tasks.len());
        for task in &self.tasks {
            let parent = task.parent_task_unique_id().and_then(|parent_uid| {
                let found = self.task_by_unique_id.get(&parent_uid).copied();
                if found.is_none() {
                    warn!(
                        task = task.unique_id(),
                        parent = parent_uid,
                        "parent task not found, treating as root task"
                    );
                }
                found
            });
            parents.push(parent);
        }

        while let Some(idx) = find_parent_cycle(&parents) {
            let unique_id = self.tasks[idx].unique_id();
            if reject_cycles {
                return Err(ProjectError::ParentCycle { unique_id });
            }
            warn!(task = unique_id, "task parent chain loops, treating as root task");
            parents[idx] = None;
        }

        for (idx, parent) in parents.into_iter().enumerate() {
            self.tasks[idx].parent = parent;
            match parent {
                Some(parent) => self.tasks[parent].children.push(idx),
                None => self.root_tasks.push(idx),
            }
        }
        debug!(root_tasks = self.root_tasks.len(), "resolved task hierarchy");
        Ok(())
    }

    /// Materialise each task's embedded relation records. Endpoints stay as
    /// identifiers and are not resolved here.
    fn resolve_relations(&mut self) {
        let mut total = 0usize;
        for task in &mut self.tasks {
            let owner = task.unique_id();
            let decode = |side: RelationSide| -> Vec<Relation> {
                task.relation_records(side)
                    .iter()
                    .filter_map(Value::as_object)
                    .filter_map(|record| Relation::from_record(owner, side, record))
                    .collect()
            };
            let predecessors = decode(RelationSide::Predecessor);
            let successors = decode(RelationSide::Successor);
            total += predecessors.len() + successors.len();
            task.predecessors = predecessors;
            task.successors = successors;
        }
        debug!(relations = total, "decoded task relations");
    }

    fn read_assignments(&mut self, (schema, records): (Arc<Schema>, Vec<Record>)) {
        self.schemas.insert(EntityKind::Assignment, Arc::clone(&schema));
        let mut unlinked = 0usize;
        for record in records {
            let mut assignment =
                Assignment::new(Attributes::new(record, self.zone), Arc::clone(&schema));
            let idx = self.assignments.len();

            assignment.task = assignment
                .task_unique_id()
                .and_then(|uid| self.task_by_unique_id.get(&uid).copied());
            assignment.resource = assignment
                .resource_unique_id()
                .and_then(|uid| self.resource_by_unique_id.get(&uid).copied());

            match assignment.task {
                Some(task) => self.tasks[task].assignments.push(idx),
                None => {
                    unlinked += 1;
                    warn!(
                        task = ?assignment.task_unique_id(),
                        "assignment task not found, leaving task side unlinked"
                    );
                }
            }
            match (assignment.resource, assignment.resource_unique_id()) {
                (Some(resource), _) => self.resources[resource].assignments.push(idx),
                (None, Some(uid)) => {
                    unlinked += 1;
                    warn!(
                        resource = uid,
                        "assignment resource not found, leaving resource side unlinked"
                    );
                }
                (None, None) => {}
            }

            if let Some(uid) = assignment.unique_id() {
                if self.assignment_by_unique_id.insert(uid, idx).is_some() {
                    warn!(unique_id = uid, "duplicate assignment unique id, later record wins");
                }
            }
            self.assignments.push(assignment);
        }
        debug!(
            count = self.assignments.len(),
            unlinked, "decoded assignments"
        );
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn properties(&self) -> &ProjectProperties {
        &self.properties
    }

    /// Schema for one entity kind, as overlaid by the record set's type section.
    pub fn schema(&self, kind: EntityKind) -> Option<&Schema> {
        self.schemas.get(&kind).map(|schema| schema.as_ref())
    }

    pub fn custom_fields(&self) -> &[CustomField] {
        &self.custom_fields
    }

    /// Alias a user gave to a built-in field, e.g. `("task", "text1")`.
    pub fn custom_field_alias(&self, class: &str, field: &str) -> Option<&str> {
        self.custom_fields
            .iter()
            .find(|cf| cf.matches_class(class) && cf.field_type.eq_ignore_ascii_case(field))
            .map(|cf| cf.field_alias.as_str())
    }

    /// Built-in field name behind an alias.
    pub fn field_by_alias(&self, class: &str, alias: &str) -> Option<&str> {
        self.custom_fields
            .iter()
            .find(|cf| cf.matches_class(class) && cf.field_alias == alias)
            .map(|cf| cf.field_type.as_str())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn calendars(&self) -> &[Calendar] {
        &self.calendars
    }

    /// Tasks with no resolvable parent, in input order.
    pub fn root_tasks(&self) -> impl Iterator<Item = &Task> {
        self.root_tasks.iter().filter_map(|&idx| self.tasks.get(idx))
    }

    pub fn root_task_count(&self) -> usize {
        self.root_tasks.len()
    }

    pub fn task_by_unique_id(&self, unique_id: i64) -> Option<&Task> {
        lookup(&self.task_by_unique_id, &self.tasks, unique_id)
    }

    pub fn task_by_id(&self, id: i64) -> Option<&Task> {
        lookup(&self.task_by_id, &self.tasks, id)
    }

    pub fn resource_by_unique_id(&self, unique_id: i64) -> Option<&Resource> {
        lookup(&self.resource_by_unique_id, &self.resources, unique_id)
    }

    pub fn resource_by_id(&self, id: i64) -> Option<&Resource> {
        lookup(&self.resource_by_id, &self.resources, id)
    }

    pub fn assignment_by_unique_id(&self, unique_id: i64) -> Option<&Assignment> {
        lookup(&self.assignment_by_unique_id, &self.assignments, unique_id)
    }

    pub fn calendar_by_id(&self, id: i64) -> Option<&Calendar> {
        lookup(&self.calendar_by_id, &self.calendars, id)
    }

    pub fn calendar_by_name(&self, name: &str) -> Option<&Calendar> {
        self.calendar_by_name
            .get(name)
            .and_then(|&idx| self.calendars.get(idx))
    }

    pub fn default_calendar(&self) -> Option<&Calendar> {
        self.properties
            .default_calendar_unique_id()
            .and_then(|id| self.calendar_by_id(id))
    }

    /// A resource's own calendar: the one it names by id, otherwise the one
    /// naming the resource as its owner.
    pub fn calendar_for_resource(&self, resource: &Resource) -> Option<&Calendar> {
        resource
            .calendar_unique_id()
            .and_then(|id| self.calendar_by_id(id))
            .or_else(|| {
                let name = resource.name()?;
                self.calendars
                    .iter()
                    .find(|calendar| calendar.resource() == Some(name))
            })
    }
}

fn lookup<'a, T>(index: &HashMap<i64, usize>, arena: &'a [T], key: i64) -> Option<&'a T> {
    index.get(&key).and_then(|&idx| arena.get(idx))
}

fn index_entity(
    by_unique_id: &mut HashMap<i64, usize>,
    by_id: &mut HashMap<i64, usize>,
    unique_id: Option<i64>,
    id: Option<i64>,
    idx: usize,
    kind: EntityKind,
) {
    match unique_id {
        Some(uid) => {
            if by_unique_id.insert(uid, idx).is_some() {
                warn!(%kind, unique_id = uid, "duplicate unique id, later record wins");
            }
        }
        None => warn!(%kind, index = idx, "record has no unique id and is not indexed"),
    }
    if let Some(id) = id {
        by_id.insert(id, idx);
    }
}

/// Remove a required `*_types` / records pair from the record set.
fn take_entity_section(
    root: &mut Record,
    kind: EntityKind,
) -> std::result::Result<(Arc<Schema>, Vec<Record>), SchemaError> {
    let types_section = kind.types_section();
    let types = take_optional_object(root, types_section)?
        .ok_or(SchemaError::MissingSection { section: types_section })?;
    let values_section = kind.values_section();
    let records = take_optional_list(root, values_section)?
        .ok_or(SchemaError::MissingSection { section: values_section })?;
    Ok((Arc::new(Schema::from_section(kind, &types)), records))
}

fn take_optional_object(
    root: &mut Record,
    section: &'static str,
) -> std::result::Result<Option<Record>, SchemaError> {
    match root.remove(section) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(SchemaError::MalformedSection {
            section,
            expected: "object",
        }),
    }
}

fn take_optional_list(
    root: &mut Record,
    section: &'static str,
) -> std::result::Result<Option<Vec<Record>>, SchemaError> {
    let items = match root.remove(section) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(SchemaError::MalformedSection {
                section,
                expected: "array",
            });
        }
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            _ => Err(SchemaError::MalformedRecord { section, index }),
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .map(Some)
}
