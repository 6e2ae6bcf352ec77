use crate::assignment::Assignment;
use crate::attributes::Attributes;
use crate::calendar::Calendar;
use crate::entity::impl_entity;
use crate::project::Project;
use crate::schema::Schema;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Resource {
    attributes: Attributes,
    schema: Arc<Schema>,
    pub(crate) assignments: Vec<usize>,
}

impl_entity!(Resource);

impl Resource {
    pub fn new(attributes: Attributes, schema: Arc<Schema>) -> Self {
        Self {
            attributes,
            schema,
            assignments: Vec::new(),
        }
    }

    pub fn unique_id(&self) -> i64 {
        self.attributes.read_integer("unique_id")
    }

    pub fn id(&self) -> Option<i64> {
        self.attributes.read_optional_integer("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.read_string("name")
    }

    pub fn calendar_unique_id(&self) -> Option<i64> {
        self.attributes.read_optional_integer("calendar_unique_id")
    }

    pub fn assignments<'p>(&self, project: &'p Project) -> impl Iterator<Item = &'p Assignment> {
        self.assignments
            .iter()
            .filter_map(move |&idx| project.assignments().get(idx))
    }

    pub fn calendar<'p>(&self, project: &'p Project) -> Option<&'p Calendar> {
        project.calendar_for_resource(self)
    }
}
