use crate::attributes::Attributes;
use crate::entity::impl_entity;
use crate::error::FieldError;
use crate::project::Project;
use crate::resource::Resource;
use crate::schema::Schema;
use crate::task::Task;
use chrono::DateTime;
use chrono_tz::Tz;
use std::sync::Arc;

/// Links one task to at most one resource.
///
/// Both ends are resolved once during project construction; a side that did
/// not resolve stays `None` while the raw identifier remains readable.
#[derive(Debug, Clone)]
pub struct Assignment {
    attributes: Attributes,
    schema: Arc<Schema>,
    pub(crate) task: Option<usize>,
    pub(crate) resource: Option<usize>,
}

impl_entity!(Assignment);

impl Assignment {
    pub fn new(attributes: Attributes, schema: Arc<Schema>) -> Self {
        Self {
            attributes,
            schema,
            task: None,
            resource: None,
        }
    }

    pub fn unique_id(&self) -> Option<i64> {
        self.attributes.read_optional_integer("unique_id")
    }

    pub fn task_unique_id(&self) -> Option<i64> {
        self.attributes.read_optional_integer("task_unique_id")
    }

    pub fn resource_unique_id(&self) -> Option<i64> {
        self.attributes.read_optional_integer("resource_unique_id")
    }

    pub fn start(&self) -> Result<Option<DateTime<Tz>>, FieldError> {
        self.attributes.read_date("start")
    }

    pub fn finish(&self) -> Result<Option<DateTime<Tz>>, FieldError> {
        self.attributes.read_date("finish")
    }

    pub fn work(&self) -> f64 {
        self.attributes.read_duration("work")
    }

    pub fn task<'p>(&self, project: &'p Project) -> Option<&'p Task> {
        self.task.and_then(|idx| project.tasks().get(idx))
    }

    pub fn resource<'p>(&self, project: &'p Project) -> Option<&'p Resource> {
        self.resource.and_then(|idx| project.resources().get(idx))
    }
}
