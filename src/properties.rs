use crate::attributes::Attributes;
use crate::entity::impl_entity;
use crate::error::FieldError;
use crate::schema::{EntityKind, Schema};
use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Project-level header fields (title, author, project dates, defaults).
#[derive(Debug, Clone)]
pub struct ProjectProperties {
    attributes: Attributes,
    schema: Arc<Schema>,
}

impl_entity!(ProjectProperties);

impl ProjectProperties {
    pub fn new(attributes: Attributes, schema: Arc<Schema>) -> Self {
        Self { attributes, schema }
    }

    /// Properties with no values, used when the record set has none.
    pub fn empty(zone: Tz) -> Self {
        Self::new(
            Attributes::new(Default::default(), zone),
            Arc::new(Schema::new(EntityKind::Property)),
        )
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.read_string("name")
    }

    pub fn project_title(&self) -> Option<&str> {
        self.attributes.read_string("project_title")
    }

    pub fn author(&self) -> Option<&str> {
        self.attributes.read_string("author")
    }

    pub fn start_date(&self) -> Result<Option<DateTime<Tz>>, FieldError> {
        self.attributes.read_date("start_date")
    }

    pub fn finish_date(&self) -> Result<Option<DateTime<Tz>>, FieldError> {
        self.attributes.read_date("finish_date")
    }

    pub fn status_date(&self) -> Result<Option<DateTime<Tz>>, FieldError> {
        self.attributes.read_date("status_date")
    }

    pub fn default_calendar_unique_id(&self) -> Option<i64> {
        self.attributes
            .read_optional_integer("default_calendar_unique_id")
    }
}

/// User-facing alias given to a built-in field, e.g. `text1` shown as "Phase".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    /// Entity class the field belongs to: `task`, `resource`, `assignment`...
    pub field_type_class: String,
    pub field_type: String,
    pub field_alias: String,
}

impl CustomField {
    pub fn matches_class(&self, class: &str) -> bool {
        self.field_type_class.eq_ignore_ascii_case(class)
    }
}
