pub mod assignment;
pub mod attributes;
pub mod calendar;
pub mod entity;
pub mod error;
pub mod export;
pub mod field_type;
pub mod graph;
#[cfg(feature = "cli")]
pub mod logging;
pub mod project;
pub mod properties;
pub mod reader;
pub mod relation;
pub mod resource;
pub mod schema;
pub mod source;
pub mod task;
pub mod validation;

pub use assignment::Assignment;
pub use attributes::{Attributes, FieldValue};
pub use calendar::{
    Calendar, CalendarDay, CalendarException, CalendarHours, CalendarWeek, DayType, Recurrence,
    RecurrenceType, WEEKDAYS,
};
pub use entity::Entity;
pub use error::{ConversionError, FieldError, ProjectError, Result, SchemaError};
pub use export::{
    UnreadableDates, assignments_frame, assignments_frame_with, resources_frame,
    resources_frame_with, tasks_frame, tasks_frame_with, write_assignments_csv,
    write_resources_csv, write_tasks_csv,
};
pub use field_type::{FieldType, ReadKind};
pub use graph::RelationGraph;
pub use project::Project;
pub use properties::{CustomField, ProjectProperties};
pub use reader::{ProjectReader, ReaderConfig};
pub use relation::{Relation, RelationType};
pub use resource::Resource;
pub use schema::{EntityKind, Schema};
pub use source::{JsonFileSource, RecordSource};
pub use task::Task;
pub use validation::EntityFieldError;
