//! Tabular views of a project's entities.

pub mod csv;
pub mod frame;

pub use self::csv::{write_assignments_csv, write_resources_csv, write_tasks_csv};
pub use frame::{
    UnreadableDates, assignments_frame, assignments_frame_with, resources_frame,
    resources_frame_with, tasks_frame, tasks_frame_with,
};

pub const DEFAULT_TASK_FIELDS: &[&str] = &[
    "unique_id",
    "id",
    "name",
    "outline_level",
    "parent_task_unique_id",
    "start",
    "finish",
    "duration",
    "percent_complete",
];

pub const DEFAULT_RESOURCE_FIELDS: &[&str] = &["unique_id", "id", "name", "type", "standard_rate"];

pub const DEFAULT_ASSIGNMENT_FIELDS: &[&str] = &[
    "unique_id",
    "task_unique_id",
    "resource_unique_id",
    "start",
    "finish",
    "work",
];
