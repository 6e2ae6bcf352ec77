use crate::attributes::FieldValue;
use crate::entity::Entity;
use crate::error::Result;
use crate::field_type::ReadKind;
use crate::project::Project;
use crate::schema::{EntityKind, Schema};
use polars::prelude::*;
use tracing::debug;

/// What a frame does with a date that cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnreadableDates {
    /// Stop at the first bad date and return its [`FieldError`](crate::FieldError).
    #[default]
    Fail,
    /// Write a null cell. The value stays listed by `Project::date_errors`.
    Null,
}

/// One column per requested field, one row per task, in input order.
pub fn tasks_frame(project: &Project, fields: &[&str]) -> Result<DataFrame> {
    tasks_frame_with(project, fields, UnreadableDates::Fail)
}

pub fn tasks_frame_with(
    project: &Project,
    fields: &[&str],
    dates: UnreadableDates,
) -> Result<DataFrame> {
    entity_frame(project, EntityKind::Task, project.tasks(), fields, dates)
}

pub fn resources_frame(project: &Project, fields: &[&str]) -> Result<DataFrame> {
    resources_frame_with(project, fields, UnreadableDates::Fail)
}

pub fn resources_frame_with(
    project: &Project,
    fields: &[&str],
    dates: UnreadableDates,
) -> Result<DataFrame> {
    entity_frame(project, EntityKind::Resource, project.resources(), fields, dates)
}

pub fn assignments_frame(project: &Project, fields: &[&str]) -> Result<DataFrame> {
    assignments_frame_with(project, fields, UnreadableDates::Fail)
}

pub fn assignments_frame_with(
    project: &Project,
    fields: &[&str],
    dates: UnreadableDates,
) -> Result<DataFrame> {
    entity_frame(project, EntityKind::Assignment, project.assignments(), fields, dates)
}

fn entity_frame<E: Entity>(
    project: &Project,
    kind: EntityKind,
    entities: &[E],
    fields: &[&str],
    dates: UnreadableDates,
) -> Result<DataFrame> {
    let fallback = Schema::new(kind);
    let schema = project.schema(kind).unwrap_or(&fallback);
    let mut columns: Vec<Column> = Vec::with_capacity(fields.len());
    for &field in fields {
        let read_kind = schema.read_kind(field).unwrap_or(ReadKind::Raw);
        columns.push(field_series(entities, field, read_kind, dates)?.into_column());
    }
    Ok(DataFrame::new(columns)?)
}

/// Build one column. Absent values become nulls, except booleans, which read
/// as `false` when absent.
fn field_series<E: Entity>(
    entities: &[E],
    field: &str,
    kind: ReadKind,
    dates: UnreadableDates,
) -> Result<Series> {
    let name: PlSmallStr = field.into();
    let present = |entity: &E| entity.attributes().contains(field);
    let series = match kind {
        ReadKind::Date => {
            let mut data: Vec<Option<i64>> = Vec::with_capacity(entities.len());
            for entity in entities {
                let instant = match entity.read_date(field) {
                    Ok(instant) => instant,
                    Err(err) if dates == UnreadableDates::Null => {
                        debug!(%err, "writing null for unreadable date");
                        None
                    }
                    Err(err) => return Err(err.into()),
                };
                // wall-clock time in the project zone
                let millis =
                    instant.map(|instant| instant.naive_local().and_utc().timestamp_millis());
                data.push(millis);
            }
            Series::new(name, data).cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
        }
        ReadKind::Duration | ReadKind::Float => {
            let data: Vec<Option<f64>> = entities
                .iter()
                .map(|e| present(e).then(|| e.read_float(field)))
                .collect();
            Series::new(name, data)
        }
        ReadKind::Integer => {
            let data: Vec<Option<i64>> = entities
                .iter()
                .map(|e| present(e).then(|| e.read_integer(field)))
                .collect();
            Series::new(name, data)
        }
        ReadKind::Boolean => {
            let data: Vec<bool> = entities.iter().map(|e| e.read_boolean(field)).collect();
            Series::new(name, data)
        }
        ReadKind::Raw => {
            let data: Vec<Option<String>> = entities
                .iter()
                .map(|e| present(e).then(|| FieldValue::Raw(e.read_raw(field)).render()))
                .collect();
            Series::new(name, data)
        }
    };
    Ok(series)
}
