use crate::entity::Entity;
use crate::error::Result;
use crate::project::Project;
use std::io::Write;

/// Write the requested task fields as CSV, header first.
///
/// Each cell is the field's schema-typed value rendered as text; absent values
/// follow the typed readers, so a missing cost is written as `0`.
pub fn write_tasks_csv<W: Write>(project: &Project, fields: &[&str], writer: W) -> Result<()> {
    write_entities(project.tasks(), fields, writer)
}

pub fn write_resources_csv<W: Write>(project: &Project, fields: &[&str], writer: W) -> Result<()> {
    write_entities(project.resources(), fields, writer)
}

pub fn write_assignments_csv<W: Write>(
    project: &Project,
    fields: &[&str],
    writer: W,
) -> Result<()> {
    write_entities(project.assignments(), fields, writer)
}

fn write_entities<E: Entity, W: Write>(entities: &[E], fields: &[&str], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(fields)?;
    for entity in entities {
        let mut row = Vec::with_capacity(fields.len());
        for &field in fields {
            row.push(entity.field(field)?.render());
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}
