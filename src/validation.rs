use crate::entity::Entity;
use crate::error::FieldError;
use crate::project::Project;
use crate::schema::EntityKind;
use rayon::prelude::*;
use std::fmt;

/// A date field that failed to decode, with the entity it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityFieldError {
    pub kind: EntityKind,
    pub unique_id: Option<i64>,
    pub error: FieldError,
}

impl fmt::Display for EntityFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unique_id {
            Some(uid) => write!(f, "{} {uid}: {}", self.kind, self.error),
            None => write!(f, "{}: {}", self.kind, self.error),
        }
    }
}

fn scan<E>(kind: EntityKind, entities: &[E]) -> Vec<EntityFieldError>
where
    E: Entity + Sync,
{
    entities
        .par_iter()
        .flat_map_iter(|entity| {
            let unique_id = entity.attributes().read_optional_integer("unique_id");
            entity
                .date_errors()
                .into_iter()
                .map(move |error| EntityFieldError {
                    kind,
                    unique_id,
                    error,
                })
        })
        .collect()
}

impl Project {
    /// Decode every date-typed field of every entity and collect the failures.
    ///
    /// Reads through the model stay lazy; this is an explicit up-front check.
    /// Results are grouped by kind (properties, resources, tasks, assignments)
    /// and keep input order within each kind.
    pub fn date_errors(&self) -> Vec<EntityFieldError> {
        let ((resources, tasks), assignments) = rayon::join(
            || {
                rayon::join(
                    || scan(EntityKind::Resource, self.resources()),
                    || scan(EntityKind::Task, self.tasks()),
                )
            },
            || scan(EntityKind::Assignment, self.assignments()),
        );
        let mut errors: Vec<EntityFieldError> = self
            .properties()
            .date_errors()
            .into_iter()
            .map(|error| EntityFieldError {
                kind: EntityKind::Property,
                unique_id: None,
                error,
            })
            .collect();
        errors.extend(resources);
        errors.extend(tasks);
        errors.extend(assignments);
        errors
    }
}
