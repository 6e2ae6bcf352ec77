//! Static field-name to semantic-type registries, one per entity kind.
//!
//! The tables are sorted by field name so lookups are a binary search. A
//! [`Schema`] layers the tags a record set declares in its own `*_types`
//! section over the static table.

mod assignment_fields;
mod property_fields;
mod resource_fields;
mod task_fields;

use crate::field_type::{FieldType, ReadKind};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Task,
    Resource,
    Assignment,
    Property,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Task,
        EntityKind::Resource,
        EntityKind::Assignment,
        EntityKind::Property,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Task => "task",
            EntityKind::Resource => "resource",
            EntityKind::Assignment => "assignment",
            EntityKind::Property => "property",
        }
    }

    /// Name of the record-set section holding this kind's type tags.
    pub fn types_section(&self) -> &'static str {
        match self {
            EntityKind::Task => "task_types",
            EntityKind::Resource => "resource_types",
            EntityKind::Assignment => "assignment_types",
            EntityKind::Property => "property_types",
        }
    }

    /// Name of the record-set section holding this kind's records.
    pub fn values_section(&self) -> &'static str {
        match self {
            EntityKind::Task => "tasks",
            EntityKind::Resource => "resources",
            EntityKind::Assignment => "assignments",
            EntityKind::Property => "property_values",
        }
    }

    pub fn registry(&self) -> &'static [(&'static str, FieldType)] {
        match self {
            EntityKind::Task => task_fields::TASK_FIELDS,
            EntityKind::Resource => resource_fields::RESOURCE_FIELDS,
            EntityKind::Assignment => assignment_fields::ASSIGNMENT_FIELDS,
            EntityKind::Property => property_fields::PROPERTY_FIELDS,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look a field up in the static registry for `kind`.
pub fn registered_type(kind: EntityKind, name: &str) -> Option<FieldType> {
    let table = kind.registry();
    table
        .binary_search_by(|(field, _)| (*field).cmp(name))
        .ok()
        .map(|idx| table[idx].1)
}

/// Field registry shared by every entity of one kind within a project.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    kind: EntityKind,
    declared: HashMap<String, FieldType>,
}

impl Schema {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            declared: HashMap::new(),
        }
    }

    /// Build a schema from a record set's `*_types` section.
    ///
    /// String tags naming a known [`FieldType`] are kept. Numeric type codes
    /// are kept only for fields the static registry does not know. Anything
    /// else falls back to the registry.
    pub fn from_section(kind: EntityKind, section: &Map<String, Value>) -> Self {
        let mut schema = Self::new(kind);
        let mut skipped = 0usize;
        for (name, tag) in section {
            let declared = match tag {
                Value::String(tag) => FieldType::from_tag(tag),
                Value::Number(code) if registered_type(kind, name).is_none() => {
                    code.as_i64().and_then(FieldType::from_code)
                }
                _ => None,
            };
            match declared {
                Some(field_type) => {
                    schema.declared.insert(name.clone(), field_type);
                }
                None => skipped += 1,
            }
        }
        debug!(
            kind = %kind,
            declared = schema.declared.len(),
            skipped,
            "decoded schema section"
        );
        schema
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.declared
            .get(name)
            .copied()
            .or_else(|| registered_type(self.kind, name))
    }

    pub fn read_kind(&self, name: &str) -> Option<ReadKind> {
        self.field_type(name).map(|ty| ty.read_kind())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field_type(name).is_some()
    }

    /// Every field name this schema knows, static registry first.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        let registry = self.kind.registry();
        let extra = self
            .declared
            .keys()
            .filter(|name| registered_type(self.kind, name).is_none())
            .map(String::as_str);
        registry.iter().map(|(name, _)| *name).chain(extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn registries_are_sorted_and_unique() {
        for kind in EntityKind::ALL {
            let table = kind.registry();
            assert!(!table.is_empty(), "{kind} registry is empty");
            for pair in table.windows(2) {
                assert!(
                    pair[0].0 < pair[1].0,
                    "{kind} registry out of order at {} / {}",
                    pair[0].0,
                    pair[1].0
                );
            }
        }
    }

    #[test]
    fn navigation_fields_are_registered() {
        assert_eq!(
            registered_type(EntityKind::Task, "unique_id"),
            Some(FieldType::Integer)
        );
        assert_eq!(
            registered_type(EntityKind::Task, "parent_task_unique_id"),
            Some(FieldType::Integer)
        );
        assert_eq!(
            registered_type(EntityKind::Task, "predecessors"),
            Some(FieldType::RelationList)
        );
        assert_eq!(
            registered_type(EntityKind::Assignment, "resource_unique_id"),
            Some(FieldType::Integer)
        );
        assert_eq!(
            registered_type(EntityKind::Resource, "standard_rate"),
            Some(FieldType::Rate)
        );
        assert_eq!(registered_type(EntityKind::Task, "no_such_field"), None);
    }

    #[test]
    fn declared_tags_override_and_extend_the_registry() {
        let section = json!({
            "cost": "numeric",
            "custom_metric": "duration",
            "legacy_code": 17,
            "finish": 5,
            "future_field": "hologram"
        });
        let schema = Schema::from_section(EntityKind::Task, section.as_object().unwrap());

        assert_eq!(schema.field_type("cost"), Some(FieldType::Numeric));
        assert_eq!(schema.field_type("custom_metric"), Some(FieldType::Duration));
        assert_eq!(schema.field_type("start"), Some(FieldType::Date));
        assert_eq!(schema.field_type("legacy_code"), Some(FieldType::Guid));
        assert_eq!(schema.field_type("finish"), Some(FieldType::Date));
        assert_eq!(schema.field_type("future_field"), None);
        assert!(schema.field_names().any(|name| name == "custom_metric"));
    }
}
