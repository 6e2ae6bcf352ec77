use crate::attributes::coerce_f64;
use crate::project::Project;
use crate::task::Task;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Dependency type of a predecessor/successor edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RelationType {
    #[default]
    FinishStart,
    StartStart,
    FinishFinish,
    StartFinish,
}

impl RelationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::FinishStart => "FS",
            RelationType::StartStart => "SS",
            RelationType::FinishFinish => "FF",
            RelationType::StartFinish => "SF",
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "fs" | "finishstart" => Ok(RelationType::FinishStart),
            "ss" | "startstart" => Ok(RelationType::StartStart),
            "ff" | "finishfinish" => Ok(RelationType::FinishFinish),
            "sf" | "startfinish" => Ok(RelationType::StartFinish),
            _ => Err(format!("unknown relation type '{s}'")),
        }
    }
}

/// Which of a task's embedded relation lists a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RelationSide {
    Predecessor,
    Successor,
}

impl RelationSide {
    fn target_key(&self) -> &'static str {
        match self {
            RelationSide::Predecessor => "predecessor_task_unique_id",
            RelationSide::Successor => "successor_task_unique_id",
        }
    }
}

/// A directed edge between two tasks, held by identifier only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    predecessor_task_unique_id: i64,
    successor_task_unique_id: i64,
    lag: f64,
    relation_type: RelationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unique_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl Relation {
    pub fn new(
        predecessor_task_unique_id: i64,
        successor_task_unique_id: i64,
        lag: f64,
        relation_type: RelationType,
    ) -> Self {
        Self {
            predecessor_task_unique_id,
            successor_task_unique_id,
            lag,
            relation_type,
            unique_id: None,
            notes: None,
        }
    }

    /// Decode one embedded relation record of task `owner`.
    ///
    /// Records without a usable target id are dropped. An unknown `type`
    /// falls back to finish-to-start.
    pub(crate) fn from_record(
        owner: i64,
        side: RelationSide,
        record: &Map<String, Value>,
    ) -> Option<Self> {
        let target = record
            .get(side.target_key())
            .or_else(|| record.get("task_unique_id"))
            .filter(|value| !value.is_null())
            .and_then(target_id)?;
        let lag = record.get("lag").map(coerce_f64).unwrap_or(0.0);
        let relation_type = match record.get("type").and_then(Value::as_str) {
            None => RelationType::default(),
            Some(tag) => tag.parse::<RelationType>().unwrap_or_else(|err| {
                warn!(task = owner, %err, "defaulting relation to FS");
                RelationType::default()
            }),
        };
        let (predecessor, successor) = match side {
            RelationSide::Predecessor => (target, owner),
            RelationSide::Successor => (owner, target),
        };
        Some(Self {
            unique_id: record
                .get("unique_id")
                .filter(|value| !value.is_null())
                .and_then(target_id),
            notes: record
                .get("notes")
                .and_then(Value::as_str)
                .filter(|notes| !notes.is_empty())
                .map(str::to_owned),
            ..Self::new(predecessor, successor, lag, relation_type)
        })
    }

    pub fn predecessor_task_unique_id(&self) -> i64 {
        self.predecessor_task_unique_id
    }

    pub fn successor_task_unique_id(&self) -> i64 {
        self.successor_task_unique_id
    }

    /// Lag in the record set's duration units.
    pub fn lag(&self) -> f64 {
        self.lag
    }

    pub fn relation_type(&self) -> RelationType {
        self.relation_type
    }

    /// The relation's own identifier, when the source schedule has one.
    pub fn unique_id(&self) -> Option<i64> {
        self.unique_id
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn predecessor_task<'p>(&self, project: &'p Project) -> Option<&'p Task> {
        project.task_by_unique_id(self.predecessor_task_unique_id)
    }

    pub fn successor_task<'p>(&self, project: &'p Project) -> Option<&'p Task> {
        project.task_by_unique_id(self.successor_task_unique_id)
    }
}

fn target_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn predecessor_record_points_into_owner() {
        let rec = record(json!({"predecessor_task_unique_id": 2, "lag": "3", "type": "FS"}));
        let relation = Relation::from_record(7, RelationSide::Predecessor, &rec).unwrap();
        assert_eq!(relation.predecessor_task_unique_id(), 2);
        assert_eq!(relation.successor_task_unique_id(), 7);
        assert_eq!(relation.lag(), 3.0);
        assert_eq!(relation.relation_type().as_str(), "FS");
        assert_eq!(relation.unique_id(), None);
        assert_eq!(relation.notes(), None);
    }

    #[test]
    fn relation_keeps_its_id_and_notes() {
        let rec = record(json!({
            "unique_id": 31,
            "predecessor_task_unique_id": 2,
            "type": "FF",
            "notes": "wait for cure"
        }));
        let relation = Relation::from_record(7, RelationSide::Predecessor, &rec).unwrap();
        assert_eq!(relation.unique_id(), Some(31));
        assert_eq!(relation.notes(), Some("wait for cure"));

        let encoded = serde_json::to_value(&relation).unwrap();
        assert_eq!(encoded["unique_id"], json!(31));
        let plain = serde_json::to_value(Relation::new(1, 2, 0.0, RelationType::FinishStart)).unwrap();
        assert!(plain.get("notes").is_none());
        let decoded: Relation = serde_json::from_value(json!({
            "predecessor_task_unique_id": 1,
            "successor_task_unique_id": 2,
            "lag": 0.0,
            "relation_type": "FinishStart"
        }))
        .unwrap();
        assert_eq!(decoded.unique_id(), None);
    }

    #[test]
    fn successor_record_points_out_of_owner() {
        let rec = record(json!({"task_unique_id": 9, "type": "SS"}));
        let relation = Relation::from_record(4, RelationSide::Successor, &rec).unwrap();
        assert_eq!(relation.predecessor_task_unique_id(), 4);
        assert_eq!(relation.successor_task_unique_id(), 9);
        assert_eq!(relation.lag(), 0.0);
        assert_eq!(relation.relation_type(), RelationType::StartStart);
    }

    #[test]
    fn long_type_names_and_unknown_types() {
        assert_eq!("finish_finish".parse::<RelationType>(), Ok(RelationType::FinishFinish));
        assert_eq!("Start-Finish".parse::<RelationType>(), Ok(RelationType::StartFinish));
        assert!("XX".parse::<RelationType>().is_err());

        let rec = record(json!({"task_unique_id": 1, "type": "XX"}));
        let relation = Relation::from_record(2, RelationSide::Predecessor, &rec).unwrap();
        assert_eq!(relation.relation_type(), RelationType::FinishStart);
    }

    #[test]
    fn record_without_target_is_dropped() {
        let rec = record(json!({"lag": 1}));
        assert!(Relation::from_record(1, RelationSide::Predecessor, &rec).is_none());
    }
}
