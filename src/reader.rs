use crate::error::{ProjectError, Result};
use crate::project::Project;
use crate::source::RecordSource;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Options applied while building a [`Project`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Zone used to decode timestamps that carry no offset.
    pub time_zone: Tz,
    /// Fail on a task whose parent chain loops instead of making it a root task.
    pub reject_parent_cycles: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            time_zone: Tz::UTC,
            reject_parent_cycles: true,
        }
    }
}

impl ReaderConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| ProjectError::Config {
            message: err.to_string(),
        })
    }

    pub fn with_time_zone(mut self, zone: Tz) -> Self {
        self.time_zone = zone;
        self
    }

    /// Set the zone from an IANA name such as `Europe/Berlin`.
    pub fn with_zone_name(self, name: &str) -> Result<Self> {
        let zone = name.trim().parse::<Tz>().map_err(|err| ProjectError::Config {
            message: format!("unknown time zone '{name}': {err}"),
        })?;
        Ok(self.with_time_zone(zone))
    }

    pub fn with_reject_parent_cycles(mut self, reject: bool) -> Self {
        self.reject_parent_cycles = reject;
        self
    }
}

/// Entry point for turning a record set into a [`Project`].
#[derive(Debug, Clone, Default)]
pub struct ProjectReader {
    config: ReaderConfig,
}

impl ProjectReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn read_value(&self, record_set: Value) -> Result<Project> {
        Project::from_record_set(record_set, &self.config)
    }

    pub fn read_str(&self, text: &str) -> Result<Project> {
        self.read_value(serde_json::from_str(text)?)
    }

    pub fn read_reader<R: Read>(&self, reader: R) -> Result<Project> {
        self.read_value(serde_json::from_reader(reader)?)
    }

    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Project> {
        let path = path.as_ref();
        debug!(path = %path.display(), zone = %self.config.time_zone, "reading record set");
        let file = File::open(path)?;
        self.read_reader(BufReader::new(file))
    }

    /// Build from whatever the converter boundary produces.
    pub fn read_source<S: RecordSource + ?Sized>(&self, source: &S) -> Result<Project> {
        self.read_value(source.record_set()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_utc_and_strict() {
        let config = ReaderConfig::default();
        assert_eq!(config.time_zone, Tz::UTC);
        assert!(config.reject_parent_cycles);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ReaderConfig::from_json(r#"{"time_zone": "Asia/Tokyo"}"#).unwrap();
        assert_eq!(config.time_zone, Tz::Asia__Tokyo);
        assert!(config.reject_parent_cycles);
    }

    #[test]
    fn unknown_zone_is_a_config_error() {
        let err = ReaderConfig::default().with_zone_name("Mars/Olympus").unwrap_err();
        assert!(matches!(err, ProjectError::Config { .. }));
        assert!(ReaderConfig::from_json(r#"{"time_zone": "Nowhere"}"#).is_err());
    }
}
