//! Per-entity attribute store.
//!
//! Holds the raw field-name to value map of one record and reads values back
//! with the coercion rules the converter's output relies on: absent numbers read
//! as zero, booleans are true only for a literal `true`, dates are decoded in the
//! project's time zone on demand.

use crate::error::FieldError;
use crate::field_type::ReadKind;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use chrono_tz::Tz;
use serde_json::{Map, Value};

/// Result of a schema-driven field read.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Date(Option<DateTime<Tz>>),
    Duration(f64),
    Float(f64),
    Integer(i64),
    Boolean(bool),
    Raw(Option<&'a Value>),
}

impl FieldValue<'_> {
    pub fn kind(&self) -> ReadKind {
        match self {
            FieldValue::Date(_) => ReadKind::Date,
            FieldValue::Duration(_) => ReadKind::Duration,
            FieldValue::Float(_) => ReadKind::Float,
            FieldValue::Integer(_) => ReadKind::Integer,
            FieldValue::Boolean(_) => ReadKind::Boolean,
            FieldValue::Raw(_) => ReadKind::Raw,
        }
    }

    /// Plain-text rendering used by the table and CSV exports.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Date(date) => date.map(|d| d.to_rfc3339()).unwrap_or_default(),
            FieldValue::Duration(v) | FieldValue::Float(v) => v.to_string(),
            FieldValue::Integer(v) => v.to_string(),
            FieldValue::Boolean(v) => v.to_string(),
            FieldValue::Raw(None) => String::new(),
            FieldValue::Raw(Some(Value::String(s))) => s.clone(),
            FieldValue::Raw(Some(other)) => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    values: Map<String, Value>,
    zone: Tz,
}

impl Attributes {
    pub fn new(values: Map<String, Value>, zone: Tz) -> Self {
        Self { values, zone }
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// A stored JSON `null` counts as absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|value| !value.is_null())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn read_raw(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    pub fn read_string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn read_duration(&self, name: &str) -> f64 {
        self.get(name).map(coerce_f64).unwrap_or(0.0)
    }

    pub fn read_float(&self, name: &str) -> f64 {
        self.get(name).map(coerce_f64).unwrap_or(0.0)
    }

    pub fn read_integer(&self, name: &str) -> i64 {
        self.get(name).map(coerce_i64).unwrap_or(0)
    }

    /// Present integers only; absent fields are `None` rather than `0`.
    pub fn read_optional_integer(&self, name: &str) -> Option<i64> {
        self.get(name).map(coerce_i64)
    }

    pub fn read_boolean(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(Value::Bool(true)))
    }

    pub fn read_date(&self, name: &str) -> Result<Option<DateTime<Tz>>, FieldError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => parse_instant(value, self.zone)
                .map(Some)
                .ok_or_else(|| date_error(name, value, self.zone)),
        }
    }

    pub fn read(&self, name: &str, kind: ReadKind) -> Result<FieldValue<'_>, FieldError> {
        Ok(match kind {
            ReadKind::Date => FieldValue::Date(self.read_date(name)?),
            ReadKind::Duration => FieldValue::Duration(self.read_duration(name)),
            ReadKind::Float => FieldValue::Float(self.read_float(name)),
            ReadKind::Integer => FieldValue::Integer(self.read_integer(name)),
            ReadKind::Boolean => FieldValue::Boolean(self.read_boolean(name)),
            ReadKind::Raw => FieldValue::Raw(self.read_raw(name)),
        })
    }
}

pub(crate) fn date_error(field: &str, value: &Value, zone: Tz) -> FieldError {
    let value = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    FieldError::DateFormat {
        field: field.to_string(),
        value,
        zone: zone.name().to_string(),
    }
}

/// Numeric coercion that never fails: unparsable input reads as `0.0`.
pub(crate) fn coerce_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => leading_float(s),
        _ => 0.0,
    }
}

/// Integer coercion that truncates toward zero and never fails.
pub(crate) fn coerce_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .unwrap_or_else(|| n.as_f64().map(|f| f as i64).unwrap_or(0)),
        Value::String(s) => leading_integer(s),
        _ => 0,
    }
}

/// Length of the longest prefix of `s` made of an optional sign and digits.
fn digits_prefix(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

fn leading_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let end = digits_prefix(s);
    let prefix = &s[..end];
    prefix
        .parse::<i64>()
        .unwrap_or_else(|_| prefix.parse::<f64>().map(|f| f as i64).unwrap_or(0))
}

fn leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = digits_prefix(s);
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let tail = &s[end + 1..];
        let exponent = digits_prefix(tail);
        if tail[..exponent].bytes().any(|b| b.is_ascii_digit()) {
            end += 1 + exponent;
        }
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}

const LOCAL_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Decode an ISO-style timestamp. Strings carrying an offset are converted
/// into `zone`; strings without one are taken as local time in `zone`.
pub(crate) fn parse_instant(value: &Value, zone: Tz) -> Option<DateTime<Tz>> {
    let text = value.as_str()?.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&zone));
    }
    let naive = LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    localize(naive, zone)
}

/// Attach `zone` to a wall-clock time. Ambiguous times take the earlier
/// instant; times inside a DST gap move forward by an hour.
pub(crate) fn localize(naive: NaiveDateTime, zone: Tz) -> Option<DateTime<Tz>> {
    zone.from_local_datetime(&naive).earliest().or_else(|| {
        zone.from_local_datetime(&(naive + TimeDelta::hours(1)))
            .earliest()
    })
}

/// Decode a time-of-day, accepting either a bare `HH:MM[:SS]` or a full
/// timestamp whose time part is used.
pub(crate) fn parse_time_of_day(value: &Value, zone: Tz) -> Option<NaiveTime> {
    let text = value.as_str()?.trim();
    ["%H:%M:%S%.f", "%H:%M"]
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(text, format).ok())
        .or_else(|| parse_instant(value, zone).map(|instant| instant.time()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    fn store(values: Value) -> Attributes {
        Attributes::new(values.as_object().cloned().unwrap_or_default(), Tz::UTC)
    }

    #[test]
    fn leading_float_follows_lenient_numeric_rules() {
        assert_eq!(leading_float("3"), 3.0);
        assert_eq!(leading_float("  2.5 hours"), 2.5);
        assert_eq!(leading_float("-1.25e2x"), -125.0);
        assert_eq!(leading_float("1e"), 1.0);
        assert_eq!(leading_float("abc"), 0.0);
        assert_eq!(leading_float(""), 0.0);
    }

    #[test]
    fn leading_integer_truncates() {
        assert_eq!(leading_integer("3.7"), 3);
        assert_eq!(leading_integer("-42days"), -42);
        assert_eq!(leading_integer("x1"), 0);
    }

    #[test]
    fn integer_numbers_are_truncated() {
        let attrs = store(json!({"a": 7.9, "b": -7.9, "c": 12}));
        assert_eq!(attrs.read_integer("a"), 7);
        assert_eq!(attrs.read_integer("b"), -7);
        assert_eq!(attrs.read_integer("c"), 12);
    }

    #[test]
    fn null_is_treated_as_absent() {
        let attrs = store(json!({"start": null, "cost": null}));
        assert_eq!(attrs.read_date("start"), Ok(None));
        assert_eq!(attrs.read_float("cost"), 0.0);
        assert!(!attrs.contains("cost"));
    }

    #[test]
    fn local_timestamp_uses_configured_zone() {
        let zone: Tz = "America/New_York".parse().unwrap();
        let value = json!("2024-03-01T08:30:00.0");
        let instant = parse_instant(&value, zone).unwrap();
        assert_eq!(instant.hour(), 8);
        assert_eq!(instant.minute(), 30);
        assert_eq!(instant.naive_utc().hour(), 13);
    }

    #[test]
    fn offset_timestamp_is_converted_into_zone() {
        let zone: Tz = "Europe/Berlin".parse().unwrap();
        let value = json!("2024-01-15T09:00:00Z");
        let instant = parse_instant(&value, zone).unwrap();
        assert_eq!(instant.hour(), 10);
        assert_eq!(instant.day(), 15);
    }

    #[test]
    fn dst_gap_moves_forward() {
        let zone: Tz = "America/New_York".parse().unwrap();
        let value = json!("2024-03-10T02:30:00");
        let instant = parse_instant(&value, zone).unwrap();
        assert_eq!(instant.hour(), 3);
    }

    #[test]
    fn time_of_day_accepts_bare_and_full_forms() {
        let zone = Tz::UTC;
        assert_eq!(
            parse_time_of_day(&json!("08:00"), zone),
            NaiveTime::from_hms_opt(8, 0, 0)
        );
        assert_eq!(
            parse_time_of_day(&json!("1899-12-30T17:00:00"), zone),
            NaiveTime::from_hms_opt(17, 0, 0)
        );
        assert_eq!(parse_time_of_day(&json!("noon"), zone), None);
    }
}
