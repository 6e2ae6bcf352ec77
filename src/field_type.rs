use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a stored raw value is coerced when read through its schema tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadKind {
    Date,
    Duration,
    Float,
    Integer,
    Boolean,
    /// Returned unconverted (strings, GUIDs, notes, enumerations, lists, blobs).
    Raw,
}

impl ReadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadKind::Date => "date",
            ReadKind::Duration => "duration",
            ReadKind::Float => "float",
            ReadKind::Integer => "integer",
            ReadKind::Boolean => "boolean",
            ReadKind::Raw => "raw",
        }
    }
}

impl fmt::Display for ReadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic type tag attached to a field name by a schema registry.
///
/// Tags are spelled in the record set the same way as [`FieldType::tag`]
/// returns them, e.g. `"currency"`, `"work_contour"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Accrue,
    ActivityCodeValues,
    ActivityStatus,
    ActivityType,
    Binary,
    BookingType,
    Boolean,
    Char,
    CodeValues,
    Constraint,
    CriticalActivityType,
    Currency,
    CurrencySymbolPosition,
    Date,
    DateOrder,
    DateRangeList,
    Day,
    Delay,
    Duration,
    EarnedValueMethod,
    ExpenseItemList,
    Guid,
    Integer,
    Map,
    MpxCodePage,
    MpxFileVersion,
    Notes,
    Numeric,
    PercentCompleteType,
    Percentage,
    Priority,
    ProjectDateFormat,
    ProjectTimeFormat,
    Rate,
    RateSource,
    RateUnits,
    RelationList,
    RelationshipLagCalendar,
    ResourceRequestType,
    ResourceType,
    ScheduleFrom,
    SchedulingProgressedActivities,
    Short,
    StepList,
    String,
    TaskMode,
    TaskType,
    Time,
    TimeUnits,
    TotalSlackType,
    Units,
    Work,
    WorkContour,
    WorkUnits,
    Workgroup,
}

impl FieldType {
    pub const ALL: [FieldType; 55] = [
        FieldType::Accrue,
        FieldType::ActivityCodeValues,
        FieldType::ActivityStatus,
        FieldType::ActivityType,
        FieldType::Binary,
        FieldType::BookingType,
        FieldType::Boolean,
        FieldType::Char,
        FieldType::CodeValues,
        FieldType::Constraint,
        FieldType::CriticalActivityType,
        FieldType::Currency,
        FieldType::CurrencySymbolPosition,
        FieldType::Date,
        FieldType::DateOrder,
        FieldType::DateRangeList,
        FieldType::Day,
        FieldType::Delay,
        FieldType::Duration,
        FieldType::EarnedValueMethod,
        FieldType::ExpenseItemList,
        FieldType::Guid,
        FieldType::Integer,
        FieldType::Map,
        FieldType::MpxCodePage,
        FieldType::MpxFileVersion,
        FieldType::Notes,
        FieldType::Numeric,
        FieldType::PercentCompleteType,
        FieldType::Percentage,
        FieldType::Priority,
        FieldType::ProjectDateFormat,
        FieldType::ProjectTimeFormat,
        FieldType::Rate,
        FieldType::RateSource,
        FieldType::RateUnits,
        FieldType::RelationList,
        FieldType::RelationshipLagCalendar,
        FieldType::ResourceRequestType,
        FieldType::ResourceType,
        FieldType::ScheduleFrom,
        FieldType::SchedulingProgressedActivities,
        FieldType::Short,
        FieldType::StepList,
        FieldType::String,
        FieldType::TaskMode,
        FieldType::TaskType,
        FieldType::Time,
        FieldType::TimeUnits,
        FieldType::TotalSlackType,
        FieldType::Units,
        FieldType::Work,
        FieldType::WorkContour,
        FieldType::WorkUnits,
        FieldType::Workgroup,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            FieldType::Accrue => "accrue",
            FieldType::ActivityCodeValues => "activity_code_values",
            FieldType::ActivityStatus => "activity_status",
            FieldType::ActivityType => "activity_type",
            FieldType::Binary => "binary",
            FieldType::BookingType => "booking_type",
            FieldType::Boolean => "boolean",
            FieldType::Char => "char",
            FieldType::CodeValues => "code_values",
            FieldType::Constraint => "constraint",
            FieldType::CriticalActivityType => "critical_activity_type",
            FieldType::Currency => "currency",
            FieldType::CurrencySymbolPosition => "currency_symbol_position",
            FieldType::Date => "date",
            FieldType::DateOrder => "date_order",
            FieldType::DateRangeList => "date_range_list",
            FieldType::Day => "day",
            FieldType::Delay => "delay",
            FieldType::Duration => "duration",
            FieldType::EarnedValueMethod => "earned_value_method",
            FieldType::ExpenseItemList => "expense_item_list",
            FieldType::Guid => "guid",
            FieldType::Integer => "integer",
            FieldType::Map => "map",
            FieldType::MpxCodePage => "mpx_code_page",
            FieldType::MpxFileVersion => "mpx_file_version",
            FieldType::Notes => "notes",
            FieldType::Numeric => "numeric",
            FieldType::PercentCompleteType => "percent_complete_type",
            FieldType::Percentage => "percentage",
            FieldType::Priority => "priority",
            FieldType::ProjectDateFormat => "project_date_format",
            FieldType::ProjectTimeFormat => "project_time_format",
            FieldType::Rate => "rate",
            FieldType::RateSource => "rate_source",
            FieldType::RateUnits => "rate_units",
            FieldType::RelationList => "relation_list",
            FieldType::RelationshipLagCalendar => "relationship_lag_calendar",
            FieldType::ResourceRequestType => "resource_request_type",
            FieldType::ResourceType => "resource_type",
            FieldType::ScheduleFrom => "schedule_from",
            FieldType::SchedulingProgressedActivities => "scheduling_progressed_activities",
            FieldType::Short => "short",
            FieldType::StepList => "step_list",
            FieldType::String => "string",
            FieldType::TaskMode => "task_mode",
            FieldType::TaskType => "task_type",
            FieldType::Time => "time",
            FieldType::TimeUnits => "time_units",
            FieldType::TotalSlackType => "total_slack_type",
            FieldType::Units => "units",
            FieldType::Work => "work",
            FieldType::WorkContour => "work_contour",
            FieldType::WorkUnits => "work_units",
            FieldType::Workgroup => "workgroup",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.tag() == tag)
    }

    /// Numeric data type codes some converter versions write in place of
    /// tags. Code 19 (ASCII string) reads as a plain string.
    pub fn from_code(code: i64) -> Option<Self> {
        let ty = match code {
            1 | 19 => FieldType::String,
            2 => FieldType::Date,
            3 => FieldType::Currency,
            4 => FieldType::Boolean,
            5 => FieldType::Numeric,
            6 => FieldType::Duration,
            7 => FieldType::Units,
            8 => FieldType::Percentage,
            9 => FieldType::Accrue,
            10 => FieldType::Constraint,
            11 => FieldType::Rate,
            12 => FieldType::Priority,
            13 => FieldType::RelationList,
            14 => FieldType::TaskType,
            15 => FieldType::ResourceType,
            16 => FieldType::TimeUnits,
            17 => FieldType::Guid,
            18 => FieldType::Work,
            20 => FieldType::Short,
            21 => FieldType::BookingType,
            22 => FieldType::Delay,
            23 => FieldType::WorkUnits,
            24 => FieldType::RateUnits,
            25 => FieldType::EarnedValueMethod,
            26 => FieldType::ResourceRequestType,
            27 => FieldType::Integer,
            28 => FieldType::WorkContour,
            29 => FieldType::Binary,
            _ => return None,
        };
        Some(ty)
    }

    pub fn read_kind(&self) -> ReadKind {
        match self {
            FieldType::Date => ReadKind::Date,
            FieldType::Delay | FieldType::Duration | FieldType::Work => ReadKind::Duration,
            FieldType::Currency
            | FieldType::Numeric
            | FieldType::Percentage
            | FieldType::Units => ReadKind::Float,
            FieldType::Integer | FieldType::Priority | FieldType::Short => ReadKind::Integer,
            FieldType::Boolean => ReadKind::Boolean,
            _ => ReadKind::Raw,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s.trim()).ok_or_else(|| format!("unknown field type tag '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_codes_map_to_types() {
        assert_eq!(FieldType::from_code(2), Some(FieldType::Date));
        assert_eq!(FieldType::from_code(19), Some(FieldType::String));
        assert_eq!(FieldType::from_code(27), Some(FieldType::Integer));
        assert_eq!(FieldType::from_code(0), None);
        assert_eq!(FieldType::from_code(999), None);
    }

    #[test]
    fn tags_round_trip_through_from_tag() {
        for ty in FieldType::ALL {
            assert_eq!(FieldType::from_tag(ty.tag()), Some(ty));
        }
    }

    #[test]
    fn work_and_duration_share_a_reader() {
        assert_eq!(FieldType::Work.read_kind(), ReadKind::Duration);
        assert_eq!(FieldType::Duration.read_kind(), ReadKind::Duration);
        assert_eq!(FieldType::Currency.read_kind(), ReadKind::Float);
        assert_eq!(FieldType::Short.read_kind(), ReadKind::Integer);
        assert_eq!(FieldType::Guid.read_kind(), ReadKind::Raw);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!("not_a_type".parse::<FieldType>().is_err());
        assert_eq!(" currency ".parse::<FieldType>(), Ok(FieldType::Currency));
    }
}
