//! Working-time calendars.
//!
//! Calendars are plain values decoded from the record set. A calendar refers to
//! its base calendar by name or by parent id; either is resolved through the
//! owning [`Project`] whenever a query needs to fall back to it.
//!
//! Two record shapes are accepted: a `days` list of named day records, and
//! the converter's weekday-keyed objects (`"monday": {"type": ...}`).

use crate::attributes::{coerce_i64, date_error, parse_instant, parse_time_of_day};
use crate::error::FieldError;
use crate::project::Project;
use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::warn;

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Record keys of the weekday-keyed calendar shape.
fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "sunday",
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
    }
}

/// Hour ranges a working day gets when nothing more specific is defined.
pub fn default_working_hours() -> Vec<(NaiveTime, NaiveTime)> {
    [(8, 12), (13, 17)]
        .into_iter()
        .filter_map(|(from, to)| {
            Some((
                NaiveTime::from_hms_opt(from, 0, 0)?,
                NaiveTime::from_hms_opt(to, 0, 0)?,
            ))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Working,
    NonWorking,
    /// Inherit from the base calendar.
    #[default]
    Default,
}

impl DayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Working => "working",
            DayType::NonWorking => "non_working",
            DayType::Default => "default",
        }
    }

    /// Accepts the textual names and the numeric codes 0 (non-working),
    /// 1 (working) and 2 (default).
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(_) => match coerce_i64(value) {
                0 => Some(DayType::NonWorking),
                1 => Some(DayType::Working),
                2 => Some(DayType::Default),
                _ => None,
            },
            Value::String(s) => {
                match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
                    "working" => Some(DayType::Working),
                    "non_working" | "nonworking" => Some(DayType::NonWorking),
                    "default" => Some(DayType::Default),
                    _ => None,
                }
            }
            Value::Bool(true) => Some(DayType::Working),
            Value::Bool(false) => Some(DayType::NonWorking),
            _ => None,
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One working-time range. The bounds are decoded when read.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarHours {
    from: Value,
    to: Value,
    zone: Tz,
}

impl CalendarHours {
    pub fn from_record(record: &Map<String, Value>, zone: Tz) -> Self {
        Self {
            from: record.get("from").cloned().unwrap_or(Value::Null),
            to: record.get("to").cloned().unwrap_or(Value::Null),
            zone,
        }
    }

    pub fn from_times(from: NaiveTime, to: NaiveTime) -> Self {
        let encode = |time: NaiveTime| Value::String(time.format("%H:%M:%S").to_string());
        Self {
            from: encode(from),
            to: encode(to),
            zone: Tz::UTC,
        }
    }

    pub fn from(&self) -> Result<Option<NaiveTime>, FieldError> {
        decode_time("from", &self.from, self.zone)
    }

    pub fn to(&self) -> Result<Option<NaiveTime>, FieldError> {
        decode_time("to", &self.to, self.zone)
    }

    /// Both bounds, when both are present.
    pub fn range(&self) -> Result<Option<(NaiveTime, NaiveTime)>, FieldError> {
        Ok(self.from()?.zip(self.to()?))
    }
}

fn decode_time(field: &str, value: &Value, zone: Tz) -> Result<Option<NaiveTime>, FieldError> {
    if value.is_null() {
        return Ok(None);
    }
    parse_time_of_day(value, zone)
        .map(Some)
        .ok_or_else(|| date_error(field, value, zone))
}

fn decode_date(field: &str, value: &Value, zone: Tz) -> Result<Option<NaiveDate>, FieldError> {
    if value.is_null() {
        return Ok(None);
    }
    parse_instant(value, zone)
        .map(|instant| Some(instant.date_naive()))
        .ok_or_else(|| date_error(field, value, zone))
}

fn hours_from(record: &Map<String, Value>, zone: Tz) -> Vec<CalendarHours> {
    record
        .get("hours")
        .and_then(Value::as_array)
        .map(|ranges| {
            ranges
                .iter()
                .filter_map(Value::as_object)
                .map(|range| CalendarHours::from_record(range, zone))
                .collect()
        })
        .unwrap_or_default()
}

fn first_present(record: &Map<String, Value>, keys: &[&str]) -> Value {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
        .cloned()
        .unwrap_or(Value::Null)
}

fn decode_ranges(hours: &[CalendarHours]) -> Result<Vec<(NaiveTime, NaiveTime)>, FieldError> {
    let mut ranges = Vec::with_capacity(hours.len());
    for range in hours {
        if let Some(bounds) = range.range()? {
            ranges.push(bounds);
        }
    }
    Ok(ranges)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalendarDay {
    day_type: DayType,
    hours: Vec<CalendarHours>,
}

impl CalendarDay {
    pub fn new(day_type: DayType, hours: Vec<CalendarHours>) -> Self {
        Self { day_type, hours }
    }

    fn from_record(record: &Map<String, Value>, zone: Tz) -> Self {
        let day_type = record
            .get("type")
            .and_then(DayType::from_value)
            .unwrap_or_default();
        Self::new(day_type, hours_from(record, zone))
    }

    pub fn day_type(&self) -> DayType {
        self.day_type
    }

    pub fn hours(&self) -> &[CalendarHours] {
        &self.hours
    }
}

/// Seven day definitions, one slot per weekday.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DaySlots([CalendarDay; 7]);

impl DaySlots {
    pub fn get(&self, weekday: Weekday) -> &CalendarDay {
        &self.0[weekday.num_days_from_sunday() as usize]
    }

    pub fn set(&mut self, weekday: Weekday, day: CalendarDay) {
        self.0[weekday.num_days_from_sunday() as usize] = day;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &CalendarDay)> {
        WEEKDAYS.into_iter().zip(self.0.iter())
    }

    /// Day definitions of a calendar or work week record: the `days` list
    /// first, then any weekday-keyed objects, which win on conflict.
    fn from_record(record: &Map<String, Value>, zone: Tz, calendar: &str) -> Self {
        let mut slots = Self::from_list(record.get("days"), zone, calendar);
        for weekday in WEEKDAYS {
            if let Some(day) = record.get(weekday_key(weekday)).and_then(Value::as_object) {
                slots.set(weekday, CalendarDay::from_record(day, zone));
            }
        }
        slots
    }

    /// Index `days` sub-records by their declared day name. Unnamed or
    /// unrecognised days are skipped.
    fn from_list(records: Option<&Value>, zone: Tz, calendar: &str) -> Self {
        let mut slots = Self::default();
        for record in records.and_then(Value::as_array).into_iter().flatten() {
            let Some(record) = record.as_object() else {
                continue;
            };
            let weekday = record
                .get("name")
                .or_else(|| record.get("day"))
                .and_then(Value::as_str)
                .and_then(|name| name.trim().parse::<Weekday>().ok());
            match weekday {
                Some(weekday) => slots.set(weekday, CalendarDay::from_record(record, zone)),
                None => warn!(calendar, "skipping calendar day without a weekday name"),
            }
        }
        slots
    }
}

/// A secondary working week in force over a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarWeek {
    name: Option<String>,
    from: Value,
    to: Value,
    zone: Tz,
    days: DaySlots,
}

impl CalendarWeek {
    fn from_record(record: &Map<String, Value>, zone: Tz, calendar: &str) -> Self {
        Self {
            name: record.get("name").and_then(Value::as_str).map(str::to_owned),
            from: first_present(record, &["from", "effective_from"]),
            to: first_present(record, &["to", "effective_to"]),
            zone,
            days: DaySlots::from_record(record, zone, calendar),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn from_date(&self) -> Result<Option<NaiveDate>, FieldError> {
        decode_date("from", &self.from, self.zone)
    }

    pub fn to_date(&self) -> Result<Option<NaiveDate>, FieldError> {
        decode_date("to", &self.to, self.zone)
    }

    pub fn day(&self, weekday: Weekday) -> &CalendarDay {
        self.days.get(weekday)
    }

    pub fn days(&self) -> &DaySlots {
        &self.days
    }

    /// Open-ended on either side when a bound is absent.
    pub fn covers(&self, date: NaiveDate) -> Result<bool, FieldError> {
        let after_start = self.from_date()?.is_none_or(|from| from <= date);
        let before_end = self.to_date()?.is_none_or(|to| date <= to);
        Ok(after_start && before_end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrenceType {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value.as_str()?.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(RecurrenceType::Daily),
            "weekly" => Some(RecurrenceType::Weekly),
            "monthly" => Some(RecurrenceType::Monthly),
            "yearly" => Some(RecurrenceType::Yearly),
            _ => None,
        }
    }
}

const MAX_OCCURRENCES: usize = 100_000;

/// The repeat rule of a recurring exception.
///
/// Occurrences run from `start_date` until `finish_date` when one is given,
/// otherwise until `occurrences` dates have been produced. `relative`
/// monthly and yearly rules pick the `day_number`th (5 meaning last)
/// occurrence of the first weekday in `weekly_days`.
#[derive(Debug, Clone, PartialEq)]
pub struct Recurrence {
    recurrence_type: Option<RecurrenceType>,
    start: Value,
    finish: Value,
    zone: Tz,
    occurrences: usize,
    frequency: u32,
    relative: bool,
    day_number: u32,
    month_number: u32,
    weekly_days: Vec<Weekday>,
}

impl Recurrence {
    pub fn from_record(record: &Map<String, Value>, zone: Tz) -> Self {
        let number = |key: &str| record.get(key).map(coerce_i64).unwrap_or(0);
        let weekly_days = record
            .get("weekly_days")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .filter_map(|day| day.trim().parse::<Weekday>().ok())
            .collect();
        Self {
            recurrence_type: record.get("recurrence_type").and_then(RecurrenceType::from_value),
            start: record.get("start_date").cloned().unwrap_or(Value::Null),
            finish: record.get("finish_date").cloned().unwrap_or(Value::Null),
            zone,
            occurrences: number("occurrences").clamp(1, MAX_OCCURRENCES as i64) as usize,
            frequency: number("frequency").clamp(1, u32::MAX as i64) as u32,
            relative: record.get("relative").and_then(Value::as_bool).unwrap_or(false),
            day_number: number("day_number").clamp(1, 31) as u32,
            month_number: number("month_number").clamp(1, 12) as u32,
            weekly_days,
        }
    }

    pub fn recurrence_type(&self) -> Option<RecurrenceType> {
        self.recurrence_type
    }

    pub fn start_date(&self) -> Result<Option<NaiveDate>, FieldError> {
        decode_date("start_date", &self.start, self.zone)
    }

    pub fn finish_date(&self) -> Result<Option<NaiveDate>, FieldError> {
        decode_date("finish_date", &self.finish, self.zone)
    }

    pub fn weekly_days(&self) -> &[Weekday] {
        &self.weekly_days
    }

    /// Every date the rule produces, in ascending order. A rule without a
    /// type or start date produces nothing.
    pub fn dates(&self) -> Result<Vec<NaiveDate>, FieldError> {
        let finish = self.finish_date()?;
        let (Some(start), Some(recurrence_type)) = (self.start_date()?, self.recurrence_type)
        else {
            return Ok(Vec::new());
        };
        let mut run = Occurrences {
            finish,
            limit: self.occurrences,
            dates: Vec::new(),
        };
        match recurrence_type {
            RecurrenceType::Daily => self.daily(start, &mut run),
            RecurrenceType::Weekly => self.weekly(start, &mut run),
            RecurrenceType::Monthly if self.relative => self.monthly_relative(start, &mut run),
            RecurrenceType::Monthly => self.monthly_absolute(start, &mut run),
            RecurrenceType::Yearly if self.relative => self.yearly_relative(start, &mut run),
            RecurrenceType::Yearly => self.yearly_absolute(start, &mut run),
        }
        Ok(run.dates)
    }

    pub fn occurs_on(&self, date: NaiveDate) -> Result<bool, FieldError> {
        Ok(self.dates()?.binary_search(&date).is_ok())
    }

    fn daily(&self, start: NaiveDate, run: &mut Occurrences) {
        let mut date = Some(start);
        while let Some(current) = date.filter(|current| run.wants(*current)) {
            run.dates.push(current);
            date = current.checked_add_days(Days::new(u64::from(self.frequency)));
        }
    }

    fn weekly(&self, start: NaiveDate, run: &mut Occurrences) {
        if self.weekly_days.is_empty() {
            return;
        }
        let step = Days::new(7 * u64::from(self.frequency));
        let mut week = start.checked_sub_days(Days::new(u64::from(
            start.weekday().num_days_from_sunday(),
        )));
        'weeks: while let Some(sunday) = week.filter(|sunday| run.wants(*sunday)) {
            for (offset, weekday) in WEEKDAYS.into_iter().enumerate() {
                if !self.weekly_days.contains(&weekday) {
                    continue;
                }
                let Some(date) = sunday.checked_add_days(Days::new(offset as u64)) else {
                    break 'weeks;
                };
                if !run.wants(date) {
                    break 'weeks;
                }
                if date >= start {
                    run.dates.push(date);
                }
            }
            week = sunday.checked_add_days(step);
        }
    }

    fn monthly_absolute(&self, start: NaiveDate, run: &mut Occurrences) {
        let step = Months::new(self.frequency);
        let mut month = start.with_day(1);
        if self.day_number < start.day() {
            month = month.and_then(|month| month.checked_add_months(Months::new(1)));
        }
        while let Some(first) = month.filter(|first| run.wants(*first)) {
            let Some(date) = on_day(first, self.day_number) else {
                break;
            };
            run.dates.push(date);
            month = first.checked_add_months(step);
        }
    }

    fn monthly_relative(&self, start: NaiveDate, run: &mut Occurrences) {
        let Some(&weekday) = self.weekly_days.first() else {
            return;
        };
        let step = Months::new(self.frequency);
        let mut month = start.with_day(1);
        while let Some(first) = month.filter(|first| run.wants(*first)) {
            let Some(date) = relative_day(first, weekday, self.day_number) else {
                break;
            };
            if date >= start {
                if !run.wants(date) {
                    break;
                }
                run.dates.push(date);
            }
            month = first.checked_add_months(step);
        }
    }

    fn yearly_absolute(&self, start: NaiveDate, run: &mut Occurrences) {
        let year = Months::new(12);
        let mut anchor = NaiveDate::from_ymd_opt(start.year(), self.month_number, 1);
        while let Some(first) = anchor.filter(|first| run.wants(*first)) {
            let mut date = on_day(first, self.day_number);
            if date.is_some_and(|date| date < start) {
                date = first
                    .checked_add_months(year)
                    .and_then(|next| on_day(next, self.day_number));
            }
            let Some(date) = date else {
                break;
            };
            run.dates.push(date);
            anchor = date.with_day(1).and_then(|first| first.checked_add_months(year));
        }
    }

    fn yearly_relative(&self, start: NaiveDate, run: &mut Occurrences) {
        let Some(&weekday) = self.weekly_days.first() else {
            return;
        };
        let mut anchor = NaiveDate::from_ymd_opt(start.year(), self.month_number, 1);
        while let Some(first) = anchor.filter(|first| run.wants(*first)) {
            let Some(date) = relative_day(first, weekday, self.day_number) else {
                break;
            };
            if date >= start {
                if !run.wants(date) {
                    break;
                }
                run.dates.push(date);
            }
            anchor = first.checked_add_months(Months::new(12));
        }
    }
}

struct Occurrences {
    finish: Option<NaiveDate>,
    limit: usize,
    dates: Vec<NaiveDate>,
}

impl Occurrences {
    fn wants(&self, date: NaiveDate) -> bool {
        if self.dates.len() >= MAX_OCCURRENCES {
            return false;
        }
        match self.finish {
            Some(finish) => date <= finish,
            None => self.dates.len() < self.limit,
        }
    }
}

/// `day` of the month starting at `first`, clamped to the month's length.
fn on_day(first: NaiveDate, day: u32) -> Option<NaiveDate> {
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?.day();
    first.with_day(day.min(last))
}

/// The `nth` `weekday` of the month starting at `first`; `nth` above 4
/// means the last one.
fn relative_day(first: NaiveDate, weekday: Weekday, nth: u32) -> Option<NaiveDate> {
    if nth > 4 {
        let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
        let back = (7 + last.weekday().num_days_from_sunday() - weekday.num_days_from_sunday()) % 7;
        return last.checked_sub_days(Days::new(u64::from(back)));
    }
    let ahead = (7 + weekday.num_days_from_sunday() - first.weekday().num_days_from_sunday()) % 7;
    first.checked_add_days(Days::new(u64::from(ahead + 7 * (nth.max(1) - 1))))
}

/// A dated override of the regular week.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarException {
    name: Option<String>,
    from: Value,
    to: Value,
    zone: Tz,
    day_type: DayType,
    hours: Vec<CalendarHours>,
    recurrence: Option<Recurrence>,
}

impl CalendarException {
    fn from_record(record: &Map<String, Value>, zone: Tz) -> Self {
        let hours = hours_from(record, zone);
        let day_type = match record.get("type").and_then(DayType::from_value) {
            Some(day_type) => day_type,
            None if hours.is_empty() => DayType::NonWorking,
            None => DayType::Working,
        };
        Self {
            name: record.get("name").and_then(Value::as_str).map(str::to_owned),
            from: record.get("from").cloned().unwrap_or(Value::Null),
            to: record.get("to").cloned().unwrap_or(Value::Null),
            zone,
            day_type,
            hours,
            recurrence: record
                .get("recurrence")
                .and_then(Value::as_object)
                .map(|recurrence| Recurrence::from_record(recurrence, zone)),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn from_date(&self) -> Result<Option<NaiveDate>, FieldError> {
        decode_date("from", &self.from, self.zone)
    }

    /// A missing end date makes a single-day exception.
    pub fn to_date(&self) -> Result<Option<NaiveDate>, FieldError> {
        match decode_date("to", &self.to, self.zone)? {
            Some(to) => Ok(Some(to)),
            None => self.from_date(),
        }
    }

    pub fn day_type(&self) -> DayType {
        self.day_type
    }

    pub fn hours(&self) -> &[CalendarHours] {
        &self.hours
    }

    pub fn is_working(&self) -> bool {
        match self.day_type {
            DayType::Working => true,
            DayType::NonWorking => false,
            DayType::Default => !self.hours.is_empty(),
        }
    }

    pub fn recurrence(&self) -> Option<&Recurrence> {
        self.recurrence.as_ref()
    }

    /// A recurring exception covers the dates its rule produces; any other
    /// covers its `from..=to` range.
    pub fn covers(&self, date: NaiveDate) -> Result<bool, FieldError> {
        if let Some(recurrence) = &self.recurrence {
            return recurrence.occurs_on(date);
        }
        match (self.from_date()?, self.to_date()?) {
            (Some(from), Some(to)) => Ok(from <= date && date <= to),
            _ => Ok(false),
        }
    }

    fn working_hours(&self) -> Result<Vec<(NaiveTime, NaiveTime)>, FieldError> {
        if !self.is_working() {
            return Ok(Vec::new());
        }
        let ranges = decode_ranges(&self.hours)?;
        Ok(if ranges.is_empty() {
            default_working_hours()
        } else {
            ranges
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calendar {
    id: Option<i64>,
    name: String,
    base_calendar_name: Option<String>,
    parent_unique_id: Option<i64>,
    resource: Option<String>,
    days: DaySlots,
    weeks: Vec<CalendarWeek>,
    exceptions: Vec<CalendarException>,
}

impl Calendar {
    pub fn from_record(record: &Map<String, Value>, zone: Tz) -> Self {
        let text = |key: &str| {
            record
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };
        let id = Some(first_present(record, &["id", "unique_id"]))
            .filter(|value| !value.is_null())
            .map(|value| coerce_i64(&value));
        let parent_unique_id = record
            .get("parent_unique_id")
            .filter(|value| !value.is_null())
            .map(coerce_i64);
        let name = text("name").unwrap_or_default();
        let objects = |key: &str| {
            record
                .get(key)
                .and_then(Value::as_array)
                .into_iter()
                .flatten()
                .filter_map(Value::as_object)
                .collect::<Vec<_>>()
        };
        let weeks = objects("weeks")
            .into_iter()
            .chain(objects("working_weeks"))
            .map(|week| CalendarWeek::from_record(week, zone, &name))
            .collect();
        let exceptions = objects("exceptions")
            .into_iter()
            .map(|exception| CalendarException::from_record(exception, zone))
            .collect();
        Self {
            id,
            base_calendar_name: text("base_calendar_name"),
            parent_unique_id,
            resource: text("resource"),
            days: DaySlots::from_record(record, zone, &name),
            name,
            weeks,
            exceptions,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_calendar_name(&self) -> Option<&str> {
        self.base_calendar_name.as_deref()
    }

    pub fn parent_unique_id(&self) -> Option<i64> {
        self.parent_unique_id
    }

    /// Name of the resource owning this calendar, for resource calendars.
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    pub fn day(&self, weekday: Weekday) -> &CalendarDay {
        self.days.get(weekday)
    }

    pub fn days(&self) -> &DaySlots {
        &self.days
    }

    pub fn weeks(&self) -> &[CalendarWeek] {
        &self.weeks
    }

    pub fn exceptions(&self) -> &[CalendarException] {
        &self.exceptions
    }

    pub fn is_derived(&self) -> bool {
        self.base_calendar_name.is_some() || self.parent_unique_id.is_some()
    }

    /// The base calendar, by name when one is given, otherwise by parent id.
    pub fn base_calendar<'p>(&self, project: &'p Project) -> Option<&'p Calendar> {
        let by_name = self
            .base_calendar_name
            .as_deref()
            .filter(|name| *name != self.name)
            .and_then(|name| project.calendar_by_name(name));
        by_name.or_else(|| {
            self.parent_unique_id
                .filter(|parent| Some(*parent) != self.id)
                .and_then(|parent| project.calendar_by_id(parent))
        })
    }

    /// This calendar followed by its base calendars, stopping at the first
    /// calendar already in the chain.
    fn lineage<'a>(&'a self, project: &'a Project) -> Vec<&'a Calendar> {
        let mut chain = vec![self];
        let mut current = self;
        while let Some(base) = current.base_calendar(project) {
            if chain.iter().any(|seen| std::ptr::eq(*seen, base)) {
                warn!(calendar = %self.name, base = %base.name, "calendar base chain loops");
                break;
            }
            chain.push(base);
            current = base;
        }
        chain
    }

    /// Weekday rule: an explicit day type wins, `default` defers to the base
    /// calendar, and with no base calendar only Saturday and Sunday are off.
    pub fn is_working_day(&self, project: &Project, weekday: Weekday) -> bool {
        for calendar in self.lineage(project) {
            match calendar.day(weekday).day_type() {
                DayType::Working => return true,
                DayType::NonWorking => return false,
                DayType::Default => {}
            }
        }
        !matches!(weekday, Weekday::Sat | Weekday::Sun)
    }

    /// Hour ranges of a weekday, following the same inheritance as
    /// [`Calendar::is_working_day`].
    pub fn day_hours(
        &self,
        project: &Project,
        weekday: Weekday,
    ) -> Result<Vec<(NaiveTime, NaiveTime)>, FieldError> {
        for calendar in self.lineage(project) {
            let day = calendar.day(weekday);
            match day.day_type() {
                DayType::Working => {
                    let ranges = decode_ranges(day.hours())?;
                    return Ok(if ranges.is_empty() {
                        default_working_hours()
                    } else {
                        ranges
                    });
                }
                DayType::NonWorking => return Ok(Vec::new()),
                DayType::Default => {}
            }
        }
        Ok(if matches!(weekday, Weekday::Sat | Weekday::Sun) {
            Vec::new()
        } else {
            default_working_hours()
        })
    }

    /// The exception covering `date`: own exceptions first, then the base
    /// calendar's.
    pub fn exception_for<'a>(
        &'a self,
        project: &'a Project,
        date: NaiveDate,
    ) -> Result<Option<&'a CalendarException>, FieldError> {
        for calendar in self.lineage(project) {
            for exception in &calendar.exceptions {
                if exception.covers(date)? {
                    return Ok(Some(exception));
                }
            }
        }
        Ok(None)
    }

    /// The work week in force on `date`, if any.
    pub fn work_week_for(&self, date: NaiveDate) -> Result<Option<&CalendarWeek>, FieldError> {
        for week in &self.weeks {
            if week.covers(date)? {
                return Ok(Some(week));
            }
        }
        Ok(None)
    }

    /// Working hours on a specific date: an exception wins, then a work week
    /// covering the date, then the weekday rule.
    pub fn working_hours(
        &self,
        project: &Project,
        date: NaiveDate,
    ) -> Result<Vec<(NaiveTime, NaiveTime)>, FieldError> {
        if let Some(exception) = self.exception_for(project, date)? {
            return exception.working_hours();
        }
        let weekday = date.weekday();
        if let Some(week) = self.work_week_for(date)? {
            let day = week.day(weekday);
            match day.day_type() {
                DayType::Working => {
                    let ranges = decode_ranges(day.hours())?;
                    if !ranges.is_empty() {
                        return Ok(ranges);
                    }
                    return Ok(default_working_hours());
                }
                DayType::NonWorking => return Ok(Vec::new()),
                DayType::Default => {}
            }
        }
        self.day_hours(project, weekday)
    }

    pub fn is_working_date(&self, project: &Project, date: NaiveDate) -> Result<bool, FieldError> {
        Ok(!self.working_hours(project, date)?.is_empty())
    }

    /// Working dates in `start..=end`.
    pub fn working_dates_in_range(
        &self,
        project: &Project,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, FieldError> {
        let mut dates = Vec::new();
        let mut current = Some(start);
        while let Some(date) = current.filter(|date| *date <= end) {
            if self.is_working_date(project, date)? {
                dates.push(date);
            }
            current = date.succ_opt();
        }
        Ok(dates)
    }

    pub fn count_working_dates(
        &self,
        project: &Project,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<usize, FieldError> {
        Ok(self.working_dates_in_range(project, start, end)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn day_type_accepts_names_and_codes() {
        assert_eq!(DayType::from_value(&json!("Non-Working")), Some(DayType::NonWorking));
        assert_eq!(DayType::from_value(&json!("working")), Some(DayType::Working));
        assert_eq!(DayType::from_value(&json!(2)), Some(DayType::Default));
        assert_eq!(DayType::from_value(&json!("sometimes")), None);
    }

    #[test]
    fn hours_decode_lazily() {
        let good = CalendarHours::from_record(
            json!({"from": "08:00", "to": "12:00"}).as_object().unwrap(),
            Tz::UTC,
        );
        assert_eq!(
            good.range().unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0).zip(NaiveTime::from_hms_opt(12, 0, 0))
        );

        let bad = CalendarHours::from_record(
            json!({"from": "eight", "to": "12:00"}).as_object().unwrap(),
            Tz::UTC,
        );
        assert!(matches!(bad.from(), Err(FieldError::DateFormat { .. })));
        assert!(bad.to().is_ok());
    }

    #[test]
    fn exception_without_type_follows_hours() {
        let off = CalendarException::from_record(
            json!({"from": "2025-12-25"}).as_object().unwrap(),
            Tz::UTC,
        );
        assert!(!off.is_working());
        let d = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        assert!(off.covers(d).unwrap());
        assert!(!off.covers(d.succ_opt().unwrap()).unwrap());

        let on = CalendarException::from_record(
            json!({"from": "2025-12-27", "hours": [{"from": "09:00", "to": "13:00"}]})
                .as_object()
                .unwrap(),
            Tz::UTC,
        );
        assert!(on.is_working());
    }

    fn recurrence(value: Value) -> Recurrence {
        Recurrence::from_record(value.as_object().unwrap(), Tz::UTC)
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn daily_recurrence_counts_occurrences() {
        let rule = recurrence(json!({
            "recurrence_type": "daily",
            "start_date": "2024-01-01",
            "frequency": 2,
            "occurrences": 3
        }));
        assert_eq!(rule.dates().unwrap(), vec![d(2024, 1, 1), d(2024, 1, 3), d(2024, 1, 5)]);
    }

    #[test]
    fn monthly_absolute_clamps_to_month_length() {
        let rule = recurrence(json!({
            "recurrence_type": "monthly",
            "start_date": "2024-01-15",
            "day_number": 31,
            "occurrences": 3
        }));
        assert_eq!(rule.dates().unwrap(), vec![d(2024, 1, 31), d(2024, 2, 29), d(2024, 3, 31)]);
    }

    #[test]
    fn monthly_relative_picks_nth_or_last_weekday() {
        let second_tuesday = recurrence(json!({
            "recurrence_type": "monthly",
            "relative": true,
            "start_date": "2024-01-15",
            "day_number": 2,
            "weekly_days": ["tuesday"],
            "occurrences": 2
        }));
        assert_eq!(second_tuesday.dates().unwrap(), vec![d(2024, 2, 13), d(2024, 3, 12)]);

        let last_friday = recurrence(json!({
            "recurrence_type": "monthly",
            "relative": true,
            "start_date": "2024-01-01",
            "finish_date": "2024-02-29",
            "day_number": 5,
            "weekly_days": ["friday"]
        }));
        assert_eq!(last_friday.dates().unwrap(), vec![d(2024, 1, 26), d(2024, 2, 23)]);
    }

    #[test]
    fn yearly_rules_move_past_the_start_date() {
        let leap_day = recurrence(json!({
            "recurrence_type": "yearly",
            "start_date": "2024-03-01",
            "month_number": 2,
            "day_number": 29,
            "occurrences": 2
        }));
        assert_eq!(leap_day.dates().unwrap(), vec![d(2025, 2, 28), d(2026, 2, 28)]);

        let fourth_thursday = recurrence(json!({
            "recurrence_type": "yearly",
            "relative": true,
            "start_date": "2024-01-01",
            "month_number": 11,
            "day_number": 4,
            "weekly_days": ["thursday"],
            "occurrences": 2
        }));
        assert_eq!(fourth_thursday.dates().unwrap(), vec![d(2024, 11, 28), d(2025, 11, 27)]);
    }

    #[test]
    fn incomplete_rules_produce_no_dates() {
        let untyped = recurrence(json!({"start_date": "2024-01-01", "occurrences": 3}));
        assert!(untyped.dates().unwrap().is_empty());

        let no_days = recurrence(json!({"recurrence_type": "weekly", "start_date": "2024-01-01"}));
        assert!(no_days.dates().unwrap().is_empty());

        let bad_start = recurrence(json!({"recurrence_type": "daily", "start_date": "soon"}));
        assert!(matches!(bad_start.dates(), Err(FieldError::DateFormat { .. })));
    }

    #[test]
    fn recurring_exception_covers_generated_dates_only() {
        let exception = CalendarException::from_record(
            json!({
                "type": "non_working",
                "recurrence": {
                    "recurrence_type": "weekly",
                    "start_date": "2024-01-03",
                    "finish_date": "2024-01-31",
                    "frequency": 2,
                    "weekly_days": ["wednesday"]
                }
            })
            .as_object()
            .unwrap(),
            Tz::UTC,
        );
        assert!(exception.recurrence().is_some());
        assert!(exception.covers(d(2024, 1, 17)).unwrap());
        assert!(exception.covers(d(2024, 1, 31)).unwrap());
        assert!(!exception.covers(d(2024, 1, 10)).unwrap());
        assert!(!exception.covers(d(2024, 2, 14)).unwrap());
    }
}
