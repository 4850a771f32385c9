use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// How a task definition recurs across calendar dates. Exactly one variant
/// is active per task; the enum is closed so a new recurrence kind is a
/// compile-time-checked change everywhere it is matched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recurrence {
    Daily,
    Weekly { weekday: u8 },
    Once { date: NaiveDate },
}

impl Recurrence {
    /// Weekday indices run 0 = Sunday through 6 = Saturday. An out-of-range
    /// `Weekly` weekday never matches any date.
    pub fn matches_date(&self, date: NaiveDate) -> bool {
        match self {
            Recurrence::Daily => true,
            Recurrence::Weekly { weekday } => *weekday == weekday_index(date),
            Recurrence::Once { date: once } => *once == date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecurringTask {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub completed: bool,
    pub recurrence: Recurrence,
}

impl RecurringTask {
    pub fn validate(&self) -> Result<(), String> {
        validate_non_empty(&self.id, "task.id")?;
        validate_non_empty(&self.title, "task.title")?;
        validate_hhmm(&self.start, "task.start")?;
        validate_hhmm(&self.end, "task.end")?;
        if let (Some(start), Some(end)) = (parse_hhmm(&self.start), parse_hhmm(&self.end)) {
            if end <= start {
                return Err("task.end must be after task.start".to_string());
            }
        }
        if let Recurrence::Weekly { weekday } = self.recurrence {
            if weekday > 6 {
                return Err("task.recurrence.weekday must be 0-6".to_string());
            }
        }
        Ok(())
    }
}

/// Per-task state relative to the reference clock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    OnTrack,
    Overdue,
    Done,
}

impl TaskStatus {
    /// Completion wins; otherwise a task whose end has been reached by the
    /// reference clock is overdue.
    pub fn classify(completed: bool, reference_min: u32, end_min: u32) -> Self {
        if completed {
            TaskStatus::Done
        } else if reference_min >= end_min {
            TaskStatus::Overdue
        } else {
            TaskStatus::OnTrack
        }
    }
}

/// Configuration-facing bounds of the visible day range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayWindow {
    pub start: String,
    pub end: String,
}

impl DayWindow {
    pub fn validate(&self) -> Result<(), String> {
        validate_hhmm(&self.start, "window.start")?;
        validate_hhmm(&self.end, "window.end")?;
        Ok(())
    }
}

/// Minute-of-day for an "HH:MM" string, `None` when the value is not a
/// well-formed 24-hour clock time.
pub fn parse_hhmm(value: &str) -> Option<u32> {
    let (hour, minute) = value.split_once(':')?;
    let hour = hour.parse::<u32>().ok()?;
    let minute = minute.parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}

/// Calendar-date parse for "YYYY-MM-DD". Never routes through an instant
/// parse, so the resulting weekday cannot shift across time zones.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Weekday index with 0 = Sunday through 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Step a date by whole days; negative values go backwards.
pub fn shift_date(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

fn validate_non_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field_name} must not be empty"));
    }
    Ok(())
}

fn validate_hhmm(value: &str, field_name: &str) -> Result<(), String> {
    if parse_hhmm(value).is_none() {
        return Err(format!("{field_name} must be HH:MM"));
    }
    Ok(())
}
