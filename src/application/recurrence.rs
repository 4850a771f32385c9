use crate::domain::models::{parse_date, RecurringTask};
use crate::error::ScheduleError;
use chrono::NaiveDate;

/// Parse the date-picker's "YYYY-MM-DD" selection into a calendar date.
pub fn selected_date(value: &str) -> Result<NaiveDate, ScheduleError> {
    parse_date(value.trim()).ok_or_else(|| ScheduleError::InvalidDate(value.to_string()))
}

/// Tasks whose recurrence instantiates on the given date, in their original
/// relative order so repeated renders stay stable.
pub fn visible_on<'a>(tasks: &'a [RecurringTask], date: NaiveDate) -> Vec<&'a RecurringTask> {
    tasks
        .iter()
        .filter(|task| task.recurrence.matches_date(date))
        .collect()
}
