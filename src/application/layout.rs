use crate::application::lanes::{assign_lanes, Interval};
use crate::application::recurrence::visible_on;
use crate::application::reference_clock::{minute_of_day, reference_now};
use crate::application::timeline::TimeWindow;
use crate::domain::models::{parse_hhmm, RecurringTask, TaskStatus};
use crate::error::ScheduleError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Render record for one task on the selected date. Plain data; the view
/// derives geometry from the percents and lane pair, and colors from the
/// status, nothing else.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskLayout {
    pub id: String,
    pub title: String,
    pub start_percent: f64,
    pub end_percent: f64,
    pub lane: usize,
    pub lanes_in_group: usize,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayLayout {
    pub reference_now: NaiveDateTime,
    pub now_percent: f64,
    pub tasks: Vec<TaskLayout>,
}

/// Resolve the selected date's visible tasks into a renderable layout.
///
/// `true_now` is captured exactly once per call: the now-marker position and
/// every status classification derive from the same reference instant.
pub fn build_day_layout(
    tasks: &[RecurringTask],
    selected: NaiveDate,
    true_now: NaiveDateTime,
    window: &TimeWindow,
) -> Result<DayLayout, ScheduleError> {
    let visible = visible_on(tasks, selected);
    let reference = reference_now(selected, true_now);
    let reference_min = minute_of_day(reference);

    let mut intervals = Vec::with_capacity(visible.len());
    for task in &visible {
        let start_min = parse_hhmm(&task.start).ok_or_else(|| ScheduleError::InvalidTask {
            id: task.id.clone(),
            reason: format!("start '{}' must be HH:MM", task.start),
        })?;
        let end_min = parse_hhmm(&task.end).ok_or_else(|| ScheduleError::InvalidTask {
            id: task.id.clone(),
            reason: format!("end '{}' must be HH:MM", task.end),
        })?;
        intervals.push(Interval::new(start_min, end_min));
    }

    let assignments = assign_lanes(&intervals);
    let tasks = visible
        .iter()
        .zip(intervals.iter().zip(assignments.iter()))
        .map(|(task, (interval, assignment))| TaskLayout {
            id: task.id.clone(),
            title: task.title.clone(),
            start_percent: window.percent_from_minutes(interval.start_min),
            end_percent: window.percent_from_minutes(interval.end_min),
            lane: assignment.lane,
            lanes_in_group: assignment.lanes_in_group,
            status: TaskStatus::classify(task.completed, reference_min, interval.end_min),
        })
        .collect();

    Ok(DayLayout {
        reference_now: reference,
        now_percent: window.percent_from_instant(reference),
        tasks,
    })
}
