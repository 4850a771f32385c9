pub mod application;
pub mod domain;
pub mod error;

pub use application::lanes::{assign_lanes, overlaps, Interval, LaneAssignment};
pub use application::layout::{build_day_layout, DayLayout, TaskLayout};
pub use application::recurrence::{selected_date, visible_on};
pub use application::reference_clock::{minute_of_day, reference_now};
pub use application::timeline::{format_hhmm, TimeWindow};
pub use domain::models::{
    parse_date, parse_hhmm, shift_date, weekday_index, DayWindow, Recurrence, RecurringTask,
    TaskStatus,
};
pub use error::ScheduleError;
