use crate::domain::models::{parse_hhmm, DayWindow};
use crate::error::ScheduleError;
use chrono::{NaiveDateTime, Timelike};

/// Bounded day range against which every vertical position is normalized.
/// Immutable once built; the span is clamped to at least one minute so the
/// percent mapping never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start_min: u32,
    end_min: u32,
    total_min: u32,
}

impl TimeWindow {
    pub fn from_hhmm(start: &str, end: &str) -> Result<Self, ScheduleError> {
        let start_min =
            parse_hhmm(start).ok_or_else(|| ScheduleError::InvalidTime(start.to_string()))?;
        let end_min = parse_hhmm(end).ok_or_else(|| ScheduleError::InvalidTime(end.to_string()))?;
        Ok(Self::from_minutes(start_min, end_min))
    }

    pub fn from_bounds(bounds: &DayWindow) -> Result<Self, ScheduleError> {
        Self::from_hhmm(&bounds.start, &bounds.end)
    }

    pub fn from_minutes(start_min: u32, end_min: u32) -> Self {
        Self {
            start_min,
            end_min,
            total_min: end_min.saturating_sub(start_min).max(1),
        }
    }

    pub fn start_min(&self) -> u32 {
        self.start_min
    }

    pub fn end_min(&self) -> u32 {
        self.end_min
    }

    pub fn total_min(&self) -> u32 {
        self.total_min
    }

    /// Position of a minute-of-day within the window, clamped to [0, 100].
    pub fn percent_from_minutes(&self, minutes: u32) -> f64 {
        let offset = minutes as f64 - self.start_min as f64;
        (offset / self.total_min as f64 * 100.0).clamp(0.0, 100.0)
    }

    pub fn percent_from_time(&self, hhmm: &str) -> Result<f64, ScheduleError> {
        let minutes =
            parse_hhmm(hhmm).ok_or_else(|| ScheduleError::InvalidTime(hhmm.to_string()))?;
        Ok(self.percent_from_minutes(minutes))
    }

    /// Position of an instant's time of day; the date component is ignored.
    pub fn percent_from_instant(&self, instant: NaiveDateTime) -> f64 {
        self.percent_from_minutes(instant.hour() * 60 + instant.minute())
    }

    /// "HH:MM" labels from the window start to its end (inclusive when the
    /// step lands on the end), for the hour scale alongside the timeline.
    pub fn tick_labels(&self, step_min: u32) -> Vec<String> {
        let step = step_min.max(1);
        let mut labels = Vec::new();
        let mut minutes = self.start_min;
        while minutes <= self.end_min {
            labels.push(format_hhmm(minutes));
            minutes += step;
        }
        labels
    }
}

/// Render a minute-of-day back into "HH:MM".
pub fn format_hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_window() -> TimeWindow {
        TimeWindow::from_hhmm("08:00", "20:00").expect("valid window")
    }

    fn fixed_instant(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").expect("valid datetime")
    }

    #[test]
    fn percent_maps_window_bounds_and_midpoint() {
        let window = sample_window();
        assert_eq!(window.percent_from_time("08:00").expect("valid time"), 0.0);
        assert_eq!(window.percent_from_time("14:00").expect("valid time"), 50.0);
        assert_eq!(
            window.percent_from_time("20:00").expect("valid time"),
            100.0
        );
    }

    #[test]
    fn percent_clamps_outside_the_window() {
        let window = sample_window();
        assert_eq!(window.percent_from_time("07:15").expect("valid time"), 0.0);
        assert_eq!(window.percent_from_time("00:00").expect("valid time"), 0.0);
        assert_eq!(
            window.percent_from_time("21:30").expect("valid time"),
            100.0
        );
    }

    #[test]
    fn percent_from_time_rejects_malformed_input() {
        let window = sample_window();
        assert_eq!(
            window.percent_from_time("25:00"),
            Err(ScheduleError::InvalidTime("25:00".to_string()))
        );
    }

    #[test]
    fn from_hhmm_rejects_malformed_bounds() {
        assert!(TimeWindow::from_hhmm("8am", "20:00").is_err());
        assert!(TimeWindow::from_hhmm("08:00", "20h").is_err());
    }

    #[test]
    fn degenerate_window_keeps_a_nonzero_span() {
        let window = TimeWindow::from_hhmm("09:00", "09:00").expect("valid window");
        assert_eq!(window.total_min(), 1);

        let inverted = TimeWindow::from_minutes(600, 480);
        assert_eq!(inverted.total_min(), 1);
    }

    #[test]
    fn percent_from_instant_ignores_the_date() {
        let window = sample_window();
        let morning = fixed_instant("2026-02-16T14:00:00");
        let other_day = fixed_instant("1999-12-31T14:00:00");
        assert_eq!(window.percent_from_instant(morning), 50.0);
        assert_eq!(window.percent_from_instant(other_day), 50.0);
    }

    #[test]
    fn tick_labels_cover_the_window_every_half_hour() {
        let labels = sample_window().tick_labels(30);
        assert_eq!(labels.len(), 25);
        assert_eq!(labels.first().map(String::as_str), Some("08:00"));
        assert_eq!(labels[1], "08:30");
        assert_eq!(labels.last().map(String::as_str), Some("20:00"));
    }

    #[test]
    fn format_hhmm_pads_both_components() {
        assert_eq!(format_hhmm(0), "00:00");
        assert_eq!(format_hhmm(510), "08:30");
        assert_eq!(format_hhmm(1439), "23:59");
    }

    proptest! {
        #[test]
        fn percent_is_monotonic_over_minute_of_day(
            first in 0u32..1440u32,
            second in 0u32..1440u32
        ) {
            let window = sample_window();
            let (earlier, later) = if first <= second {
                (first, second)
            } else {
                (second, first)
            };
            prop_assert!(
                window.percent_from_minutes(earlier) <= window.percent_from_minutes(later)
            );
        }

        #[test]
        fn percent_stays_within_bounds(minutes in 0u32..1440u32) {
            let percent = sample_window().percent_from_minutes(minutes);
            prop_assert!((0.0..=100.0).contains(&percent));
        }
    }
}
