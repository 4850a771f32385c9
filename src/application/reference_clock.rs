use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// The "now" to compare tasks against when the selected date is not today.
///
/// Today tracks the real clock. A past date resolves to 23:59 so its tasks
/// all read as elapsed; a future date resolves to 00:00 so none do. Status
/// classification relies on this exact policy, so browsing other dates keeps
/// a single comparison rule downstream.
pub fn reference_now(selected: NaiveDate, true_now: NaiveDateTime) -> NaiveDateTime {
    let today = true_now.date();
    if selected == today {
        return NaiveDateTime::new(selected, true_now.time());
    }

    let time = if selected < today {
        NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN)
    } else {
        NaiveTime::MIN
    };
    NaiveDateTime::new(selected, time)
}

/// Minutes since midnight of an instant's time-of-day component.
pub fn minute_of_day(instant: NaiveDateTime) -> u32 {
    instant.hour() * 60 + instant.minute()
}
