use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid time '{0}': expected HH:MM")]
    InvalidTime(String),
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid task '{id}': {reason}")]
    InvalidTask { id: String, reason: String },
}
