use chrono::{DateTime, Utc};
use thiserror::Error;

/// Reasons a [`Schedule`](crate::Schedule) cannot be built from its [`Options`](crate::Options).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Occurrences must last at least one second.
    #[error("duration must be a positive number of seconds")]
    ZeroDuration,

    /// A weekly or biweekly repeat was given an empty weekday set.
    #[error("{0} repeat needs at least one weekday")]
    NoWeekdays(&'static str),

    /// `End::Count(0)` would describe a schedule without occurrences.
    #[error("occurrence count must be at least 1")]
    ZeroCount,
}

/// The query window ends before it starts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("window starts at {start} but ends earlier at {end}")]
pub struct InvalidWindowError {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
