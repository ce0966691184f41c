//! Occurrences of recurring schedules.
//!
//! A [`Schedule`] describes one rule: when the first occurrence starts, how
//! long every occurrence lasts, how it [`Repeat`]s and when it [`End`]s.
//! [`Schedule::occurrences_overlapping`] answers which occurrences touch a
//! query window without walking the schedule from its start.
//!
//! All calendar math runs on the UTC calendar; converting to and from a
//! local timezone is up to the caller.

mod daily;
mod engine;
mod error;
mod monthly;
mod occurrences;
mod schedule;
mod weekdays;
mod weekly;

#[cfg(test)]
mod test_helpers;

pub use engine::occurrences_overlapping;
pub use error::{ConfigurationError, InvalidWindowError};
pub use occurrences::{Occurrence, Occurrences};
pub use schedule::{End, Options, Repeat, Schedule};
pub use weekdays::Weekdays;
