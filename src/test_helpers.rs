use crate::{End, Occurrence, Options, Repeat, Schedule};
use chrono::{DateTime, TimeZone as _, Utc};

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("bug: invalid test date")
}

/// Monday, 2019-07-01 09:00 UTC.
pub fn july_first() -> DateTime<Utc> {
    at(2019, 7, 1, 9, 0)
}

/// One hour long schedule starting on [`july_first`].
pub fn schedule(repeat: Repeat, end: End) -> Schedule {
    schedule_from(july_first(), repeat, end)
}

pub fn schedule_from(start: DateTime<Utc>, repeat: Repeat, end: End) -> Schedule {
    Schedule::new(Options {
        start: Some(start),
        duration: Some(60 * 60),
        repeat,
        end,
    })
    .expect("bug: invalid test schedule")
}

pub fn starts(occurrences: &[Occurrence]) -> Vec<DateTime<Utc>> {
    occurrences.iter().map(Occurrence::start).collect()
}

/// Overlapping occurrences found by walking the schedule from its very first occurrence.
pub fn naive_overlapping(
    schedule: &Schedule,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<Occurrence> {
    schedule
        .all()
        .take_while(|occurrence| occurrence.start() < window_end)
        .filter(|occurrence| occurrence.overlaps(window_start, window_end))
        .collect()
}
