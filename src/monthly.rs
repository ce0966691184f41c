use chrono::{DateTime, Datelike as _, Duration, Months, Utc};
use std::convert::TryFrom;

/// Months that can be jumped over before looking for occurrences
/// overlapping a window starting at `window_start`.
///
/// An occurrence overlapping the window starts no earlier than
/// `window_start - duration`, so every month before the one holding that
/// instant can be skipped.
pub(crate) fn months_to_skip(
    first: DateTime<Utc>,
    duration: Duration,
    window_start: DateTime<Utc>,
) -> u32 {
    let earliest = match window_start.checked_sub_signed(duration) {
        Some(earliest) => earliest,
        None => return 0,
    };

    let months = i64::from(earliest.year() - first.year()) * 12 + i64::from(earliest.month())
        - i64::from(first.month());

    if months <= 0 {
        0
    } else {
        u32::try_from(months).unwrap_or(u32::MAX)
    }
}

/// Starts of a monthly schedule, `skip` months after the first one onward.
///
/// Every start is computed from the first one. Months without its day of
/// month get their last day instead, so a schedule starting on January 31
/// continues on the last day of February and then on March 31.
#[derive(Clone, Debug)]
pub(crate) struct Starts {
    first: DateTime<Utc>,
    offset: Option<u32>,
}

impl Starts {
    pub(crate) fn new(first: DateTime<Utc>, skip: u32) -> Self {
        Starts {
            first,
            offset: Some(skip),
        }
    }
}

impl Iterator for Starts {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<DateTime<Utc>> {
        let offset = self.offset?;
        let current = self.first.checked_add_months(Months::new(offset));

        self.offset = match current {
            Some(_) => offset.checked_add(1),
            None => None,
        };
        current
    }
}
