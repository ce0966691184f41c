use chrono::{DateTime, Duration, Utc};

/// Days that can be jumped over before looking for occurrences overlapping
/// a window starting at `window_start`.
///
/// Every occurrence before the returned offset ends at or before
/// `window_start`, so none of them can overlap the window.
pub(crate) fn days_to_skip(first_end: DateTime<Utc>, window_start: DateTime<Utc>) -> i64 {
    if first_end > window_start {
        return 0;
    }

    (window_start - first_end).num_days()
}

/// Starts of a daily schedule, `skip` days after the first one onward.
#[derive(Clone, Debug)]
pub(crate) struct Starts {
    cursor: Option<DateTime<Utc>>,
}

impl Starts {
    pub(crate) fn new(first: DateTime<Utc>, skip: i64) -> Self {
        Starts {
            cursor: Duration::try_days(skip).and_then(|skip| first.checked_add_signed(skip)),
        }
    }
}

impl Iterator for Starts {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<DateTime<Utc>> {
        let current = self.cursor?;
        self.cursor = current.checked_add_signed(Duration::days(1));
        Some(current)
    }
}
