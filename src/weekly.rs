use crate::Weekdays;
use chrono::{DateTime, Datelike as _, Duration, Utc};

/// Whole weeks that can be jumped over before looking for occurrences
/// overlapping a window starting at `window_start`, rounded down to a
/// multiple of `every` so the jump keeps the week parity of the first
/// occurrence.
///
/// Each skipped week holds exactly one occurrence per selected weekday,
/// and each skipped block of `every` weeks holds one occurrence per
/// selected weekday on its matching week.
pub(crate) fn weeks_to_skip(
    first_end: DateTime<Utc>,
    window_start: DateTime<Utc>,
    every: i64,
) -> i64 {
    if first_end > window_start {
        return 0;
    }

    let weeks = (window_start - first_end).num_weeks();
    weeks - weeks % every
}

/// Starts of a schedule repeating on `weekdays` of every `every`-th week.
///
/// Weeks run Monday to Sunday and are counted from the week of the first
/// start, which is always a matching week.
#[derive(Clone, Debug)]
pub(crate) struct Starts {
    cursor: Option<DateTime<Utc>>,
    weekdays: Weekdays,
    every: i64,
    first_week: i64,
}

impl Starts {
    pub(crate) fn new(
        first: DateTime<Utc>,
        weekdays: Weekdays,
        every: i64,
        skip_weeks: i64,
    ) -> Self {
        Starts {
            cursor: Duration::try_weeks(skip_weeks).and_then(|skip| first.checked_add_signed(skip)),
            weekdays,
            every,
            first_week: week_number(first),
        }
    }

    fn lands_on(&self, day: DateTime<Utc>) -> bool {
        self.weekdays.contains(day.weekday())
            && (week_number(day) - self.first_week).rem_euclid(self.every) == 0
    }
}

impl Iterator for Starts {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<DateTime<Utc>> {
        loop {
            let current = self.cursor?;
            self.cursor = current.checked_add_signed(Duration::days(1));
            if self.lands_on(current) {
                return Some(current);
            }
        }
    }
}

/// Consecutive numbering of Monday-based calendar weeks.
fn week_number(instant: DateTime<Utc>) -> i64 {
    let date = instant.date_naive();
    let monday =
        i64::from(date.num_days_from_ce()) - i64::from(date.weekday().num_days_from_monday());
    monday.div_euclid(7)
}
