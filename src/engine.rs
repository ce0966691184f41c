use crate::occurrences::Candidates;
use crate::{daily, monthly, weekly, InvalidWindowError, Occurrence, Occurrences, Repeat, Schedule};
use chrono::{DateTime, Utc};
use tracing::{debug, trace};

/// Occurrences of `schedule` overlapping `[window_start, window_end)`, in
/// start order.
///
/// The schedule's [`End`](crate::End) applies to its occurrences counted
/// from the very first one, regardless of where the window starts.
pub fn occurrences_overlapping(
    schedule: &Schedule,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Result<Vec<Occurrence>, InvalidWindowError> {
    if window_start > window_end {
        return Err(InvalidWindowError {
            start: window_start,
            end: window_end,
        });
    }

    let found: Vec<_> = near(schedule, window_start)
        .take_while(|occurrence| occurrence.start() < window_end)
        .filter(|occurrence| occurrence.overlaps(window_start, window_end))
        .collect();

    debug!(
        %window_start,
        %window_end,
        found = found.len(),
        "computed overlapping occurrences"
    );
    Ok(found)
}

pub(crate) fn from_start(schedule: &Schedule) -> Occurrences {
    let (candidates, skipped) = candidates(schedule, None);
    Occurrences::new(candidates, schedule.span(), schedule.end(), skipped)
}

/// Occurrences of `schedule` from the latest point that still precedes
/// everything overlapping a window starting at `window_start`.
fn near(schedule: &Schedule, window_start: DateTime<Utc>) -> Occurrences {
    let (candidates, skipped) = candidates(schedule, Some(window_start));
    Occurrences::new(candidates, schedule.span(), schedule.end(), skipped)
}

/// Candidate starts of `schedule` and how many occurrences come before the
/// first of them.
fn candidates(schedule: &Schedule, window_start: Option<DateTime<Utc>>) -> (Candidates, u64) {
    let first = schedule.start();
    let first_end = first.checked_add_signed(schedule.span());
    let jump_to = match (first_end, window_start) {
        (Some(first_end), Some(window_start)) => Some((first_end, window_start)),
        _ => None,
    };

    match schedule.repeat() {
        Repeat::None => (Candidates::Once(Some(first).into_iter()), 0),
        Repeat::Daily => {
            let days = jump_to.map_or(0, |(first_end, window_start)| {
                daily::days_to_skip(first_end, window_start)
            });
            trace!(days, "daily schedule fast-forward");

            (
                Candidates::Daily(daily::Starts::new(first, days)),
                days.unsigned_abs(),
            )
        }
        Repeat::Weekly(weekdays) | Repeat::Biweekly(weekdays) => {
            let every = match schedule.repeat() {
                Repeat::Biweekly(_) => 2,
                _ => 1,
            };
            let weeks = jump_to.map_or(0, |(first_end, window_start)| {
                weekly::weeks_to_skip(first_end, window_start, every)
            });
            trace!(weeks, every, "weekly schedule fast-forward");

            let skipped = (weeks / every).unsigned_abs() * u64::from(weekdays.len());
            (
                Candidates::Weekly(weekly::Starts::new(first, weekdays, every, weeks)),
                skipped,
            )
        }
        Repeat::Monthly => {
            let months = window_start.map_or(0, |window_start| {
                monthly::months_to_skip(first, schedule.span(), window_start)
            });
            trace!(months, "monthly schedule fast-forward");

            (
                Candidates::Monthly(monthly::Starts::new(first, months)),
                u64::from(months),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::{End, Weekdays};
    use chrono::{Duration, Weekday};

    #[test]
    fn rejects_reversed_window() {
        let schedule = schedule(Repeat::Daily, End::Never);
        let later = july_first() + Duration::days(1);

        let err = occurrences_overlapping(&schedule, later, july_first()).unwrap_err();

        assert_eq!(
            err,
            InvalidWindowError {
                start: later,
                end: july_first()
            }
        );
    }

    #[test]
    fn empty_window_inside_occurrence() {
        let schedule = schedule(Repeat::None, End::Never);
        let inside = july_first() + Duration::minutes(10);

        let found = occurrences_overlapping(&schedule, inside, inside).unwrap();

        assert_eq!(starts(&found), vec![july_first()]);
    }

    #[test]
    fn single_occurrence() {
        let schedule = schedule(Repeat::None, End::Never);
        let day_start = july_first() - Duration::hours(9);

        let found = schedule
            .occurrences_overlapping(
                july_first() - Duration::hours(1),
                july_first() + Duration::hours(1),
            )
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].start(), july_first());
        assert_eq!(found[0].end(), july_first() + Duration::hours(1));

        let before = schedule
            .occurrences_overlapping(day_start, july_first())
            .unwrap();
        let after = schedule
            .occurrences_overlapping(
                july_first() + Duration::hours(1),
                day_start + Duration::days(1),
            )
            .unwrap();
        assert!(before.is_empty());
        assert!(after.is_empty());
    }

    #[test]
    fn single_occurrence_past_until() {
        let until = july_first() + Duration::minutes(30);
        let schedule = schedule(Repeat::None, End::Until(until));

        let found = schedule
            .occurrences_overlapping(july_first(), july_first() + Duration::days(1))
            .unwrap();

        assert!(found.is_empty());
    }

    #[test]
    fn nothing_before_first_start() {
        let weekdays: Weekdays = vec![Weekday::Mon, Weekday::Thu].into_iter().collect();
        let repeats = vec![
            Repeat::Daily,
            Repeat::Weekly(weekdays),
            Repeat::Biweekly(weekdays),
            Repeat::Monthly,
        ];

        for &repeat in &repeats {
            let schedule = schedule(repeat, End::Never);
            let found = schedule
                .occurrences_overlapping(july_first() - Duration::days(90), july_first())
                .unwrap();

            assert!(found.is_empty(), "{:?}", repeat);
        }
    }

    #[test]
    fn exhausted_before_window() {
        let schedule = schedule(Repeat::Daily, End::Count(3));

        let found = schedule
            .occurrences_overlapping(
                july_first() + Duration::days(3),
                july_first() + Duration::days(30),
            )
            .unwrap();

        assert!(found.is_empty());
    }

    #[test]
    fn same_answer_twice() {
        let weekdays: Weekdays = vec![Weekday::Tue, Weekday::Fri].into_iter().collect();
        let schedule = schedule(Repeat::Biweekly(weekdays), End::Count(9));
        let window_start = july_first() + Duration::days(10);
        let window_end = window_start + Duration::days(20);

        assert_eq!(
            schedule.occurrences_overlapping(window_start, window_end),
            schedule.occurrences_overlapping(window_start, window_end),
        );
    }

    #[test]
    fn earlier_window_start_only_adds() {
        let schedule = schedule(Repeat::Daily, End::Until(july_first() + Duration::days(20)));
        let window_end = july_first() + Duration::days(25);

        let narrow = schedule
            .occurrences_overlapping(july_first() + Duration::days(12), window_end)
            .unwrap();
        let wide = schedule
            .occurrences_overlapping(july_first() + Duration::days(4), window_end)
            .unwrap();

        assert!(wide.len() > narrow.len());
        assert_eq!(&wide[wide.len() - narrow.len()..], &narrow[..]);
    }

    #[test]
    fn all_from_start() {
        let weekdays: Weekdays = vec![Weekday::Mon, Weekday::Wed].into_iter().collect();
        let schedule = schedule(Repeat::Weekly(weekdays), End::Count(5));

        let dates: Vec<_> = schedule.all().map(|occurrence| occurrence.start()).collect();

        assert_eq!(
            dates,
            vec![
                july_first(),
                july_first() + Duration::days(2),
                july_first() + Duration::days(7),
                july_first() + Duration::days(9),
                july_first() + Duration::days(14),
            ]
        );
    }
}
