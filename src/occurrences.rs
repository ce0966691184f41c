use crate::{daily, monthly, weekly};
use chrono::{DateTime, Duration, Utc};

/// One concrete occurrence of a schedule, `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Occurrence {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Occurrence {
    fn new(start: DateTime<Utc>, duration: Duration) -> Option<Self> {
        let end = start.checked_add_signed(duration)?;
        Some(Occurrence { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether any instant of this occurrence falls in `[window_start, window_end)`.
    pub fn overlaps(&self, window_start: DateTime<Utc>, window_end: DateTime<Utc>) -> bool {
        self.start < window_end && self.end > window_start
    }
}

impl From<Occurrence> for (DateTime<Utc>, DateTime<Utc>) {
    fn from(occurrence: Occurrence) -> Self {
        (occurrence.start, occurrence.end)
    }
}

/// What is left of a schedule's [`End`](crate::End) at some point of the walk.
#[derive(Clone, Copy, Debug)]
enum Remaining {
    Never,
    Count(u64),
    Until(DateTime<Utc>),
}

impl Remaining {
    /// `skipped` occurrences were jumped over and already used up their share of a count.
    fn new(end: crate::End, skipped: u64) -> Self {
        match end {
            crate::End::Never => Remaining::Never,
            crate::End::Count(count) => Remaining::Count(u64::from(count).saturating_sub(skipped)),
            crate::End::Until(until) => Remaining::Until(until),
        }
    }

    fn admit(&mut self, occurrence: &Occurrence) -> bool {
        match self {
            Remaining::Never => true,
            Remaining::Count(0) => false,
            Remaining::Count(count) => {
                *count -= 1;
                true
            }
            Remaining::Until(until) => occurrence.end <= *until,
        }
    }
}

/// Start instants of candidate occurrences, one source per cadence.
#[derive(Clone, Debug)]
pub(crate) enum Candidates {
    Once(std::option::IntoIter<DateTime<Utc>>),
    Daily(daily::Starts),
    Weekly(weekly::Starts),
    Monthly(monthly::Starts),
}

impl Iterator for Candidates {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<DateTime<Utc>> {
        match self {
            Candidates::Once(once) => once.next(),
            Candidates::Daily(starts) => starts.next(),
            Candidates::Weekly(starts) => starts.next(),
            Candidates::Monthly(starts) => starts.next(),
        }
    }
}

/// Occurrences of a schedule in start order, ending where the schedule ends.
#[derive(Clone, Debug)]
pub struct Occurrences {
    candidates: Candidates,
    duration: Duration,
    remaining: Remaining,
    done: bool,
}

impl Occurrences {
    pub(crate) fn new(
        candidates: Candidates,
        duration: Duration,
        end: crate::End,
        skipped: u64,
    ) -> Self {
        Occurrences {
            candidates,
            duration,
            remaining: Remaining::new(end, skipped),
            done: false,
        }
    }
}

impl Iterator for Occurrences {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        if self.done {
            return None;
        }

        let occurrence = self
            .candidates
            .next()
            .and_then(|start| Occurrence::new(start, self.duration))
            .filter(|occurrence| self.remaining.admit(occurrence));

        self.done = occurrence.is_none();
        occurrence
    }
}

impl std::iter::FusedIterator for Occurrences {}
