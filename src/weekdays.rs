use chrono::Weekday;
use std::{fmt, iter::FromIterator};

const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Set of weekdays a weekly or biweekly schedule lands on.
///
/// Stored as seven bits with Sunday as the most significant one:
/// `0x40` is Sunday, `0x20` Monday, down to `0x01` for Saturday.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Weekdays(u8);

impl Weekdays {
    const ALL_BITS: u8 = 0x7f;

    pub fn empty() -> Self {
        Weekdays(0)
    }

    /// Builds a set from the stored bit layout; bits above `0x40` are ignored.
    pub fn from_bits(bits: u8) -> Self {
        Weekdays(bits & Self::ALL_BITS)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn with(self, day: Weekday) -> Self {
        Weekdays(self.0 | bit(day))
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// Number of selected days, i.e. occurrences per week.
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Selected days, Sunday first.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        SUNDAY_FIRST
            .iter()
            .copied()
            .filter(move |&day| self.contains(day))
    }
}

fn bit(day: Weekday) -> u8 {
    0x40 >> day.num_days_from_sunday()
}

impl FromIterator<Weekday> for Weekdays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(days: I) -> Self {
        days.into_iter().fold(Weekdays::empty(), Weekdays::with)
    }
}

impl fmt::Debug for Weekdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
