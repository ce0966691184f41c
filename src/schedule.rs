use crate::{ConfigurationError, InvalidWindowError, Occurrence, Occurrences, Weekdays};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

const DEFAULT_DURATION_SECS: u32 = 60 * 60;

/// How a schedule repeats after its first occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    /// A single occurrence at the schedule start.
    None,
    Daily,
    /// Every week, on each of the selected days.
    Weekly(Weekdays),
    /// Every other week, counted from the week of the schedule start.
    Biweekly(Weekdays),
    /// Once a month on the day of month of the schedule start, or on the
    /// last day of months too short for it.
    Monthly,
}

impl Repeat {
    pub fn weekdays(self) -> Option<Weekdays> {
        match self {
            Repeat::Weekly(days) | Repeat::Biweekly(days) => Some(days),
            Repeat::None | Repeat::Daily | Repeat::Monthly => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Repeat::None => "none",
            Repeat::Daily => "daily",
            Repeat::Weekly(_) => "weekly",
            Repeat::Biweekly(_) => "biweekly",
            Repeat::Monthly => "monthly",
        }
    }
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat::None
    }
}

/// When a schedule stops producing occurrences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum End {
    Never,
    /// After this many occurrences, counting the first one.
    Count(u32),
    /// No occurrence may end after this instant.
    Until(DateTime<Utc>),
}

impl Default for End {
    fn default() -> Self {
        End::Never
    }
}

#[derive(Clone, Debug, Default)]
pub struct Options {
    /// Start of the first occurrence; now when unset.
    pub start: Option<DateTime<Utc>>,
    /// Length of every occurrence in seconds; one hour when unset.
    pub duration: Option<u32>,
    pub repeat: Repeat,
    pub end: End,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    start: DateTime<Utc>,
    duration: u32,
    repeat: Repeat,
    end: End,
}

impl Schedule {
    pub fn new(options: Options) -> Result<Self, ConfigurationError> {
        let duration = options.duration.unwrap_or(DEFAULT_DURATION_SECS);
        if duration == 0 {
            debug!("rejecting schedule with zero duration");
            return Err(ConfigurationError::ZeroDuration);
        }

        if let Some(days) = options.repeat.weekdays() {
            if days.is_empty() {
                debug!(repeat = options.repeat.name(), "rejecting schedule without weekdays");
                return Err(ConfigurationError::NoWeekdays(options.repeat.name()));
            }
        }

        if options.end == End::Count(0) {
            debug!("rejecting schedule ending after zero occurrences");
            return Err(ConfigurationError::ZeroCount);
        }

        Ok(Schedule {
            start: options.start.unwrap_or_else(Utc::now),
            duration,
            repeat: options.repeat,
            end: options.end,
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.duration))
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    /// Selected weekdays of a weekly or biweekly schedule.
    pub fn weekdays(&self) -> Option<Weekdays> {
        self.repeat.weekdays()
    }

    pub fn end(&self) -> End {
        self.end
    }

    /// Every occurrence from the first one on, until the schedule ends.
    ///
    /// Never-ending repeating schedules produce an infinite iterator.
    pub fn all(&self) -> Occurrences {
        crate::engine::from_start(self)
    }

    /// Occurrences overlapping `[window_start, window_end)`, in start order.
    ///
    /// An occurrence that merely touches one of the window bounds does not
    /// overlap it.
    pub fn occurrences_overlapping(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Result<Vec<Occurrence>, InvalidWindowError> {
        crate::engine::occurrences_overlapping(self, window_start, window_end)
    }

    pub(crate) fn span(&self) -> Duration {
        Duration::seconds(i64::from(self.duration))
    }
}
