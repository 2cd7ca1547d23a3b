use chrono::Timelike;

use crate::error::ReadingError;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Wall-clock snapshot used for one frame.
///
/// Every angle produced for a frame derives from a single reading, so the hour,
/// minute and second hands never tear against each other.
///
/// Fields are public so hosts and tests can describe irregular readings (for
/// example a millisecond value past the end of the second after the system clock
/// was stepped). [`ClockReading::new`] is the checked constructor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct ClockReading {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub milliseconds: u32,
}

impl ClockReading {
    pub fn new(hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> Result<Self, ReadingError> {
        if hours >= 24 {
            return Err(ReadingError::Hours(hours));
        }
        if minutes >= 60 {
            return Err(ReadingError::Minutes(minutes));
        }
        if seconds >= 60 {
            return Err(ReadingError::Seconds(seconds));
        }
        if milliseconds >= 1000 {
            return Err(ReadingError::Milliseconds(milliseconds));
        }
        Ok(Self { hours, minutes, seconds, milliseconds })
    }

    /// Builds a reading from any `chrono` time-of-day value.
    ///
    /// A leap second (nanoseconds past 999_999_999) is folded into the last
    /// millisecond of the second.
    pub fn from_time<T: Timelike>(t: &T) -> Self {
        Self {
            hours: t.hour(),
            minutes: t.minute(),
            seconds: t.second(),
            milliseconds: (t.nanosecond() / 1_000_000).min(999),
        }
    }

    /// Milliseconds left before the next whole-second boundary.
    ///
    /// Signed: an irregular reading with `milliseconds > 1000` yields a negative
    /// value, which the second hand treats as a clock that moved backward.
    pub fn ms_until_next_second(&self) -> i64 {
        1000 - i64::from(self.milliseconds)
    }

    /// Returns this reading shifted by a whole number of minutes, wrapping
    /// around midnight in either direction.
    pub fn shifted_by_minutes(self, offset: i32) -> Self {
        let of_day = i64::from(self.hours % 24) * 60 + i64::from(self.minutes % 60);
        let shifted = (of_day + i64::from(offset)).rem_euclid(MINUTES_PER_DAY);

        Self {
            hours: (shifted / 60) as u32,
            minutes: (shifted % 60) as u32,
            ..self
        }
    }
}
