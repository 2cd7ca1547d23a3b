use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use chrono::{Local, Utc};

use super::reading::ClockReading;

/// Supplier of wall-clock readings.
///
/// Implementations must be cheap and free of side effects visible to the clock:
/// the clock may sample at any frequency.
pub trait TimeSource {
    /// Current local time of day.
    fn now(&self) -> ClockReading;

    /// Current UTC time of day.
    ///
    /// Used as the base when a time zone offset is applied. Sources that do not
    /// distinguish local time from UTC can rely on the default.
    fn now_utc(&self) -> ClockReading {
        self.now()
    }
}

/// Wall clock backed by the operating system, via `chrono`.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemTimeSource;

impl SystemTimeSource {
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> ClockReading {
        ClockReading::from_time(&Local::now())
    }

    fn now_utc(&self) -> ClockReading {
        ClockReading::from_time(&Utc::now())
    }
}

/// A source that reports whatever it was last told.
#[derive(Debug, Clone, Default)]
pub struct FixedTimeSource {
    reading: Cell<ClockReading>,
}

impl FixedTimeSource {
    pub fn new(reading: ClockReading) -> Self {
        Self { reading: Cell::new(reading) }
    }

    pub fn set(&self, reading: ClockReading) {
        self.reading.set(reading);
    }

    /// Moves the reading forward, carrying into seconds, minutes and hours.
    pub fn advance_ms(&self, ms: u64) {
        let r = self.reading.get();
        let of_day_ms = ((u64::from(r.hours) * 60 + u64::from(r.minutes)) * 60 + u64::from(r.seconds)) * 1000
            + u64::from(r.milliseconds);
        let t = (of_day_ms + ms) % 86_400_000;

        self.reading.set(ClockReading {
            hours: (t / 3_600_000) as u32,
            minutes: (t / 60_000 % 60) as u32,
            seconds: (t / 1000 % 60) as u32,
            milliseconds: (t % 1000) as u32,
        });
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> ClockReading {
        self.reading.get()
    }
}

/// Replays a fixed sequence of readings, one per sample.
///
/// Once the script runs out the last reading repeats forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTimeSource {
    script: RefCell<VecDeque<ClockReading>>,
    last: Cell<ClockReading>,
}

impl ScriptedTimeSource {
    pub fn new(readings: impl IntoIterator<Item = ClockReading>) -> Self {
        Self {
            script: RefCell::new(readings.into_iter().collect()),
            last: Cell::new(ClockReading::default()),
        }
    }

    pub fn push(&self, reading: ClockReading) {
        self.script.borrow_mut().push_back(reading);
    }

    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }
}

impl TimeSource for ScriptedTimeSource {
    fn now(&self) -> ClockReading {
        if let Some(next) = self.script.borrow_mut().pop_front() {
            self.last.set(next);
        }
        self.last.get()
    }
}
