use std::time::Duration;

use crate::time::{FrameClock, FrameTime};

use super::host::{FrameCallback, FrameHost, FrameRequest};

/// Outcome of one delivered host callback.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameDisposition {
    /// The frame should be processed.
    Accepted(FrameTime),
    /// Too soon after the last processed frame; the next callback was requested
    /// and nothing else changed.
    Throttled,
    /// Not the request the scheduler is waiting for (cancelled, already
    /// handled, or delivered after `stop`). Ignored entirely.
    Stale,
}

/// Running totals of callback outcomes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SchedulerStats {
    pub accepted: u64,
    pub throttled: u64,
    pub stale: u64,
}

/// Throttled, cancellable frame loop over a [`FrameHost`].
///
/// Exactly one request is outstanding while running. `stop` cancels it and
/// also makes the scheduler reject it should the host deliver it anyway, so no
/// frame is processed after `stop` returns.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    min_interval: Duration,
    clock: FrameClock,
    pending: Option<FrameRequest>,
    running: bool,
    stats: SchedulerStats,
}

impl FrameScheduler {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            clock: FrameClock::new(),
            pending: None,
            running: false,
            stats: SchedulerStats::default(),
        }
    }

    /// Scheduler capped at `hz` processed frames per second.
    ///
    /// A rate with no representable interval falls back to 50 Hz.
    pub fn with_max_rate(hz: f64) -> Self {
        match interval_for_rate(hz) {
            Some(interval) => Self::new(interval),
            None => {
                log::warn!("invalid maximum frame rate {hz} Hz; using 50 Hz");
                Self::default()
            }
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    pub fn stats(&self) -> SchedulerStats {
        self.stats
    }

    /// Starts the loop. Returns `false` if it was already running.
    pub fn start<H: FrameHost>(&mut self, host: &mut H) -> bool {
        if self.running {
            return false;
        }

        self.running = true;
        self.clock.reset();
        self.pending = Some(host.request_frame());
        true
    }

    /// Stops the loop. Returns `false` if it was not running.
    pub fn stop<H: FrameHost>(&mut self, host: &mut H) -> bool {
        if let Some(request) = self.pending.take() {
            host.cancel_frame(request);
        }

        std::mem::replace(&mut self.running, false)
    }

    /// Classifies a delivered callback.
    ///
    /// After `Accepted` the caller does the frame's work and then calls
    /// [`FrameScheduler::rearm`].
    pub fn on_frame<H: FrameHost>(&mut self, host: &mut H, callback: FrameCallback) -> FrameDisposition {
        if !self.running || self.pending != Some(callback.request) {
            self.stats.stale += 1;
            log::trace!("ignoring stale frame request {}", callback.request.raw());
            return FrameDisposition::Stale;
        }

        self.pending = None;

        if let Some(last) = self.clock.last() {
            // An equal or earlier timestamp is never processed twice.
            let too_soon = match callback.timestamp.checked_sub(last) {
                Some(elapsed) => elapsed.is_zero() || elapsed < self.min_interval,
                None => true,
            };

            if too_soon {
                self.pending = Some(host.request_frame());
                self.stats.throttled += 1;
                return FrameDisposition::Throttled;
            }
        }

        self.stats.accepted += 1;
        FrameDisposition::Accepted(self.clock.tick(callback.timestamp))
    }

    /// Requests the next frame if running and nothing is outstanding.
    pub fn rearm<H: FrameHost>(&mut self, host: &mut H) {
        if self.running && self.pending.is_none() {
            self.pending = Some(host.request_frame());
        }
    }
}

/// Period of a `hz` rate, or `None` when the rate is not positive and finite
/// or the period does not fit in a `Duration`.
pub fn interval_for_rate(hz: f64) -> Option<Duration> {
    if !(hz.is_finite() && hz > 0.0) {
        return None;
    }
    Duration::try_from_secs_f64(1.0 / hz).ok()
}

impl Default for FrameScheduler {
    /// 50 Hz.
    fn default() -> Self {
        Self::new(Duration::from_millis(20))
    }
}
