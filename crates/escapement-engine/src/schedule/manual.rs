use std::collections::BTreeSet;
use std::time::Duration;

use super::host::{FrameCallback, FrameHost, FrameRequest};

/// Deterministic host for tests and offline rendering.
///
/// Time only moves when a frame is delivered (by one refresh period) or when
/// [`ManualFrameHost::advance`] is called. Nothing sleeps.
#[derive(Debug, Clone)]
pub struct ManualFrameHost {
    now: Duration,
    period: Duration,
    next_id: u64,
    pending: BTreeSet<FrameRequest>,
    requested: u64,
    cancelled: u64,
}

impl ManualFrameHost {
    /// Host with a 60 Hz refresh period.
    pub fn new() -> Self {
        Self::with_period(Duration::from_micros(16_667))
    }

    pub fn with_period(period: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            period,
            next_id: 0,
            pending: BTreeSet::new(),
            requested: 0,
            cancelled: 0,
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    /// Moves host time forward without delivering anything, as if frames were
    /// not being produced (a hidden window, a suspended process).
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Total requests made, including cancelled and fired ones.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl Default for ManualFrameHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameHost for ManualFrameHost {
    fn request_frame(&mut self) -> FrameRequest {
        let request = FrameRequest::from_raw(self.next_id);
        self.next_id += 1;
        self.requested += 1;
        self.pending.insert(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending.remove(&request) {
            self.cancelled += 1;
        }
    }

    fn next_frame(&mut self) -> Option<FrameCallback> {
        let request = self.pending.pop_first()?;
        self.now += self.period;
        Some(FrameCallback { request, timestamp: self.now })
    }
}
