use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::host::{FrameCallback, FrameHost, FrameRequest};
use super::scheduler::interval_for_rate;

/// Real-time host that paces callbacks to a fixed refresh rate by sleeping.
///
/// Stands in for a display's vsync-driven frame callback when running headless.
/// If the caller falls behind, the deadline is re-based on the current time
/// instead of delivering a burst of catch-up frames.
#[derive(Debug)]
pub struct PacedFrameHost {
    epoch: Instant,
    period: Duration,
    deadline: Instant,
    next_id: u64,
    pending: VecDeque<FrameRequest>,
}

impl PacedFrameHost {
    /// Host refreshing at 60 Hz.
    pub fn new() -> Self {
        Self::with_period(Duration::from_micros(16_667))
    }

    /// Host refreshing at `hz`. A rate with no representable period falls back
    /// to 60 Hz.
    pub fn with_refresh_rate(hz: f64) -> Self {
        match interval_for_rate(hz) {
            Some(period) => Self::with_period(period),
            None => {
                log::warn!("invalid refresh rate {hz} Hz; using 60 Hz");
                Self::new()
            }
        }
    }

    pub fn with_period(period: Duration) -> Self {
        let epoch = Instant::now();
        Self {
            epoch,
            period,
            deadline: epoch.checked_add(period).unwrap_or(epoch),
            next_id: 0,
            pending: VecDeque::new(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Default for PacedFrameHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameHost for PacedFrameHost {
    fn request_frame(&mut self) -> FrameRequest {
        let request = FrameRequest::from_raw(self.next_id);
        self.next_id += 1;
        self.pending.push_back(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.pending.retain(|r| *r != request);
    }

    fn next_frame(&mut self) -> Option<FrameCallback> {
        let request = self.pending.pop_front()?;

        let now = Instant::now();
        if now < self.deadline {
            std::thread::sleep(self.deadline - now);
            self.deadline = self.deadline.checked_add(self.period).unwrap_or(self.deadline);
        } else {
            self.deadline = now.checked_add(self.period).unwrap_or(now);
        }

        Some(FrameCallback {
            request,
            timestamp: self.epoch.elapsed(),
        })
    }
}
