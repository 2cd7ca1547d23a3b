use std::time::Duration;

/// Timing snapshot for one accepted frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameTime {
    /// Host timestamp of the frame, measured from the host's own epoch.
    pub timestamp: Duration,

    /// Time since the previous accepted frame. Zero for the first frame after
    /// a (re)start, clamped to the clock's maximum gap otherwise.
    pub since_last: Duration,

    /// Accepted-frame counter since the last reset.
    pub frame_index: u64,
}

/// Tracks accepted host timestamps and produces `FrameTime` snapshots.
///
/// Unlike a free-running clock this one never samples time itself: the host
/// supplies every timestamp, which keeps the scheduler deterministic under a
/// fake host.
///
/// `since_last` is clamped so that a frame arriving after a long stall (debugger,
/// minimized window, backgrounded process) does not report a pathological gap.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Duration>,
    frame_index: u64,
    max_gap: Duration,
}

impl FrameClock {
    /// Creates a clock with a quarter-second maximum gap.
    pub fn new() -> Self {
        Self::with_max_gap(Duration::from_millis(250))
    }

    pub fn with_max_gap(max_gap: Duration) -> Self {
        Self {
            last: None,
            frame_index: 0,
            max_gap,
        }
    }

    /// Forgets the previous frame so the next tick starts a fresh sequence.
    pub fn reset(&mut self) {
        self.last = None;
        self.frame_index = 0;
    }

    /// Timestamp of the last accepted frame, if any.
    pub fn last(&self) -> Option<Duration> {
        self.last
    }

    /// Records an accepted frame at `timestamp`.
    pub fn tick(&mut self, timestamp: Duration) -> FrameTime {
        let since_last = match self.last {
            Some(last) => timestamp.saturating_sub(last).min(self.max_gap),
            None => Duration::ZERO,
        };

        self.last = Some(timestamp);

        let ft = FrameTime {
            timestamp,
            since_last,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
