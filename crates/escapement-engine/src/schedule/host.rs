use std::time::Duration;

/// Handle for one requested frame callback.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequest(u64);

impl FrameRequest {
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// A frame callback delivered by the host.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameCallback {
    pub request: FrameRequest,

    /// Host timestamp. Non-decreasing across callbacks from one host.
    pub timestamp: Duration,
}

/// The host's per-frame invocation facility.
///
/// Requests are one-shot: each fires at most once, and a cancelled request
/// never fires. The clock re-requests after every processed frame.
pub trait FrameHost {
    /// Asks for one future frame callback.
    fn request_frame(&mut self) -> FrameRequest;

    /// Withdraws a pending request. Unknown or already-fired requests are ignored.
    fn cancel_frame(&mut self, request: FrameRequest);

    /// Waits for the next requested frame and returns it.
    ///
    /// Returns `None` when nothing is pending, which ends a frame loop.
    fn next_frame(&mut self) -> Option<FrameCallback>;
}
