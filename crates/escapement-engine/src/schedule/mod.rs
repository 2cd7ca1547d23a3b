//! Frame scheduling.
//!
//! The host owns the notion of "a frame is due" behind [`FrameHost`]. The
//! [`FrameScheduler`] sits on top of it: it keeps exactly one request
//! outstanding, drops callbacks that arrive faster than the configured rate,
//! and guarantees nothing is processed after `stop`.

mod host;
mod manual;
mod paced;
mod scheduler;

pub use host::{FrameCallback, FrameHost, FrameRequest};
pub use manual::ManualFrameHost;
pub use paced::PacedFrameHost;
pub use scheduler::{FrameDisposition, FrameScheduler, SchedulerStats, interval_for_rate};
