//! Time subsystem.
//!
//! Two kinds of time flow through the clock:
//! - wall-clock readings (`ClockReading`) sampled from a `TimeSource`, which
//!   decide where the hands point
//! - host frame timestamps, tracked by `FrameClock`, which decide when a frame
//!   is processed

mod frame_clock;
mod reading;
mod source;

pub use frame_clock::{FrameClock, FrameTime};
pub use reading::ClockReading;
pub use source::{FixedTimeSource, ScriptedTimeSource, SystemTimeSource, TimeSource};
