//! The animated clock.
//!
//! Wires a [`crate::time::TimeSource`], a [`crate::schedule::FrameHost`] and the
//! second-hand state machine into one start/stop lifecycle.

mod animated;
mod options;

pub use animated::AnimatedClock;
pub use options::ClockOptions;
