//! Second-hand physics.
//!
//! The hand ticks once per wall-clock second. Around each tick it creeps
//! forward, overshoots the new second, recoils, and settles exactly on it.
//! Everything here is pure: state goes in, state and angles come out.

mod angles;
mod blur;
mod config;
mod phase;
mod state;


pub use angles::{DEGREES_PER_SECOND, DialAngles, hour_angle, minute_angle, second_base_angle};
pub use blur::BlurDirection;
pub use config::PhysicsConfig;
pub use phase::AnimationPhase;
pub use state::{AnimationState, HandOutput, creep_angle, creep_progress, in_creep_window};
