//! Escapement engine crate.
//!
//! Computes, once per frame, where the hands of a clock point, with a second
//! hand that creeps, overshoots, recoils and settles on every tick. Drawing is
//! left to a [`core::ClockFace`] supplied by the caller.

pub mod clock;
pub mod core;
pub mod error;
pub mod hand;
pub mod schedule;
pub mod time;

pub mod logging;
