//! Renderer-facing contracts.
//!
//! This module defines the boundary between the clock and whatever draws it.
//! A face sees one immutable [`HandFrame`] per accepted frame and never
//! touches animation state.

mod face;
mod frame;

pub use face::{ClockFace, FaceControl};
pub use frame::HandFrame;
