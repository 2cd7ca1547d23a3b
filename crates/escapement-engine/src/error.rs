use thiserror::Error;

/// A rejected configuration value.
///
/// Faults are not fatal: the clock substitutes the field default and reports the
/// fault once through the `log` facade. Callers that prefer to reject bad input
/// can use [`crate::hand::PhysicsConfig::validate`] or
/// [`crate::clock::ClockOptions::validate`] up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigFault {
    #[error("creep duration must be a positive, finite number of milliseconds (got {0})")]
    CreepDuration(f64),

    #[error("creep angle must be a non-negative, finite number of degrees (got {0})")]
    CreepAngle(f64),

    #[error("overshoot must be a finite number of degrees (got {0})")]
    Overshoot(f64),

    #[error("recoil must be a finite number of degrees (got {0})")]
    Recoil(f64),

    #[error("maximum frame rate must be a positive, finite number of hertz (got {0})")]
    FrameRate(f64),

    #[error("time zone offset must lie strictly within one day (got {0} minutes)")]
    TimeZoneOffset(i32),
}

/// A clock reading with an out-of-range component.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ReadingError {
    #[error("hours must be in 0..24 (got {0})")]
    Hours(u32),

    #[error("minutes must be in 0..60 (got {0})")]
    Minutes(u32),

    #[error("seconds must be in 0..60 (got {0})")]
    Seconds(u32),

    #[error("milliseconds must be in 0..1000 (got {0})")]
    Milliseconds(u32),
}
