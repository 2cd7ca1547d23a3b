//! Pure angle math. All angles are degrees clockwise from 12 o'clock.

use crate::time::ClockReading;

/// Degrees the second hand advances per whole second.
pub const DEGREES_PER_SECOND: f64 = 6.0;

/// Continuous hour and minute hand angles for one reading.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct DialAngles {
    pub hour: f64,
    pub minute: f64,
}

impl DialAngles {
    pub fn of(reading: &ClockReading) -> Self {
        Self {
            hour: hour_angle(reading),
            minute: minute_angle(reading),
        }
    }
}

/// `((hours mod 12) + minutes / 60) / 12 * 360`
pub fn hour_angle(reading: &ClockReading) -> f64 {
    let hours = f64::from(reading.hours % 12) + f64::from(reading.minutes) / 60.0;
    hours / 12.0 * 360.0
}

/// `(minutes + seconds / 60) / 60 * 360`
pub fn minute_angle(reading: &ClockReading) -> f64 {
    let minutes = f64::from(reading.minutes) + f64::from(reading.seconds) / 60.0;
    minutes / 60.0 * 360.0
}

/// Snapped second-hand angle for a whole second.
///
/// Computed as an integer multiple of six degrees so the settled position is
/// exact.
pub fn second_base_angle(seconds: u32) -> f64 {
    f64::from(seconds % 60) * DEGREES_PER_SECOND
}
