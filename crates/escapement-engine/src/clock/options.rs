use std::time::Duration;

use crate::error::ConfigFault;
use crate::hand::PhysicsConfig;
use crate::schedule::interval_for_rate;

const MINUTES_PER_DAY: i32 = 24 * 60;

/// Clock configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockOptions {
    pub physics: PhysicsConfig,

    /// Upper bound on processed frames per second.
    pub max_frame_rate_hz: f64,

    /// Constant offset from UTC applied to every reading. `None` uses the
    /// source's local time.
    pub time_zone_offset_minutes: Option<i32>,
}

impl Default for ClockOptions {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            max_frame_rate_hz: 50.0,
            time_zone_offset_minutes: None,
        }
    }
}

impl ClockOptions {
    /// Rejects the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigFault> {
        self.physics.validate()?;
        check_frame_rate(self.max_frame_rate_hz)?;
        if let Some(minutes) = self.time_zone_offset_minutes {
            check_time_zone_offset(minutes)?;
        }
        Ok(())
    }

    /// Replaces every invalid field with its default and lists what was replaced.
    ///
    /// An invalid time zone offset is dropped, which means local time.
    pub fn sanitized(self) -> (Self, Vec<ConfigFault>) {
        let defaults = Self::default();
        let (physics, mut faults) = self.physics.sanitized();

        let max_frame_rate_hz = match check_frame_rate(self.max_frame_rate_hz) {
            Ok(()) => self.max_frame_rate_hz,
            Err(fault) => {
                faults.push(fault);
                defaults.max_frame_rate_hz
            }
        };

        let time_zone_offset_minutes = match self.time_zone_offset_minutes.map(check_time_zone_offset) {
            Some(Err(fault)) => {
                faults.push(fault);
                None
            }
            _ => self.time_zone_offset_minutes,
        };

        let options = Self {
            physics,
            max_frame_rate_hz,
            time_zone_offset_minutes,
        };
        (options, faults)
    }

    /// Minimum spacing between processed frames.
    pub fn min_frame_interval(&self) -> Duration {
        interval_for_rate(self.max_frame_rate_hz).unwrap_or(Duration::from_millis(20))
    }
}

fn check_frame_rate(hz: f64) -> Result<(), ConfigFault> {
    match interval_for_rate(hz) {
        Some(_) => Ok(()),
        None => Err(ConfigFault::FrameRate(hz)),
    }
}

pub(crate) fn check_time_zone_offset(minutes: i32) -> Result<(), ConfigFault> {
    if minutes.abs() < MINUTES_PER_DAY {
        Ok(())
    } else {
        Err(ConfigFault::TimeZoneOffset(minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_twenty_ms() {
        let opts = ClockOptions::default();
        assert_eq!(opts.validate(), Ok(()));
        assert_eq!(opts.min_frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn bad_rate_and_offset_are_replaced() {
        let opts = ClockOptions {
            max_frame_rate_hz: -5.0,
            time_zone_offset_minutes: Some(2000),
            ..ClockOptions::default()
        };
        assert_eq!(opts.validate(), Err(ConfigFault::FrameRate(-5.0)));

        let (fixed, faults) = opts.sanitized();
        assert_eq!(fixed, ClockOptions::default());
        assert_eq!(faults, vec![ConfigFault::FrameRate(-5.0), ConfigFault::TimeZoneOffset(2000)]);
    }

    #[test]
    fn vanishing_rate_is_a_fault() {
        let opts = ClockOptions { max_frame_rate_hz: 1e-300, ..ClockOptions::default() };
        assert_eq!(opts.validate(), Err(ConfigFault::FrameRate(1e-300)));

        let (fixed, faults) = opts.sanitized();
        assert_eq!(fixed.max_frame_rate_hz, 50.0);
        assert_eq!(faults, vec![ConfigFault::FrameRate(1e-300)]);
        assert_eq!(fixed.min_frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn physics_faults_come_first() {
        let opts = ClockOptions {
            physics: PhysicsConfig { creep_duration_ms: -1.0, ..PhysicsConfig::default() },
            max_frame_rate_hz: 0.0,
            ..ClockOptions::default()
        };
        let (_, faults) = opts.sanitized();
        assert_eq!(faults[0], ConfigFault::CreepDuration(-1.0));
        assert_eq!(faults[1], ConfigFault::FrameRate(0.0));
    }

    #[test]
    fn offsets_within_a_day_are_kept() {
        for m in [-720, 0, 330, 840, 1439, -1439] {
            assert_eq!(check_time_zone_offset(m), Ok(()));
        }
        assert!(check_time_zone_offset(1440).is_err());
    }
}
