use crate::error::ConfigFault;

/// Second-hand physics parameters.
///
/// Immutable for the lifetime of a running clock.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PhysicsConfig {
    /// Length of the creep window before each second boundary. Must be > 0.
    pub creep_duration_ms: f64,

    /// Forward drift reached at the very end of the creep window. Must be >= 0.
    pub creep_angle_degrees: f64,

    /// Jump past the new second on the tick. Conventionally positive.
    pub overshoot_degrees: f64,

    /// Bounce back after the overshoot. Conventionally negative.
    pub recoil_degrees: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            creep_duration_ms: 150.0,
            creep_angle_degrees: 2.0,
            overshoot_degrees: 2.0,
            recoil_degrees: -1.5,
        }
    }
}

impl PhysicsConfig {
    /// Rejects the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigFault> {
        match self.faults().into_iter().next() {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }

    /// Replaces every invalid field with its default and lists what was replaced.
    pub fn sanitized(self) -> (Self, Vec<ConfigFault>) {
        let defaults = Self::default();
        let faults = self.faults();
        let mut out = self;

        for fault in &faults {
            match fault {
                ConfigFault::CreepDuration(_) => out.creep_duration_ms = defaults.creep_duration_ms,
                ConfigFault::CreepAngle(_) => out.creep_angle_degrees = defaults.creep_angle_degrees,
                ConfigFault::Overshoot(_) => out.overshoot_degrees = defaults.overshoot_degrees,
                ConfigFault::Recoil(_) => out.recoil_degrees = defaults.recoil_degrees,
                _ => {}
            }
        }

        (out, faults)
    }

    fn faults(&self) -> Vec<ConfigFault> {
        let mut faults = Vec::new();

        if !(self.creep_duration_ms.is_finite() && self.creep_duration_ms > 0.0) {
            faults.push(ConfigFault::CreepDuration(self.creep_duration_ms));
        }
        if !(self.creep_angle_degrees.is_finite() && self.creep_angle_degrees >= 0.0) {
            faults.push(ConfigFault::CreepAngle(self.creep_angle_degrees));
        }
        if !self.overshoot_degrees.is_finite() {
            faults.push(ConfigFault::Overshoot(self.overshoot_degrees));
        }
        if !self.recoil_degrees.is_finite() {
            faults.push(ConfigFault::Recoil(self.recoil_degrees));
        }

        faults
    }
}
