use super::angles::second_base_angle;
use super::blur::BlurDirection;
use super::config::PhysicsConfig;
use super::phase::AnimationPhase;
use crate::time::ClockReading;

/// What the second hand shows for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandOutput {
    pub visual_angle: f64,
    pub blur: BlurDirection,
}

/// Second-hand animation state.
///
/// A plain value: [`AnimationState::step`] consumes one state and returns the
/// next, so the transition table can be exercised without any clock or
/// scheduler.
///
/// `visual_angle` is always `target_angle` plus a small excursion; it is never
/// accumulated across seconds.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct AnimationState {
    pub phase: AnimationPhase,

    /// Whole second the hand last ticked to. `None` forces the next step to
    /// tick and re-derive the base angle from the reading.
    pub last_second: Option<u32>,

    /// Snapped angle of `last_second`.
    pub target_angle: f64,

    pub visual_angle: f64,
    pub blur: BlurDirection,
}

impl AnimationState {
    /// State for a freshly started clock.
    ///
    /// The last observed second is set one behind `current_second`, so the
    /// first frame is a tick.
    pub fn seeded(current_second: u32) -> Self {
        let last = (current_second % 60 + 59) % 60;
        let target = second_base_angle(last);

        Self {
            phase: AnimationPhase::Settled,
            last_second: Some(last),
            target_angle: target,
            visual_angle: target,
            blur: BlurDirection::None,
        }
    }

    pub fn output(&self) -> HandOutput {
        HandOutput {
            visual_angle: self.visual_angle,
            blur: self.blur,
        }
    }

    /// Advances the hand by one accepted frame.
    pub fn step(self, reading: &ClockReading, config: &PhysicsConfig) -> (Self, HandOutput) {
        let second = reading.seconds % 60;

        let next = if self.last_second != Some(second) {
            self.tick(second, config)
        } else {
            match self.phase {
                AnimationPhase::Overshoot => self.jump(
                    AnimationPhase::Recoil,
                    self.target_angle + config.recoil_degrees,
                    BlurDirection::Forward,
                ),
                AnimationPhase::Recoil => {
                    self.jump(AnimationPhase::Settled, self.target_angle, BlurDirection::Backward)
                }
                AnimationPhase::Settled | AnimationPhase::Creeping => {
                    self.creep_or_settle(reading.ms_until_next_second(), config)
                }
            }
        };

        if next.phase != self.phase {
            log::trace!(
                "second hand {} -> {} at {:.3} deg",
                self.phase,
                next.phase,
                next.visual_angle
            );
        }

        (next, next.output())
    }

    fn tick(self, second: u32, config: &PhysicsConfig) -> Self {
        if let Some(last) = self.last_second {
            let skipped = (i64::from(second) - i64::from(last) - 1).rem_euclid(60);
            if skipped > 0 {
                log::debug!("second hand skipped {skipped} second(s) ({last} -> {second})");
            }
        }

        let target = second_base_angle(second);

        Self {
            phase: AnimationPhase::Overshoot,
            last_second: Some(second),
            target_angle: target,
            visual_angle: target + config.overshoot_degrees,
            blur: BlurDirection::Backward,
        }
    }

    fn jump(self, phase: AnimationPhase, visual_angle: f64, blur: BlurDirection) -> Self {
        Self { phase, visual_angle, blur, ..self }
    }

    // Entering the window from Settled computes the creep angle in the same
    // frame. Leaving it, or a reading that lies outside the current second,
    // rests on the exact base angle.
    fn creep_or_settle(self, ms_until_next: i64, config: &PhysicsConfig) -> Self {
        if in_creep_window(ms_until_next, config.creep_duration_ms) {
            self.jump(
                AnimationPhase::Creeping,
                creep_angle(self.target_angle, ms_until_next, config),
                BlurDirection::None,
            )
        } else {
            self.jump(AnimationPhase::Settled, self.target_angle, BlurDirection::None)
        }
    }
}

/// True when the next boundary is close enough to creep toward.
pub fn in_creep_window(ms_until_next: i64, creep_duration_ms: f64) -> bool {
    ms_until_next > 0 && ms_until_next <= 1000 && (ms_until_next as f64) <= creep_duration_ms
}

/// Fraction of the creep window already elapsed, in `[0, 1]`.
pub fn creep_progress(ms_until_next: i64, creep_duration_ms: f64) -> f64 {
    if !(creep_duration_ms > 0.0) {
        return 0.0;
    }
    let into = (creep_duration_ms - ms_until_next as f64).clamp(0.0, creep_duration_ms);
    into / creep_duration_ms
}

/// Visual angle while creeping toward the next second.
pub fn creep_angle(target_angle: f64, ms_until_next: i64, config: &PhysicsConfig) -> f64 {
    target_angle + creep_progress(ms_until_next, config.creep_duration_ms) * config.creep_angle_degrees
}
