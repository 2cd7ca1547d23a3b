use crate::hand::{AnimationPhase, BlurDirection, DialAngles, HandOutput};
use crate::time::{ClockReading, FrameTime};

/// Per-frame payload handed to [`super::ClockFace::on_frame`].
///
/// All angles are degrees clockwise from 12 o'clock. `hour_angle` and
/// `minute_angle` are continuous; `second_angle` is the second hand's visual
/// angle and may sit slightly outside `[0, 360)` around 12 o'clock.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandFrame {
    /// The single reading every angle in this frame was derived from.
    pub reading: ClockReading,
    pub time: FrameTime,

    pub hour_angle: f64,
    pub minute_angle: f64,
    pub second_angle: f64,
    pub blur: BlurDirection,

    /// Phase the second hand is in after this frame.
    pub phase: AnimationPhase,
}

impl HandFrame {
    pub(crate) fn new(
        reading: ClockReading,
        time: FrameTime,
        dial: DialAngles,
        hand: HandOutput,
        phase: AnimationPhase,
    ) -> Self {
        Self {
            reading,
            time,
            hour_angle: dial.hour,
            minute_angle: dial.minute,
            second_angle: hand.visual_angle,
            blur: hand.blur,
            phase,
        }
    }

    /// Second-hand angle normalized into `[0, 360)`.
    pub fn second_angle_normalized(&self) -> f64 {
        self.second_angle.rem_euclid(360.0)
    }
}
