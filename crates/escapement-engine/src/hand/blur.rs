/// Which rotational side an abrupt jump of the second hand came from.
///
/// This is a rendering hint for faked motion blur, not a velocity: it is decided
/// by the transition that just fired and nothing else. Continuous motion
/// (settled or creeping) carries no blur.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum BlurDirection {
    /// Smear toward lower angles (counter-clockwise). Overshoot and settle.
    Backward = -1,
    #[default]
    None = 0,
    /// Smear toward higher angles (clockwise). Recoil.
    Forward = 1,
}

impl BlurDirection {
    /// The signal as `-1`, `0` or `+1`.
    pub fn signum(self) -> i8 {
        self as i8
    }

    pub fn is_blurred(self) -> bool {
        self != BlurDirection::None
    }
}
