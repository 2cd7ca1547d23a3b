use std::fmt;

/// Animation phase of the second hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum AnimationPhase {
    /// Resting exactly on the current second.
    #[default]
    Settled,
    /// Drifting forward in the last milliseconds before a tick.
    Creeping,
    /// Just ticked; past the new second.
    Overshoot,
    /// Bounced back short of the new second.
    Recoil,
}

impl AnimationPhase {
    /// True for the phases entered by a discontinuous jump.
    pub fn is_jump(self) -> bool {
        matches!(self, AnimationPhase::Overshoot | AnimationPhase::Recoil)
    }
}

impl fmt::Display for AnimationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnimationPhase::Settled => "settled",
            AnimationPhase::Creeping => "creeping",
            AnimationPhase::Overshoot => "overshoot",
            AnimationPhase::Recoil => "recoil",
        };
        f.write_str(name)
    }
}
