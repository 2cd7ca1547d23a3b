use super::frame::HandFrame;

/// Control directive returned by a clock face.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FaceControl {
    #[default]
    Continue,
    /// Stop the clock after this frame. No further frame is delivered.
    Stop,
}

/// Renderer contract implemented by whatever draws the dial.
///
/// Called once per accepted frame, after the hand has been advanced.
pub trait ClockFace {
    fn on_frame(&mut self, frame: &HandFrame) -> FaceControl;
}

impl<F> ClockFace for F
where
    F: FnMut(&HandFrame) -> FaceControl,
{
    fn on_frame(&mut self, frame: &HandFrame) -> FaceControl {
        self(frame)
    }
}
