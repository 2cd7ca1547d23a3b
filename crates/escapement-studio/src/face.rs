use std::io::{self, Write};

use escapement_engine::core::{ClockFace, FaceControl, HandFrame};
use escapement_engine::hand::{AnimationPhase, BlurDirection};

/// Prints one line per interesting frame.
///
/// By default every jump of the second hand (overshoot, recoil, settle) and the
/// first creep frame of each second are printed; in quiet mode only the tick.
/// A write failure stops the clock and is reported by [`TerminalFace::finish`].
pub struct TerminalFace<W: Write> {
    out: W,
    quiet: bool,
    remaining: Option<u64>,
    last_phase: Option<AnimationPhase>,
    error: Option<io::Error>,
}

impl<W: Write> TerminalFace<W> {
    pub fn new(out: W, quiet: bool, frames: Option<u64>) -> Self {
        Self {
            out,
            quiet,
            remaining: frames,
            last_phase: None,
            error: None,
        }
    }

    pub fn finish(mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()
    }

    fn should_print(&self, frame: &HandFrame) -> bool {
        if self.quiet {
            // Every overshoot frame is a tick.
            frame.phase == AnimationPhase::Overshoot
        } else {
            self.last_phase != Some(frame.phase) || frame.phase.is_jump()
        }
    }
}

impl<W: Write> ClockFace for TerminalFace<W> {
    fn on_frame(&mut self, frame: &HandFrame) -> FaceControl {
        if self.should_print(frame) {
            if let Err(err) = writeln!(self.out, "{}", readout(frame)) {
                self.error = Some(err);
                return FaceControl::Stop;
            }
        }
        self.last_phase = Some(frame.phase);

        match self.remaining.as_mut() {
            Some(n) => {
                *n = n.saturating_sub(1);
                if *n == 0 { FaceControl::Stop } else { FaceControl::Continue }
            }
            None => FaceControl::Continue,
        }
    }
}

fn readout(frame: &HandFrame) -> String {
    let r = frame.reading;
    let blur = match frame.blur {
        BlurDirection::Backward => "<",
        BlurDirection::None => " ",
        BlurDirection::Forward => ">",
    };

    format!(
        "  {:02}:{:02}:{:02}.{:03}  H {:7.2}  M {:7.2}  S {:7.2} {}  {}",
        r.hours,
        r.minutes,
        r.seconds,
        r.milliseconds,
        frame.hour_angle,
        frame.minute_angle,
        frame.second_angle_normalized(),
        blur,
        frame.phase,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use escapement_engine::clock::{AnimatedClock, ClockOptions};
    use escapement_engine::schedule::ManualFrameHost;
    use escapement_engine::time::{ClockReading, FixedTimeSource};
    use std::time::Duration;

    fn run_from(second: u32, quiet: bool, frames: u64) -> String {
        let mut clock = AnimatedClock::new(
            FixedTimeSource::new(ClockReading::new(9, 15, second, 0).unwrap()),
            ManualFrameHost::with_period(Duration::from_millis(20)),
            ClockOptions::default(),
        );
        let mut face = TerminalFace::new(Vec::new(), quiet, Some(frames));
        clock.start();
        clock.run(&mut face);
        assert!(!clock.is_running());

        String::from_utf8(face.out).unwrap()
    }

    fn run(quiet: bool, frames: u64) -> String {
        run_from(30, quiet, frames)
    }

    #[test]
    fn prints_jump_sequence() {
        let out = run(false, 5);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("S  182.00 <  overshoot"));
        assert!(lines[1].contains("S  178.50 >  recoil"));
        assert!(lines[2].contains("S  180.00 <  settled"));
    }

    #[test]
    fn readout_wraps_recoil_below_twelve() {
        let out = run_from(0, false, 2);
        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].contains("S    2.00 <  overshoot"));
        assert!(lines[1].contains("S  358.50 >  recoil"));
    }

    #[test]
    fn quiet_prints_ticks_only() {
        let out = run(true, 5);
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("09:15:30.000"));
    }
}
