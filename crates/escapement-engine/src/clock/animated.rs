use crate::core::{ClockFace, FaceControl, HandFrame};
use crate::error::ConfigFault;
use crate::hand::{AnimationState, DialAngles, PhysicsConfig};
use crate::schedule::{FrameCallback, FrameDisposition, FrameHost, FrameScheduler, SchedulerStats};
use crate::time::{ClockReading, TimeSource};

use super::options::{ClockOptions, check_time_zone_offset};

/// A clock whose second hand ticks with mechanical inertia.
///
/// Owns its time source, its frame host and the single animation state. All
/// work happens synchronously inside [`AnimatedClock::dispatch_frame`]; nothing
/// runs between frames.
///
/// ```rust,ignore
/// let mut clock = AnimatedClock::new(SystemTimeSource::new(), PacedFrameHost::new(), ClockOptions::default());
/// clock.start();
/// clock.run(&mut |frame: &HandFrame| {
///     draw(frame.hour_angle, frame.minute_angle, frame.second_angle, frame.blur);
///     FaceControl::Continue
/// });
/// ```
pub struct AnimatedClock<S, H> {
    source: S,
    host: H,
    physics: PhysicsConfig,
    time_zone_offset: Option<i32>,
    scheduler: FrameScheduler,
    state: Option<AnimationState>,
    faults: Vec<ConfigFault>,
}

impl<S, H> AnimatedClock<S, H>
where
    S: TimeSource,
    H: FrameHost,
{
    /// Builds a stopped clock.
    ///
    /// Invalid options are replaced by their defaults; each replacement is
    /// logged once here and kept in [`AnimatedClock::config_faults`].
    pub fn new(source: S, host: H, options: ClockOptions) -> Self {
        let (options, faults) = options.sanitized();
        for fault in &faults {
            log::warn!("{fault}; using default");
        }

        Self {
            source,
            host,
            physics: options.physics,
            time_zone_offset: options.time_zone_offset_minutes,
            scheduler: FrameScheduler::new(options.min_frame_interval()),
            state: None,
            faults,
        }
    }

    /// Begins requesting frames. Has no effect while running.
    ///
    /// The animation state is rebuilt from scratch, so the first accepted
    /// frame always ticks.
    pub fn start(&mut self) {
        if !self.scheduler.start(&mut self.host) {
            return;
        }

        let reading = self.sample();
        self.state = Some(AnimationState::seeded(reading.seconds));
        log::debug!(
            "clock started at {:02}:{:02}:{:02}.{:03}",
            reading.hours,
            reading.minutes,
            reading.seconds,
            reading.milliseconds
        );
    }

    /// Stops the clock. Safe to call at any time, any number of times.
    ///
    /// Once this returns no frame is processed, including one the host has
    /// already delivered but not yet dispatched.
    pub fn stop(&mut self) {
        if self.scheduler.stop(&mut self.host) {
            log::debug!("clock stopped");
        }
        self.state = None;
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Sets the constant UTC offset applied to every reading, or `None` for
    /// the source's local time. An offset of a day or more is rejected and the
    /// previous setting is kept.
    pub fn set_time_zone_offset(&mut self, minutes: Option<i32>) -> Result<(), ConfigFault> {
        if let Some(m) = minutes {
            check_time_zone_offset(m)?;
        }
        self.time_zone_offset = minutes;
        Ok(())
    }

    pub fn time_zone_offset(&self) -> Option<i32> {
        self.time_zone_offset
    }

    /// Takes one reading, with the time zone offset applied.
    pub fn sample(&self) -> ClockReading {
        match self.time_zone_offset {
            Some(minutes) => self.source.now_utc().shifted_by_minutes(minutes),
            None => self.source.now(),
        }
    }

    /// Handles one host callback: throttles it, or advances the hand, hands
    /// the frame to `face`, and re-requests.
    pub fn dispatch_frame<F>(&mut self, callback: FrameCallback, face: &mut F) -> FrameDisposition
    where
        F: ClockFace + ?Sized,
    {
        let disposition = self.scheduler.on_frame(&mut self.host, callback);
        let FrameDisposition::Accepted(time) = disposition else {
            return disposition;
        };

        let reading = self.sample();
        let (state, hand) = self.state.unwrap_or_default().step(&reading, &self.physics);
        self.state = Some(state);

        let frame = HandFrame::new(reading, time, DialAngles::of(&reading), hand, state.phase);

        match face.on_frame(&frame) {
            FaceControl::Continue => self.scheduler.rearm(&mut self.host),
            FaceControl::Stop => {
                log::debug!("clock face requested stop");
                self.stop();
            }
        }

        disposition
    }

    /// Waits for the host's next callback and dispatches it.
    ///
    /// Returns `None` once the host has nothing pending, i.e. the clock is
    /// stopped.
    pub fn pump<F>(&mut self, face: &mut F) -> Option<FrameDisposition>
    where
        F: ClockFace + ?Sized,
    {
        let callback = self.host.next_frame()?;
        Some(self.dispatch_frame(callback, face))
    }

    /// Pumps frames until the clock stops.
    pub fn run<F>(&mut self, face: &mut F) -> SchedulerStats
    where
        F: ClockFace + ?Sized,
    {
        while self.pump(face).is_some() {}
        self.stats()
    }

    /// Current animation state. `None` while stopped.
    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    /// Faults found in the options passed to [`AnimatedClock::new`].
    pub fn config_faults(&self) -> &[ConfigFault] {
        &self.faults
    }

    pub fn stats(&self) -> SchedulerStats {
        self.scheduler.stats()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::hand::{AnimationPhase, BlurDirection};
    use crate::schedule::ManualFrameHost;
    use crate::time::{FixedTimeSource, ScriptedTimeSource};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<HandFrame>,
        stop_after: Option<usize>,
    }

    impl ClockFace for Recorder {
        fn on_frame(&mut self, frame: &HandFrame) -> FaceControl {
            self.frames.push(*frame);
            match self.stop_after {
                Some(n) if self.frames.len() >= n => FaceControl::Stop,
                _ => FaceControl::Continue,
            }
        }
    }

    fn at(h: u32, m: u32, s: u32, ms: u32) -> ClockReading {
        ClockReading::new(h, m, s, ms).unwrap()
    }

    fn clock_at(reading: ClockReading) -> AnimatedClock<FixedTimeSource, ManualFrameHost> {
        AnimatedClock::new(
            FixedTimeSource::new(reading),
            ManualFrameHost::with_period(Duration::from_millis(20)),
            ClockOptions::default(),
        )
    }

    fn assert_angle(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn first_frame_after_start_ticks() {
        let mut clock = clock_at(at(10, 30, 15, 0));
        let mut face = Recorder::default();
        clock.start();

        for _ in 0..3 {
            clock.pump(&mut face);
        }

        let f = &face.frames;
        assert_eq!(f.len(), 3);
        assert_angle(f[0].second_angle, 92.0);
        assert_eq!(f[0].blur, BlurDirection::Backward);
        assert_angle(f[1].second_angle, 88.5);
        assert_eq!(f[1].blur, BlurDirection::Forward);
        assert_eq!(f[2].second_angle, 90.0);
        assert_eq!(f[2].blur, BlurDirection::Backward);
        assert_eq!(f[2].phase, AnimationPhase::Settled);

        assert_angle(f[0].minute_angle, 181.5);
        assert_angle(f[0].hour_angle, 315.0);
    }

    #[test]
    fn stop_discards_in_flight_frame() {
        let mut clock = clock_at(at(0, 0, 0, 0));
        let mut face = Recorder::default();
        clock.start();

        let in_flight = clock.host_mut().next_frame().unwrap();
        clock.stop();

        assert_eq!(clock.dispatch_frame(in_flight, &mut face), FrameDisposition::Stale);
        assert!(face.frames.is_empty());
        assert!(clock.state().is_none());
        assert!(clock.pump(&mut face).is_none());
    }

    #[test]
    fn stop_before_start_and_twice_is_harmless() {
        let mut clock = clock_at(at(0, 0, 0, 0));
        clock.stop();
        clock.start();
        clock.start();
        assert_eq!(clock.host().pending(), 1);
        clock.stop();
        clock.stop();
        assert!(!clock.is_running());
        assert_eq!(clock.host().pending(), 0);
    }

    #[test]
    fn restart_reinitializes_state() {
        let mut clock = clock_at(at(8, 0, 42, 100));
        let mut face = Recorder::default();

        clock.start();
        for _ in 0..4 {
            clock.pump(&mut face);
        }
        assert_eq!(clock.state().unwrap().phase, AnimationPhase::Settled);

        clock.stop();
        clock.start();
        assert_eq!(clock.state().unwrap().last_second, Some(41));

        clock.pump(&mut face);
        let last = face.frames.last().unwrap();
        assert_eq!(last.phase, AnimationPhase::Overshoot);
        assert_eq!(last.time.frame_index, 0);
    }

    #[test]
    fn face_can_stop_the_clock() {
        let mut clock = clock_at(at(0, 0, 0, 0));
        let mut face = Recorder { stop_after: Some(5), ..Recorder::default() };

        clock.start();
        let stats = clock.run(&mut face);

        assert_eq!(face.frames.len(), 5);
        assert_eq!(stats.accepted, 5);
        assert!(!clock.is_running());
    }

    #[test]
    fn closures_are_faces() {
        let mut clock = clock_at(at(0, 0, 0, 0));
        let mut seen = 0;
        clock.start();
        clock.run(&mut |_: &HandFrame| {
            seen += 1;
            if seen == 3 { FaceControl::Stop } else { FaceControl::Continue }
        });
        assert_eq!(seen, 3);
    }

    // ── throttling ────────────────────────────────────────────────────────

    #[test]
    fn throttled_callbacks_do_not_reach_the_face() {
        let mut clock = AnimatedClock::new(
            FixedTimeSource::new(at(0, 0, 0, 0)),
            ManualFrameHost::with_period(Duration::from_millis(5)),
            ClockOptions::default(),
        );
        let mut face = Recorder::default();
        clock.start();

        for _ in 0..5 {
            clock.pump(&mut face);
        }

        assert_eq!(face.frames.len(), 2);
        assert_eq!(clock.stats().throttled, 3);
        // Throttled frames did not advance the hand past overshoot/recoil.
        assert_eq!(clock.state().unwrap().phase, AnimationPhase::Recoil);
    }

    // ── wall-clock behavior ───────────────────────────────────────────────

    #[test]
    fn full_second_creeps_then_ticks_once() {
        let mut clock = clock_at(at(12, 0, 15, 0));
        let mut face = Recorder::default();
        clock.start();

        for _ in 0..50 {
            clock.source().advance_ms(20);
            clock.pump(&mut face);
        }

        let ticks: Vec<_> = face
            .frames
            .iter()
            .filter(|f| f.phase == AnimationPhase::Overshoot)
            .map(|f| f.reading.seconds)
            .collect();
        assert_eq!(ticks, vec![15, 16]);

        let creep: Vec<f64> = face
            .frames
            .iter()
            .filter(|f| f.phase == AnimationPhase::Creeping)
            .map(|f| f.second_angle)
            .collect();
        assert_eq!(creep.len(), 7);
        assert!(creep.windows(2).all(|w| w[0] <= w[1]));
        assert!(creep.iter().all(|a| (90.0..=92.0).contains(a)));
    }

    #[test]
    fn long_gap_jumps_to_current_second() {
        let mut clock = clock_at(at(0, 0, 5, 0));
        let mut face = Recorder::default();
        clock.start();
        for _ in 0..3 {
            clock.pump(&mut face);
        }

        clock.host_mut().advance(Duration::from_secs(3));
        clock.source().set(at(0, 0, 8, 0));
        clock.pump(&mut face);

        let last = face.frames.last().unwrap();
        assert_eq!(last.phase, AnimationPhase::Overshoot);
        assert_angle(last.second_angle, 50.0);
        assert_eq!(last.time.since_last, Duration::from_millis(250));
    }

    #[test]
    fn scripted_clock_recovers_from_backward_step_and_gap() {
        let src = ScriptedTimeSource::new([
            at(6, 0, 9, 0),   // sampled by start
            at(6, 0, 9, 0),   // tick
            at(6, 0, 9, 100), // recoil
            at(6, 0, 9, 200), // settle
            at(6, 0, 9, 900), // creep
            ClockReading { hours: 6, minutes: 0, seconds: 9, milliseconds: 1200 },
            at(6, 0, 12, 0),  // three seconds later
        ]);
        let mut clock = AnimatedClock::new(
            src,
            ManualFrameHost::with_period(Duration::from_millis(20)),
            ClockOptions::default(),
        );
        let mut face = Recorder::default();
        clock.start();
        for _ in 0..6 {
            clock.pump(&mut face);
        }
        assert_eq!(clock.source().remaining(), 0);

        let phases: Vec<_> = face.frames.iter().map(|f| f.phase).collect();
        assert_eq!(
            phases,
            vec![
                AnimationPhase::Overshoot,
                AnimationPhase::Recoil,
                AnimationPhase::Settled,
                AnimationPhase::Creeping,
                AnimationPhase::Settled,
                AnimationPhase::Overshoot,
            ]
        );
        assert_eq!(face.frames[4].second_angle, 54.0);
        assert_eq!(face.frames[4].blur, BlurDirection::None);
        assert_angle(face.frames[5].second_angle, 74.0);
    }

    #[test]
    fn time_zone_offset_shifts_reading() {
        let mut clock = clock_at(at(10, 0, 0, 0));
        let mut face = Recorder::default();

        assert!(clock.set_time_zone_offset(Some(90)).is_ok());
        assert_eq!(
            clock.set_time_zone_offset(Some(-1440)),
            Err(ConfigFault::TimeZoneOffset(-1440))
        );
        assert_eq!(clock.time_zone_offset(), Some(90));

        clock.start();
        clock.pump(&mut face);

        let f = face.frames[0];
        assert_eq!((f.reading.hours, f.reading.minutes), (11, 30));
        assert_angle(f.hour_angle, 345.0);
        assert_angle(f.minute_angle, 180.0);
    }

    #[test]
    fn invalid_options_fall_back_to_defaults() {
        let options = ClockOptions {
            physics: PhysicsConfig { creep_duration_ms: 0.0, ..PhysicsConfig::default() },
            ..ClockOptions::default()
        };
        let clock = AnimatedClock::new(FixedTimeSource::default(), ManualFrameHost::new(), options);

        assert_eq!(clock.config_faults(), &[ConfigFault::CreepDuration(0.0)]);
        assert_eq!(clock.physics().creep_duration_ms, 150.0);
    }
}
