mod face;

use anyhow::{Context, Result};
use clap::Parser;

use escapement_engine::clock::{AnimatedClock, ClockOptions};
use escapement_engine::hand::PhysicsConfig;
use escapement_engine::logging::{LoggingConfig, init_logging};
use escapement_engine::schedule::PacedFrameHost;
use escapement_engine::time::SystemTimeSource;

use face::TerminalFace;

/// Runs the escapement clock against the system clock and prints the dial.
#[derive(Parser, Debug)]
#[command(name = "escapement-studio")]
#[command(about = "Terminal readout of a clock with an inertial second hand")]
struct Args {
    /// Length of the creep window before each tick, in milliseconds
    #[arg(long, default_value_t = 150.0)]
    creep_ms: f64,

    /// Forward drift reached at the end of the creep window, in degrees
    #[arg(long, default_value_t = 2.0)]
    creep_deg: f64,

    /// Jump past the new second on each tick, in degrees
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    overshoot_deg: f64,

    /// Bounce back after the overshoot, in degrees
    #[arg(long, default_value_t = -1.5, allow_negative_numbers = true)]
    recoil_deg: f64,

    /// Maximum processed frames per second
    #[arg(long, default_value_t = 50.0)]
    max_fps: f64,

    /// Host refresh rate driving frame callbacks
    #[arg(long, default_value_t = 60.0)]
    refresh_hz: f64,

    /// Fixed UTC offset in minutes instead of local time
    #[arg(long, allow_negative_numbers = true)]
    tz_offset: Option<i32>,

    /// Stop after this many processed frames
    #[arg(long)]
    frames: Option<u64>,

    /// Print only once per second instead of on every jump
    #[arg(long)]
    quiet: bool,

    /// Log filter, env_logger syntax (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        compact: true,
        ..LoggingConfig::default()
    });

    let options = ClockOptions {
        physics: PhysicsConfig {
            creep_duration_ms: args.creep_ms,
            creep_angle_degrees: args.creep_deg,
            overshoot_degrees: args.overshoot_deg,
            recoil_degrees: args.recoil_deg,
        },
        max_frame_rate_hz: args.max_fps,
        time_zone_offset_minutes: args.tz_offset,
    };

    let mut clock = AnimatedClock::new(
        SystemTimeSource::new(),
        PacedFrameHost::with_refresh_rate(args.refresh_hz),
        options,
    );

    println!();
    println!("  escapement studio");
    println!("  creep {:.0} ms / {:.2} deg   overshoot {:.2} deg   recoil {:.2} deg",
        clock.physics().creep_duration_ms,
        clock.physics().creep_angle_degrees,
        clock.physics().overshoot_degrees,
        clock.physics().recoil_degrees,
    );
    println!();

    let mut face = TerminalFace::new(std::io::stdout().lock(), args.quiet, args.frames);

    clock.start();
    let stats = clock.run(&mut face);

    face.finish().context("failed to write dial readout")?;

    log::info!(
        "processed {} frames ({} throttled, {} stale)",
        stats.accepted,
        stats.throttled,
        stats.stale
    );

    Ok(())
}
