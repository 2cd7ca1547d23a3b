use std::io::Write;
use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` takes a `RUST_LOG`-style directive list; `"escapement_engine=trace"`
/// shows every phase change of the second hand.
///
/// `write_style` decides whether level names are colored.
///
/// `compact` drops the timestamp and target from each record, which keeps
/// interleaved dial readouts legible on a terminal.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub compact: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            compact: false,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call takes effect, so the studio
/// and tests may both call it.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then `info`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);

        if config.compact {
            builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
        }

        // A host may already have installed a logger.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}
