// Tue Jan 13 2026 - Alex

use log::LevelFilter;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Installs `env_logger` at `level`. `RUST_LOG` still refines per-module filters.
    /// A second call is a no-op.
    pub fn init_logger(level: LevelFilter) {
        let result = env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .format_timestamp(None)
            .try_init();
        if result.is_err() {
            log::debug!("logger already initialised");
        }
    }

    pub fn level_from_str(s: &str) -> LevelFilter {
        match s.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }

    pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// `-v` flags win over `--log-level` when both are given; `--quiet` wins over both.
    pub fn resolve_level(log_level: &str, verbosity: u8, quiet: bool) -> LevelFilter {
        if quiet {
            LevelFilter::Error
        } else if verbosity > 0 {
            Self::level_from_verbosity(verbosity)
        } else {
            Self::level_from_str(log_level)
        }
    }
}
