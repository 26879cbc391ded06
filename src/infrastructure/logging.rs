use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(&config.level)));

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_span_events(FmtSpan::CLOSE),
                )
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_span_events(FmtSpan::CLOSE),
                )
                .init();
        }
    }

    tracing::info!("Logging initialized with level: {}", config.level);
}

/// Map a `LOG_LEVEL` name onto a tracing level directive
///
/// Accepts the tracing names and the `WARNING`/`CRITICAL`/`FATAL` spellings.
/// Anything unrecognised falls back to `info`; passing it through would turn
/// it into a target directive and silence every event.
fn level_directive(level: &str) -> &'static str {
    match level.trim().to_ascii_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" | "WARNING" => "warn",
        "ERROR" | "CRITICAL" | "FATAL" => "error",
        "OFF" => "off",
        _ => "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_level_directive_names() {
        assert_eq!(level_directive("DEBUG"), "debug");
        assert_eq!(level_directive("INFO"), "info");
        assert_eq!(level_directive("WARN"), "warn");
        assert_eq!(level_directive("WARNING"), "warn");
        assert_eq!(level_directive("ERROR"), "error");
        assert_eq!(level_directive("CRITICAL"), "error");
        assert_eq!(level_directive("FATAL"), "error");
        assert_eq!(level_directive(" warning "), "warn");
        assert_eq!(level_directive("VERBOSE"), "info");
    }

    #[test]
    fn test_level_directive_builds_global_filter() {
        let cases = [
            ("WARNING", LevelFilter::WARN),
            ("CRITICAL", LevelFilter::ERROR),
            ("FATAL", LevelFilter::ERROR),
            ("NOTSET", LevelFilter::INFO),
            ("", LevelFilter::INFO),
        ];

        for (level, expected) in cases {
            let filter = EnvFilter::new(level_directive(level));
            assert_eq!(filter.max_level_hint(), Some(expected), "LOG_LEVEL={level}");
        }
    }
}
