//! Logger setup for the chapter programs.
//!
//! All chapters log through the `log` facade; this module installs a fern
//! dispatcher writing timestamped lines to stdout. The level comes from the
//! `GLBOOK_LOG` environment variable (`error` through `trace`, default
//! `info`).

use log::LevelFilter;

/// Environment variable that selects the log level.
pub const LOG_LEVEL_VAR: &str = "GLBOOK_LOG";

/// Reads the log level from [`LOG_LEVEL_VAR`]. Missing or unrecognized
/// values fall back to `Info`.
pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(LevelFilter::Info)
}

fn parse_level(name: &str) -> Option<LevelFilter> {
    match name.to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Installs the global logger. Call once, first thing in `main`.
pub fn init(level: LevelFilter) -> Result<(), String> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_names() {
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("error"), Some(LevelFilter::Error));
        assert_eq!(parse_level("warn"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("info"), Some(LevelFilter::Info));
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("trace"), Some(LevelFilter::Trace));
    }

    #[test]
    fn test_parse_level_is_case_insensitive() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("Warn"), Some(LevelFilter::Warn));
    }

    #[test]
    fn test_parse_level_rejects_unknown_names() {
        assert_eq!(parse_level(""), None);
        assert_eq!(parse_level("verbose"), None);
        assert_eq!(parse_level("2"), None);
    }
}
