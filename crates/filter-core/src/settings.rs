use clap::{Parser, ValueEnum};
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Filter ns-3 simulation logs and total per-manager backoff delays
#[derive(Parser, Debug, Clone)]
#[command(
    name = "backoff-filter",
    about = "Filter ns-3 simulation logs and total per-manager backoff delays",
    version
)]
pub struct Settings {
    /// Log file or directory of .log files (reads standard input if omitted)
    pub input: Option<PathBuf>,

    /// Summary output format
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub format: SummaryFormat,

    /// Abort on manager lines too short to carry the id and time fields
    /// (the default is to skip them with a warning)
    #[arg(long)]
    pub strict: bool,

    /// Logging level
    #[arg(long, default_value = "warn", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}

/// How the end-of-input summary is rendered.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    /// The classic line-per-manager text summary.
    Text,
    /// The full report as a single JSON document.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::parse_from(["backoff-filter"]);
        assert!(settings.input.is_none());
        assert_eq!(settings.format, SummaryFormat::Text);
        assert!(!settings.strict);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_positional_input() {
        let settings = Settings::parse_from(["backoff-filter", "/var/log/sim"]);
        assert_eq!(settings.input, Some(PathBuf::from("/var/log/sim")));
    }

    #[test]
    fn test_json_format_and_strict() {
        let settings =
            Settings::parse_from(["backoff-filter", "--format", "json", "--strict"]);
        assert_eq!(settings.format, SummaryFormat::Json);
        assert!(settings.strict);
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let result = Settings::try_parse_from(["backoff-filter", "--log-level", "loud"]);
        assert!(result.is_err());
    }
}
