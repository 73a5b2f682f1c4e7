//! Logging infrastructure for erd-picker.
//!
//! Tracing-based and off by default. Supports:
//! - Output to a file or stderr
//! - Configurable log levels
//! - Text or JSON format
//!
//! While the TUI owns the terminal, stderr output would corrupt the display,
//! so logging is only active in TUI mode when a log file is given.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Log level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a log level from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Convert to a filter string for tracing-subscriber.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Parse a log format from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Default)]
pub struct LogConfig {
    /// Log level (None means logging is disabled).
    pub level: Option<LogLevel>,
    /// Output file path (None means stderr).
    pub file: Option<PathBuf>,
    pub format: LogFormat,
    /// Whether the TUI will own the terminal.
    pub is_tui_mode: bool,
}

/// Guard that must be held to ensure logs are flushed.
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Initialize the logging system.
///
/// Returns `None` when logging is disabled, or when the TUI runs without a
/// log file. The guard must be held until application exit.
///
/// # Example
///
/// ```rust,no_run
/// use erd_picker::logging::{LogConfig, LogLevel, LogFormat, init_logging};
/// use std::path::PathBuf;
///
/// let config = LogConfig {
///     level: Some(LogLevel::Debug),
///     file: Some(PathBuf::from("/tmp/erd-picker.log")),
///     format: LogFormat::Text,
///     is_tui_mode: true,
/// };
///
/// let _guard = init_logging(config);
/// ```
#[must_use = "the returned guard must be held until application exit"]
pub fn init_logging(config: LogConfig) -> Option<LogGuard> {
    let level = config.level?;

    // Only our own crate; dependencies stay quiet
    let filter = EnvFilter::new(format!("erd_picker={}", level.as_filter_str()));

    let (writer, guard) = match (&config.file, config.is_tui_mode) {
        (Some(path), _) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()?;
            tracing_appender::non_blocking(file)
        }
        (None, false) => tracing_appender::non_blocking(std::io::stderr()),
        (None, true) => return None,
    };

    let to_file = config.file.is_some();
    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .with_writer(writer)
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_file(to_file)
                .with_line_number(to_file);

            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Text => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_level(true)
                .with_ansi(!to_file)
                .with_file(to_file)
                .with_line_number(to_file);

            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
    }

    Some(LogGuard { _guard: guard })
}

/// Parse logging configuration from raw arguments and the environment.
///
/// Runs before full argument parsing. Precedence: CLI args > environment.
#[must_use]
pub fn parse_early_log_config(args: &[String]) -> LogConfig {
    let level_str =
        extract_arg_value(args, "--log-level").or_else(|| std::env::var("ERD_PICKER_LOG_LEVEL").ok());
    let file_str =
        extract_arg_value(args, "--log-file").or_else(|| std::env::var("ERD_PICKER_LOG_FILE").ok());
    let format_str = extract_arg_value(args, "--log-format")
        .or_else(|| std::env::var("ERD_PICKER_LOG_FORMAT").ok());

    // These flags print and exit without starting the TUI
    let is_tui_mode = !args
        .iter()
        .any(|a| matches!(a.as_str(), "--create-config" | "--help" | "-h" | "--version" | "-V"));

    LogConfig {
        level: level_str.and_then(|s| LogLevel::parse(&s)),
        file: file_str.map(PathBuf::from),
        format: format_str
            .and_then(|s| LogFormat::parse(&s))
            .unwrap_or_default(),
        is_tui_mode,
    }
}

/// Extract a value following a flag, accepting `--flag value` and `--flag=value`.
fn extract_arg_value(args: &[String], flag: &str) -> Option<String> {
    let prefix = format!("{flag}=");
    args.iter()
        .find_map(|a| a.strip_prefix(&prefix).map(str::to_string))
        .or_else(|| args.windows(2).find(|w| w[0] == flag).map(|w| w[1].clone()))
}
