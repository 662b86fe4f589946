// Logging module for qdisc
// Structured logging for the command-line driver
//
// - Output formats: Text and JSON
// - Destinations: Console (stderr), File, or Both
// - Independent log levels for console and file output
// - Timestamps formatted as YYYY-MM-DD HH:mm:ss (local time)
//
// The library itself only emits trace/debug records; nothing is printed
// unless the binary installs this logger.
//
// Example usage:
// ```
// let config = LogConfig {
//     console_level: LevelFilter::Info,
//     file_level: Some(LevelFilter::Debug),
//     format: LogFormat::Json,
//     destination: LogDestination::Both(PathBuf::from("qdisc.log")),
// };
// init_logger(config)?;
// log::info!("Draining queue");
// ```

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}. Valid options: text, json", s)),
        }
    }
}

/// Log destination options
#[derive(Debug, Clone, PartialEq)]
pub enum LogDestination {
    Console,
    File(PathBuf),
    Both(PathBuf),
}

impl LogDestination {
    fn file(&self) -> Option<&Path> {
        match self {
            LogDestination::Console => None,
            LogDestination::File(path) | LogDestination::Both(path) => Some(path.as_path()),
        }
    }

    fn has_console(&self) -> bool {
        !matches!(self, LogDestination::File(_))
    }
}

/// JSON log entry structure
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonLogEntry {
    pub timestamp: String,
    pub level: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub console_level: LevelFilter,
    pub file_level: Option<LevelFilter>,
    pub format: LogFormat,
    pub destination: LogDestination,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_level: LevelFilter::Warn,
            file_level: None,
            format: LogFormat::Text,
            destination: LogDestination::Console,
        }
    }
}

impl LogConfig {
    /// Most verbose level any destination accepts
    pub fn max_level(&self) -> LevelFilter {
        match self.file_level {
            Some(file_level) => file_level.max(self.console_level),
            None => self.console_level,
        }
    }
}

/// Logger writing formatted records to stderr and/or a log file
pub struct QdiscLogger {
    config: LogConfig,
}

impl QdiscLogger {
    pub fn new(config: LogConfig) -> Self {
        Self { config }
    }

    fn format_timestamp() -> String {
        let now: DateTime<Local> = Local::now();
        now.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    fn format_text_message(&self, level: Level, message: &str) -> String {
        format!("{} [{}] {}", Self::format_timestamp(), level.as_str(), message)
    }

    fn format_json_message(&self, level: Level, message: &str, target: &str) -> Result<String> {
        // records from this crate carry no detail
        let detail = if target.starts_with("qdisc") {
            None
        } else {
            Some(serde_json::json!({ "target": target }))
        };
        let entry = JsonLogEntry {
            timestamp: Self::format_timestamp(),
            level: level.as_str().to_string(),
            message: message.to_string(),
            detail,
        };

        serde_json::to_string(&entry).context("Failed to serialize log entry to JSON")
    }

    fn format_record(&self, level: Level, message: &str, target: &str) -> String {
        match self.config.format {
            LogFormat::Text => self.format_text_message(level, message),
            LogFormat::Json => self
                .format_json_message(level, message, target)
                .unwrap_or_else(|e| {
                    eprintln!("JSON formatting error: {}. Falling back to text format.", e);
                    self.format_text_message(level, message)
                }),
        }
    }

    fn should_log_to_console(&self, level: Level) -> bool {
        self.config.destination.has_console() && level <= self.config.console_level
    }

    fn should_log_to_file(&self, level: Level) -> bool {
        match (self.config.destination.file(), self.config.file_level) {
            (Some(_), Some(file_level)) => level <= file_level,
            _ => false,
        }
    }

    fn write_to_console(&self, line: &str) -> Result<()> {
        writeln!(io::stderr(), "{}", line).context("Failed to write to console")
    }

    fn write_to_file(&self, line: &str, file_path: &Path) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)
            .with_context(|| format!("Failed to open log file: {}", file_path.display()))?;

        writeln!(file, "{}", line).context("Failed to write to log file")
    }
}

impl log::Log for QdiscLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.should_log_to_console(metadata.level()) || self.should_log_to_file(metadata.level())
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = record.level();
        let line = self.format_record(level, &record.args().to_string(), record.target());

        if self.should_log_to_console(level) {
            if let Err(e) = self.write_to_console(&line) {
                eprintln!("Console logging error: {}", e);
            }
        }
        if let (true, Some(path)) = (self.should_log_to_file(level), self.config.destination.file()) {
            if let Err(e) = self.write_to_file(&line, path) {
                eprintln!("File logging error: {}", e);
                // file-only destinations fall back to stderr
                if !self.config.destination.has_console() {
                    let _ = self.write_to_console(&line);
                }
            }
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Initialize the logging system with the given configuration
pub fn init_logger(config: LogConfig) -> Result<()> {
    let max_level = config.max_level();

    log::set_boxed_logger(Box::new(QdiscLogger::new(config)))
        .context("Failed to set global logger")?;
    log::set_max_level(max_level);

    Ok(())
}

/// Convert string to LevelFilter
pub fn parse_log_level(level_str: &str) -> Result<LevelFilter> {
    match level_str.to_lowercase().as_str() {
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        "off" => Ok(LevelFilter::Off),
        _ => Err(anyhow::anyhow!(
            "Invalid log level: {}. Valid levels: error, warn, info, debug, trace, off",
            level_str
        )),
    }
}
