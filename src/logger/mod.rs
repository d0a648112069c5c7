//! Structured logging for poolscreener
//!
//! This module provides a small, ergonomic logging API with:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via --debug-<module> flags
//! - Dual output: colored console + optional file persistence
//!
//! ## Usage
//!
//! ```rust
//! use poolscreener::logger::{self, LogTag};
//!
//! logger::error(LogTag::Api, "Connection failed");
//! logger::warning(LogTag::Webserver, "Upstream rate limit hit");
//! logger::info(LogTag::System, "Service started");
//! logger::debug(LogTag::Api, "Request details: ..."); // Only if --debug-api
//! logger::verbose(LogTag::Pool, "Raw pool data: ..."); // Only if --verbose
//! ```

mod config;
mod core;
mod file;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

use crate::arguments::Arguments;
use crate::config::LoggingConfig;

/// Initialize the logger system
///
/// Call once at startup, after the configuration file has been read.
/// Command-line flags take precedence over the configured minimum level.
pub fn init(args: &Arguments, logging: &LoggingConfig) -> Result<(), String> {
    let configured = LogLevel::from_str(&logging.min_level).unwrap_or(LogLevel::Info);

    let min_level = if args.verbose {
        LogLevel::Verbose
    } else if args.quiet {
        LogLevel::Warning
    } else {
        configured
    };

    file::init_file_logging(&logging.file_path)?;

    set_logger_config(LoggerConfig {
        min_level,
        debug_tags: args.debug_tags().into_iter().collect(),
    });

    Ok(())
}

/// Log at ERROR level (always shown, critical issues)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (important issues)
///
/// Shown by default, hidden only by raising the threshold to errors.
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level (detailed diagnostics)
///
/// Debug logs are ONLY shown when the --debug-<module> flag for the tag is
/// provided, or when the minimum level is debug or verbose.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (very detailed tracing)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

/// Force flush all pending log writes
///
/// Call this during shutdown to ensure all logs are written to disk.
pub fn flush() {
    file::flush_file_logging();
}
