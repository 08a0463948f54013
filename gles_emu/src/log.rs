//! Internal logging system for the GLES emulation layer
//!
//! Every GL entry point traces through here, and the lifecycle controller
//! reports drains, lazy object creation and recorded GL errors. Features:
//! - Pluggable logger via the `Logger` trait (`Driver::set_logger`)
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information for ERROR logs

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// # Example
///
/// ```no_run
/// use gles_emu::gles::log::{Logger, LogEntry};
///
/// struct CaptureLogger;
///
/// impl Logger for CaptureLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{}: {}", entry.source, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source subsystem (e.g., "gles::Context", "gles::vulkan")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Entry-point tracing (one line per GL call)
    Trace,

    /// Object lifecycle and synchronization details
    Debug,

    /// Important informational messages
    Info,

    /// Recoverable problems (GL errors recorded for the client)
    Warn,

    /// Driver or backend failures (with file:line details)
    Error,
}

/// Default logger printing colored lines to stdout
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            );
        } else {
            println!("[{}] [{}] [{}] {}", timestamp, severity_str, source, entry.message);
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (GL entry points)
///
/// ```no_run
/// # use gles_emu::driver_trace;
/// driver_trace!("gles::Context", "glBindRenderbuffer(0x{:04X}, {})", 0x8D41, 5);
/// ```
#[macro_export]
macro_rules! driver_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::gles::Driver::log(
            $crate::gles::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! driver_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::gles::Driver::log(
            $crate::gles::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! driver_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::gles::Driver::log(
            $crate::gles::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! driver_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::gles::Driver::log(
            $crate::gles::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// ```no_run
/// # use gles_emu::driver_error;
/// driver_error!("gles::vulkan", "vkQueueWaitIdle failed: {}", "VK_ERROR_DEVICE_LOST");
/// ```
#[macro_export]
macro_rules! driver_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::gles::Driver::log_detailed(
            $crate::gles::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
