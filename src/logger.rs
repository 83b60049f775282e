//! Leveled file logging for nettraf.
//!
//! Unlike a process-global logging facility, the [`Logger`] is an explicitly
//! constructed object that owns its append-mode file handle. It is opened
//! before the sampler loop starts and flushed on every exit path (including
//! `Drop`), so log lines survive abnormal termination.
//!
//! The console is a separate output sink: call sites mirror tick reports
//! with `println!` and error lines with `eprintln!` themselves.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::utils;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Verbose debugging information (only for development)
    Debug = 0,
    /// Informational messages about normal operation
    Info = 1,
    /// Warning messages about potential issues
    Warning = 2,
    /// Error messages about failures
    Error = 3,
}

impl LogLevel {
    /// Get the prefix string for this log level
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO ",
            Self::Warning => "WARN ",
            Self::Error => "ERROR",
        }
    }
}

/// File-backed log sink with minimum-level filtering.
pub struct Logger {
    writer: BufWriter<File>,
    min_level: LogLevel,
}

impl Logger {
    /// Opens (or creates) the log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or opened for append.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            min_level: LogLevel::Info,
        })
    }

    /// Set the minimum log level (lines below it are dropped).
    #[allow(dead_code)]
    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    /// Append a log line: `[YYYY-MM-DD HH:MM:SS] [LEVEL] CATEGORY: message`.
    ///
    /// Write failures are swallowed: a full disk must not take the sampler
    /// down, and the console sink still carries the data.
    pub fn log(&mut self, level: LogLevel, category: &str, message: &str) {
        if level < self.min_level {
            return;
        }

        let line = format!(
            "[{}] [{}] {}: {}\n",
            utils::format_local_datetime(),
            level.prefix(),
            category,
            message
        );
        let _ = self.writer.write_all(line.as_bytes());
        let _ = self.writer.flush();
    }

    /// Log at Info level.
    pub fn info(&mut self, category: &str, message: &str) {
        self.log(LogLevel::Info, category, message);
    }

    /// Log at Warning level.
    pub fn warning(&mut self, category: &str, message: &str) {
        self.log(LogLevel::Warning, category, message);
    }

    /// Log at Error level.
    pub fn error(&mut self, category: &str, message: &str) {
        self.log(LogLevel::Error, category, message);
    }

    /// Flush buffered lines to disk.
    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn test_log_line_format() {
        let path = temp_log("nettraf_test_logger_format.log");
        {
            let mut logger = Logger::open(&path).unwrap();
            logger.info("SAMPLER", "Sent: 500 bytes, Received: 200 bytes in 2.5s");
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let line = content.lines().next().unwrap();
        // "[YYYY-MM-DD HH:MM:SS] [INFO ] SAMPLER: ..."
        assert_eq!(&line[0..1], "[");
        assert_eq!(&line[21..29], " [INFO ]");
        assert!(line.ends_with("SAMPLER: Sent: 500 bytes, Received: 200 bytes in 2.5s"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_min_level_filtering() {
        let path = temp_log("nettraf_test_logger_filter.log");
        {
            let mut logger = Logger::open(&path).unwrap();
            logger.log(LogLevel::Debug, "TEST", "dropped");
            logger.info("TEST", "kept info");
            logger.warning("TEST", "kept warning");
            logger.error("TEST", "kept error");
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(!content.contains("dropped"));
        assert!(content.contains("[WARN ]"));
        assert!(content.contains("[ERROR]"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_append_across_opens() {
        let path = temp_log("nettraf_test_logger_append.log");
        {
            let mut logger = Logger::open(&path).unwrap();
            logger.info("TEST", "first run");
        }
        {
            let mut logger = Logger::open(&path).unwrap();
            logger.info("TEST", "second run");
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);

        let _ = std::fs::remove_file(&path);
    }
}
