//! Application-wide constants and configuration values.
//!
//! This module defines all static values used throughout nettraf,
//! including default timings, file names, and platform paths.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Timing Defaults ===
// Compiled-in defaults; users override the interval via --interval.

/// Default sampling interval in seconds.
pub const DEFAULT_INTERVAL_SECS: f64 = 1.0;
/// Granularity of the cancellation check while sleeping between ticks
/// (milliseconds). The tick sleep is sliced into chunks of this size so a
/// shutdown request is observed promptly even with long intervals.
pub const CANCEL_POLL_MS: u64 = 100;

// === Path Configuration ===

/// Default config file path, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
/// Fixed log file name, created in the working directory.
pub const LOG_FILE_NAME: &str = "nettraf.log";

// === Platform-Specific Paths ===

/// Linux network device statistics pseudo-file.
#[cfg(target_os = "linux")]
pub const PROC_NET_DEV_PATH: &str = "/proc/net/dev";

// === Log Categories ===

/// Category tag for sampler loop log lines.
pub const LOG_CAT_SAMPLER: &str = "SAMPLER";
/// Category tag for configuration log lines.
pub const LOG_CAT_CONFIG: &str = "CONFIG";
/// Category tag for process lifecycle log lines.
pub const LOG_CAT_MAIN: &str = "MAIN";
