//! Platform abstraction layer for OS counter sources.
//!
//! This module provides trait-based abstractions for reading per-interface
//! byte counters, with compile-time selection via `#[cfg]` conditional
//! compilation.
//!
//! Supported platforms:
//! - Linux: /proc/net/dev
//! - macOS: netstat -ib

#[cfg(target_os = "linux")]
pub mod linux;
#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
compile_error!("nettraf currently only supports macOS and Linux");

use crate::core::sampler::CounterSnapshot;

/// Per-interface network counter collection.
///
/// Implementations read the cumulative byte counters of every interface the
/// OS currently knows about. Ordering follows the OS listing.
pub trait NetworkStatsProvider {
    /// Cumulative byte counters keyed by interface name.
    fn interface_counters() -> Vec<(String, CounterSnapshot)>;
}
