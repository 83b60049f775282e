//! macOS network statistics via `netstat -ib`.

use crate::core::sampler::{parse_netstat_ib, CounterSnapshot};
use crate::platform::NetworkStatsProvider;

/// macOS network stats using `netstat -ib`.
pub struct MacNetworkStats;

impl NetworkStatsProvider for MacNetworkStats {
    fn interface_counters() -> Vec<(String, CounterSnapshot)> {
        match std::process::Command::new("netstat").args(["-ib"]).output() {
            Ok(output) => parse_netstat_ib(&String::from_utf8_lossy(&output.stdout)),
            Err(_) => Vec::new(),
        }
    }
}
