//! Linux network statistics via `/proc/net/dev`.

use crate::constants;
use crate::core::sampler::{parse_proc_net_dev, CounterSnapshot};
use crate::platform::NetworkStatsProvider;

/// Linux network stats from /proc/net/dev.
pub struct LinuxNetworkStats;

impl NetworkStatsProvider for LinuxNetworkStats {
    fn interface_counters() -> Vec<(String, CounterSnapshot)> {
        match std::fs::read_to_string(constants::PROC_NET_DEV_PATH) {
            Ok(content) => parse_proc_net_dev(&content),
            Err(_) => Vec::new(),
        }
    }
}
