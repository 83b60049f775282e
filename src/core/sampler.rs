//! The sampler loop: turning cumulative interface counters into per-tick deltas.
//!
//! The loop holds exactly two snapshots at a time — the previous tick's and
//! the current one. Each tick it sleeps for the configured interval, reads a
//! fresh snapshot, reports `current - previous` for both directions, and
//! rolls the snapshot forward. An interface unknown to the counter source is
//! fatal, whether at startup or mid-run; the loop never retries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::constants;
use crate::logger::Logger;

/// Result type for sampler operations
pub type Result<T> = std::result::Result<T, SamplerError>;

/// Errors that can occur while monitoring traffic
#[derive(Debug)]
pub enum SamplerError {
    /// Requested interface is unknown to the OS counter source
    InterfaceNotFound(String),
    /// Interval was zero, negative, or not finite
    InvalidInterval(f64),
}

impl std::fmt::Display for SamplerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InterfaceNotFound(name) => write!(f, "Interface {name} not found"),
            Self::InvalidInterval(secs) => {
                write!(f, "Interval must be positive, got {secs}")
            }
        }
    }
}

impl std::error::Error for SamplerError {}

/// Point-in-time read of an interface's cumulative byte counters.
///
/// Monotonically non-decreasing while the interface is up and the OS does
/// not reset it. See [`counter_delta`] for how a decrease is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSnapshot {
    /// Cumulative bytes transmitted on the interface.
    pub bytes_sent: u64,
    /// Cumulative bytes received on the interface.
    pub bytes_recv: u64,
}

/// Source of per-interface cumulative counters.
///
/// The OS-backed implementation is [`SystemCounters`]; tests script a fake.
pub trait CounterSource {
    /// Counters for `interface`, or `None` if the source does not know it.
    fn snapshot(&mut self, interface: &str) -> Option<CounterSnapshot>;

    /// Names of all interfaces currently known to the source.
    fn interface_names(&mut self) -> Vec<String>;
}

/// OS-backed counter source.
///
/// Platform selection at compile time:
/// - Linux: `/proc/net/dev`
/// - macOS: `netstat -ib`
#[derive(Debug, Default)]
pub struct SystemCounters;

impl SystemCounters {
    fn read_all() -> Vec<(String, CounterSnapshot)> {
        #[cfg(target_os = "linux")]
        {
            use crate::platform::NetworkStatsProvider;
            crate::platform::linux::network::LinuxNetworkStats::interface_counters()
        }
        #[cfg(target_os = "macos")]
        {
            use crate::platform::NetworkStatsProvider;
            crate::platform::macos::network::MacNetworkStats::interface_counters()
        }
    }
}

impl CounterSource for SystemCounters {
    fn snapshot(&mut self, interface: &str) -> Option<CounterSnapshot> {
        Self::read_all()
            .into_iter()
            .find(|(name, _)| name == interface)
            .map(|(_, snapshot)| snapshot)
    }

    fn interface_names(&mut self) -> Vec<String> {
        Self::read_all().into_iter().map(|(name, _)| name).collect()
    }
}

/// Cooperative cancellation flag for the sampler loop.
///
/// Cloneable; all clones share one flag. The loop checks it every iteration
/// and while sleeping, so a cancel from a signal handler or another thread
/// ends the run cleanly instead of killing the process mid-write.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. A single atomic store, safe to call from a
    /// signal handler.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Validates a sampling interval: must be a positive, finite number of seconds.
///
/// # Errors
///
/// `InvalidInterval` for zero, negative, NaN, or infinite values.
pub fn validate_interval(secs: f64) -> Result<()> {
    if secs.is_finite() && secs > 0.0 {
        Ok(())
    } else {
        Err(SamplerError::InvalidInterval(secs))
    }
}

/// Per-field counter delta with clamp-to-zero underflow handling.
///
/// Cumulative counters can decrease when an interface is reset or replaced
/// between ticks. Each field clamps to zero in that case and the flag tells
/// the caller to log the resync; wrapping subtraction would report absurd
/// near-u64::MAX values instead.
#[must_use]
pub fn counter_delta(old: &CounterSnapshot, new: &CounterSnapshot) -> (u64, u64, bool) {
    let underflow = new.bytes_sent < old.bytes_sent || new.bytes_recv < old.bytes_recv;
    (
        new.bytes_sent.saturating_sub(old.bytes_sent),
        new.bytes_recv.saturating_sub(old.bytes_recv),
        underflow,
    )
}

/// Formats one tick report.
///
/// Pure: the same `(sent, recv, interval)` triple always yields the same line.
#[must_use]
pub fn format_report(sent: u64, recv: u64, interval_secs: f64) -> String {
    format!("Sent: {sent} bytes, Received: {recv} bytes in {interval_secs}s")
}

/// Sleeps for `duration`, waking early if the token is cancelled.
///
/// Returns `true` if the sleep was interrupted by cancellation.
fn sleep_with_cancel(duration: Duration, cancel: &CancelToken) -> bool {
    let deadline = Instant::now() + duration;
    let slice = Duration::from_millis(constants::CANCEL_POLL_MS);

    loop {
        if cancel.is_cancelled() {
            return true;
        }
        let now = Instant::now();
        if now >= deadline {
            return false;
        }
        std::thread::sleep((deadline - now).min(slice));
    }
}

/// Runs the sampler loop until cancelled or a fatal error occurs.
///
/// Startup fetches the baseline snapshot; an interface unknown to the source
/// (including `None` from a missing config) is fatal before any tick is
/// emitted. Each tick sleeps for the interval, fetches a fresh snapshot, and
/// reports the sent/received deltas through both the log sink and the
/// console. Cancellation returns `Ok(())`.
///
/// # Errors
///
/// `InvalidInterval` if `interval_secs` is not a positive finite number;
/// `InterfaceNotFound` if `interface` is `None`, unknown at startup, or
/// disappears from the counter source between ticks.
pub fn run<S: CounterSource>(
    interval_secs: f64,
    interface: Option<&str>,
    source: &mut S,
    logger: &mut Logger,
    cancel: &CancelToken,
) -> Result<()> {
    validate_interval(interval_secs)?;

    let name =
        interface.ok_or_else(|| SamplerError::InterfaceNotFound("(none)".to_string()))?;

    let mut previous = source
        .snapshot(name)
        .ok_or_else(|| SamplerError::InterfaceNotFound(name.to_string()))?;

    let tick = Duration::from_secs_f64(interval_secs);

    while !cancel.is_cancelled() {
        if sleep_with_cancel(tick, cancel) {
            break;
        }

        let current = source
            .snapshot(name)
            .ok_or_else(|| SamplerError::InterfaceNotFound(name.to_string()))?;

        let (sent, recv, underflow) = counter_delta(&previous, &current);
        if underflow {
            logger.warning(
                constants::LOG_CAT_SAMPLER,
                &format!("Counters for {name} went backwards (interface reset?), clamping delta to zero"),
            );
        }

        let report = format_report(sent, recv, interval_secs);
        logger.info(constants::LOG_CAT_SAMPLER, &report);
        println!("{report}");

        previous = current;
    }

    Ok(())
}

// === Counter parsing ===
// The pure parsers live here; the platform modules read the OS source and
// delegate to them.

/// Parse `/proc/net/dev` content (Linux) into per-interface counters.
///
/// Format: `iface: rx_bytes rx_packets rx_errs ... tx_bytes tx_packets ...`
/// Every interface is kept, loopback included: monitoring `lo` by name is a
/// legitimate request, unlike machine-wide totals where it would double-count.
#[allow(dead_code)]
#[must_use]
pub fn parse_proc_net_dev(content: &str) -> Vec<(String, CounterSnapshot)> {
    let mut counters = Vec::new();

    for line in content.lines().skip(2) {
        // Skip 2 header lines
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Split on ':' to get interface name and stats
        let parts: Vec<&str> = line.splitn(2, ':').collect();
        if parts.len() != 2 {
            continue;
        }

        let iface = parts[0].trim();
        let stats: Vec<&str> = parts[1].split_whitespace().collect();
        // rx_bytes is index 0, tx_bytes is index 8
        if stats.len() >= 10 {
            if let (Ok(rx), Ok(tx)) = (stats[0].parse::<u64>(), stats[8].parse::<u64>()) {
                counters.push((
                    iface.to_string(),
                    CounterSnapshot {
                        bytes_sent: tx,
                        bytes_recv: rx,
                    },
                ));
            }
        }
    }

    counters
}

/// Parse `netstat -ib` output (macOS) into per-interface counters.
///
/// Ibytes/Obytes column positions are detected from the header row since
/// they shift with the Address column width. netstat repeats an interface
/// once per configured address with identical byte counts, so the first row
/// wins per name.
#[allow(dead_code)]
#[must_use]
pub fn parse_netstat_ib(output: &str) -> Vec<(String, CounterSnapshot)> {
    let mut counters: Vec<(String, CounterSnapshot)> = Vec::new();
    let mut lines = output.lines();

    let Some(header) = lines.next() else {
        return counters;
    };
    let headers: Vec<&str> = header.split_whitespace().collect();
    let ibytes_pos = headers
        .iter()
        .position(|&h| h.eq_ignore_ascii_case("ibytes"));
    let obytes_pos = headers
        .iter()
        .position(|&h| h.eq_ignore_ascii_case("obytes"));

    let (ibytes_idx, obytes_idx) = match (ibytes_pos, obytes_pos) {
        (Some(i), Some(o)) => (i, o),
        _ => (6, 9),
    };

    for line in lines {
        let parts: Vec<&str> = line.split_whitespace().collect();
        // Link rows without an Address column come up one field short;
        // Ibytes/Obytes sit after Address, so shift their indices to match.
        let shift = headers.len().saturating_sub(parts.len());
        let (Some(i_idx), Some(o_idx)) =
            (ibytes_idx.checked_sub(shift), obytes_idx.checked_sub(shift))
        else {
            continue;
        };
        if parts.len() <= i_idx.max(o_idx) {
            continue;
        }

        let iface = parts[0];
        if counters.iter().any(|(name, _)| name == iface) {
            continue;
        }

        if let (Some(Ok(ibytes)), Some(Ok(obytes))) = (
            parts.get(i_idx).map(|s| s.parse::<u64>()),
            parts.get(o_idx).map(|s| s.parse::<u64>()),
        ) {
            counters.push((
                iface.to_string(),
                CounterSnapshot {
                    bytes_sent: obytes,
                    bytes_recv: ibytes,
                },
            ));
        }
    }

    counters
}
